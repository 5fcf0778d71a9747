//! Test factory for creating Serenity Member objects.

use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use serenity::all::Member;

use super::user::user_json;

/// Guild id used for all factory-built guild-scoped objects.
pub const TEST_GUILD_ID: u64 = 200000000000000000;

/// JSON payload for a member, shared with the voice state factory.
pub fn member_json(
    user_id: u64,
    username: &str,
    bot: bool,
    roles: &[u64],
    timeout_until: Option<DateTime<Utc>>,
) -> Value {
    let roles: Vec<String> = roles.iter().map(|id| id.to_string()).collect();

    json!({
        "user": user_json(user_id, username, bot),
        "nick": null,
        "avatar": null,
        "roles": roles,
        "joined_at": "2020-01-01T00:00:00.000000+00:00",
        "premium_since": null,
        "deaf": false,
        "mute": false,
        "flags": 0,
        "pending": false,
        "permissions": null,
        "communication_disabled_until": timeout_until.map(|until| until.to_rfc3339()),
        "guild_id": TEST_GUILD_ID.to_string(),
        "unusual_dm_activity_until": null,
    })
}

/// Creates a test Serenity Member with customizable role list and timeout.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account name for the wrapped user
/// - `roles` - Role IDs the member currently holds
/// - `timeout_until` - Communication-restriction expiry, if the member is
///   timed out
///
/// # Panics
/// - If the JSON cannot be deserialized into a Member (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::member::create_test_member;
///
/// // Member with two roles, not timed out
/// let member = create_test_member(1111, "wumpus", &[101, 102], None);
/// assert_eq!(member.roles.len(), 2);
///
/// // Timed-out member
/// let until = chrono::Utc::now() + chrono::Duration::minutes(10);
/// let member = create_test_member(1111, "wumpus", &[], Some(until));
/// assert!(member.communication_disabled_until.is_some());
/// ```
pub fn create_test_member(
    user_id: u64,
    username: &str,
    roles: &[u64],
    timeout_until: Option<DateTime<Utc>>,
) -> Member {
    serde_json::from_value(member_json(user_id, username, false, roles, timeout_until))
        .expect("Failed to create test member - invalid JSON structure")
}
