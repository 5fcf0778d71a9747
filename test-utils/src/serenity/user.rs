//! Test factory for creating Serenity User objects.

use serde_json::{json, Value};
use serenity::all::User;

/// JSON payload for a user, shared with the member and voice state factories.
pub fn user_json(user_id: u64, username: &str, bot: bool) -> Value {
    json!({
        "id": user_id.to_string(),
        "username": username,
        "discriminator": "0001",
        "global_name": null,
        "avatar": null,
        "bot": bot,
        "system": false,
        "mfa_enabled": false,
        "banner": null,
        "accent_color": null,
        "locale": null,
        "verified": null,
        "email": null,
        "flags": 0,
        "premium_type": 0,
        "public_flags": 0,
    })
}

/// Creates a test Serenity User.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account name; the factory fixes the discriminator to
///   `0001`, so the display tag is `{username}#0001`
///
/// # Panics
/// - If the JSON cannot be deserialized into a User (indicates invalid test data)
pub fn create_test_user(user_id: u64, username: &str) -> User {
    serde_json::from_value(user_json(user_id, username, false))
        .expect("Failed to create test user - invalid JSON structure")
}
