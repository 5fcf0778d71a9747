//! Test factory for creating Serenity Role objects.

use serenity::all::Role;

use super::member::TEST_GUILD_ID;

/// Creates a test Serenity Role with the given id and name.
///
/// All other fields are set to reasonable defaults (no color, not hoisted,
/// not managed, not mentionable, zero permissions, position 1).
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `name` - Role name
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "name": name,
        "color": 0,
        "colors": {
            "primary_color": 0,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
