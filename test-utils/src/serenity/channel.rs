//! Test factory for creating Serenity GuildChannel objects.

use serenity::all::GuildChannel;

use super::member::TEST_GUILD_ID;

/// Creates a test Serenity text GuildChannel with the given id and name.
///
/// The channel is a plain guild text channel with no overwrites, topic, or
/// parent category.
///
/// # Arguments
/// - `channel_id` - Discord channel ID (snowflake)
/// - `name` - Channel name
///
/// # Panics
/// - If the JSON cannot be deserialized into a GuildChannel (indicates invalid test data)
pub fn create_test_channel(channel_id: u64, name: &str) -> GuildChannel {
    serde_json::from_value(serde_json::json!({
        "id": channel_id.to_string(),
        "guild_id": TEST_GUILD_ID.to_string(),
        "name": name,
        "type": 0,
        "position": 0,
        "permission_overwrites": [],
        "nsfw": false,
        "rate_limit_per_user": 0,
        "topic": null,
        "bitrate": null,
        "user_limit": null,
        "parent_id": null,
        "last_message_id": null,
        "last_pin_timestamp": null,
        "rtc_region": null,
        "video_quality_mode": null,
        "message_count": null,
        "member_count": null,
        "thread_metadata": null,
        "member": null,
        "default_auto_archive_duration": null,
        "permissions": null,
        "flags": 0,
        "total_message_sent": null,
        "available_tags": [],
        "applied_tags": [],
        "default_reaction_emoji": null,
        "default_thread_rate_limit_per_user": null,
        "default_sort_order": null,
        "default_forum_layout": null,
        "status": null,
    }))
    .expect("Failed to create test channel - invalid JSON structure")
}
