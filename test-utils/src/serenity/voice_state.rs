//! Test factory for creating Serenity VoiceState objects.

use serde_json::{json, Value};
use serenity::all::VoiceState;

use super::member::{member_json, TEST_GUILD_ID};

fn voice_state_json(
    user_id: u64,
    username: &str,
    bot: bool,
    channel_id: Option<u64>,
    mute: bool,
    deaf: bool,
) -> Value {
    json!({
        "guild_id": TEST_GUILD_ID.to_string(),
        "channel_id": channel_id.map(|id| id.to_string()),
        "user_id": user_id.to_string(),
        "member": member_json(user_id, username, bot, &[], None),
        "session_id": "0123456789abcdef0123456789abcdef",
        "deaf": deaf,
        "mute": mute,
        "self_deaf": false,
        "self_mute": false,
        "self_stream": null,
        "self_video": false,
        "suppress": false,
        "request_to_speak_timestamp": null,
    })
}

/// Creates a test Serenity VoiceState with embedded member data.
///
/// The `mute`/`deaf` flags are the server-side ones the voice classifier
/// diffs; self-mute and self-deafen are always false.
///
/// # Arguments
/// - `user_id` - Discord user ID (snowflake)
/// - `username` - Account name for the embedded member's user
/// - `channel_id` - Voice channel the member is in, or `None` when
///   disconnected
/// - `mute` - Server mute flag
/// - `deaf` - Server deafen flag
///
/// # Panics
/// - If the JSON cannot be deserialized into a VoiceState (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::voice_state::create_test_voice_state;
///
/// // Disconnected, no flags
/// let state = create_test_voice_state(1111, "wumpus", None, false, false);
/// assert!(state.channel_id.is_none());
///
/// // Connected and server-muted
/// let state = create_test_voice_state(1111, "wumpus", Some(3001), true, false);
/// assert!(state.mute);
/// ```
pub fn create_test_voice_state(
    user_id: u64,
    username: &str,
    channel_id: Option<u64>,
    mute: bool,
    deaf: bool,
) -> VoiceState {
    serde_json::from_value(voice_state_json(user_id, username, false, channel_id, mute, deaf))
        .expect("Failed to create test voice state - invalid JSON structure")
}

/// Creates a test VoiceState whose member is a bot account.
pub fn create_test_bot_voice_state(
    user_id: u64,
    username: &str,
    channel_id: Option<u64>,
) -> VoiceState {
    serde_json::from_value(voice_state_json(user_id, username, true, channel_id, false, false))
        .expect("Failed to create test voice state - invalid JSON structure")
}
