//! Ready event handler for bot initialization.
//!
//! The `ready` event fires once per connection after successful
//! authentication and the initial gateway handshake, and indicates the bot
//! is ready to process other events.

use serenity::all::{Context, Ready};

/// Handles the ready event when the bot connects to Discord.
pub async fn handle_ready(_ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);
}
