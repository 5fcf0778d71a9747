use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// This function creates and starts the Discord bot client. It blocks until
/// the bot shuts down; a failed login or gateway connection is the only fatal
/// error in the process.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and log channel
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    // Configure gateway intents - what events the bot will receive
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MODERATION;

    let handler = Handler::new(config.log_channel_id);

    // Build the client
    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
