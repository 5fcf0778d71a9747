use std::num::NonZeroU64;

use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

/// Application configuration loaded from the environment.
pub struct Config {
    /// Bot token used to authenticate the gateway session.
    pub discord_bot_token: String,
    /// Channel that receives every moderation log embed.
    pub log_channel_id: ChannelId,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let discord_bot_token = std::env::var("DISCORD_BOT_TOKEN")
            .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?;

        let raw_channel_id = std::env::var("LOG_CHANNEL_ID")
            .map_err(|_| ConfigError::MissingEnvVar("LOG_CHANNEL_ID".to_string()))?;

        // Snowflakes are never zero, so NonZeroU64 rejects both garbage and "0"
        let channel_id =
            raw_channel_id
                .parse::<NonZeroU64>()
                .map_err(|source| ConfigError::InvalidEnvVar {
                    name: "LOG_CHANNEL_ID",
                    value: raw_channel_id.clone(),
                    source,
                })?;

        Ok(Self {
            discord_bot_token,
            log_channel_id: ChannelId::new(channel_id.get()),
        })
    }
}
