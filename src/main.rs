//! Moderation-event logging bot for a single Discord guild.
//!
//! Listens to voice, role, member, channel-permission, and ban events,
//! attributes each one to the moderator that caused it via the guild audit
//! log, and posts an embed to a configured logging channel.

mod audit;
mod bot;
mod config;
mod error;
mod notify;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "modlog=info,serenity=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    bot::start::start_bot(&config).await
}
