//! Discord bot integration for moderation-event logging.
//!
//! This module owns the gateway session: it configures intents, builds the
//! serenity client, and dispatches each incoming event to the matching
//! classifier in [`handler`]. Every event is processed independently in its
//! own task; handlers never share mutable state and never let a failure
//! escape to the gateway loop.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel, and role events
//! - `GUILD_MEMBERS` - Member update and removal events (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice join/leave/move and mute/deafen events
//! - `GUILD_MODERATION` - Ban and unban events
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly
//! enabled in the Discord Developer Portal for the bot application.

pub mod handler;
pub mod start;
