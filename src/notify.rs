//! Notification records and delivery to the logging channel.
//!
//! Classifiers produce [`Notification`] values, a plain record of what should
//! be posted: title, severity color, ordered fields, timestamp. Rendering to
//! a Discord embed and the actual send both live here, so classification
//! stays independent of presentation. Delivery is fire-and-forget: a failed
//! send is logged and dropped, never surfaced to the event handler that
//! produced it.

use serenity::all::{
    ChannelId, Context, CreateEmbed, CreateMessage, GuildId, RoleId, Timestamp,
};

use crate::audit::Attribution;

/// Embed colors per outcome severity.
pub mod color {
    pub const GREEN: u32 = 0x2ecc71;
    pub const RED: u32 = 0xe74c3c;
    pub const ORANGE: u32 = 0xf39c12;
    pub const BLUE: u32 = 0x3498db;
    pub const GREY: u32 = 0x95a5a6;
}

/// One moderation log message, ready for delivery.
///
/// Created fresh per classified event and handed off immediately; nothing
/// retains these.
#[derive(Debug, Clone)]
pub struct Notification {
    pub title: String,
    pub color: u32,
    pub fields: Vec<(String, String)>,
    pub timestamp: Timestamp,
}

impl Notification {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            color,
            fields: Vec::new(),
            timestamp: Timestamp::now(),
        }
    }

    /// Appends a name/value pair; field order is preserved in the embed.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn into_embed(self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(self.title)
            .color(self.color)
            .timestamp(self.timestamp);

        for (name, value) in self.fields {
            embed = embed.field(name, value, false);
        }

        embed
    }
}

/// Display name for the acting moderator, or "Unknown" when the audit trail
/// had nothing to say.
pub fn executor_name(attribution: &Attribution) -> String {
    match attribution.entry() {
        Some(entry) => entry.executor.clone(),
        None => "Unknown".to_string(),
    }
}

/// Moderator-supplied reason, or "None" when absent or unattributed.
pub fn reason_or_none(attribution: &Attribution) -> String {
    attribution
        .entry()
        .and_then(|entry| entry.reason.clone())
        .unwrap_or_else(|| "None".to_string())
}

/// Channel mention, rendered by Discord as the channel name.
pub fn channel_mention(channel_id: ChannelId) -> String {
    format!("<#{}>", channel_id)
}

/// Role mention, rendered by Discord as the role name.
pub fn role_mention(role_id: RoleId) -> String {
    format!("<@&{}>", role_id)
}

/// Resolves the configured logging channel against the guild's channel cache.
///
/// Returns `None` when the channel is missing from the guild, which means the
/// bot is misconfigured or the channel was deleted; the notification is
/// dropped in that case.
fn resolve_log_channel(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> Option<ChannelId> {
    let exists = ctx
        .cache
        .guild(guild_id)
        .is_some_and(|guild| guild.channels.contains_key(&channel_id));

    if !exists {
        tracing::warn!("Log channel {} not found in guild {}", channel_id, guild_id);
        return None;
    }

    Some(channel_id)
}

/// Posts one notification to the logging channel.
///
/// Failures are logged and swallowed; one undeliverable message must never
/// stall event processing.
pub async fn send_log(
    ctx: &Context,
    guild_id: GuildId,
    channel_id: ChannelId,
    notification: Notification,
) {
    let Some(channel) = resolve_log_channel(ctx, guild_id, channel_id) else {
        return;
    };

    let message = CreateMessage::new().embed(notification.into_embed());

    if let Err(e) = channel.send_message(&ctx.http, message).await {
        tracing::warn!("Failed to deliver log message to channel {}: {}", channel, e);
    }
}
