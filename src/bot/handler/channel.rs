//! Channel permission-overwrite event handlers.
//!
//! A channel update event does not say whether a permission overwrite was
//! created, edited, or removed; those are three different audit categories
//! behind the same gateway event. The classifier probes each category in a
//! fixed order and trusts whichever one the trail actually recorded,
//! emitting at most one notification per update.

use serenity::all::{ChannelId, Context, GuildChannel};

use crate::audit::{self, AuditKind, AuditLogSource, Attribution, GuildAuditSource, RetryPolicy};
use crate::notify::{self, color, Notification};

/// Probe order: update before create before delete.
const OVERWRITE_PROBES: [(AuditKind, &str, u32); 3] = [
    (
        AuditKind::OverwriteUpdate,
        "Channel Permissions Updated",
        color::ORANGE,
    ),
    (
        AuditKind::OverwriteCreate,
        "Channel Permissions Added",
        color::GREEN,
    ),
    (
        AuditKind::OverwriteDelete,
        "Channel Permissions Removed",
        color::RED,
    ),
];

/// Handles the channel_update event when a channel is updated in a guild.
pub async fn handle_channel_update(
    log_channel: ChannelId,
    ctx: Context,
    old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let guild_id = new.guild_id;
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    if let Some(notification) =
        classify_channel_update(&source, &RetryPolicy::default(), old.as_ref(), &new).await
    {
        notify::send_log(&ctx, guild_id, log_channel, notification).await;
    }
}

/// Probes the three overwrite audit categories for the channel and builds a
/// notification from the first that yields a fresh match.
///
/// Returns `None` when no category has a matching entry, which covers the
/// many channel updates that are not permission changes at all.
pub async fn classify_channel_update<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    _old: Option<&GuildChannel>,
    new: &GuildChannel,
) -> Option<Notification> {
    for (kind, title, embed_color) in OVERWRITE_PROBES {
        let attribution = audit::attribute(source, kind, new.id.get(), policy).await;

        if let Attribution::Attributed(entry) = attribution {
            return Some(
                Notification::new(title, embed_color)
                    .field("Channel", new.name.clone())
                    .field("By", entry.executor),
            );
        }
    }

    None
}
