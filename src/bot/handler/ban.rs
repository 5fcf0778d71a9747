//! Ban and unban event handlers.
//!
//! Bans are inherently administrative, so both events always produce a
//! notification; correlation only decides whether the log names the
//! moderator and their reason or falls back to "Unknown".

use serenity::all::{ChannelId, Context, GuildId, User};

use crate::audit::{self, AuditKind, AuditLogSource, GuildAuditSource, RetryPolicy};
use crate::notify::{self, color, Notification};

/// Handles the guild_ban_addition event when a user is banned.
pub async fn handle_guild_ban_addition(
    log_channel: ChannelId,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    let notification = classify_ban_added(&source, &RetryPolicy::default(), &banned_user).await;
    notify::send_log(&ctx, guild_id, log_channel, notification).await;
}

/// Handles the guild_ban_removal event when a user's ban is lifted.
pub async fn handle_guild_ban_removal(
    log_channel: ChannelId,
    ctx: Context,
    guild_id: GuildId,
    unbanned_user: User,
) {
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    let notification = classify_ban_removed(&source, &RetryPolicy::default(), &unbanned_user).await;
    notify::send_log(&ctx, guild_id, log_channel, notification).await;
}

/// Builds the ban notice with the banning moderator and their reason.
pub async fn classify_ban_added<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    user: &User,
) -> Notification {
    let attribution =
        audit::attribute(source, AuditKind::MemberBanAdd, user.id.get(), policy).await;

    Notification::new("Member Banned", color::RED)
        .field("User", user.tag())
        .field("Banned by", notify::executor_name(&attribution))
        .field("Reason", notify::reason_or_none(&attribution))
}

/// Builds the unban notice with the lifting moderator.
pub async fn classify_ban_removed<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    user: &User,
) -> Notification {
    let attribution =
        audit::attribute(source, AuditKind::MemberBanRemove, user.id.get(), policy).await;

    Notification::new("Ban Lifted", color::GREEN)
        .field("User", user.tag())
        .field("Unbanned by", notify::executor_name(&attribution))
}
