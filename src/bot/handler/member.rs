//! Member event handlers: role grants, timeouts, and kicks.
//!
//! A member update bundles two separately-logged concerns. Role changes are
//! diffed against the previous role list and attributed through the
//! member-role-update category; only the first added and first removed role
//! are reported per update batch, with one audit lookup shared by both
//! notices. Timeout changes are diffed on the raw restriction timestamp and
//! attributed through member-update.
//!
//! Member removal is deliberately quiet: a departure only becomes a log
//! entry when a fresh kick audit entry proves a moderator caused it.
//! Ordinary leaves produce nothing.

use serenity::all::{ChannelId, Context, GuildId, GuildMemberUpdateEvent, Member, User};

use crate::audit::{self, AuditKind, AuditLogSource, Attribution, GuildAuditSource, RetryPolicy};
use crate::notify::{self, color, Notification};

/// Handles the guild_member_update event when a member is updated in a guild.
pub async fn handle_guild_member_update(
    log_channel: ChannelId,
    ctx: Context,
    old: Option<Member>,
    new: Option<Member>,
    _event: GuildMemberUpdateEvent,
) {
    // Serenity only supplies the previous state from cache; without it there
    // is nothing to diff against
    let (Some(old), Some(new)) = (old, new) else {
        tracing::debug!("Member update without cached previous state, skipping diff");
        return;
    };

    let guild_id = new.guild_id;
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    let notifications = classify_member_update(&source, &RetryPolicy::default(), &old, &new).await;

    for notification in notifications {
        notify::send_log(&ctx, guild_id, log_channel, notification).await;
    }
}

/// Handles the guild_member_removal event when a member leaves a guild.
pub async fn handle_guild_member_removal(
    log_channel: ChannelId,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    if let Some(notification) =
        classify_member_removal(&source, &RetryPolicy::default(), &user).await
    {
        notify::send_log(&ctx, guild_id, log_channel, notification).await;
    }
}

/// Diffs the member's role list and timeout state and builds a notification
/// per detected change.
pub async fn classify_member_update<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    old: &Member,
    new: &Member,
) -> Vec<Notification> {
    let mut notifications = Vec::new();
    let user_id = new.user.id.get();
    let user_tag = new.user.tag();

    // Only the first changed role on each side is reported per update batch
    let added = new.roles.iter().find(|role| !old.roles.contains(role));
    let removed = old.roles.iter().find(|role| !new.roles.contains(role));

    if added.is_some() || removed.is_some() {
        // One lookup covers both sides of the diff
        let attribution =
            audit::attribute(source, AuditKind::MemberRoleUpdate, user_id, policy).await;

        if let Some(role_id) = added {
            notifications.push(
                Notification::new("Role Added", color::GREEN)
                    .field("User", user_tag.clone())
                    .field("Role", notify::role_mention(*role_id))
                    .field("Added by", notify::executor_name(&attribution)),
            );
        }

        if let Some(role_id) = removed {
            notifications.push(
                Notification::new("Role Removed", color::RED)
                    .field("User", user_tag.clone())
                    .field("Role", notify::role_mention(*role_id))
                    .field("Removed by", notify::executor_name(&attribution)),
            );
        }
    }

    // Compare on the raw timestamps; the restriction may be set, cleared, or
    // pushed out to a new expiry
    let old_until = old
        .communication_disabled_until
        .map(|until| until.unix_timestamp());
    let new_until = new
        .communication_disabled_until
        .map(|until| until.unix_timestamp());

    if old_until != new_until {
        let attribution = audit::attribute(source, AuditKind::MemberUpdate, user_id, policy).await;

        let state = match (old_until, new_until) {
            (None, Some(_)) => "Granted",
            (Some(_), None) => "Lifted",
            _ => "Updated/extended",
        };

        let expires = match new_until {
            Some(timestamp) => format!("<t:{}:F>", timestamp),
            None => "None".to_string(),
        };

        notifications.push(
            Notification::new(
                "Timeout",
                if new_until.is_some() {
                    color::ORANGE
                } else {
                    color::GREEN
                },
            )
            .field("User", user_tag.clone())
            .field("State", state)
            .field("Expires", expires)
            .field("By", notify::executor_name(&attribution)),
        );
    }

    notifications
}

/// Distinguishes a kick from an ordinary departure.
///
/// # Returns
/// - `Some(notification)` - A fresh kick audit entry named an executor
/// - `None` - No matching entry; the member left on their own
pub async fn classify_member_removal<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    user: &User,
) -> Option<Notification> {
    let attribution = audit::attribute(source, AuditKind::MemberKick, user.id.get(), policy).await;

    let Attribution::Attributed(entry) = attribution else {
        return None;
    };

    Some(
        Notification::new("Member Kicked", color::RED)
            .field("User", user.tag())
            .field("Kicked by", entry.executor)
            .field("Reason", entry.reason.unwrap_or_else(|| "None".to_string())),
    )
}
