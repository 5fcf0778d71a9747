//! Voice state event handlers.
//!
//! A single voice state update can carry several distinct transitions:
//! server mute or deafen toggles, and a channel change (join, leave, move).
//! Mute and deafen are orthogonal to the channel transitions and are checked
//! independently; the channel transitions are mutually exclusive and exactly
//! one of them fires per update.
//!
//! Leaves and moves are where audit correlation earns its keep: the voice
//! event looks the same whether the member acted on their own or a moderator
//! disconnected or dragged them. A fresh audit entry decides which story the
//! log tells.

use serenity::all::{ChannelId, Context, VoiceState};

use crate::audit::{self, AuditKind, AuditLogSource, Attribution, GuildAuditSource, RetryPolicy};
use crate::notify::{self, color, Notification};

/// Handles the voice_state_update event for one member.
pub async fn handle_voice_state_update(
    log_channel: ChannelId,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new
        .guild_id
        .or_else(|| old.as_ref().and_then(|state| state.guild_id))
    else {
        return;
    };

    let source = GuildAuditSource::new(&ctx.http, guild_id);
    let notifications =
        classify_voice_update(&source, &RetryPolicy::default(), old.as_ref(), &new).await;

    for notification in notifications {
        notify::send_log(&ctx, guild_id, log_channel, notification).await;
    }
}

/// Detects which transitions this update represents and builds one
/// notification per detected transition.
///
/// Events for bot accounts and events without member data are ignored.
pub async fn classify_voice_update<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    old: Option<&VoiceState>,
    new: &VoiceState,
) -> Vec<Notification> {
    let Some(member) = new
        .member
        .as_ref()
        .or_else(|| old.and_then(|state| state.member.as_ref()))
    else {
        tracing::debug!("Voice state update without member data for user {}", new.user_id);
        return Vec::new();
    };

    if member.user.bot {
        return Vec::new();
    }

    let user_id = member.user.id.get();
    let user_tag = member.user.tag();
    let mut notifications = Vec::new();

    let old_mute = old.is_some_and(|state| state.mute);
    let old_deaf = old.is_some_and(|state| state.deaf);

    // Server mute toggled
    if old_mute != new.mute {
        let attribution = audit::attribute(source, AuditKind::MemberUpdate, user_id, policy).await;

        notifications.push(
            Notification::new(
                "Server Mute",
                if new.mute { color::RED } else { color::GREEN },
            )
            .field("User", user_tag.clone())
            .field("State", if new.mute { "Muted" } else { "Unmuted" })
            .field("By", notify::executor_name(&attribution)),
        );
    }

    // Server deafen toggled
    if old_deaf != new.deaf {
        let attribution = audit::attribute(source, AuditKind::MemberUpdate, user_id, policy).await;

        notifications.push(
            Notification::new(
                "Server Deafen",
                if new.deaf { color::RED } else { color::GREEN },
            )
            .field("User", user_tag.clone())
            .field("State", if new.deaf { "Deafened" } else { "Undeafened" })
            .field("By", notify::executor_name(&attribution)),
        );
    }

    let old_channel = old.and_then(|state| state.channel_id);
    let new_channel = new.channel_id;

    match (old_channel, new_channel) {
        // Joining is always self-initiated; nothing to correlate
        (None, Some(joined)) => {
            notifications.push(
                Notification::new("Voice Join", color::GREEN)
                    .field("User", user_tag)
                    .field("Channel", notify::channel_mention(joined)),
            );
        }
        (Some(left), None) => {
            let attribution =
                audit::attribute(source, AuditKind::MemberDisconnect, user_id, policy).await;

            let notification = match attribution {
                Attribution::Attributed(entry) => Notification::new("Voice Disconnect", color::RED)
                    .field("User", user_tag)
                    .field("Channel", notify::channel_mention(left))
                    .field("Disconnected by", entry.executor),
                Attribution::Unattributed => Notification::new("Voice Leave", color::GREY)
                    .field("User", user_tag)
                    .field("Channel", notify::channel_mention(left))
                    .field(
                        "Note",
                        "Left on their own or dropped (Discord does not always audit disconnects)",
                    ),
            };
            notifications.push(notification);
        }
        (Some(from), Some(to)) if from != to => {
            let attribution =
                audit::attribute(source, AuditKind::MemberMove, user_id, policy).await;

            let notification = match attribution {
                Attribution::Attributed(entry) => Notification::new("Voice Move", color::ORANGE)
                    .field("User", user_tag)
                    .field("From", notify::channel_mention(from))
                    .field("To", notify::channel_mention(to))
                    .field("Moved by", entry.executor),
                Attribution::Unattributed => Notification::new("Channel Switch", color::BLUE)
                    .field("User", user_tag)
                    .field("From", notify::channel_mention(from))
                    .field("To", notify::channel_mention(to))
                    .field("Note", "Switched on their own"),
            };
            notifications.push(notification);
        }
        _ => {}
    }

    notifications
}
