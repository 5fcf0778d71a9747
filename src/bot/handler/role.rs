//! Role lifecycle event handlers.
//!
//! Role creation and deletion both come in without an actor attached; the
//! role-create and role-delete audit categories carry it. When the trail has
//! nothing fresh for the role, the notice still goes out with an unknown
//! creator or deleter.

use serenity::all::{ChannelId, Context, GuildId, Role, RoleId};

use crate::audit::{self, AuditKind, AuditLogSource, GuildAuditSource, RetryPolicy};
use crate::notify::{self, color, Notification};

/// Handles the guild_role_create event when a role is created in a guild.
pub async fn handle_guild_role_create(log_channel: ChannelId, ctx: Context, new: Role) {
    let guild_id = new.guild_id;
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    let notification = classify_role_created(&source, &RetryPolicy::default(), &new).await;
    notify::send_log(&ctx, guild_id, log_channel, notification).await;
}

/// Handles the guild_role_delete event when a role is deleted from a guild.
pub async fn handle_guild_role_delete(
    log_channel: ChannelId,
    ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    removed_role_data_if_in_cache: Option<Role>,
) {
    let source = GuildAuditSource::new(&ctx.http, guild_id);

    let notification = classify_role_deleted(
        &source,
        &RetryPolicy::default(),
        removed_role_id,
        removed_role_data_if_in_cache.as_ref(),
    )
    .await;
    notify::send_log(&ctx, guild_id, log_channel, notification).await;
}

/// Builds the creation notice, attributing the creator through the
/// role-create audit category.
pub async fn classify_role_created<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    role: &Role,
) -> Notification {
    let attribution = audit::attribute(source, AuditKind::RoleCreate, role.id.get(), policy).await;

    Notification::new("Role Created", color::GREEN)
        .field("Role", role.name.clone())
        .field("Created by", notify::executor_name(&attribution))
}

/// Builds the deletion notice, attributing the deleter through the
/// role-delete audit category.
///
/// The deleted role's name is only known if it was cached; the raw id is the
/// fallback.
pub async fn classify_role_deleted<S: AuditLogSource>(
    source: &S,
    policy: &RetryPolicy,
    role_id: RoleId,
    cached_role: Option<&Role>,
) -> Notification {
    let attribution = audit::attribute(source, AuditKind::RoleDelete, role_id.get(), policy).await;

    let role_name = cached_role
        .map(|role| role.name.clone())
        .unwrap_or_else(|| role_id.to_string());

    Notification::new("Role Deleted", color::RED)
        .field("Role", role_name)
        .field("Deleted by", notify::executor_name(&attribution))
}
