use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, GuildId, GuildMemberUpdateEvent, Member, Ready,
    Role, RoleId, User, VoiceState,
};
use serenity::async_trait;

pub mod ban;
pub mod channel;
pub mod member;
pub mod ready;
pub mod role;
pub mod voice;

#[cfg(test)]
mod test;

/// Discord bot event handler
pub struct Handler {
    /// Channel every moderation log embed is posted to.
    pub log_channel: ChannelId,
}

impl Handler {
    pub fn new(log_channel: ChannelId) -> Self {
        Self { log_channel }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a member's voice state changes (join, leave, move,
    /// server mute/deafen)
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self.log_channel, ctx, old, new).await;
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, ctx: Context, new: Role) {
        role::handle_guild_role_create(self.log_channel, ctx, new).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            self.log_channel,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a member is updated in a guild (roles, timeout, etc.)
    async fn guild_member_update(
        &self,
        ctx: Context,
        old: Option<Member>,
        new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        member::handle_guild_member_update(self.log_channel, ctx, old, new, event).await;
    }

    /// Called when a member leaves a guild, voluntarily or not
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            self.log_channel,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(self.log_channel, ctx, old, new).await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        ban::handle_guild_ban_addition(self.log_channel, ctx, guild_id, banned_user).await;
    }

    /// Called when a user's ban is lifted
    async fn guild_ban_removal(&self, ctx: Context, guild_id: GuildId, unbanned_user: User) {
        ban::handle_guild_ban_removal(self.log_channel, ctx, guild_id, unbanned_user).await;
    }
}
