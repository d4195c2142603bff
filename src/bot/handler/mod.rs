use std::sync::Arc;

use serenity::all::{
    Context, EventHandler, GuildId, Member, Message, MessageUpdateEvent, Ready, User,
};
use serenity::async_trait;

use crate::{bot::listener::ListenerRegistry, state::AppState};

pub mod member;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
    pub registry: Arc<ListenerRegistry>,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            registry: Arc::new(ListenerRegistry::default_rules()),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, &self.registry, ctx, message).await;
    }

    /// Called when a message is edited; the game bot edits catch and stats embeds in place
    async fn message_update(
        &self,
        ctx: Context,
        _old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(&self.state, &self.registry, ctx, new, event).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            &self.state,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }
}
