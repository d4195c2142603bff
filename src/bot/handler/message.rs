//! Message create and update events, forwarded to the listener registry.

use serenity::all::{Context, Message, MessageUpdateEvent};

use crate::{
    bot::listener::{ListenerContext, ListenerRegistry},
    model::message::{InboundMessage, MessageEventKind},
    state::AppState,
};

/// Handle message creation in a channel
pub async fn handle_message(
    state: &AppState,
    registry: &ListenerRegistry,
    ctx: Context,
    message: Message,
) {
    let inbound = InboundMessage::from_message(&message, MessageEventKind::Created);
    dispatch(state, registry, ctx, inbound).await;
}

/// Handle a message edit.
///
/// The gateway only carries the full message when it was cached; otherwise it is fetched so
/// rules always see the edited embed.
pub async fn handle_message_update(
    state: &AppState,
    registry: &ListenerRegistry,
    ctx: Context,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    // Edits outside guilds never reach a rule; skip the fetch for them.
    if event.guild_id.is_none() {
        return;
    }

    let message = match new {
        Some(message) => message,
        None => match event.channel_id.message(&ctx, event.id).await {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Failed to fetch edited message {}: {}", event.id, e);
                return;
            }
        },
    };

    let mut inbound = InboundMessage::from_message(&message, MessageEventKind::Edited);
    // Fetched messages lack the guild id.
    inbound.guild_id = inbound.guild_id.or(event.guild_id.map(|g| g.get()));
    dispatch(state, registry, ctx, inbound).await;
}

async fn dispatch(
    state: &AppState,
    registry: &ListenerRegistry,
    ctx: Context,
    inbound: InboundMessage,
) {
    if !ListenerRegistry::admits(&state.config, &inbound) {
        return;
    }

    let listener_ctx = ListenerContext {
        state: state.clone(),
        http: ctx.http.clone(),
    };
    registry.dispatch(&listener_ctx, &inbound).await;
}
