//! Plain snapshot of a Discord message for the listener rules.
//!
//! Listeners match on text, so they receive this owned view instead of a serenity `Message`.
//! Tests construct it directly.

use serenity::all::{Embed, Message};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageEventKind {
    Created,
    Edited,
}

/// User who ran the game command that produced the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    pub user_id: u64,
    pub user_name: String,
}

/// The parts of the first embed that listeners inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedView {
    pub title: Option<String>,
    pub description: Option<String>,
    pub footer: Option<String>,
    pub author: Option<String>,
    pub color: Option<u32>,
}

impl EmbedView {
    pub fn from_embed(embed: &Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            footer: embed.footer.as_ref().map(|f| f.text.clone()),
            author: embed.author.as_ref().map(|a| a.name.clone()),
            color: embed.colour.map(|c| c.0),
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn footer(&self) -> &str {
        self.footer.as_deref().unwrap_or_default()
    }

    pub fn author(&self) -> &str {
        self.author.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub kind: MessageEventKind,
    pub message_id: u64,
    pub channel_id: u64,
    pub guild_id: Option<u64>,
    pub author_id: u64,
    pub author_is_bot: bool,
    pub is_webhook: bool,
    pub content: String,
    pub embed: Option<EmbedView>,
    pub invoker: Option<Invoker>,
}

impl InboundMessage {
    #[allow(deprecated)]
    pub fn from_message(message: &Message, kind: MessageEventKind) -> Self {
        // Prefix commands reply to the user's message; slash commands carry interaction data.
        let invoker = message
            .referenced_message
            .as_ref()
            .map(|m| Invoker {
                user_id: m.author.id.get(),
                user_name: m.author.name.clone(),
            })
            .or_else(|| {
                message.interaction.as_ref().map(|i| Invoker {
                    user_id: i.user.id.get(),
                    user_name: i.user.name.clone(),
                })
            });

        Self {
            kind,
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            guild_id: message.guild_id.map(|g| g.get()),
            author_id: message.author.id.get(),
            author_is_bot: message.author.bot,
            is_webhook: message.webhook_id.is_some(),
            content: message.content.clone(),
            embed: message.embeds.first().map(EmbedView::from_embed),
            invoker,
        }
    }

    pub fn embed(&self) -> Option<&EmbedView> {
        self.embed.as_ref()
    }

    pub fn description(&self) -> &str {
        self.embed.as_ref().map(|e| e.description()).unwrap_or_default()
    }
}
