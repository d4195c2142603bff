//! Rules that react to game bot messages.
//!
//! Each rule is a [`Listener`]: a cheap synchronous `matches` check on the message text and an
//! async `handle` that does the work. The [`ListenerRegistry`] runs gatekeeping once, then every
//! matching rule in registration order. A failing rule is logged and reported; the remaining
//! rules still run.

pub mod caught;
pub mod faction_ball;
pub mod special_battle;
pub mod stats;
pub mod timer;
pub mod world_boss;

use std::sync::Arc;

use async_trait::async_trait;
use serenity::http::Http;

use crate::{
    config::Config, error::AppError, model::message::InboundMessage, service::operator_log,
    state::AppState,
};

/// What a listener gets to work with.
#[derive(Clone)]
pub struct ListenerContext {
    pub state: AppState,
    pub http: Arc<Http>,
}

#[async_trait]
pub trait Listener: Send + Sync {
    fn name(&self) -> &'static str;

    /// Cheap text check deciding whether `handle` runs.
    fn matches(&self, msg: &InboundMessage) -> bool;

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError>;
}

/// Whether the message came from the game rather than from a member.
///
/// Other bots are dropped by gatekeeping, so any remaining bot author is the game bot.
pub fn from_game(msg: &InboundMessage) -> bool {
    msg.author_is_bot || msg.is_webhook
}

pub struct ListenerRegistry {
    rules: Vec<Box<dyn Listener>>,
}

impl ListenerRegistry {
    pub fn new(rules: Vec<Box<dyn Listener>>) -> Self {
        Self { rules }
    }

    /// Every rule the bot runs, in dispatch order.
    pub fn default_rules() -> Self {
        Self::new(vec![
            Box::new(caught::PokemonCaught),
            Box::new(timer::PokemonTimer),
            Box::new(timer::FishTimer),
            Box::new(timer::BattleTimer),
            Box::new(stats::ClanStats),
            Box::new(faction_ball::FactionBall),
            Box::new(world_boss::WorldBossRegistration),
            Box::new(special_battle::SpecialBattleStarted),
            Box::new(special_battle::SpecialBattleCooldown),
        ])
    }

    /// Gatekeeping applied before any rule sees a message.
    ///
    /// Only guild messages pass. Bot authors other than the game bot are dropped unless the
    /// message came through a webhook. With a home guild configured, other guilds are dropped.
    pub fn admits(config: &Config, msg: &InboundMessage) -> bool {
        let Some(guild_id) = msg.guild_id else {
            return false;
        };
        if msg.author_is_bot && msg.author_id != config.pokemeow_application_id && !msg.is_webhook
        {
            return false;
        }
        config.home_guild_id.map_or(true, |home| home == guild_id)
    }

    /// Names of the rules that match `msg`, in dispatch order.
    pub fn matching(&self, msg: &InboundMessage) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(msg))
            .map(|rule| rule.name())
            .collect()
    }

    /// Runs every matching rule on an admitted message.
    pub async fn dispatch(&self, ctx: &ListenerContext, msg: &InboundMessage) {
        if !Self::admits(&ctx.state.config, msg) {
            return;
        }

        for rule in self.rules.iter().filter(|rule| rule.matches(msg)) {
            tracing::debug!("Listener {} matched message {}", rule.name(), msg.message_id);

            if let Err(e) = rule.handle(ctx, msg).await {
                operator_log::report(&ctx.http, &ctx.state.config, rule.name(), &e).await;
            }
        }
    }
}
