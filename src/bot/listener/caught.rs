//! Counts catches towards the weekly and monthly goals.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{from_game, Listener, ListenerContext};
use crate::{
    error::AppError,
    model::{
        faction::FactionMember,
        goal::GoalPeriod,
        message::{InboundMessage, MessageEventKind},
    },
    service::goal::{GoalService, GoalTrigger},
};

/// Embed colour of a fishing catch; every other colour is a Pokémon catch.
pub const FISHING_COLOR: u32 = 0x87CEFA;

static AUTHOR_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:Congratulations|Well done|Great work), ([^!]+)!").expect("valid regex")
});

/// Trainer name from a catch embed author such as `Congratulations, frayl!`.
pub fn catcher_name(author: &str) -> Option<&str> {
    AUTHOR_NAME
        .captures(author)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

pub struct PokemonCaught;

impl PokemonCaught {
    fn resolve_member(ctx: &ListenerContext, msg: &InboundMessage) -> Option<FactionMember> {
        let members = &ctx.state.caches.members;

        msg.invoker
            .as_ref()
            .and_then(|invoker| members.get(invoker.user_id))
            .or_else(|| {
                msg.embed()
                    .and_then(|e| catcher_name(e.author()))
                    .and_then(|name| members.find_by_name(name))
            })
    }
}

#[async_trait]
impl Listener for PokemonCaught {
    fn name(&self) -> &'static str {
        "pokemon_caught"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Edited
            && from_game(msg)
            && msg.description().contains("You caught a")
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some(member) = Self::resolve_member(ctx, msg) else {
            tracing::debug!("Catch in message {} by an unregistered trainer", msg.message_id);
            return Ok(());
        };

        if !ctx.state.caches.processed_catches.first_seen(msg.message_id) {
            return Ok(());
        }

        let is_fish = msg.embed().and_then(|e| e.color) == Some(FISHING_COLOR);

        for period in GoalPeriod::ALL {
            let cache = ctx.state.caches.goal(period);
            cache.ensure(member.user_id, &member.user_name, member.channel_id);
            if is_fish {
                cache.record_fish_caught(member.user_id, &member.user_name, 1);
            } else {
                cache.record_pokemon_caught(member.user_id, &member.user_name, 1);
            }
        }

        tracing::debug!(
            "Counted {} catch for {}",
            if is_fish { "fish" } else { "pokemon" },
            member.user_name
        );

        GoalService::new(&ctx.state, &ctx.http)
            .check_and_announce(member.user_id, msg.channel_id, GoalTrigger::Catch)
            .await;

        Ok(())
    }
}
