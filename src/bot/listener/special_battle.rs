//! Tracks rematch cooldowns of limited-time NPC battles.
//!
//! Starting a fight puts the NPC on a fixed cooldown. When the game refuses a rematch it prints
//! the exact time the NPC becomes available, which replaces the stored estimate.

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use serenity::all::{ChannelId, MessageId, ReactionType};

use super::{from_game, Listener, ListenerContext};
use crate::{
    error::AppError,
    model::{
        message::{InboundMessage, MessageEventKind},
        special_battle::{SpecialBattleTimer, REMATCH_COOLDOWN_SECS},
    },
    service::special_battle::SpecialBattleService,
};

const TRACKED_REACTION: char = '📅';

/// Event NPCs as `(key, name printed by the game)`.
pub const SPECIAL_NPCS: [(&str, &str); 1] = [("xmas_blue", "XMAS Blue")];

static AVAILABLE_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t:(\d+):[A-Za-z]>").expect("valid regex"));

/// Key of the NPC challenged in a battle start embed.
pub fn started_npc(description: &str) -> Option<&'static str> {
    if !description.contains("challenged") {
        return None;
    }
    SPECIAL_NPCS
        .iter()
        .find(|(_, name)| description.contains(&format!("**{}** to a battle!", name)))
        .map(|(key, _)| *key)
}

/// Key of the NPC and the Unix time it becomes available, from a rematch refusal.
pub fn cooldown_npc(content: &str) -> Option<(&'static str, i64)> {
    if !content.contains("available for you to re-battle") {
        return None;
    }
    let key = SPECIAL_NPCS
        .iter()
        .find(|(_, name)| content.contains(&format!("You cannot fight {} yet!", name)))
        .map(|(key, _)| *key)?;
    let at = AVAILABLE_AT.captures(content)?[1].parse().ok()?;
    Some((key, at))
}

pub struct SpecialBattleStarted;

#[async_trait]
impl Listener for SpecialBattleStarted {
    fn name(&self) -> &'static str {
        "special_battle_started"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && started_npc(msg.description()).is_some()
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some(npc) = started_npc(msg.description()) else {
            return Ok(());
        };
        let ends_on = Utc::now().timestamp() + REMATCH_COOLDOWN_SECS;
        track(ctx, msg, npc, ends_on).await
    }
}

pub struct SpecialBattleCooldown;

#[async_trait]
impl Listener for SpecialBattleCooldown {
    fn name(&self) -> &'static str {
        "special_battle_cooldown"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && cooldown_npc(&msg.content).is_some()
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some((npc, ends_on)) = cooldown_npc(&msg.content) else {
            return Ok(());
        };
        track(ctx, msg, npc, ends_on).await
    }
}

/// Stores the cooldown for the invoker and marks the game message once it changed.
async fn track(
    ctx: &ListenerContext,
    msg: &InboundMessage,
    npc: &str,
    ends_on: i64,
) -> Result<(), AppError> {
    let Some(invoker) = &msg.invoker else {
        tracing::debug!("No invoker on special battle message {}", msg.message_id);
        return Ok(());
    };

    let timer = SpecialBattleTimer {
        user_id: invoker.user_id,
        npc_name: npc.to_string(),
        user_name: invoker.user_name.clone(),
        ends_on,
        channel_id: msg.channel_id,
    };
    if !SpecialBattleService::new(&ctx.state, &ctx.http)
        .record(&timer)
        .await?
    {
        return Ok(());
    }

    if let Err(e) = ChannelId::new(msg.channel_id)
        .create_reaction(
            ctx.http.as_ref(),
            MessageId::new(msg.message_id),
            ReactionType::Unicode(TRACKED_REACTION.to_string()),
        )
        .await
    {
        tracing::warn!("Failed to react to special battle message: {}", e);
    }

    Ok(())
}
