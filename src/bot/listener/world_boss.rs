//! Reminds registered players shortly before a world boss fight starts.

use std::sync::LazyLock;

use async_trait::async_trait;
use chrono::Utc;
use regex::Regex;
use serenity::all::{ChannelId, MessageId, ReactionType};

use super::{from_game, Listener, ListenerContext};
use crate::{
    error::AppError,
    model::{
        alert::AlertKind,
        message::{InboundMessage, MessageEventKind},
        timer::{TimerKind, TimerMode},
    },
    service::timer_notification::ReadyNotice,
};

const REGISTERED_REACTION: char = '📅';

static FIGHT_AT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t:(\d+):R>").expect("valid regex"));
static BOSS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Boss challenge: [^>]+>\s*(.+)").expect("valid regex"));

/// Unix time of the fight from a relative Discord timestamp.
pub fn fight_at(description: &str) -> Option<i64> {
    FIGHT_AT.captures(description).and_then(|c| c[1].parse().ok())
}

pub fn boss_name(description: &str) -> Option<&str> {
    BOSS.captures(description)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

pub struct WorldBossRegistration;

#[async_trait]
impl Listener for WorldBossRegistration {
    fn name(&self) -> &'static str {
        "world_boss_registration"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        let description = msg.description();
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && description.contains("You are registered for this fight")
            && description.contains(";wb fight")
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some(invoker) = &msg.invoker else {
            return Ok(());
        };
        if !ctx
            .state
            .caches
            .alerts
            .is_enabled(invoker.user_id, AlertKind::WorldBoss)
        {
            return Ok(());
        }
        let Some(fight_at) = fight_at(msg.description()) else {
            tracing::debug!("No fight time in world boss message {}", msg.message_id);
            return Ok(());
        };

        let channel_id = ctx
            .state
            .caches
            .members
            .get(invoker.user_id)
            .and_then(|m| m.channel_id)
            .or(ctx.state.config.fallback_channel_id)
            .unwrap_or(msg.channel_id);

        let notice = ReadyNotice {
            user_id: invoker.user_id,
            user_name: invoker.user_name.clone(),
            kind: TimerKind::WorldBoss,
            mode: TimerMode::On,
            channel_id,
            message_id: msg.message_id,
            detail: boss_name(msg.description()).map(|b| format!("Boss: **{}**", b)),
        };

        let scheduled =
            ctx.state
                .timers
                .schedule_world_boss(ctx.http.clone(), notice, fight_at, Utc::now().timestamp());
        if !scheduled {
            return Ok(());
        }

        tracing::info!("World boss reminder set for {} at {}", invoker.user_name, fight_at);

        if let Err(e) = ChannelId::new(msg.channel_id)
            .create_reaction(
                ctx.http.as_ref(),
                MessageId::new(msg.message_id),
                ReactionType::Unicode(REGISTERED_REACTION.to_string()),
            )
            .await
        {
            tracing::warn!("Failed to react to world boss registration: {}", e);
        }

        Ok(())
    }
}
