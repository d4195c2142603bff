//! Starts ready timers when a game command is used.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use super::{from_game, Listener, ListenerContext};
use crate::{
    error::AppError,
    model::{
        goal::GoalPeriod,
        message::{InboundMessage, MessageEventKind},
        timer::TimerKind,
    },
    service::timer_notification::ReadyNotice,
};

static SPAWN_TRAINER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*(.+?)\*\*\s+(?:found|fished) a wild").expect("valid regex")
});
static FISH_TRAINER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\* cast a").expect("valid regex"));

/// Trainer name printed in a spawn message.
pub fn spawn_trainer(text: &str) -> Option<&str> {
    SPAWN_TRAINER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Trainer name printed in a fishing embed.
pub fn fishing_trainer(text: &str) -> Option<&str> {
    FISH_TRAINER
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Who used the command: the invoker, or the printed trainer name looked up in the timer cache.
fn resolve_trainer(
    ctx: &ListenerContext,
    msg: &InboundMessage,
    trainer: Option<&str>,
) -> Option<(u64, String)> {
    if let Some(invoker) = &msg.invoker {
        return Some((invoker.user_id, invoker.user_name.clone()));
    }

    let timers = &ctx.state.caches.timers;
    let user_id = timers.find_id_by_name(trainer?)?;
    timers.get(user_id).map(|s| (user_id, s.user_name))
}

/// Schedules the ready notification for `kind` if the user opted in.
///
/// # Returns
/// - `true` if a timer was scheduled
fn schedule_ready(
    ctx: &ListenerContext,
    msg: &InboundMessage,
    kind: TimerKind,
    trainer: Option<&str>,
) -> bool {
    let Some((user_id, user_name)) = resolve_trainer(ctx, msg, trainer) else {
        return false;
    };

    let mode = ctx.state.caches.timers.mode(user_id, kind);
    if !mode.is_enabled() {
        return false;
    }

    ctx.state.timers.schedule(
        ctx.http.clone(),
        ReadyNotice {
            user_id,
            user_name,
            kind,
            mode,
            channel_id: msg.channel_id,
            message_id: msg.message_id,
            detail: None,
        },
    );
    true
}

pub struct PokemonTimer;

#[async_trait]
impl Listener for PokemonTimer {
    fn name(&self) -> &'static str {
        "pokemon_timer"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && msg.content.to_lowercase().contains("found a wild")
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let trainer = spawn_trainer(msg.description()).or_else(|| spawn_trainer(&msg.content));
        schedule_ready(ctx, msg, TimerKind::Pokemon, trainer);
        Ok(())
    }
}

pub struct FishTimer;

#[async_trait]
impl Listener for FishTimer {
    fn name(&self) -> &'static str {
        "fish_timer"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        let description = msg.description();
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && description.contains("cast a")
            && description.contains("into the water")
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        schedule_ready(ctx, msg, TimerKind::Fish, fishing_trainer(msg.description()));
        Ok(())
    }
}

/// Battle cooldown; also counts won battles for the goal tracker.
pub struct BattleTimer;

#[async_trait]
impl Listener for BattleTimer {
    fn name(&self) -> &'static str {
        "battle_timer"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && msg
                .embed()
                .is_some_and(|e| e.author().contains("PokeMeow Battles"))
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        if msg.description().contains("won the battle") {
            if let Some(invoker) = &msg.invoker {
                if ctx.state.caches.members.get(invoker.user_id).is_some() {
                    for period in GoalPeriod::ALL {
                        ctx.state.caches.goal(period).record_battle_won(
                            invoker.user_id,
                            &invoker.user_name,
                            1,
                        );
                    }
                }
            }
        }

        schedule_ready(ctx, msg, TimerKind::Battle, None);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        bot::listener::test_support::{context, member},
        model::{
            message::{
                fixture::{game_message, with_content, with_embed},
                EmbedView,
            },
            timer::{TimerMode, TimerSettings},
        },
    };

    fn settings(user_id: u64, name: &str, kind: TimerKind, mode: TimerMode) -> TimerSettings {
        let mut settings = TimerSettings::new(user_id, name);
        settings.set_mode(kind, mode);
        settings
    }

    #[test]
    fn extracts_trainer_names() {
        assert_eq!(
            spawn_trainer("<:irida:1> **khy.09** found a wild Eevee!"),
            Some("khy.09")
        );
        assert_eq!(spawn_trainer("**misty** fished a wild Magikarp"), Some("misty"));
        assert_eq!(
            fishing_trainer("<:irida:1> **khy.09** cast a Super Rod into the water"),
            Some("khy.09")
        );
        assert_eq!(fishing_trainer("nothing here"), None);
    }

    #[test]
    fn fish_needs_both_phrases() {
        let cast = with_embed(
            game_message(MessageEventKind::Created),
            EmbedView {
                description: Some("**ash** cast a Old Rod into the water".to_string()),
                ..Default::default()
            },
        );
        let mut half = cast.clone();
        half.embed = Some(EmbedView {
            description: Some("**ash** cast a Old Rod".to_string()),
            ..Default::default()
        });

        assert!(FishTimer.matches(&cast));
        assert!(!FishTimer.matches(&half));
    }

    #[tokio::test]
    async fn schedules_only_opted_in_users() -> Result<(), AppError> {
        let (_test, ctx) = context().await;
        let spawn = with_content(
            game_message(MessageEventKind::Created),
            "**ash** found a wild Pidgey!",
        );

        PokemonTimer.handle(&ctx, &spawn).await?;
        assert!(!ctx.state.timers.pending(100, TimerKind::Pokemon));

        ctx.state
            .caches
            .timers
            .set(settings(100, "ash", TimerKind::Pokemon, TimerMode::React));
        PokemonTimer.handle(&ctx, &spawn).await?;
        assert!(ctx.state.timers.pending(100, TimerKind::Pokemon));

        ctx.state.timers.cancel(100, TimerKind::Pokemon);

        Ok(())
    }

    #[tokio::test]
    async fn resolves_fisher_by_name_without_invoker() -> Result<(), AppError> {
        let (_test, ctx) = context().await;
        ctx.state
            .caches
            .timers
            .set(settings(300, "Brock", TimerKind::Fish, TimerMode::OnNoPings));

        let mut cast = with_embed(
            game_message(MessageEventKind::Created),
            EmbedView {
                description: Some("**brock** cast a Good Rod into the water".to_string()),
                ..Default::default()
            },
        );
        cast.invoker = None;

        FishTimer.handle(&ctx, &cast).await?;

        assert!(ctx.state.timers.pending(300, TimerKind::Fish));
        ctx.state.timers.cancel(300, TimerKind::Fish);

        Ok(())
    }

    #[tokio::test]
    async fn won_battle_counts_for_members() -> Result<(), AppError> {
        let (_test, ctx) = context().await;
        ctx.state.caches.members.upsert(member(100, "ash", None));

        let battle = with_embed(
            game_message(MessageEventKind::Created),
            EmbedView {
                author: Some("PokeMeow Battles".to_string()),
                description: Some("ash won the battle!".to_string()),
                ..Default::default()
            },
        );

        BattleTimer.handle(&ctx, &battle).await?;

        assert_eq!(ctx.state.caches.weekly.get(100).battles_won, 1);
        assert_eq!(ctx.state.caches.monthly.get(100).battles_won, 1);

        Ok(())
    }
}
