//! Records the daily faction ball from the game's faction embed.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use serenity::all::{ChannelId, CreateMessage};

use super::{from_game, Listener, ListenerContext};
use crate::{
    data::{faction_ball::FactionBallRepository, faction_member::FactionMemberRepository},
    error::AppError,
    model::{
        alert::AlertKind,
        faction::Faction,
        message::{InboundMessage, MessageEventKind},
    },
};

static TEAM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Team (\w+)").expect("valid regex"));
static BALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<:([a-zA-Z0-9_]+):\d+>\s+\*\*Today's target Pokemon are\*\*")
        .expect("valid regex")
});

/// Faction named in an embed author like `Team Magma — Headquarters`.
pub fn parse_faction(author: &str) -> Option<Faction> {
    TEAM.captures(author).and_then(|c| c[1].parse().ok())
}

/// Ball emoji name in front of the daily target line.
pub fn parse_ball(description: &str) -> Option<&str> {
    BALL.captures(description)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn ball_alert_text(faction: Faction, ball: &str, subscribers: &[u64]) -> String {
    let mentions: Vec<String> = subscribers.iter().map(|id| format!("<@{}>", id)).collect();
    format!(
        "{} Team {}'s ball for today is **{}**!",
        mentions.join(" "),
        faction,
        ball
    )
}

pub struct FactionBall;

#[async_trait]
impl Listener for FactionBall {
    fn name(&self) -> &'static str {
        "faction_ball"
    }

    fn matches(&self, msg: &InboundMessage) -> bool {
        msg.kind == MessageEventKind::Created
            && from_game(msg)
            && msg.embed().is_some_and(|e| {
                TEAM.is_match(e.author()) && BALL.is_match(e.description())
            })
    }

    async fn handle(&self, ctx: &ListenerContext, msg: &InboundMessage) -> Result<(), AppError> {
        let Some(embed) = msg.embed() else {
            return Ok(());
        };
        let (Some(faction), Some(ball)) =
            (parse_faction(embed.author()), parse_ball(embed.description()))
        else {
            return Ok(());
        };
        let caches = &ctx.state.caches;

        if caches.balls.set_if_absent(faction, ball) {
            FactionBallRepository::new(&ctx.state.db)
                .set(faction, ball)
                .await?;
            tracing::info!("Daily ball of team {} is {}", faction, ball);

            let subscribers: Vec<u64> = caches
                .members
                .members_of(faction)
                .into_iter()
                .map(|m| m.user_id)
                .filter(|id| caches.alerts.is_enabled(*id, AlertKind::FactionBall))
                .collect();

            if !subscribers.is_empty() {
                let message =
                    CreateMessage::new().content(ball_alert_text(faction, ball, &subscribers));
                if let Err(e) = ChannelId::new(msg.channel_id)
                    .send_message(ctx.http.as_ref(), message)
                    .await
                {
                    tracing::warn!("Failed to send faction ball alert: {}", e);
                }
            }
        }

        if let Some(invoker) = &msg.invoker {
            if caches.members.set_faction(invoker.user_id, faction) {
                FactionMemberRepository::new(&ctx.state.db)
                    .set_faction(invoker.user_id, faction)
                    .await?;
                tracing::info!("Moved {} to team {}", invoker.user_name, faction);
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::factory::faction_member::FactionMemberFactory;

    use super::*;
    use crate::{
        bot::listener::test_support::{context, member},
        model::message::{
            fixture::{game_message, with_embed},
            EmbedView,
        },
    };

    fn faction_message(author: &str, ball: &str) -> InboundMessage {
        with_embed(
            game_message(MessageEventKind::Created),
            EmbedView {
                author: Some(author.to_string()),
                description: Some(format!(
                    "<:{}:123456> **Today's target Pokemon are**\nBulbasaur, Oddish",
                    ball
                )),
                ..Default::default()
            },
        )
    }

    #[test]
    fn parses_faction_and_ball() {
        assert_eq!(parse_faction("Team Magma — Headquarters"), Some(Faction::Magma));
        assert_eq!(parse_faction("Team Nobody"), None);
        assert_eq!(
            parse_ball("<:ultraball:99> **Today's target Pokemon are**"),
            Some("ultraball")
        );
    }

    #[test]
    fn alert_mentions_subscribers() {
        assert_eq!(
            ball_alert_text(Faction::Aqua, "greatball", &[1, 2]),
            "<@1> <@2> Team aqua's ball for today is **greatball**!"
        );
    }

    /// Tests that the first ball of the day is kept and the invoker's faction is corrected.
    ///
    /// Expected: Ok with the first ball stored, the second ignored and the member moved to
    /// the faction shown
    #[tokio::test]
    async fn keeps_first_ball_and_corrects_faction() -> Result<(), AppError> {
        let (test, ctx) = context().await;
        let db = test.db.as_ref().unwrap();

        FactionMemberFactory::new(db)
            .user_id(100)
            .user_name("ash")
            .faction("aqua")
            .build()
            .await?;
        ctx.state
            .caches
            .members
            .upsert(member(100, "ash", Some(Faction::Aqua)));

        FactionBall
            .handle(&ctx, &faction_message("Team Magma — Headquarters", "ultraball"))
            .await?;
        FactionBall
            .handle(&ctx, &faction_message("Team Magma — Headquarters", "pokeball"))
            .await?;

        let stored = FactionBallRepository::new(db).get_all().await?;
        assert_eq!(stored, vec![(Faction::Magma, "ultraball".to_string())]);
        assert_eq!(
            ctx.state.caches.members.get(100).and_then(|m| m.faction),
            Some(Faction::Magma)
        );

        let rows = FactionMemberRepository::new(db).get_all().await?;
        assert_eq!(rows[0].faction, Some(Faction::Magma));

        Ok(())
    }
}
