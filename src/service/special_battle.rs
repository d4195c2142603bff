//! Special NPC battle cooldowns: recording them and announcing when they end.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::{
    data::special_battle::SpecialBattleTimerRepository, error::AppError,
    model::special_battle::SpecialBattleTimer, service::reminder::DeliveryReport,
    state::AppState,
};

const READY_COLOR: u32 = 0xC1B1A5;

pub fn ready_text(timer: &SpecialBattleTimer) -> String {
    format!(
        "⚔️ <@{}>, you can now battle {} again!",
        timer.user_id,
        timer.display_npc_name()
    )
}

/// Game command shown under the ready message.
pub fn battle_command(timer: &SpecialBattleTimer) -> String {
    format!(";b npc {}", timer.npc_name)
}

pub struct SpecialBattleService<'a> {
    state: &'a AppState,
    http: &'a Http,
}

impl<'a> SpecialBattleService<'a> {
    pub fn new(state: &'a AppState, http: &'a Http) -> Self {
        Self { state, http }
    }

    /// Stores a cooldown unless the same end time is already stored.
    ///
    /// # Returns
    /// - `Ok(true)` - The timer was created or moved
    /// - `Ok(false)` - An identical timer exists
    pub async fn record(&self, timer: &SpecialBattleTimer) -> Result<bool, AppError> {
        let repo = SpecialBattleTimerRepository::new(&self.state.db);
        let existing = repo.get(timer.user_id, &timer.npc_name).await?;
        if existing.is_some_and(|e| e.ends_on == timer.ends_on) {
            return Ok(false);
        }

        repo.upsert(timer).await?;
        tracing::info!(
            "Special battle timer for {} against {} ends at {}",
            timer.user_name,
            timer.npc_name,
            timer.ends_on
        );
        Ok(true)
    }

    /// Announces every cooldown that ended by `now`.
    ///
    /// Each timer is deleted after its announcement was attempted, whether or not the send
    /// succeeded, so a broken channel is not retried every minute.
    ///
    /// # Returns
    /// - `Ok(DeliveryReport)` - Counts of delivered and failed announcements
    /// - `Err(AppError::DbErr)` - The ended timers could not be loaded
    pub async fn deliver_due(&self, now: i64) -> Result<DeliveryReport, AppError> {
        let repo = SpecialBattleTimerRepository::new(&self.state.db);
        let due = repo.get_due(now).await?;
        let mut report = DeliveryReport::default();

        for timer in due {
            match self.announce(&timer).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(
                        "Failed to announce {} battle for user {}: {}",
                        timer.npc_name,
                        timer.user_id,
                        e
                    );
                }
            }

            if let Err(e) = repo.delete(timer.user_id, &timer.npc_name).await {
                tracing::error!(
                    "Failed to delete {} battle timer of user {}: {}",
                    timer.npc_name,
                    timer.user_id,
                    e
                );
            }
        }

        if report.delivered + report.failed > 0 {
            tracing::info!(
                "Special battles: {} announced, {} failed",
                report.delivered,
                report.failed
            );
        }

        Ok(report)
    }

    async fn announce(&self, timer: &SpecialBattleTimer) -> Result<(), AppError> {
        let message = CreateMessage::new().content(ready_text(timer)).embed(
            CreateEmbed::new()
                .description(battle_command(timer))
                .color(READY_COLOR),
        );

        ChannelId::new(timer.channel_id)
            .send_message(self.http, message)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::config::Config;

    fn timer(ends_on: i64) -> SpecialBattleTimer {
        SpecialBattleTimer {
            user_id: 100,
            npc_name: "xmas_blue".to_string(),
            user_name: "ash".to_string(),
            ends_on,
            channel_id: 42,
        }
    }

    #[test]
    fn ready_message_names_npc_and_command() {
        assert_eq!(
            ready_text(&timer(0)),
            "⚔️ <@100>, you can now battle Xmas Blue again!"
        );
        assert_eq!(battle_command(&timer(0)), ";b npc xmas_blue");
    }

    /// Tests recording the same cooldown twice and then a new one.
    ///
    /// Expected: Ok(true), Ok(false), then Ok(true) with the later end time stored
    #[tokio::test]
    async fn record_skips_unchanged_cooldown() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::SpecialBattleTimer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let state = AppState::new(db.clone(), Config::test_default());
        let http = Http::new("");
        let service = SpecialBattleService::new(&state, &http);

        assert!(service.record(&timer(1_000)).await?);
        assert!(!service.record(&timer(1_000)).await?);
        assert!(service.record(&timer(2_000)).await?);

        let stored = SpecialBattleTimerRepository::new(db)
            .get(100, "xmas_blue")
            .await?;
        assert_eq!(stored.map(|t| t.ends_on), Some(2_000));

        Ok(())
    }

    /// Tests a delivery run when no cooldown has ended.
    ///
    /// Expected: Ok with nothing attempted and the pending timer kept
    #[tokio::test]
    async fn nothing_due_sends_nothing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::SpecialBattleTimer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let state = AppState::new(db.clone(), Config::test_default());
        let http = Http::new("");
        let service = SpecialBattleService::new(&state, &http);
        service.record(&timer(5_000)).await?;

        let report = service.deliver_due(4_999).await?;

        assert_eq!(report, DeliveryReport::default());
        assert_eq!(
            SpecialBattleTimerRepository::new(db).get_due(5_000).await?.len(),
            1
        );

        Ok(())
    }
}
