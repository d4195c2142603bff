//! Cleanup when a member leaves the home guild.

use crate::{
    data::{
        faction_member::FactionMemberRepository, special_battle::SpecialBattleTimerRepository,
        timer_setting::TimerSettingRepository, user_alert::UserAlertRepository,
    },
    error::AppError,
    state::AppState,
};

/// What was removed for a departed member.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemberCleanup {
    pub was_member: bool,
    pub alerts: u64,
    pub special_battles: u64,
    pub timers_cancelled: usize,
}

pub struct MemberService<'a> {
    state: &'a AppState,
}

impl<'a> MemberService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Forgets a user who left the guild.
    ///
    /// Drops the faction membership, timer settings, alert opt-ins and special battle timers
    /// from the cache and the database, and cancels pending ready notifications. Reminders and
    /// goal counters are kept.
    ///
    /// # Returns
    /// - `Ok(MemberCleanup)` - Counts of what was removed
    /// - `Err(AppError::DbErr)` - A delete failed; the caches are already cleared
    pub async fn remove_member(&self, user_id: u64) -> Result<MemberCleanup, AppError> {
        let caches = &self.state.caches;
        let cached = caches.members.remove(user_id).is_some();
        caches.timers.remove(user_id);
        caches.alerts.remove_user(user_id);
        let timers_cancelled = self.state.timers.cancel_all(user_id);

        let db = &self.state.db;
        let stored = FactionMemberRepository::new(db).delete(user_id).await?;
        TimerSettingRepository::new(db).delete(user_id).await?;
        let alerts = UserAlertRepository::new(db)
            .delete_all_for_user(user_id)
            .await?;
        let special_battles = SpecialBattleTimerRepository::new(db)
            .delete_all_for_user(user_id)
            .await?;

        Ok(MemberCleanup {
            was_member: cached || stored,
            alerts,
            special_battles,
            timers_cancelled,
        })
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory::faction_member::FactionMemberFactory};

    use super::*;
    use crate::{
        config::Config,
        model::{
            alert::AlertKind,
            faction::FactionMember,
            special_battle::SpecialBattleTimer,
            timer::TimerSettings,
        },
    };

    /// Tests removing a member who had settings everywhere.
    ///
    /// Expected: Ok with every row and cache entry of the member gone and other users kept
    #[tokio::test]
    async fn removes_everything_of_departed_member() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_cache_tables()
            .with_table(entity::prelude::SpecialBattleTimer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let member = FactionMemberFactory::new(db).user_id(100).build().await?;
        TimerSettingRepository::new(db).ensure_default(100, "ash").await?;
        let alerts = UserAlertRepository::new(db);
        alerts.upsert(100, "ash", AlertKind::WorldBoss, true).await?;
        alerts.upsert(200, "misty", AlertKind::WorldBoss, true).await?;
        let battles = SpecialBattleTimerRepository::new(db);
        battles
            .upsert(&SpecialBattleTimer {
                user_id: 100,
                npc_name: "xmas_blue".to_string(),
                user_name: "ash".to_string(),
                ends_on: 1_000,
                channel_id: 42,
            })
            .await?;

        let state = AppState::new(db.clone(), Config::test_default());
        state.caches.members.upsert(FactionMember::from_entity(member));
        state.caches.timers.set(TimerSettings::new(100, "ash"));
        state.caches.alerts.set(100, AlertKind::WorldBoss, true);
        state.caches.alerts.set(200, AlertKind::WorldBoss, true);

        let cleanup = MemberService::new(&state).remove_member(100).await?;

        assert!(cleanup.was_member);
        assert_eq!(cleanup.alerts, 1);
        assert_eq!(cleanup.special_battles, 1);
        assert!(state.caches.members.get(100).is_none());
        assert!(state.caches.timers.get(100).is_none());
        assert_eq!(state.caches.alerts.subscribers(AlertKind::WorldBoss), vec![200]);
        assert!(FactionMemberRepository::new(db).get_all().await?.is_empty());
        assert!(TimerSettingRepository::new(db).get(100).await?.is_none());
        assert!(battles.get(100, "xmas_blue").await?.is_none());
        assert_eq!(alerts.get(200, AlertKind::WorldBoss).await?, Some(true));

        Ok(())
    }

    /// Tests removing a user the bot never knew.
    ///
    /// Expected: Ok with nothing removed
    #[tokio::test]
    async fn unknown_user_is_a_noop() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_cache_tables()
            .with_table(entity::prelude::SpecialBattleTimer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let state = AppState::new(db.clone(), Config::test_default());

        let cleanup = MemberService::new(&state).remove_member(999).await?;

        assert_eq!(cleanup, MemberCleanup::default());

        Ok(())
    }
}
