//! In-memory state the listeners read and write without touching the database.
//!
//! Goal counters are write-back: mutations stay in memory until the scheduled flush. The other
//! caches are read-through copies of their tables, written to the database first by the command
//! that changes them and reloaded every hour.

pub mod alert;
pub mod faction;
pub mod goal;
pub mod processed;
pub mod timer;

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        faction_ball::FactionBallRepository, faction_member::FactionMemberRepository,
        goal_tracker::GoalTrackerRepository, timer_setting::TimerSettingRepository,
        user_alert::UserAlertRepository,
    },
    model::goal::GoalPeriod,
};

use self::{
    alert::AlertCache,
    faction::{FactionBallCache, FactionMemberCache},
    goal::GoalCache,
    processed::ProcessedMessages,
    timer::TimerCache,
};

pub struct Caches {
    pub weekly: GoalCache,
    pub monthly: GoalCache,
    pub timers: TimerCache,
    pub alerts: AlertCache,
    pub members: FactionMemberCache,
    pub balls: FactionBallCache,
    /// Catch embeds already counted, keyed by message id.
    pub processed_catches: ProcessedMessages<u64>,
    /// Stats embed pages already applied, keyed by message id and page number.
    pub processed_stats: ProcessedMessages<(u64, u32)>,
}

impl Default for Caches {
    fn default() -> Self {
        Self {
            weekly: GoalCache::new(GoalPeriod::Weekly),
            monthly: GoalCache::new(GoalPeriod::Monthly),
            timers: TimerCache::default(),
            alerts: AlertCache::default(),
            members: FactionMemberCache::default(),
            balls: FactionBallCache::default(),
            processed_catches: ProcessedMessages::default(),
            processed_stats: ProcessedMessages::default(),
        }
    }
}

impl Caches {
    pub fn goal(&self, period: GoalPeriod) -> &GoalCache {
        match period {
            GoalPeriod::Weekly => &self.weekly,
            GoalPeriod::Monthly => &self.monthly,
        }
    }

    /// Loads every cache from its table.
    ///
    /// A cache whose query fails keeps its previous contents; the error is logged and the
    /// remaining caches still load.
    pub async fn load_all(&self, db: &DatabaseConnection) {
        let goals = GoalTrackerRepository::new(db);
        for period in GoalPeriod::ALL {
            let epoch = self.goal(period).epoch();
            match goals.get_all(period).await {
                Ok(rows) => {
                    let count = rows.len();
                    if self.goal(period).reload(rows, epoch) {
                        tracing::info!("Loaded {} {} goal entries", count, period);
                    }
                }
                Err(e) => tracing::error!("Failed to load {} goal cache: {}", period, e),
            }
        }

        match TimerSettingRepository::new(db).get_all().await {
            Ok(rows) => {
                tracing::info!("Loaded {} timer settings", rows.len());
                self.timers.replace_all(rows);
            }
            Err(e) => tracing::error!("Failed to load timer settings: {}", e),
        }

        match UserAlertRepository::new(db).get_all().await {
            Ok(rows) => {
                tracing::info!("Loaded {} user alerts", rows.len());
                self.alerts.replace_all(rows);
            }
            Err(e) => tracing::error!("Failed to load user alerts: {}", e),
        }

        match FactionMemberRepository::new(db).get_all().await {
            Ok(rows) => {
                tracing::info!("Loaded {} faction members", rows.len());
                self.members.replace_all(rows);
            }
            Err(e) => tracing::error!("Failed to load faction members: {}", e),
        }

        match FactionBallRepository::new(db).get_all().await {
            Ok(rows) => {
                tracing::info!("Loaded {} daily faction balls", rows.len());
                self.balls.replace_all(rows);
            }
            Err(e) => tracing::error!("Failed to load daily faction balls: {}", e),
        }
    }

    /// Hourly refresh: reload from the database and forget processed message ids.
    pub async fn refresh(&self, db: &DatabaseConnection) {
        self.load_all(db).await;
        self.processed_catches.clear();
        self.processed_stats.clear();
    }
}
