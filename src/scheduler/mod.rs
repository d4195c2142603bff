//! Cron jobs: goal cache flushing, reminder and special battle delivery, cache refresh, the
//! daily pings and the weekly and monthly goal resets.
//!
//! Every job catches its own errors. A failing run is logged and reported to the operator
//! channel; the next run happens on schedule regardless.

pub mod daily;

use std::sync::Arc;

use chrono::{Datelike, Utc};
use chrono_tz::Tz;
use serenity::http::Http;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    data::{faction_ball::FactionBallRepository, goal_tracker::GoalTrackerRepository},
    error::AppError,
    model::goal::GoalPeriod,
    service::{
        goal::GoalService, operator_log, reminder::ReminderService,
        special_battle::SpecialBattleService,
    },
    state::AppState,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledJob {
    GoalFlush,
    ReminderCheck,
    SpecialBattleCheck,
    CacheRefresh,
    DailyFactionBallReset,
    DailyPing,
    LottoReminder,
    WeeklyGoalReset,
    MonthlyGoalReset,
}

impl ScheduledJob {
    pub const ALL: [ScheduledJob; 9] = [
        ScheduledJob::GoalFlush,
        ScheduledJob::ReminderCheck,
        ScheduledJob::SpecialBattleCheck,
        ScheduledJob::CacheRefresh,
        ScheduledJob::DailyFactionBallReset,
        ScheduledJob::DailyPing,
        ScheduledJob::LottoReminder,
        ScheduledJob::WeeklyGoalReset,
        ScheduledJob::MonthlyGoalReset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GoalFlush => "goal_flush",
            Self::ReminderCheck => "reminder_check",
            Self::SpecialBattleCheck => "special_battle_check",
            Self::CacheRefresh => "cache_refresh",
            Self::DailyFactionBallReset => "daily_faction_ball_reset",
            Self::DailyPing => "daily_ping",
            Self::LottoReminder => "lotto_reminder",
            Self::WeeklyGoalReset => "weekly_goal_reset",
            Self::MonthlyGoalReset => "monthly_goal_reset",
        }
    }

    /// Six-field cron expression (sec min hour dom mon dow).
    pub fn cron(&self) -> &'static str {
        match self {
            Self::GoalFlush => "0 * * * * *",
            Self::ReminderCheck => "30 * * * * *",
            Self::SpecialBattleCheck => "15 * * * * *",
            Self::CacheRefresh => "0 0 * * * *",
            Self::DailyFactionBallReset | Self::DailyPing => "0 0 0 * * *",
            Self::LottoReminder => "0 50 20 * * *",
            Self::WeeklyGoalReset => "0 0 0 * * Mon",
            Self::MonthlyGoalReset => "0 0 0 1 * *",
        }
    }

    /// Housekeeping jobs run on UTC; everything tied to the game day uses the schedule timezone.
    pub fn timezone(&self, schedule_tz: Tz) -> Tz {
        match self {
            Self::GoalFlush
            | Self::ReminderCheck
            | Self::SpecialBattleCheck
            | Self::CacheRefresh => Tz::UTC,
            _ => schedule_tz,
        }
    }

    async fn run(self, state: &AppState, http: &Http) -> Result<(), AppError> {
        match self {
            Self::GoalFlush => {
                flush_goals(state).await;
                Ok(())
            }
            Self::ReminderCheck => ReminderService::new(state, http)
                .deliver_due(Utc::now().timestamp())
                .await
                .map(|_| ()),
            Self::SpecialBattleCheck => SpecialBattleService::new(state, http)
                .deliver_due(Utc::now().timestamp())
                .await
                .map(|_| ()),
            Self::CacheRefresh => {
                state.caches.refresh(&state.db).await;
                Ok(())
            }
            Self::DailyFactionBallReset => {
                let cleared = FactionBallRepository::new(&state.db).clear().await?;
                state.caches.balls.clear();
                tracing::info!("Cleared {} daily faction balls", cleared);
                Ok(())
            }
            Self::DailyPing => daily::send_daily_ping(state, http).await,
            Self::LottoReminder => {
                let weekday = Utc::now()
                    .with_timezone(&state.config.schedule_timezone)
                    .weekday();
                daily::send_lotto_reminder(state, http, weekday).await
            }
            Self::WeeklyGoalReset => GoalService::new(state, http)
                .reset_period(GoalPeriod::Weekly)
                .await
                .map(|_| ()),
            Self::MonthlyGoalReset => GoalService::new(state, http)
                .reset_period(GoalPeriod::Monthly)
                .await
                .map(|_| ()),
        }
    }
}

/// Writes the dirty entries of both goal caches.
async fn flush_goals(state: &AppState) {
    let repo = GoalTrackerRepository::new(&state.db);

    for period in GoalPeriod::ALL {
        let report = state.caches.goal(period).flush(&repo).await;
        if !report.failed.is_empty() {
            tracing::warn!(
                "{} goal flush: {} written, {} failed and kept dirty",
                period,
                report.written,
                report.failed.len()
            );
        } else if report.written > 0 {
            tracing::debug!("{} goal flush: {} written", period, report.written);
        }
    }
}

/// Starts the job scheduler.
///
/// Each job is registered with its cron expression and timezone, then its next run is logged
/// in the display timezone.
///
/// # Arguments
/// - `state` - Shared application state
/// - `http` - Discord HTTP client of the running bot
///
/// # Returns
/// - `Ok(())` - Every job is registered and the scheduler is running
/// - `Err(AppError::SchedulerErr)` - A cron expression was rejected or the scheduler failed to start
pub async fn start_scheduler(state: AppState, http: Arc<Http>) -> Result<(), AppError> {
    let mut scheduler = JobScheduler::new().await?;

    for job in ScheduledJob::ALL {
        let tz = job.timezone(state.config.schedule_timezone);
        let job_state = state.clone();
        let job_http = http.clone();

        let cron_job = Job::new_async_tz(job.cron(), tz, move |_uuid, _lock| {
            let state = job_state.clone();
            let http = job_http.clone();

            Box::pin(async move {
                tracing::debug!("Running job {}", job.name());
                if let Err(e) = job.run(&state, &http).await {
                    operator_log::report(&http, &state.config, job.name(), &e).await;
                }
            })
        })?;

        let uuid = scheduler.add(cron_job).await?;

        match scheduler.next_tick_for_job(uuid).await {
            Ok(Some(next)) => tracing::info!(
                "Registered job {} ({} {}), next run {}",
                job.name(),
                job.cron(),
                tz,
                next.with_timezone(&state.config.display_timezone)
            ),
            Ok(None) => tracing::warn!("Registered job {} has no upcoming run", job.name()),
            Err(e) => tracing::warn!("Could not compute next run of job {}: {}", job.name(), e),
        }
    }

    scheduler.start().await?;

    tracing::info!("Scheduler started with {} jobs", ScheduledJob::ALL.len());

    Ok(())
}
