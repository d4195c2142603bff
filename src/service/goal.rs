//! Goal requirement announcements and the periodic reset.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::{
    cache::Caches,
    config::Config,
    data::goal_tracker::GoalTrackerRepository,
    error::AppError,
    model::goal::{GoalEntry, GoalPeriod},
    state::AppState,
    util::parse::format_count,
};

const WEEKLY_COLOR: u32 = 0x5DADE2;
const MONTHLY_COLOR: u32 = 0xFFD700;

/// Members listed by name in a reset summary.
const RESET_SUMMARY_LIMIT: usize = 40;

/// What caused a goal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalTrigger {
    /// A counted catch; the congratulation is also posted in the channel of the catch.
    Catch,
    /// A clan stats embed for `period`. Only the tracker channel is notified.
    Stats {
        period: GoalPeriod,
        top_line: Option<u64>,
    },
}

impl GoalTrigger {
    fn top_line_for(&self, period: GoalPeriod) -> Option<u64> {
        match self {
            Self::Stats {
                period: stats_period,
                top_line,
            } if *stats_period == period => *top_line,
            _ => None,
        }
    }

    fn announces_in_channel(&self) -> bool {
        matches!(self, Self::Catch)
    }
}

/// A requirement reached for the first time this period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub period: GoalPeriod,
    pub requirement: u64,
    pub entry: GoalEntry,
}

impl Announcement {
    fn emoji(&self) -> &'static str {
        match self.period {
            GoalPeriod::Weekly => "🎉",
            GoalPeriod::Monthly => "🏆",
        }
    }

    pub fn channel_text(&self) -> String {
        format!(
            "{} Congratulations {}! You have met the {} requirement of {}",
            self.emoji(),
            self.entry.user_name,
            self.period,
            format_count(self.requirement)
        )
    }

    pub fn tracker_embed(&self) -> CreateEmbed {
        let color = match self.period {
            GoalPeriod::Weekly => WEEKLY_COLOR,
            GoalPeriod::Monthly => MONTHLY_COLOR,
        };

        CreateEmbed::new()
            .description(format!(
                "{} <@{}> has met the {} requirement of __{}__ catches!",
                self.emoji(),
                self.entry.user_id,
                self.period,
                format_count(self.requirement)
            ))
            .color(color)
    }
}

/// Runs the requirement check for both periods and returns the ones that fired.
///
/// Each period fires at most once per user; the marker is set here.
pub fn due_announcements(
    caches: &Caches,
    config: &Config,
    user_id: u64,
    trigger: GoalTrigger,
) -> Vec<Announcement> {
    GoalPeriod::ALL
        .into_iter()
        .filter_map(|period| {
            let requirement = config.requirement(period);
            let cache = caches.goal(period);
            cache
                .check_requirement(user_id, requirement, trigger.top_line_for(period))
                .then(|| Announcement {
                    period,
                    requirement,
                    entry: cache.get(user_id),
                })
        })
        .collect()
}

pub struct GoalService<'a> {
    state: &'a AppState,
    http: &'a Http,
}

impl<'a> GoalService<'a> {
    pub fn new(state: &'a AppState, http: &'a Http) -> Self {
        Self { state, http }
    }

    /// Checks the user's goals and posts the announcements that are due.
    ///
    /// Sending failures are logged; the requirement marker stays set so a flaky channel does
    /// not produce repeated congratulations.
    ///
    /// # Arguments
    /// - `user_id` - Member whose counters changed
    /// - `channel_id` - Channel of the triggering game message
    /// - `trigger` - Catch or stats embed
    pub async fn check_and_announce(&self, user_id: u64, channel_id: u64, trigger: GoalTrigger) {
        let announcements =
            due_announcements(&self.state.caches, &self.state.config, user_id, trigger);

        for announcement in announcements {
            tracing::info!(
                "User {} met the {} requirement",
                announcement.entry.user_name,
                announcement.period
            );

            if trigger.announces_in_channel() {
                let message = CreateMessage::new().content(announcement.channel_text());
                if let Err(e) = ChannelId::new(channel_id)
                    .send_message(self.http, message)
                    .await
                {
                    tracing::error!("Failed to post congratulation in {}: {}", channel_id, e);
                }
            }

            if let Some(tracker) = self.state.config.goal_tracker_channel_id {
                let message = CreateMessage::new().embed(announcement.tracker_embed());
                if let Err(e) = ChannelId::new(tracker).send_message(self.http, message).await {
                    tracing::error!("Failed to post goal announcement: {}", e);
                }
            }
        }
    }

    /// Starts a new tracking period.
    ///
    /// Holds the cache's write gate while it clears the cache and deletes the rows, so a flush
    /// either finishes before the reset or starts after it with nothing dirty. Running the reset
    /// twice deletes nothing the second time.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(AppError::DbErr)` - Deleting the rows failed; the cache is already empty
    pub async fn reset_period(&self, period: GoalPeriod) -> Result<u64, AppError> {
        let cache = self.state.caches.goal(period);
        let writes = cache.lock_writes().await;
        let achievers: Vec<GoalEntry> = cache
            .all()
            .into_iter()
            .filter(|e| e.requirement_met)
            .collect();

        cache.clear();
        let deleted = GoalTrackerRepository::new(&self.state.db)
            .delete_period(period)
            .await?;
        drop(writes);

        tracing::info!("Reset {} goals, {} rows deleted", period, deleted);

        if let Some(tracker) = self.state.config.goal_tracker_channel_id {
            let embed = reset_summary(period, self.state.config.requirement(period), &achievers);
            if let Err(e) = ChannelId::new(tracker)
                .send_message(self.http, CreateMessage::new().embed(embed))
                .await
            {
                tracing::error!("Failed to post {} reset summary: {}", period, e);
            }
        }

        Ok(deleted)
    }
}

/// Text of the summary posted when a period ends.
pub fn reset_summary_text(period: GoalPeriod, requirement: u64, achievers: &[GoalEntry]) -> String {
    if achievers.is_empty() {
        return format!(
            "Nobody reached the {} requirement of {} catches this time.",
            period,
            format_count(requirement)
        );
    }

    let mut lines = vec![format!(
        "{} member(s) reached the {} requirement of {} catches:",
        achievers.len(),
        period,
        format_count(requirement)
    )];
    lines.extend(
        achievers
            .iter()
            .take(RESET_SUMMARY_LIMIT)
            .map(|e| format!("- <@{}> ({})", e.user_id, format_count(e.total_catches()))),
    );
    if achievers.len() > RESET_SUMMARY_LIMIT {
        lines.push(format!("…and {} more", achievers.len() - RESET_SUMMARY_LIMIT));
    }
    lines.join("\n")
}

fn reset_summary(period: GoalPeriod, requirement: u64, achievers: &[GoalEntry]) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} goal tracker reset", period.label()))
        .description(reset_summary_text(period, requirement, achievers))
        .color(match period {
            GoalPeriod::Weekly => WEEKLY_COLOR,
            GoalPeriod::Monthly => MONTHLY_COLOR,
        })
}
