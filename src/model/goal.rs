//! Weekly and monthly catch goals.

use std::{fmt, str::FromStr};

use crate::{
    error::AppError,
    util::parse::{count_from_db, id_from_db},
};

/// Tracking period of a goal counter set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalPeriod {
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub const ALL: [GoalPeriod; 2] = [GoalPeriod::Weekly, GoalPeriod::Monthly];

    /// Value stored in the `period` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GoalPeriod {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "monthly" => Ok(Self::Monthly),
            other => Err(AppError::InternalError(format!(
                "Unknown goal period '{}'",
                other
            ))),
        }
    }
}

/// Per-user counters for one tracking period.
///
/// Counters only grow during a period; the scheduled reset removes the entry instead of
/// zeroing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalEntry {
    pub user_id: u64,
    pub user_name: String,
    /// Channel where the congratulation is posted, usually the member's personal channel.
    pub channel_id: Option<u64>,
    pub pokemon_caught: u64,
    pub fish_caught: u64,
    pub battles_won: u64,
    /// Set once the requirement notification has been sent for this period.
    pub requirement_met: bool,
}

impl GoalEntry {
    /// Zeroed entry for a user seen for the first time this period.
    pub fn new(user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            channel_id: None,
            pokemon_caught: 0,
            fish_caught: 0,
            battles_won: 0,
            requirement_met: false,
        }
    }

    pub fn total_catches(&self) -> u64 {
        self.pokemon_caught.saturating_add(self.fish_caught)
    }

    /// Whether any tracked total reaches `requirement`.
    ///
    /// `top_line` is the catch total the game bot prints on a stats embed, which can run ahead
    /// of what the listeners observed.
    pub fn reaches(&self, requirement: u64, top_line: Option<u64>) -> bool {
        self.pokemon_caught >= requirement
            || self.total_catches() >= requirement
            || self.fish_caught >= requirement
            || top_line.is_some_and(|total| total >= requirement)
    }

    /// Converts an entity model to a goal entry at the repository boundary.
    pub fn from_entity(entity: entity::goal_tracker::Model) -> Self {
        Self {
            user_id: id_from_db(entity.user_id),
            user_name: entity.user_name,
            channel_id: entity.channel_id.map(id_from_db),
            pokemon_caught: count_from_db(entity.pokemon_caught),
            fish_caught: count_from_db(entity.fish_caught),
            battles_won: count_from_db(entity.battles_won),
            requirement_met: entity.requirement_met,
        }
    }
}
