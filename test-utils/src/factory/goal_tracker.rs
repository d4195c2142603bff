//! Goal tracker factory for creating weekly and monthly goal rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating goal tracker rows with customizable counters.
///
/// # Example
///
/// ```rust,ignore
/// let row = GoalTrackerFactory::new(&db, "weekly")
///     .user_id(42)
///     .pokemon_caught(120)
///     .build()
///     .await?;
/// ```
pub struct GoalTrackerFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    period: String,
    user_name: String,
    channel_id: Option<i64>,
    pokemon_caught: i64,
    fish_caught: i64,
    battles_won: i64,
    requirement_met: bool,
}

impl<'a> GoalTrackerFactory<'a> {
    /// Creates a new factory with zeroed counters.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - user_name: `"Trainer {id}"`
    /// - channel_id: `None`
    /// - requirement_met: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the row
    /// - `period` - `"weekly"` or `"monthly"`
    pub fn new(db: &'a DatabaseConnection, period: &str) -> Self {
        let id = next_id();
        Self {
            db,
            user_id: id,
            period: period.to_string(),
            user_name: format!("Trainer {}", id),
            channel_id: None,
            pokemon_caught: 0,
            fish_caught: 0,
            battles_won: 0,
            requirement_met: false,
        }
    }

    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }

    pub fn channel_id(mut self, channel_id: Option<i64>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn pokemon_caught(mut self, pokemon_caught: i64) -> Self {
        self.pokemon_caught = pokemon_caught;
        self
    }

    pub fn fish_caught(mut self, fish_caught: i64) -> Self {
        self.fish_caught = fish_caught;
        self
    }

    pub fn battles_won(mut self, battles_won: i64) -> Self {
        self.battles_won = battles_won;
        self
    }

    pub fn requirement_met(mut self, requirement_met: bool) -> Self {
        self.requirement_met = requirement_met;
        self
    }

    /// Builds and inserts the goal row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::goal_tracker::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::goal_tracker::Model, DbErr> {
        entity::goal_tracker::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            period: ActiveValue::Set(self.period),
            user_name: ActiveValue::Set(self.user_name),
            channel_id: ActiveValue::Set(self.channel_id),
            pokemon_caught: ActiveValue::Set(self.pokemon_caught),
            fish_caught: ActiveValue::Set(self.fish_caught),
            battles_won: ActiveValue::Set(self.battles_won),
            requirement_met: ActiveValue::Set(self.requirement_met),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a zeroed goal row for a fresh user in the given period.
///
/// Shorthand for `GoalTrackerFactory::new(db, period).build().await`.
pub async fn create_goal_row(
    db: &DatabaseConnection,
    period: &str,
) -> Result<entity::goal_tracker::Model, DbErr> {
    GoalTrackerFactory::new(db, period).build().await
}
