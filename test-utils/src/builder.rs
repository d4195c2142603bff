use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{UserReminder, UserTimezone};
///
/// let test = TestBuilder::new()
///     .with_table(UserReminder)
///     .with_table(UserTimezone)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table the bot reads during the hourly cache refresh.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_cache_tables(self) -> Self {
        self.with_table(GoalTracker)
            .with_table(TimerSetting)
            .with_table(UserAlert)
            .with_table(FactionMember)
            .with_table(DailyFactionBall)
    }

    /// Adds the reminder and timezone tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_reminder_tables(self) -> Self {
        self.with_table(UserReminder).with_table(UserTimezone)
    }

    /// Adds the clan wars trophy and leaderboard message tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_trophy_tables(self) -> Self {
        self.with_table(ClanWarsTrophy)
            .with_table(TrophyLeaderboardMessage)
    }

    /// Builds the test context, creating the in-memory database and all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with a connected database and the schema applied
    /// - `Err(TestError::Database)` - Failed to connect or to create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
