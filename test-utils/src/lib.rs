//! Meow Companion Test Utils
//!
//! Shared helpers for testing the companion bot's data layer. Tests build a `TestContext` backed
//! by an in-memory SQLite database whose schema is generated from the entity crate, then seed
//! rows with the factories.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::GoalTracker;
//!
//! #[tokio::test]
//! async fn test_goal_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(GoalTracker)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
