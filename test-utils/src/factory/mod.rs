//! Factory methods for creating test data.
//!
//! Each table that tests seed directly has a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::faction_member::FactionMemberFactory::new(&db)
//!     .user_name("Ash")
//!     .faction("rocket")
//!     .build()
//!     .await?;
//!
//! let row = factory::create_goal_row(&db, "weekly").await?;
//! ```
//!
//! # Available Factories
//!
//! - `goal_tracker` - Weekly and monthly goal rows
//! - `faction_member` - Clan members with faction and personal channel
//! - `user_reminder` - Scheduled reminders
//! - `clan_wars_trophy` - Clan trophy totals
//! - `helpers` - Unique id generation

pub mod clan_wars_trophy;
pub mod faction_member;
pub mod goal_tracker;
pub mod helpers;
pub mod user_reminder;

pub use clan_wars_trophy::create_trophy;
pub use faction_member::create_faction_member;
pub use goal_tracker::create_goal_row;
pub use user_reminder::create_reminder;
