//! Database repository layer.
//!
//! One repository per table. Repositories borrow the connection pool, use SeaORM entity models
//! internally and return domain models from `crate::model`. Every write is an
//! insert-or-update keyed by the table's primary key.

pub mod faction_ball;
pub mod faction_member;
pub mod goal_tracker;
pub mod special_battle;
pub mod timer_setting;
pub mod trophy;
pub mod user_alert;
pub mod user_reminder;
pub mod user_timezone;

#[cfg(test)]
mod test;
