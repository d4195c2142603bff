//! Business logic shared by the message listeners, the commands and the scheduled jobs.
//!
//! Services borrow the [`AppState`](crate::state::AppState) and a Discord HTTP client. They are
//! created per use, the same way repositories are.

pub mod goal;
pub mod member;
pub mod operator_log;
pub mod reminder;
pub mod special_battle;
pub mod timer_notification;
pub mod trophy;
