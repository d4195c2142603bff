//! Domain models shared by the caches, repositories and bot handlers.
//!
//! Entity models from the `entity` crate are converted into these types at the repository
//! boundary so that the rest of the bot works with `u64` ids, typed enums and unsigned counters.

pub mod alert;
pub mod faction;
pub mod goal;
pub mod message;
pub mod reminder;
pub mod special_battle;
pub mod timer;
pub mod trophy;
