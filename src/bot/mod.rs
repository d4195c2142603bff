//! Discord side of the bot.
//!
//! Game messages reach [`handler::Handler`], which hands them to the listener rules in
//! [`listener`]. Slash and `!` commands run through the poise framework built in [`start`].
//! Both share one [`crate::state::AppState`] and the client's HTTP handle, which the scheduler
//! also uses to send messages.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild and channel metadata
//! - `GUILD_MEMBERS` - Member departures, to drop their settings (privileged intent)
//! - `GUILD_MESSAGES` - Game bot messages and their edits
//! - `MESSAGE_CONTENT` - Text and embeds of those messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` and `MESSAGE_CONTENT` must be enabled in the Discord Developer Portal
//! for the bot application.

pub mod command;
pub mod handler;
pub mod listener;
pub mod start;
