//! Error types and user-facing error rendering.
//!
//! `AppError` is the top-level error type that wraps domain-specific errors. Event handlers,
//! scheduled jobs and the command framework's error hook are the only places an `AppError` is
//! finally consumed: they log it, report it to the operator channel and, for commands, show the
//! invoker the text from [`AppError::user_message`].

pub mod config;
pub mod internal;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Unexpected state inside the bot itself.
    #[error(transparent)]
    Internal(#[from] InternalError),

    /// Resource not found error.
    ///
    /// The message is shown to the command invoker as-is.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// The message is shown to the command invoker as-is.
    #[error("{0}")]
    BadRequest(String),

    /// Internal error with custom message.
    ///
    /// The message is logged but a generic message is shown to the invoker.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Text shown to a user whose command failed.
    ///
    /// `BadRequest` and `NotFound` carry messages written for the user. Everything else is an
    /// implementation detail and is replaced with a generic apology.
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(msg) | Self::NotFound(msg) => format!("❌ {}", msg),
            _ => "❌ Something went wrong while running that command. The error was logged."
                .to_string(),
        }
    }
}
