//! Slash and `!`-prefix commands.
//!
//! Every command defers first. Errors propagate to [`on_error`], which replaces the deferred
//! reply with [`AppError::user_message`] and reports the failure to the operator channel.

pub mod alerts;
pub mod pong;
pub mod timers;
pub mod trophies;

use std::time::Duration;

use poise::CreateReply;
use serenity::all::{
    ComponentInteraction, CreateInteractionResponse, CreateInteractionResponseMessage,
};

use crate::{error::AppError, service::operator_log, state::AppState};

pub type Context<'a> = poise::Context<'a, AppState, AppError>;

/// Lifetime of a button view.
pub const VIEW_TIMEOUT: Duration = Duration::from_secs(180);

pub fn commands() -> Vec<poise::Command<AppState, AppError>> {
    vec![
        timers::timers(),
        alerts::alerts(),
        pong::pong(),
        trophies::trophies(),
    ]
}

/// Framework error hook.
///
/// Command failures are shown to the invoker and reported. Everything else goes through
/// poise's default handling.
pub async fn on_error(error: poise::FrameworkError<'_, AppState, AppError>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            let source = format!("/{}", ctx.command().qualified_name);
            operator_log::report(ctx.http(), &ctx.data().config, &source, &error).await;

            let reply = CreateReply::default()
                .content(error.user_message())
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::warn!("Failed to show error of {} to the user: {}", source, e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}

/// Button id scoped to one command invocation: `<invocation id>:<key>`.
pub fn button_id(invocation: u64, key: &str) -> String {
    format!("{}:{}", invocation, key)
}

/// Key of a button created by [`button_id`] for `invocation`.
pub fn button_key(invocation: u64, custom_id: &str) -> Option<&str> {
    custom_id
        .strip_prefix(&invocation.to_string())
        .and_then(|rest| rest.strip_prefix(':'))
}

/// Rejects a button press by someone other than the invoker.
///
/// # Returns
/// - `Ok(true)` if the press came from the invoker
pub async fn ensure_owner(
    ctx: Context<'_>,
    press: &ComponentInteraction,
    rejection: &str,
) -> Result<bool, AppError> {
    if press.user.id == ctx.author().id {
        return Ok(true);
    }

    press
        .create_response(
            ctx.http(),
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new()
                    .content(rejection)
                    .ephemeral(true),
            ),
        )
        .await?;
    Ok(false)
}
