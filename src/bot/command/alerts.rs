//! `/alerts`: on/off toggles for the faction ball and world boss alerts.

use poise::CreateReply;
use serenity::all::{
    ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use super::{button_id, button_key, ensure_owner, Context, VIEW_TIMEOUT};
use crate::{
    cache::alert::AlertCache, data::user_alert::UserAlertRepository, error::AppError,
    model::alert::AlertKind,
};

const ALERT_COLOR: u32 = 0x1ABC9C;

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "On"
    } else {
        "Off"
    }
}

pub fn alert_embed(alerts: &AlertCache, user_id: u64, user_name: &str) -> CreateEmbed {
    let lines: Vec<String> = AlertKind::ALL
        .iter()
        .map(|kind| {
            format!(
                "**{}:** {}",
                kind.label(),
                on_off(alerts.is_enabled(user_id, *kind))
            )
        })
        .collect();

    CreateEmbed::new()
        .title(format!("{}'s alerts", user_name))
        .description(lines.join("\n"))
        .color(ALERT_COLOR)
}

pub fn alert_buttons(
    invocation: u64,
    alerts: &AlertCache,
    user_id: u64,
    disabled: bool,
) -> Vec<CreateActionRow> {
    let buttons = AlertKind::ALL
        .iter()
        .map(|kind| {
            let enabled = alerts.is_enabled(user_id, *kind);
            CreateButton::new(button_id(invocation, kind.as_str()))
                .label(format!("{}: {}", kind.label(), on_off(enabled)))
                .style(if enabled {
                    ButtonStyle::Success
                } else {
                    ButtonStyle::Secondary
                })
                .disabled(disabled)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Toggle your faction ball and world boss alerts
#[poise::command(slash_command, prefix_command)]
pub async fn alerts(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let state = ctx.data();
    let user_id = ctx.author().id.get();
    let user_name = ctx.author().name.clone();
    let repo = UserAlertRepository::new(&state.db);
    let cache = &state.caches.alerts;

    let invocation = ctx.id();
    let reply = ctx
        .send(
            CreateReply::default()
                .embed(alert_embed(cache, user_id, &user_name))
                .components(alert_buttons(invocation, cache, user_id, false)),
        )
        .await?;

    while let Some(press) = ComponentInteractionCollector::new(ctx.serenity_context())
        .channel_id(ctx.channel_id())
        .timeout(VIEW_TIMEOUT)
        .filter(move |press| button_key(invocation, &press.data.custom_id).is_some())
        .await
    {
        if !ensure_owner(ctx, &press, "This is not your alert settings menu!").await? {
            continue;
        }
        let Some(kind) = button_key(invocation, &press.data.custom_id).and_then(AlertKind::parse)
        else {
            continue;
        };

        let notify = !cache.is_enabled(user_id, kind);
        repo.upsert(user_id, &user_name, kind, notify).await?;
        cache.set(user_id, kind, notify);

        tracing::debug!("{} turned {} alert {}", user_name, kind.as_str(), on_off(notify));

        press
            .create_response(
                ctx.http(),
                CreateInteractionResponse::UpdateMessage(
                    CreateInteractionResponseMessage::new()
                        .embed(alert_embed(cache, user_id, &user_name))
                        .components(alert_buttons(invocation, cache, user_id, false)),
                ),
            )
            .await?;
    }

    reply
        .edit(
            ctx,
            CreateReply::default()
                .embed(alert_embed(cache, user_id, &user_name))
                .components(alert_buttons(invocation, cache, user_id, true)),
        )
        .await?;

    Ok(())
}
