//! `/timers`: per-user ready-timer preferences behind three cycling buttons.

use poise::CreateReply;
use serenity::all::{
    ButtonStyle, ComponentInteractionCollector, CreateActionRow, CreateButton, CreateEmbed,
    CreateInteractionResponse, CreateInteractionResponseMessage,
};

use super::{button_id, button_key, ensure_owner, Context, VIEW_TIMEOUT};
use crate::{
    data::timer_setting::TimerSettingRepository,
    error::AppError,
    model::timer::{TimerKind, TimerMode, TimerSettings},
};

const TIMER_COLOR: u32 = 0x9B59B6;

pub fn timer_embed(settings: &TimerSettings) -> CreateEmbed {
    let lines: Vec<String> = TimerKind::CONFIGURABLE
        .iter()
        .map(|kind| format!("**{}:** {}", kind.label(), settings.mode(*kind).label()))
        .collect();

    CreateEmbed::new()
        .title(format!("{}'s timer settings", settings.user_name))
        .description(lines.join("\n"))
        .color(TIMER_COLOR)
}

fn button_style(mode: TimerMode) -> ButtonStyle {
    match mode {
        TimerMode::Off => ButtonStyle::Secondary,
        TimerMode::On => ButtonStyle::Success,
        TimerMode::OnNoPings | TimerMode::React => ButtonStyle::Primary,
    }
}

pub fn timer_buttons(invocation: u64, settings: &TimerSettings, disabled: bool) -> Vec<CreateActionRow> {
    let buttons = TimerKind::CONFIGURABLE
        .iter()
        .map(|kind| {
            let mode = settings.mode(*kind);
            CreateButton::new(button_id(invocation, kind.as_str()))
                .label(format!("{}: {}", kind.label(), mode.label()))
                .style(button_style(mode))
                .disabled(disabled)
        })
        .collect();

    vec![CreateActionRow::Buttons(buttons)]
}

/// Configure your Pokémon, fish and battle ready timers
#[poise::command(slash_command, prefix_command)]
pub async fn timers(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let state = ctx.data();
    let user_id = ctx.author().id.get();
    let user_name = ctx.author().name.clone();
    let repo = TimerSettingRepository::new(&state.db);

    let mut settings = repo.ensure_default(user_id, &user_name).await?;
    state.caches.timers.set(settings.clone());

    let invocation = ctx.id();
    let reply = ctx
        .send(
            CreateReply::default()
                .embed(timer_embed(&settings))
                .components(timer_buttons(invocation, &settings, false)),
        )
        .await?;

    while let Some(press) = ComponentInteractionCollector::new(ctx.serenity_context())
        .channel_id(ctx.channel_id())
        .timeout(VIEW_TIMEOUT)
        .filter(move |press| button_key(invocation, &press.data.custom_id).is_some())
        .await
    {
        if !ensure_owner(ctx, &press, "This is not your timer settings menu!").await? {
            continue;
        }
        let Some(kind) = button_key(invocation, &press.data.custom_id).and_then(TimerKind::from_id)
        else {
            continue;
        };

        let mode = settings.mode(kind).next_for(kind);
        repo.set_mode(user_id, kind, mode).await?;
        settings.set_mode(kind, mode);
        state.caches.timers.set(settings.clone());

        if !mode.is_enabled() {
            state.timers.cancel(user_id, kind);
        }

        tracing::debug!("{} set {} timer to {}", user_name, kind.as_str(), mode.as_str());

        press
            .create_response(
                ctx.http(),
                CreateInteractionResponse::UpdateMessage(
                    CreateInteractionResponseMessage::new()
                        .embed(timer_embed(&settings))
                        .components(timer_buttons(invocation, &settings, false)),
                ),
            )
            .await?;
    }

    reply
        .edit(
            ctx,
            CreateReply::default()
                .embed(timer_embed(&settings))
                .components(timer_buttons(invocation, &settings, true)),
        )
        .await?;

    Ok(())
}
