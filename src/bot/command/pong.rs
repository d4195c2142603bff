//! `/pong`: personal reminders delivered by the reminder job.

use chrono::Utc;
use poise::CreateReply;

use super::Context;
use crate::{
    data::{user_reminder::UserReminderRepository, user_timezone::UserTimezoneRepository},
    error::{internal::InternalError, AppError},
    model::reminder::{CreateReminderParam, NotifyType, Reminder, UpdateReminderParam},
    util::time::{format_duration, parse_remind_on, parse_repeat_interval, parse_timezone},
};

/// One line of `/pong list`.
pub fn reminder_line(reminder: &Reminder) -> String {
    let repeat = reminder
        .repeat_interval
        .map(|secs| format!(", every {}", format_duration(secs)))
        .unwrap_or_default();

    format!(
        "`#{}` <t:{}:f> ({}{}): {}",
        reminder.reminder_id,
        reminder.remind_on,
        reminder.notify_type.as_str(),
        repeat,
        reminder.message
    )
}

fn list_text(reminders: &[Reminder]) -> String {
    if reminders.is_empty() {
        return "You have no reminders.".to_string();
    }

    reminders
        .iter()
        .map(reminder_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Private reply listing the invoker's reminders.
fn list_reply(reminders: &[Reminder]) -> CreateReply {
    CreateReply::default()
        .content(list_text(reminders))
        .ephemeral(true)
}

/// `all` or a reminder number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveTarget {
    All,
    One(i32),
}

impl RemoveTarget {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        trimmed
            .trim_start_matches('#')
            .parse()
            .map(Self::One)
            .map_err(|_| {
                AppError::BadRequest(format!(
                    "'{}' is not a reminder number. Use a number from /pong list or `all`.",
                    trimmed
                ))
            })
    }
}

async fn user_timezone(ctx: Context<'_>) -> Result<chrono_tz::Tz, AppError> {
    let user_id = ctx.author().id.get();
    let stored = UserTimezoneRepository::new(&ctx.data().db)
        .get(user_id)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest(
                "Set your timezone first with /pong timezone, e.g. America/New_York.".to_string(),
            )
        })?;

    stored
        .parse()
        .map_err(|_| InternalError::InvalidTimezone(stored, user_id).into())
}

/// Channel reminders go to the member's own channel when they have one.
fn personal_channel(ctx: Context<'_>) -> Option<u64> {
    ctx.data()
        .caches
        .members
        .get(ctx.author().id.get())
        .and_then(|m| m.channel_id)
}

/// Personal reminders
#[poise::command(
    slash_command,
    prefix_command,
    subcommands("timezone", "add", "list", "remove", "edit"),
    subcommand_required
)]
pub async fn pong(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Set the timezone your reminder times are read in
#[poise::command(slash_command, prefix_command)]
async fn timezone(
    ctx: Context<'_>,
    #[description = "IANA timezone, e.g. America/New_York"] timezone: String,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let tz = parse_timezone(&timezone)?;
    UserTimezoneRepository::new(&ctx.data().db)
        .set(ctx.author().id.get(), tz.name())
        .await?;

    ctx.say(format!("✅ Your timezone is now **{}**.", tz.name()))
        .await?;

    Ok(())
}

/// Create a reminder
#[poise::command(slash_command, prefix_command)]
async fn add(
    ctx: Context<'_>,
    #[description = "What to remind you about"] message: String,
    #[description = "MM/DD HH:MM or a duration such as 12h, 1d3m"] remind_on: String,
    #[description = "Where to send it"] notify_type: NotifyType,
    #[description = "Repeat every, e.g. 1d (at least 60s)"] repeat_interval: Option<String>,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let tz = user_timezone(ctx).await?;
    let remind_on = parse_remind_on(&remind_on, tz, Utc::now())?;
    let repeat_interval = repeat_interval
        .as_deref()
        .map(parse_repeat_interval)
        .transpose()?;

    let target_channel = match notify_type {
        NotifyType::Channel => personal_channel(ctx),
        NotifyType::Dm => None,
    };

    let reminder = UserReminderRepository::new(&ctx.data().db)
        .create(CreateReminderParam {
            user_id: ctx.author().id.get(),
            user_name: ctx.author().name.clone(),
            message,
            remind_on,
            notify_type,
            repeat_interval,
            target_channel,
        })
        .await?;

    tracing::debug!(
        "{} created reminder {} for {}",
        reminder.user_name,
        reminder.reminder_id,
        reminder.remind_on
    );

    ctx.say(format!("✅ Reminder created:\n{}", reminder_line(&reminder)))
        .await?;

    Ok(())
}

/// List your reminders
#[poise::command(slash_command, prefix_command)]
async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let reminders = UserReminderRepository::new(&ctx.data().db)
        .get_by_user(ctx.author().id.get())
        .await?;

    ctx.send(list_reply(&reminders)).await?;

    Ok(())
}

/// Remove one reminder or all of them
#[poise::command(slash_command, prefix_command)]
async fn remove(
    ctx: Context<'_>,
    #[description = "Reminder number, or all"] target: String,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let user_id = ctx.author().id.get();
    let repo = UserReminderRepository::new(&ctx.data().db);

    let reply = match RemoveTarget::parse(&target)? {
        RemoveTarget::All => {
            let removed = repo.delete_all_for_user(user_id).await?;
            format!("✅ Removed {} reminder(s).", removed)
        }
        RemoveTarget::One(id) => {
            if !repo.delete(user_id, id).await? {
                return Err(AppError::NotFound(format!("You have no reminder #{}.", id)));
            }
            format!("✅ Removed reminder #{}.", id)
        }
    };

    ctx.say(reply).await?;

    Ok(())
}

/// Change a reminder
#[poise::command(slash_command, prefix_command)]
async fn edit(
    ctx: Context<'_>,
    #[description = "Reminder number"] id: i32,
    #[description = "New text"] message: Option<String>,
    #[description = "MM/DD HH:MM or a duration"] remind_on: Option<String>,
    #[description = "Where to send it"] notify_type: Option<NotifyType>,
    #[description = "Repeat every, e.g. 1d (at least 60s)"] repeat_interval: Option<String>,
) -> Result<(), AppError> {
    ctx.defer().await?;

    let remind_on = match remind_on {
        Some(input) => Some(parse_remind_on(&input, user_timezone(ctx).await?, Utc::now())?),
        None => None,
    };
    let repeat_interval = repeat_interval
        .as_deref()
        .map(parse_repeat_interval)
        .transpose()?;
    let target_channel = notify_type.map(|notify| match notify {
        NotifyType::Channel => personal_channel(ctx),
        NotifyType::Dm => None,
    });

    let update = UpdateReminderParam {
        message,
        remind_on,
        notify_type,
        repeat_interval,
        target_channel,
    };

    let reminder = UserReminderRepository::new(&ctx.data().db)
        .update(ctx.author().id.get(), id, update)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("You have no reminder #{}.", id)))?;

    ctx.say(format!("✅ Reminder updated:\n{}", reminder_line(&reminder)))
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(repeat_interval: Option<i64>) -> Reminder {
        Reminder {
            user_id: 1,
            reminder_id: 3,
            user_name: "ash".to_string(),
            message: "claim daily".to_string(),
            remind_on: 1_700_000_000,
            notify_type: NotifyType::Dm,
            repeat_interval,
            target_channel: None,
        }
    }

    #[test]
    fn line_shows_repeat_only_when_set() {
        assert_eq!(
            reminder_line(&reminder(None)),
            "`#3` <t:1700000000:f> (DM): claim daily"
        );
        assert_eq!(
            reminder_line(&reminder(Some(90_000))),
            "`#3` <t:1700000000:f> (DM, every 1d 1h): claim daily"
        );
    }

    #[test]
    fn list_reply_is_private() {
        let reply = list_reply(&[reminder(None)]);

        assert_eq!(reply.ephemeral, Some(true));
        assert_eq!(
            reply.content.as_deref(),
            Some(list_text(&[reminder(None)]).as_str())
        );
    }

    #[test]
    fn empty_list_says_so() {
        assert_eq!(list_text(&[]), "You have no reminders.");
    }

    #[test]
    fn remove_target_accepts_numbers_and_all() {
        assert_eq!(RemoveTarget::parse("ALL").unwrap(), RemoveTarget::All);
        assert_eq!(RemoveTarget::parse("#4").unwrap(), RemoveTarget::One(4));
        assert_eq!(RemoveTarget::parse(" 12 ").unwrap(), RemoveTarget::One(12));
        assert!(matches!(
            RemoveTarget::parse("soon"),
            Err(AppError::BadRequest(_))
        ));
    }
}
