//! Daily role pings: the checklist reminder and the lottery reminder.

use chrono::Weekday;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};

use crate::{error::AppError, state::AppState};

const PING_COLOR: u32 = 0xE6C35C;

const DAILY_CHECKLIST: &str = "- ;daily - To claim your daily reward.\n\
- ;hunt - To view your current hunt.\n\
- ;sw - To claim your free 2x swap tickets";

/// First prize of the lottery drawn on `weekday`, `None` on days without a draw.
pub fn lotto_prize(weekday: Weekday) -> Option<&'static str> {
    match weekday {
        Weekday::Sun => Some("Slowpoke"),
        Weekday::Mon => Some("Togedemaru"),
        Weekday::Wed => Some("Smeargle"),
        Weekday::Fri => Some("Hisuian-Zorua"),
        _ => None,
    }
}

pub fn daily_ping_message(role_id: u64) -> CreateMessage {
    let embed = CreateEmbed::new()
        .title("Daily Checklist Reminder")
        .description(DAILY_CHECKLIST)
        .color(PING_COLOR);

    CreateMessage::new()
        .content(format!("<@&{}> Time to do your daily checklist!", role_id))
        .embed(embed)
}

pub fn lotto_description(prize: &str) -> String {
    format!(
        "### 🎯 **OS LOTTO REMINDER**\n- **1st Prize:** **{}**\n- **Command:** `;lot buy <amount>`",
        prize
    )
}

/// Posts the daily checklist ping.
///
/// Skipped when the ping channel or role is not configured.
pub async fn send_daily_ping(state: &AppState, http: &Http) -> Result<(), AppError> {
    let (Some(channel_id), Some(role_id)) = (
        state.config.daily_ping_channel_id,
        state.config.daily_ping_role_id,
    ) else {
        tracing::debug!("Daily ping channel or role not configured, skipping");
        return Ok(());
    };

    ChannelId::new(channel_id)
        .send_message(http, daily_ping_message(role_id))
        .await?;

    tracing::info!("Sent daily checklist ping");

    Ok(())
}

/// Posts the lottery reminder if a draw happens on `weekday`.
///
/// `weekday` is taken in the schedule timezone, which is the timezone the game uses for draws.
pub async fn send_lotto_reminder(
    state: &AppState,
    http: &Http,
    weekday: Weekday,
) -> Result<(), AppError> {
    let Some(prize) = lotto_prize(weekday) else {
        return Ok(());
    };
    let (Some(channel_id), Some(role_id)) =
        (state.config.daily_ping_channel_id, state.config.lotto_role_id)
    else {
        tracing::debug!("Lotto channel or role not configured, skipping");
        return Ok(());
    };

    let message = CreateMessage::new()
        .content(format!("<@&{}> 10 Minutes before lottery ends!", role_id))
        .embed(
            CreateEmbed::new()
                .description(lotto_description(prize))
                .color(PING_COLOR),
        );
    ChannelId::new(channel_id).send_message(http, message).await?;

    tracing::info!("Sent lotto reminder for {} ({})", prize, weekday);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lotto_runs_four_days_a_week() {
        assert_eq!(lotto_prize(Weekday::Sun), Some("Slowpoke"));
        assert_eq!(lotto_prize(Weekday::Fri), Some("Hisuian-Zorua"));
        assert_eq!(lotto_prize(Weekday::Tue), None);

        let draws = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter_map(lotto_prize)
        .count();
        assert_eq!(draws, 4);
    }

    #[test]
    fn lotto_description_names_prize() {
        assert!(lotto_description("Smeargle").contains("**1st Prize:** **Smeargle**"));
    }

    /// Tests that an unconfigured ping is skipped without contacting Discord.
    ///
    /// Expected: Ok
    #[tokio::test]
    async fn unconfigured_pings_are_skipped() -> Result<(), AppError> {
        use test_utils::builder::TestBuilder;

        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let state = AppState::new(db.clone(), crate::config::Config::test_default());
        let http = Http::new("");

        send_daily_ping(&state, &http).await?;
        send_lotto_reminder(&state, &http, Weekday::Sun).await?;
        send_lotto_reminder(&state, &http, Weekday::Tue).await?;

        Ok(())
    }
}
