use std::str::FromStr;

use chrono_tz::Tz;

use crate::{
    error::{config::ConfigError, AppError},
    model::goal::GoalPeriod,
};

const DEFAULT_POKEMEOW_APPLICATION_ID: u64 = 664508672713424926;
const DEFAULT_WEEKLY_REQUIREMENT: u64 = 500;
const DEFAULT_MONTHLY_REQUIREMENT: u64 = 2000;
const DEFAULT_SCHEDULE_TIMEZONE: Tz = chrono_tz::America::New_York;
const DEFAULT_DISPLAY_TIMEZONE: Tz = chrono_tz::Asia::Manila;

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Game bot whose messages the listeners parse.
    pub pokemeow_application_id: u64,
    /// When set, game messages from other guilds are ignored.
    pub home_guild_id: Option<u64>,
    /// Guild in which the trophy commands may be used.
    pub clan_wars_guild_id: Option<u64>,

    pub goal_tracker_channel_id: Option<u64>,
    pub log_channel_id: Option<u64>,
    pub fallback_channel_id: Option<u64>,
    pub daily_ping_channel_id: Option<u64>,
    pub daily_ping_role_id: Option<u64>,
    /// Role pinged ten minutes before the lottery draw.
    pub lotto_role_id: Option<u64>,
    pub leaderboard_channel_id: Option<u64>,

    pub weekly_requirement: u64,
    pub monthly_requirement: u64,

    /// Timezone the daily, weekly and monthly cron jobs run in.
    pub schedule_timezone: Tz,
    /// Timezone used when logging the next run of each job.
    pub display_timezone: Tz,
}

impl Config {
    pub fn requirement(&self, period: GoalPeriod) -> u64 {
        match period {
            GoalPeriod::Weekly => self.weekly_requirement,
            GoalPeriod::Monthly => self.monthly_requirement,
        }
    }

    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// # Arguments
    /// - `lookup` - Returns the raw value of a variable, or `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every value parsed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is malformed
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| -> Result<String, ConfigError> {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            database_url: required("DATABASE_URL")?,
            pokemeow_application_id: parse_or(
                &lookup,
                "POKEMEOW_APPLICATION_ID",
                DEFAULT_POKEMEOW_APPLICATION_ID,
            )?,
            home_guild_id: parse_optional(&lookup, "HOME_GUILD_ID")?,
            clan_wars_guild_id: parse_optional(&lookup, "CLAN_WARS_GUILD_ID")?,
            goal_tracker_channel_id: parse_optional(&lookup, "GOAL_TRACKER_CHANNEL_ID")?,
            log_channel_id: parse_optional(&lookup, "LOG_CHANNEL_ID")?,
            fallback_channel_id: parse_optional(&lookup, "FALLBACK_CHANNEL_ID")?,
            daily_ping_channel_id: parse_optional(&lookup, "DAILY_PING_CHANNEL_ID")?,
            daily_ping_role_id: parse_optional(&lookup, "DAILY_PING_ROLE_ID")?,
            lotto_role_id: parse_optional(&lookup, "LOTTO_ROLE_ID")?,
            leaderboard_channel_id: parse_optional(&lookup, "LEADERBOARD_CHANNEL_ID")?,
            weekly_requirement: parse_or(&lookup, "WEEKLY_REQUIREMENT", DEFAULT_WEEKLY_REQUIREMENT)?,
            monthly_requirement: parse_or(
                &lookup,
                "MONTHLY_REQUIREMENT",
                DEFAULT_MONTHLY_REQUIREMENT,
            )?,
            schedule_timezone: parse_or(&lookup, "SCHEDULE_TIMEZONE", DEFAULT_SCHEDULE_TIMEZONE)?,
            display_timezone: parse_or(&lookup, "DISPLAY_TIMEZONE", DEFAULT_DISPLAY_TIMEZONE)?,
        })
    }
}

#[cfg(test)]
impl Config {
    /// Configuration with only the required variables set.
    pub fn test_default() -> Self {
        Self::from_lookup(|name| match name {
            "DISCORD_BOT_TOKEN" => Some("token".to_string()),
            "DATABASE_URL" => Some("sqlite::memory:".to_string()),
            _ => None,
        })
        .expect("required variables are set")
    }
}

fn parse_optional<F, T>(lookup: &F, name: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name).filter(|v| !v.trim().is_empty()) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw.clone(),
                reason: e.to_string(),
            }),
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    Ok(parse_optional(lookup, name)?.unwrap_or(default))
}
