//! User reminders created with `/pong`.

use crate::util::parse::id_from_db;

#[derive(Debug, Clone, Copy, PartialEq, Eq, poise::ChoiceParameter)]
pub enum NotifyType {
    Channel,
    #[name = "DM"]
    Dm,
}

impl NotifyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Channel => "Channel",
            Self::Dm => "DM",
        }
    }

    pub fn parse(s: &str) -> Self {
        if s.eq_ignore_ascii_case("dm") {
            Self::Dm
        } else {
            Self::Channel
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub user_id: u64,
    /// Per-user number shown in `/pong list`.
    pub reminder_id: i32,
    pub user_name: String,
    pub message: String,
    /// Unix timestamp in seconds.
    pub remind_on: i64,
    pub notify_type: NotifyType,
    /// Seconds between repeats, `None` for one-off reminders.
    pub repeat_interval: Option<i64>,
    pub target_channel: Option<u64>,
}

impl Reminder {
    /// Next fire time after delivery at `now`.
    ///
    /// Repeating reminders skip over every missed occurrence so a bot that was offline for a
    /// while does not replay them one per tick. One-off reminders return `None`, as does a
    /// repeating reminder whose next fire time would not fit in an `i64`.
    pub fn next_occurrence(&self, now: i64) -> Option<i64> {
        let interval = self.repeat_interval.filter(|i| *i > 0)?;
        if self.remind_on > now {
            return Some(self.remind_on);
        }
        let missed = now.checked_sub(self.remind_on)? / interval + 1;
        missed
            .checked_mul(interval)
            .and_then(|offset| self.remind_on.checked_add(offset))
    }

    pub fn from_entity(entity: entity::user_reminder::Model) -> Self {
        Self {
            user_id: id_from_db(entity.user_id),
            reminder_id: entity.reminder_id,
            user_name: entity.user_name,
            message: entity.message,
            remind_on: entity.remind_on,
            notify_type: NotifyType::parse(&entity.notify_type),
            repeat_interval: entity.repeat_interval,
            target_channel: entity.target_channel.map(id_from_db),
        }
    }
}

/// Parameters for creating a reminder; the id is allocated by the repository.
#[derive(Debug, Clone)]
pub struct CreateReminderParam {
    pub user_id: u64,
    pub user_name: String,
    pub message: String,
    pub remind_on: i64,
    pub notify_type: NotifyType,
    pub repeat_interval: Option<i64>,
    pub target_channel: Option<u64>,
}

/// Partial update for `/pong edit`. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateReminderParam {
    pub message: Option<String>,
    pub remind_on: Option<i64>,
    pub notify_type: Option<NotifyType>,
    pub repeat_interval: Option<i64>,
    pub target_channel: Option<Option<u64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reminder(remind_on: i64, repeat_interval: Option<i64>) -> Reminder {
        Reminder {
            user_id: 1,
            reminder_id: 1,
            user_name: "ash".to_string(),
            message: "claim".to_string(),
            remind_on,
            notify_type: NotifyType::Channel,
            repeat_interval,
            target_channel: None,
        }
    }

    #[test]
    fn one_off_reminder_has_no_next_occurrence() {
        assert_eq!(reminder(100, None).next_occurrence(100), None);
    }

    #[test]
    fn repeating_reminder_advances_one_interval() {
        assert_eq!(reminder(100, Some(60)).next_occurrence(100), Some(160));
    }

    #[test]
    fn repeating_reminder_skips_missed_occurrences() {
        // Due at 100 every 60s, bot catches up at 350: 160, 220, 280, 340 were missed
        assert_eq!(reminder(100, Some(60)).next_occurrence(350), Some(400));
    }

    #[test]
    fn repeating_reminder_ends_when_next_time_overflows() {
        assert_eq!(reminder(100, Some(i64::MAX)).next_occurrence(100), None);
        assert_eq!(reminder(i64::MIN, Some(60)).next_occurrence(100), None);
    }
}
