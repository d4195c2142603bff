//! Delivery of due `/pong` reminders.

use serenity::{
    all::{ChannelId, CreateMessage, UserId},
    http::Http,
};

use crate::{
    data::user_reminder::UserReminderRepository,
    error::AppError,
    model::reminder::{NotifyType, Reminder},
    state::AppState,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub delivered: usize,
    pub failed: usize,
}

pub fn reminder_text(reminder: &Reminder) -> String {
    format!(
        "<@{}> ⏰ **Reminder:** {}",
        reminder.user_id, reminder.message
    )
}

/// Channel a `Channel` reminder is posted to: its own target, else the fallback channel.
pub fn channel_target(reminder: &Reminder, fallback: Option<u64>) -> Option<u64> {
    reminder.target_channel.or(fallback)
}

pub struct ReminderService<'a> {
    state: &'a AppState,
    http: &'a Http,
}

impl<'a> ReminderService<'a> {
    pub fn new(state: &'a AppState, http: &'a Http) -> Self {
        Self { state, http }
    }

    /// Sends every reminder due at `now`.
    ///
    /// Each reminder is handled on its own: a failed delivery is logged and does not block the
    /// rest. After the attempt, repeating reminders move to their next occurrence after `now`
    /// and one-off reminders are deleted.
    ///
    /// # Returns
    /// - `Ok(DeliveryReport)` - Counts of delivered and failed reminders
    /// - `Err(AppError::DbErr)` - The due reminders could not be loaded
    pub async fn deliver_due(&self, now: i64) -> Result<DeliveryReport, AppError> {
        let repo = UserReminderRepository::new(&self.state.db);
        let due = repo.get_due(now).await?;
        let mut report = DeliveryReport::default();

        for reminder in due {
            match self.deliver(&reminder).await {
                Ok(()) => report.delivered += 1,
                Err(e) => {
                    report.failed += 1;
                    tracing::error!(
                        "Failed to deliver reminder {} of user {}: {}",
                        reminder.reminder_id,
                        reminder.user_id,
                        e
                    );
                }
            }

            if let Err(e) = self.settle(&reminder, now).await {
                tracing::error!(
                    "Failed to settle reminder {} of user {}: {}",
                    reminder.reminder_id,
                    reminder.user_id,
                    e
                );
            }
        }

        if report.delivered + report.failed > 0 {
            tracing::info!(
                "Reminders: {} delivered, {} failed",
                report.delivered,
                report.failed
            );
        }

        Ok(report)
    }

    /// Reschedules or deletes a reminder after a delivery attempt.
    pub async fn settle(&self, reminder: &Reminder, now: i64) -> Result<(), AppError> {
        let repo = UserReminderRepository::new(&self.state.db);

        match reminder.next_occurrence(now) {
            Some(next) => {
                repo.reschedule(reminder.user_id, reminder.reminder_id, next)
                    .await?
            }
            None => {
                repo.delete(reminder.user_id, reminder.reminder_id).await?;
            }
        }

        Ok(())
    }

    async fn deliver(&self, reminder: &Reminder) -> Result<(), AppError> {
        let content = reminder_text(reminder);
        let fallback = self.state.config.fallback_channel_id;

        match reminder.notify_type {
            NotifyType::Dm => {
                let dm = UserId::new(reminder.user_id)
                    .direct_message(self.http, CreateMessage::new().content(content.clone()))
                    .await;

                match (dm, fallback) {
                    (Ok(_), _) => Ok(()),
                    (Err(e), Some(channel)) => {
                        tracing::warn!(
                            "DM to user {} failed, using fallback channel: {}",
                            reminder.user_id,
                            e
                        );
                        self.post(channel, content).await
                    }
                    (Err(e), None) => Err(e.into()),
                }
            }
            NotifyType::Channel => {
                let channel = channel_target(reminder, fallback).ok_or_else(|| {
                    AppError::NotFound(format!(
                        "No channel for reminder {} of user {}",
                        reminder.reminder_id, reminder.user_id
                    ))
                })?;
                self.post(channel, content).await
            }
        }
    }

    async fn post(&self, channel_id: u64, content: String) -> Result<(), AppError> {
        ChannelId::new(channel_id)
            .send_message(self.http, CreateMessage::new().content(content))
            .await?;
        Ok(())
    }
}
