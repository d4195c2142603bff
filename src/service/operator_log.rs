//! Reports failures to the operator log channel.

use serenity::{
    all::{ChannelId, CreateMessage},
    http::Http,
};

use crate::{config::Config, error::AppError};

/// Discord rejects messages above 2000 characters.
const MAX_REPORT_LEN: usize = 1900;

/// Builds the text posted for a failure in `source`.
pub fn format_report(source: &str, error: &AppError) -> String {
    let mut text = format!("⚠️ **{}** failed: {}", source, error);
    if text.len() > MAX_REPORT_LEN {
        let mut cut = MAX_REPORT_LEN;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
        text.push('…');
    }
    text
}

/// Logs `error` and, when a log channel is configured, posts it there.
///
/// Failing to post is only logged.
pub async fn report(http: &Http, config: &Config, source: &str, error: &AppError) {
    tracing::error!("{} failed: {}", source, error);

    let Some(channel_id) = config.log_channel_id else {
        return;
    };

    let message = CreateMessage::new().content(format_report(source, error));
    if let Err(e) = ChannelId::new(channel_id).send_message(http, message).await {
        tracing::warn!("Failed to post error report to log channel {}: {}", channel_id, e);
    }
}
