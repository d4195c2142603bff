//! Clan wars trophy updates and the live leaderboard message.

use std::collections::HashSet;

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, MessageId},
    http::Http,
};

use crate::{
    data::trophy::{ClanWarsTrophyRepository, LeaderboardMessageRepository},
    error::AppError,
    model::trophy::{rank, ClanTrophy, TrophyChange, TrophyOp},
    state::AppState,
    util::parse::format_count,
};

/// Discord allows at most 25 fields per embed.
const LIVE_LEADERBOARD_LIMIT: usize = 25;
const LEADERBOARD_COLOR: u32 = 0xF1C40F;

/// Clan picked in a trophy command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClanRef {
    pub role_id: u64,
    pub name: String,
}

/// Builds the embed of the live leaderboard message.
pub fn leaderboard_embed(clans: Vec<ClanTrophy>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .title("🏆 Clan Wars Trophies Leaderboard 🏆")
        .color(LEADERBOARD_COLOR)
        .timestamp(serenity::all::Timestamp::now());

    if clans.is_empty() {
        return embed.description("No clan wars trophies data available.");
    }

    rank(clans)
        .into_iter()
        .take(LIVE_LEADERBOARD_LIMIT)
        .enumerate()
        .fold(embed, |embed, (i, clan)| {
            embed.field(
                format!("{}. {}", i + 1, clan.clan_name),
                format!("> - 🏆 **{}**", format_count(clan.amount)),
                false,
            )
        })
}

pub struct TrophyService<'a> {
    state: &'a AppState,
    http: &'a Http,
}

impl<'a> TrophyService<'a> {
    pub fn new(state: &'a AppState, http: &'a Http) -> Self {
        Self { state, http }
    }

    /// Adds or removes trophies for each clan.
    ///
    /// A clan named twice is changed once. Removal stops at zero.
    ///
    /// # Returns
    /// - `Ok(Vec<TrophyChange>)` - Old and new total per clan, in argument order
    /// - `Err(AppError::BadRequest)` - `amount` is zero or no clan was given
    /// - `Err(AppError::DbErr)` - Reading or writing a total failed
    pub async fn apply(
        &self,
        op: TrophyOp,
        amount: u64,
        clans: &[ClanRef],
    ) -> Result<Vec<TrophyChange>, AppError> {
        if amount == 0 {
            return Err(AppError::BadRequest(
                "Amount must be greater than zero.".to_string(),
            ));
        }
        if clans.is_empty() {
            return Err(AppError::BadRequest("Pick at least one clan.".to_string()));
        }

        let repo = ClanWarsTrophyRepository::new(&self.state.db);
        let mut seen = HashSet::new();
        let mut changes = Vec::with_capacity(clans.len());

        for clan in clans.iter().filter(|c| seen.insert(c.role_id)) {
            let old = repo.get(clan.role_id).await?.map(|t| t.amount).unwrap_or(0);
            let new = op.apply(old, amount);

            repo.upsert(&ClanTrophy {
                role_id: clan.role_id,
                clan_name: clan.name.clone(),
                amount: new,
            })
            .await?;

            changes.push(TrophyChange {
                clan_name: clan.name.clone(),
                old,
                new,
            });
        }

        tracing::info!("Trophy {:?} of {} applied to {} clan(s)", op, amount, changes.len());

        Ok(changes)
    }

    /// Deletes every clan total and forgets the leaderboard message.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of clan totals deleted; zero when already reset
    pub async fn reset(&self) -> Result<u64, AppError> {
        let deleted = ClanWarsTrophyRepository::new(&self.state.db)
            .delete_all()
            .await?;

        if let Some(channel_id) = self.state.config.leaderboard_channel_id {
            LeaderboardMessageRepository::new(&self.state.db)
                .delete(channel_id)
                .await?;
        }

        tracing::info!("Clan wars trophies reset, {} clans removed", deleted);

        Ok(deleted)
    }

    /// Brings the live leaderboard message up to date.
    ///
    /// Edits the stored message. When none is stored or the stored one can no longer be
    /// edited, posts a new message and remembers its id. Does nothing without a configured
    /// leaderboard channel.
    pub async fn refresh_leaderboard(&self) -> Result<(), AppError> {
        let Some(channel_id) = self.state.config.leaderboard_channel_id else {
            return Ok(());
        };

        let clans = ClanWarsTrophyRepository::new(&self.state.db)
            .get_all()
            .await?;
        let messages = LeaderboardMessageRepository::new(&self.state.db);
        let channel = ChannelId::new(channel_id);

        if let Some(message_id) = messages.get(channel_id).await? {
            let edit = EditMessage::new().embed(leaderboard_embed(clans.clone()));
            match channel
                .edit_message(self.http, MessageId::new(message_id), edit)
                .await
            {
                Ok(_) => return Ok(()),
                Err(e) => tracing::warn!(
                    "Leaderboard message {} could not be edited, posting a new one: {}",
                    message_id,
                    e
                ),
            }
        }

        let message = channel
            .send_message(
                self.http,
                CreateMessage::new().embed(leaderboard_embed(clans)),
            )
            .await?;
        messages.upsert(channel_id, message.id.get()).await?;

        Ok(())
    }
}
