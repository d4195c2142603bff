//! Clan wars trophy totals and the leaderboard built from them.

use crate::util::parse::{count_from_db, id_from_db};

/// Clans shown per leaderboard page.
pub const LEADERBOARD_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClanTrophy {
    /// Role that represents the clan.
    pub role_id: u64,
    pub clan_name: String,
    pub amount: u64,
}

impl ClanTrophy {
    pub fn from_entity(entity: entity::clan_wars_trophy::Model) -> Self {
        Self {
            role_id: id_from_db(entity.role_id),
            clan_name: entity.clan_name,
            amount: count_from_db(entity.amount),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrophyOp {
    Add,
    Remove,
}

impl TrophyOp {
    /// New total after applying `amount`. Removal never goes below zero.
    pub fn apply(&self, current: u64, amount: u64) -> u64 {
        match self {
            Self::Add => current.saturating_add(amount),
            Self::Remove => current.saturating_sub(amount),
        }
    }
}

/// One line of the summary sent after `/trophies add` or `/trophies remove`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrophyChange {
    pub clan_name: String,
    pub old: u64,
    pub new: u64,
}

impl TrophyChange {
    pub fn summary_line(&self) -> String {
        format!("{}: 🏆 **{}** ➔ 🏆 **{}**", self.clan_name, self.old, self.new)
    }
}

/// Sorts clans by trophies descending, then by name so ties render in a stable order.
pub fn rank(mut clans: Vec<ClanTrophy>) -> Vec<ClanTrophy> {
    clans.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.clan_name.to_lowercase().cmp(&b.clan_name.to_lowercase()))
    });
    clans
}

/// Renders ranked clans into leaderboard pages of [`LEADERBOARD_PAGE_SIZE`] lines each.
pub fn leaderboard_pages(clans: Vec<ClanTrophy>) -> Vec<String> {
    let ranked = rank(clans);
    if ranked.is_empty() {
        return vec!["No clans have trophies yet.".to_string()];
    }

    ranked
        .chunks(LEADERBOARD_PAGE_SIZE)
        .enumerate()
        .map(|(page, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(i, clan)| {
                    let position = page * LEADERBOARD_PAGE_SIZE + i + 1;
                    format!("**{}.** <@&{}> 🏆 {}", position, clan.role_id, clan.amount)
                })
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect()
}
