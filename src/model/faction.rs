//! Clan members and the daily faction ball.

use std::{fmt, str::FromStr};

use crate::util::parse::id_from_db;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Faction {
    Aqua,
    Flare,
    Galactic,
    Magma,
    Plasma,
    Rocket,
    Skull,
    Yell,
}

impl Faction {
    pub const ALL: [Faction; 8] = [
        Faction::Aqua,
        Faction::Flare,
        Faction::Galactic,
        Faction::Magma,
        Faction::Plasma,
        Faction::Rocket,
        Faction::Skull,
        Faction::Yell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aqua => "aqua",
            Self::Flare => "flare",
            Self::Galactic => "galactic",
            Self::Magma => "magma",
            Self::Plasma => "plasma",
            Self::Rocket => "rocket",
            Self::Skull => "skull",
            Self::Yell => "yell",
        }
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Faction {
    type Err = ();

    /// Case-insensitive; the game prints `Team Rocket`, the database stores `rocket`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Faction::ALL
            .into_iter()
            .find(|f| f.as_str() == lowered)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactionMember {
    pub user_id: u64,
    pub user_name: String,
    pub game_name: Option<String>,
    pub clan_name: String,
    pub faction: Option<Faction>,
    pub channel_id: Option<u64>,
}

impl FactionMember {
    /// Whether `name` is this member's Discord name or in-game name, ignoring case.
    pub fn answers_to(&self, name: &str) -> bool {
        let name = name.trim();
        self.user_name.eq_ignore_ascii_case(name)
            || self
                .game_name
                .as_deref()
                .is_some_and(|g| g.eq_ignore_ascii_case(name))
    }

    pub fn from_entity(entity: entity::faction_member::Model) -> Self {
        Self {
            user_id: id_from_db(entity.user_id),
            user_name: entity.user_name,
            game_name: entity.game_name,
            clan_name: entity.clan_name,
            faction: entity.faction.and_then(|f| f.parse().ok()),
            channel_id: entity.channel_id.map(id_from_db),
        }
    }
}
