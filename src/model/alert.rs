//! Opt-in alerts, each a simple on/off toggle.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertKind {
    /// Ping when the daily faction ball for the member's faction is posted.
    FactionBall,
    /// Reminder shortly before a registered world boss fight starts.
    WorldBoss,
}

impl AlertKind {
    pub const ALL: [AlertKind; 2] = [AlertKind::FactionBall, AlertKind::WorldBoss];

    /// Value stored in the `alert_type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FactionBall => "faction_ball",
            Self::WorldBoss => "wb_battle",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "faction_ball" => Some(Self::FactionBall),
            "wb_battle" => Some(Self::WorldBoss),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FactionBall => "Faction Ball",
            Self::WorldBoss => "World Boss",
        }
    }
}
