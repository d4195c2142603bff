//! Ready-timer preferences and their button state machines.

use std::time::Duration;

use crate::util::parse::id_from_db;

/// Game action whose cooldown the bot can announce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Pokemon,
    Fish,
    Battle,
    /// World boss fight start; only scheduled, never toggled through `/timers`.
    WorldBoss,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Pokemon,
        TimerKind::Fish,
        TimerKind::Battle,
        TimerKind::WorldBoss,
    ];

    /// Kinds shown as buttons in the timer settings view.
    pub const CONFIGURABLE: [TimerKind; 3] = [TimerKind::Pokemon, TimerKind::Fish, TimerKind::Battle];

    /// Cooldown of the game command after it was used.
    pub fn cooldown(&self) -> Duration {
        match self {
            Self::Pokemon => Duration::from_secs(11),
            Self::Fish => Duration::from_secs(25),
            Self::Battle => Duration::from_secs(60),
            Self::WorldBoss => Duration::ZERO,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pokemon => "pokemon",
            Self::Fish => "fish",
            Self::Battle => "battle",
            Self::WorldBoss => "world_boss",
        }
    }

    pub fn from_id(s: &str) -> Option<Self> {
        match s {
            "pokemon" => Some(Self::Pokemon),
            "fish" => Some(Self::Fish),
            "battle" => Some(Self::Battle),
            "world_boss" => Some(Self::WorldBoss),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pokemon => "Pokémon",
            Self::Fish => "Fish",
            Self::Battle => "Battle",
            Self::WorldBoss => "World Boss",
        }
    }

    /// Text sent when the cooldown is over.
    pub fn ready_text(&self) -> &'static str {
        match self {
            Self::Pokemon => "your Pokémon command is ready!",
            Self::Fish => "your fishing rod is ready!",
            Self::Battle => "your battle command is ready!",
            Self::WorldBoss => "you can now join the World Boss Battle!",
        }
    }
}

/// How a user wants to be told that a timer is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerMode {
    #[default]
    Off,
    /// Mention the user.
    On,
    /// Bold name without a mention.
    OnNoPings,
    /// React to the spawn message instead of sending one. Pokémon only.
    React,
}

impl TimerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::OnNoPings => "on_no_pings",
            Self::React => "react",
        }
    }

    /// Reads a stored setting. Unknown values are treated as off.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "on" => Self::On,
            "on_no_pings" | "on w/o pings" | "on_w/o_pings" => Self::OnNoPings,
            "react" => Self::React,
            _ => Self::Off,
        }
    }

    /// Next state when the user presses the button for `kind`.
    ///
    /// Pokémon cycles through four states, fish and battle through three.
    pub fn next_for(self, kind: TimerKind) -> Self {
        match (kind, self) {
            (_, Self::Off) => Self::On,
            (_, Self::On) => Self::OnNoPings,
            (TimerKind::Pokemon, Self::OnNoPings) => Self::React,
            (_, Self::OnNoPings) => Self::Off,
            (_, Self::React) => Self::Off,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::OnNoPings => "On (no pings)",
            Self::React => "React",
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSettings {
    pub user_id: u64,
    pub user_name: String,
    pub pokemon: TimerMode,
    pub fish: TimerMode,
    pub battle: TimerMode,
}

impl TimerSettings {
    pub fn new(user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
            pokemon: TimerMode::Off,
            fish: TimerMode::Off,
            battle: TimerMode::Off,
        }
    }

    pub fn mode(&self, kind: TimerKind) -> TimerMode {
        match kind {
            TimerKind::Pokemon => self.pokemon,
            TimerKind::Fish => self.fish,
            TimerKind::Battle => self.battle,
            TimerKind::WorldBoss => TimerMode::Off,
        }
    }

    pub fn set_mode(&mut self, kind: TimerKind, mode: TimerMode) {
        match kind {
            TimerKind::Pokemon => self.pokemon = mode,
            TimerKind::Fish => self.fish = mode,
            TimerKind::Battle => self.battle = mode,
            TimerKind::WorldBoss => {}
        }
    }

    pub fn from_entity(entity: entity::timer_setting::Model) -> Self {
        Self {
            user_id: id_from_db(entity.user_id),
            user_name: entity.user_name,
            pokemon: TimerMode::parse(&entity.pokemon_setting),
            fish: TimerMode::parse(&entity.fish_setting),
            battle: TimerMode::parse(&entity.battle_setting),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pokemon_cycles_through_four_states() {
        let mut mode = TimerMode::Off;
        let mut seen = vec![mode];
        for _ in 0..4 {
            mode = mode.next_for(TimerKind::Pokemon);
            seen.push(mode);
        }

        assert_eq!(
            seen,
            vec![
                TimerMode::Off,
                TimerMode::On,
                TimerMode::OnNoPings,
                TimerMode::React,
                TimerMode::Off
            ]
        );
    }

    #[test]
    fn fish_and_battle_cycle_through_three_states() {
        for kind in [TimerKind::Fish, TimerKind::Battle] {
            let mode = TimerMode::Off.next_for(kind).next_for(kind).next_for(kind);
            assert_eq!(mode, TimerMode::Off);
        }
    }

    #[test]
    fn react_on_non_pokemon_timer_falls_back_to_off() {
        assert_eq!(TimerMode::React.next_for(TimerKind::Fish), TimerMode::Off);
    }

    #[test]
    fn accepts_legacy_no_ping_value() {
        assert_eq!(TimerMode::parse("on w/o pings"), TimerMode::OnNoPings);
        assert_eq!(TimerMode::parse("garbage"), TimerMode::Off);
    }
}
