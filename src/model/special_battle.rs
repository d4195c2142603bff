//! Cooldowns of limited-time NPC battles.

use crate::util::parse::id_from_db;

/// Seconds until an NPC can be challenged again after a fight started.
pub const REMATCH_COOLDOWN_SECS: i64 = 30 * 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialBattleTimer {
    pub user_id: u64,
    /// Lowercase NPC key such as `xmas_blue`.
    pub npc_name: String,
    pub user_name: String,
    /// Unix timestamp in seconds when the NPC becomes available.
    pub ends_on: i64,
    pub channel_id: u64,
}

impl SpecialBattleTimer {
    /// `xmas_blue` becomes `Xmas Blue`.
    pub fn display_npc_name(&self) -> String {
        self.npc_name
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }

    pub fn from_entity(entity: entity::special_battle_timer::Model) -> Self {
        Self {
            user_id: id_from_db(entity.user_id),
            npc_name: entity.npc_name,
            user_name: entity.user_name,
            ends_on: entity.ends_on,
            channel_id: id_from_db(entity.channel_id),
        }
    }
}
