use std::collections::HashMap;

use parking_lot::RwLock;

use crate::model::faction::{Faction, FactionMember};

/// Registered clan members keyed by user id.
#[derive(Default)]
pub struct FactionMemberCache {
    members: RwLock<HashMap<u64, FactionMember>>,
}

impl FactionMemberCache {
    pub fn get(&self, user_id: u64) -> Option<FactionMember> {
        self.members.read().get(&user_id).cloned()
    }

    /// Finds a member by Discord name or in-game name.
    pub fn find_by_name(&self, name: &str) -> Option<FactionMember> {
        self.members
            .read()
            .values()
            .find(|m| m.answers_to(name))
            .cloned()
    }

    pub fn upsert(&self, member: FactionMember) {
        self.members.write().insert(member.user_id, member);
    }

    pub fn remove(&self, user_id: u64) -> Option<FactionMember> {
        self.members.write().remove(&user_id)
    }

    /// Updates the cached faction.
    ///
    /// # Returns
    /// - `true` if the member exists and the faction changed
    pub fn set_faction(&self, user_id: u64, faction: Faction) -> bool {
        let mut members = self.members.write();
        match members.get_mut(&user_id) {
            Some(member) if member.faction != Some(faction) => {
                member.faction = Some(faction);
                true
            }
            _ => false,
        }
    }

    pub fn members_of(&self, faction: Faction) -> Vec<FactionMember> {
        let mut members: Vec<FactionMember> = self
            .members
            .read()
            .values()
            .filter(|m| m.faction == Some(faction))
            .cloned()
            .collect();
        members.sort_by_key(|m| m.user_id);
        members
    }

    pub fn replace_all(&self, rows: Vec<FactionMember>) {
        *self.members.write() = rows.into_iter().map(|m| (m.user_id, m)).collect();
    }

    pub fn len(&self) -> usize {
        self.members.read().len()
    }
}

/// Today's target ball for each faction.
#[derive(Default)]
pub struct FactionBallCache {
    balls: RwLock<HashMap<Faction, String>>,
}

impl FactionBallCache {
    pub fn get(&self, faction: Faction) -> Option<String> {
        self.balls.read().get(&faction).cloned()
    }

    /// Records the ball unless one is already known for today.
    ///
    /// # Returns
    /// - `true` if this call stored the ball
    pub fn set_if_absent(&self, faction: Faction, ball: &str) -> bool {
        let mut balls = self.balls.write();
        if balls.contains_key(&faction) {
            return false;
        }
        balls.insert(faction, ball.to_string());
        true
    }

    pub fn clear(&self) {
        self.balls.write().clear();
    }

    pub fn replace_all(&self, rows: Vec<(Faction, String)>) {
        *self.balls.write() = rows.into_iter().collect();
    }

    pub fn len(&self) -> usize {
        self.balls.read().len()
    }
}
