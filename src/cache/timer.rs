use std::collections::HashMap;

use parking_lot::RwLock;

use crate::model::timer::{TimerKind, TimerMode, TimerSettings};

/// Ready-timer preferences keyed by user id.
#[derive(Default)]
pub struct TimerCache {
    settings: RwLock<HashMap<u64, TimerSettings>>,
}

impl TimerCache {
    pub fn get(&self, user_id: u64) -> Option<TimerSettings> {
        self.settings.read().get(&user_id).cloned()
    }

    /// Mode for one kind; users without a row have every timer off.
    pub fn mode(&self, user_id: u64, kind: TimerKind) -> TimerMode {
        self.settings
            .read()
            .get(&user_id)
            .map(|s| s.mode(kind))
            .unwrap_or_default()
    }

    pub fn set(&self, settings: TimerSettings) {
        self.settings.write().insert(settings.user_id, settings);
    }

    pub fn remove(&self, user_id: u64) {
        self.settings.write().remove(&user_id);
    }

    /// Looks up a user id from the trainer name printed by the game bot.
    pub fn find_id_by_name(&self, name: &str) -> Option<u64> {
        let name = name.trim();
        self.settings
            .read()
            .values()
            .find(|s| s.user_name.eq_ignore_ascii_case(name))
            .map(|s| s.user_id)
    }

    pub fn replace_all(&self, rows: Vec<TimerSettings>) {
        *self.settings.write() = rows.into_iter().map(|s| (s.user_id, s)).collect();
    }

    pub fn len(&self) -> usize {
        self.settings.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_user_has_timers_off() {
        let cache = TimerCache::default();

        assert_eq!(cache.mode(1, TimerKind::Pokemon), TimerMode::Off);
    }

    #[test]
    fn finds_user_by_trainer_name() {
        let cache = TimerCache::default();
        let mut settings = TimerSettings::new(7, "Misty");
        settings.fish = TimerMode::On;
        cache.set(settings);

        assert_eq!(cache.find_id_by_name("misty"), Some(7));
        assert_eq!(cache.mode(7, TimerKind::Fish), TimerMode::On);
    }
}
