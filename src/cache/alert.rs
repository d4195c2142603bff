use std::collections::HashMap;

use parking_lot::RwLock;

use crate::model::alert::AlertKind;

/// Alert opt-ins keyed by `(user_id, kind)`.
#[derive(Default)]
pub struct AlertCache {
    alerts: RwLock<HashMap<(u64, AlertKind), bool>>,
}

impl AlertCache {
    pub fn is_enabled(&self, user_id: u64, kind: AlertKind) -> bool {
        self.alerts
            .read()
            .get(&(user_id, kind))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&self, user_id: u64, kind: AlertKind, notify: bool) {
        self.alerts.write().insert((user_id, kind), notify);
    }

    /// Drops every alert of a user.
    pub fn remove_user(&self, user_id: u64) {
        self.alerts.write().retain(|(id, _), _| *id != user_id);
    }

    /// Users who turned `kind` on.
    pub fn subscribers(&self, kind: AlertKind) -> Vec<u64> {
        let mut ids: Vec<u64> = self
            .alerts
            .read()
            .iter()
            .filter(|((_, k), notify)| *k == kind && **notify)
            .map(|((user_id, _), _)| *user_id)
            .collect();
        ids.sort_unstable();
        ids
    }

    pub fn replace_all(&self, rows: Vec<(u64, AlertKind, bool)>) {
        *self.alerts.write() = rows
            .into_iter()
            .map(|(user_id, kind, notify)| ((user_id, kind), notify))
            .collect();
    }

    pub fn len(&self) -> usize {
        self.alerts.read().len()
    }
}
