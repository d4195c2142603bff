use std::{collections::HashSet, hash::Hash};

use parking_lot::Mutex;

/// Messages a listener already counted.
///
/// The game bot edits the same message several times; only the first matching edit counts.
/// Cleared by the hourly cache refresh so the set cannot grow without bound.
pub struct ProcessedMessages<K> {
    seen: Mutex<HashSet<K>>,
}

impl<K> Default for ProcessedMessages<K> {
    fn default() -> Self {
        Self {
            seen: Mutex::new(HashSet::new()),
        }
    }
}

impl<K: Hash + Eq> ProcessedMessages<K> {
    /// Records `key` and reports whether this is the first time it was seen.
    pub fn first_seen(&self, key: K) -> bool {
        self.seen.lock().insert(key)
    }

    pub fn clear(&self) {
        self.seen.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.seen.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_first_sighting_only() {
        let processed = ProcessedMessages::default();

        assert!(processed.first_seen((10u64, 1u32)));
        assert!(!processed.first_seen((10, 1)));
        assert!(processed.first_seen((10, 2)));

        processed.clear();
        assert!(processed.first_seen((10, 1)));
    }
}
