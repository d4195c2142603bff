//! Write-back cache for weekly and monthly goal counters.
//!
//! Listeners mutate counters synchronously on every game message. Each mutation marks the user
//! dirty, and the scheduled flush writes only dirty entries back to the store. A key stays dirty
//! until the store acknowledged a write of the exact value currently cached, so a failed or raced
//! write is retried on the next flush.
//!
//! Flushes and period resets serialize on the cache's write gate. A reset holds it while it clears
//! the cache and deletes the period's rows, so no flush write can land between the two.

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use parking_lot::RwLock;
use sea_orm::DbErr;
use tokio::sync::{Mutex, MutexGuard};

use crate::model::goal::{GoalEntry, GoalPeriod};

/// Durable side of the goal cache.
#[async_trait]
pub trait GoalStore: Send + Sync {
    /// Inserts or updates the row for `(entry.user_id, period)`.
    async fn upsert_goal(&self, period: GoalPeriod, entry: &GoalEntry) -> Result<(), DbErr>;
}

/// Outcome of a single flush.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlushReport {
    /// Entries written and acknowledged.
    pub written: usize,
    /// Keys whose write failed; they remain dirty.
    pub failed: Vec<u64>,
}

impl FlushReport {
    pub fn is_noop(&self) -> bool {
        self.written == 0 && self.failed.is_empty()
    }
}

#[derive(Default)]
struct GoalState {
    entries: HashMap<u64, GoalEntry>,
    dirty: HashSet<u64>,
    /// Bumped on every `clear` so an in-flight flush can tell its snapshot went stale.
    epoch: u64,
}

pub struct GoalCache {
    period: GoalPeriod,
    state: RwLock<GoalState>,
    writes: Mutex<()>,
}

impl GoalCache {
    pub fn new(period: GoalPeriod) -> Self {
        Self {
            period,
            state: RwLock::new(GoalState::default()),
            writes: Mutex::new(()),
        }
    }

    /// Waits for any running flush to finish and blocks new ones until the guard is dropped.
    pub async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.writes.lock().await
    }

    /// Current reset generation. Read it before querying the store and pass it to `reload`.
    pub fn epoch(&self) -> u64 {
        self.state.read().epoch
    }

    pub fn period(&self) -> GoalPeriod {
        self.period
    }

    /// Returns the cached entry, or a zeroed default for an unseen user.
    pub fn get(&self, user_id: u64) -> GoalEntry {
        self.peek(user_id)
            .unwrap_or_else(|| GoalEntry::new(user_id, format!("User {}", user_id)))
    }

    pub fn peek(&self, user_id: u64) -> Option<GoalEntry> {
        self.state.read().entries.get(&user_id).cloned()
    }

    pub fn contains(&self, user_id: u64) -> bool {
        self.state.read().entries.contains_key(&user_id)
    }

    /// Replaces the whole entry for `entry.user_id` and marks it dirty.
    pub fn upsert(&self, entry: GoalEntry) {
        let mut state = self.state.write();
        state.dirty.insert(entry.user_id);
        state.entries.insert(entry.user_id, entry);
    }

    /// Creates a zeroed entry if the user has none yet.
    ///
    /// # Returns
    /// - `true` if an entry was created
    pub fn ensure(&self, user_id: u64, user_name: &str, channel_id: Option<u64>) -> bool {
        let mut state = self.state.write();
        if state.entries.contains_key(&user_id) {
            return false;
        }
        let mut entry = GoalEntry::new(user_id, user_name);
        entry.channel_id = channel_id;
        state.entries.insert(user_id, entry);
        state.dirty.insert(user_id);
        true
    }

    pub fn record_pokemon_caught(&self, user_id: u64, user_name: &str, count: u64) -> GoalEntry {
        self.mutate(user_id, user_name, |e| {
            e.pokemon_caught = e.pokemon_caught.saturating_add(count)
        })
    }

    pub fn record_fish_caught(&self, user_id: u64, user_name: &str, count: u64) -> GoalEntry {
        self.mutate(user_id, user_name, |e| {
            e.fish_caught = e.fish_caught.saturating_add(count)
        })
    }

    pub fn record_battle_won(&self, user_id: u64, user_name: &str, count: u64) -> GoalEntry {
        self.mutate(user_id, user_name, |e| {
            e.battles_won = e.battles_won.saturating_add(count)
        })
    }

    /// Raises counters to totals reported by the game's stats embed.
    ///
    /// Each counter becomes the larger of the cached and observed value so counters never move
    /// backwards within a period. The key is marked dirty only when something changed.
    ///
    /// # Returns
    /// - `true` if any counter increased
    pub fn raise_counts(&self, user_id: u64, user_name: &str, pokemon: u64, fish: u64) -> bool {
        let mut state = self.state.write();
        let entry = state
            .entries
            .entry(user_id)
            .or_insert_with(|| GoalEntry::new(user_id, user_name));

        let before = (entry.pokemon_caught, entry.fish_caught);
        entry.pokemon_caught = entry.pokemon_caught.max(pokemon);
        entry.fish_caught = entry.fish_caught.max(fish);
        let changed = before != (entry.pokemon_caught, entry.fish_caught);

        if changed {
            state.dirty.insert(user_id);
        }
        changed
    }

    /// Sets the one-time requirement marker.
    ///
    /// # Returns
    /// - `true` only on the transition from unset to set
    pub fn mark_requirement_met(&self, user_id: u64) -> bool {
        let mut state = self.state.write();
        let Some(entry) = state.entries.get_mut(&user_id) else {
            return false;
        };
        if entry.requirement_met {
            return false;
        }
        entry.requirement_met = true;
        state.dirty.insert(user_id);
        true
    }

    /// Checks the requirement and sets the marker when it is reached for the first time.
    ///
    /// # Arguments
    /// - `user_id` - Tracked user
    /// - `requirement` - Catches needed this period
    /// - `top_line` - Catch total printed on a stats embed, if one triggered the check
    ///
    /// # Returns
    /// - `true` exactly once per user per period, when the notification should be sent
    pub fn check_requirement(&self, user_id: u64, requirement: u64, top_line: Option<u64>) -> bool {
        let reached = self
            .state
            .read()
            .entries
            .get(&user_id)
            .is_some_and(|e| !e.requirement_met && e.reaches(requirement, top_line));

        reached && self.mark_requirement_met(user_id)
    }

    /// Drops every entry and dirty mark. Used by the period reset.
    pub fn clear(&self) {
        let mut state = self.state.write();
        state.entries.clear();
        state.dirty.clear();
        state.epoch += 1;
    }

    /// Replaces clean entries with freshly loaded store rows.
    ///
    /// Dirty entries keep their in-memory value; the store has not seen it yet. Rows queried
    /// before a `clear` belong to the previous period and are discarded.
    ///
    /// # Returns
    /// - `true` if the rows were applied
    pub fn reload(&self, rows: Vec<GoalEntry>, epoch: u64) -> bool {
        let mut state = self.state.write();
        if state.epoch != epoch {
            tracing::debug!(
                "{} goal cache was reset while loading, discarding {} rows",
                self.period,
                rows.len()
            );
            return false;
        }

        let mut fresh: HashMap<u64, GoalEntry> =
            rows.into_iter().map(|e| (e.user_id, e)).collect();

        for user_id in state.dirty.iter() {
            if let Some(entry) = state.entries.get(user_id) {
                fresh.insert(*user_id, entry.clone());
            }
        }

        state.entries = fresh;
        true
    }

    pub fn find_by_name(&self, name: &str) -> Option<GoalEntry> {
        let name = name.trim();
        self.state
            .read()
            .entries
            .values()
            .find(|e| e.user_name.eq_ignore_ascii_case(name))
            .cloned()
    }

    /// All entries ordered by total catches, highest first.
    pub fn all(&self) -> Vec<GoalEntry> {
        let mut entries: Vec<GoalEntry> = self.state.read().entries.values().cloned().collect();
        entries.sort_by(|a, b| {
            b.total_catches()
                .cmp(&a.total_catches())
                .then_with(|| a.user_id.cmp(&b.user_id))
        });
        entries
    }

    pub fn is_dirty(&self, user_id: u64) -> bool {
        self.state.read().dirty.contains(&user_id)
    }

    pub fn dirty_len(&self) -> usize {
        self.state.read().dirty.len()
    }

    pub fn len(&self) -> usize {
        self.state.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entries.is_empty()
    }

    /// Writes every dirty entry to `store`.
    ///
    /// Returns without touching the store when nothing is dirty. Each key is written
    /// independently: a failed write is logged, leaves the key dirty and does not stop the rest
    /// of the batch. A successful write clears the mark only if the cached value still equals
    /// what was written. The write gate is held for the whole batch.
    pub async fn flush<S>(&self, store: &S) -> FlushReport
    where
        S: GoalStore + ?Sized,
    {
        let _writes = self.writes.lock().await;
        let (snapshot, epoch) = self.snapshot_dirty();
        let mut report = FlushReport::default();

        if snapshot.is_empty() {
            return report;
        }

        for entry in snapshot {
            if self.state.read().epoch != epoch {
                tracing::debug!(
                    "{} goal cache was reset during flush, dropping remaining writes",
                    self.period
                );
                break;
            }

            match store.upsert_goal(self.period, &entry).await {
                Ok(()) => {
                    self.acknowledge(&entry, epoch);
                    report.written += 1;
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to flush {} goal for user {}: {}",
                        self.period,
                        entry.user_id,
                        e
                    );
                    report.failed.push(entry.user_id);
                }
            }
        }

        if !report.is_noop() {
            tracing::debug!(
                "Flushed {} goal cache: {} written, {} failed",
                self.period,
                report.written,
                report.failed.len()
            );
        }

        report
    }

    fn snapshot_dirty(&self) -> (Vec<GoalEntry>, u64) {
        let state = self.state.read();
        let mut snapshot: Vec<GoalEntry> = state
            .dirty
            .iter()
            .filter_map(|id| state.entries.get(id).cloned())
            .collect();
        snapshot.sort_by_key(|e| e.user_id);
        (snapshot, state.epoch)
    }

    fn acknowledge(&self, written: &GoalEntry, epoch: u64) {
        let mut state = self.state.write();
        if state.epoch != epoch {
            return;
        }
        if state.entries.get(&written.user_id) == Some(written) {
            state.dirty.remove(&written.user_id);
        }
    }

    fn mutate<F>(&self, user_id: u64, user_name: &str, apply: F) -> GoalEntry
    where
        F: FnOnce(&mut GoalEntry),
    {
        let mut state = self.state.write();
        let entry = state
            .entries
            .entry(user_id)
            .or_insert_with(|| GoalEntry::new(user_id, user_name));
        apply(entry);
        let updated = entry.clone();
        state.dirty.insert(user_id);
        updated
    }
}
