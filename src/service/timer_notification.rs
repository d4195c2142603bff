//! Ready-timer notifications.
//!
//! Every game command starts a cooldown. When the user opted in, the bot tells them once the
//! cooldown is over. Timers are keyed by `(user, kind)` and debounced: using the command again
//! before the previous timer fired restarts it, so only the last use produces a notification.

use std::{
    collections::HashMap,
    future::Future,
    hash::Hash,
    sync::Arc,
    time::Duration,
};

use parking_lot::Mutex;
use serenity::{
    all::{ChannelId, CreateMessage, MessageId, ReactionType},
    http::Http,
};
use tokio::task::JoinHandle;

use crate::model::timer::{TimerKind, TimerMode};

/// Reaction added to the spawn message in [`TimerMode::React`].
const READY_REACTION: char = '✅';

/// Lead time of the world boss reminder before the fight starts.
pub const WORLD_BOSS_LEAD_SECS: i64 = 5;

struct DebouncerState<K> {
    next_generation: u64,
    tasks: HashMap<K, (u64, JoinHandle<()>)>,
}

/// Per-key cancellable delayed tasks where the last schedule wins.
pub struct Debouncer<K> {
    inner: Arc<Mutex<DebouncerState<K>>>,
}

impl<K> Clone for Debouncer<K> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<K> Default for Debouncer<K> {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(DebouncerState {
                next_generation: 0,
                tasks: HashMap::new(),
            })),
        }
    }
}

impl<K> Debouncer<K>
where
    K: Hash + Eq + Clone + Send + 'static,
{
    /// Runs `task` after `delay`, replacing any task still pending for `key`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, key: K, delay: Duration, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut state = self.inner.lock();
        state.next_generation += 1;
        let generation = state.next_generation;

        // The spawned task locks `inner` before removing its entry, so it cannot observe the
        // map before the insert below.
        let inner = Arc::clone(&self.inner);
        let task_key = key.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                let mut state = inner.lock();
                if state
                    .tasks
                    .get(&task_key)
                    .is_some_and(|(g, _)| *g == generation)
                {
                    state.tasks.remove(&task_key);
                }
            }
            task.await;
        });

        if let Some((_, previous)) = state.tasks.insert(key, (generation, handle)) {
            previous.abort();
        }
    }

    /// Aborts the pending task for `key`.
    ///
    /// # Returns
    /// - `true` if a task was pending
    pub fn cancel(&self, key: &K) -> bool {
        match self.inner.lock().tasks.remove(key) {
            Some((_, handle)) => {
                handle.abort();
                true
            }
            None => false,
        }
    }

    pub fn pending(&self, key: &K) -> bool {
        self.inner.lock().tasks.contains_key(key)
    }

    pub fn pending_len(&self) -> usize {
        self.inner.lock().tasks.len()
    }
}

/// One cooldown to announce.
#[derive(Debug, Clone)]
pub struct ReadyNotice {
    pub user_id: u64,
    pub user_name: String,
    pub kind: TimerKind,
    pub mode: TimerMode,
    /// Channel the game command was used in.
    pub channel_id: u64,
    /// Game message to react to in [`TimerMode::React`].
    pub message_id: u64,
    /// Extra text appended to the notification, e.g. the world boss name.
    pub detail: Option<String>,
}

/// Text of a ready notification, or `None` when the mode sends no message.
pub fn ready_message(notice: &ReadyNotice) -> Option<String> {
    let who = match notice.mode {
        TimerMode::On => format!("<@{}>", notice.user_id),
        TimerMode::OnNoPings => format!("**{}**", notice.user_name),
        TimerMode::React | TimerMode::Off => return None,
    };

    let text = match &notice.detail {
        Some(detail) => format!("{}, {} {}", who, notice.kind.ready_text(), detail),
        None => format!("{}, {}", who, notice.kind.ready_text()),
    };

    Some(text)
}

/// Schedules and delivers ready notifications.
#[derive(Clone, Default)]
pub struct ReadyTimerService {
    timers: Debouncer<(u64, TimerKind)>,
}

impl ReadyTimerService {
    /// Schedules `notice` after the cooldown of its kind.
    pub fn schedule(&self, http: Arc<Http>, notice: ReadyNotice) {
        let delay = notice.kind.cooldown();
        self.schedule_after(http, notice, delay);
    }

    /// Schedules the world boss reminder shortly before the fight at `fight_at` (unix seconds).
    ///
    /// # Returns
    /// - `false` if the reminder time has already passed
    pub fn schedule_world_boss(
        &self,
        http: Arc<Http>,
        notice: ReadyNotice,
        fight_at: i64,
        now: i64,
    ) -> bool {
        let Some(delay) = world_boss_delay(fight_at, now) else {
            return false;
        };
        self.schedule_after(http, notice, delay);
        true
    }

    pub fn cancel(&self, user_id: u64, kind: TimerKind) -> bool {
        self.timers.cancel(&(user_id, kind))
    }

    /// Cancels every pending notification of a user.
    ///
    /// # Returns
    /// - Number of notifications cancelled
    pub fn cancel_all(&self, user_id: u64) -> usize {
        TimerKind::ALL
            .into_iter()
            .filter(|kind| self.cancel(user_id, *kind))
            .count()
    }

    pub fn pending(&self, user_id: u64, kind: TimerKind) -> bool {
        self.timers.pending(&(user_id, kind))
    }

    fn schedule_after(&self, http: Arc<Http>, notice: ReadyNotice, delay: Duration) {
        if !notice.mode.is_enabled() {
            return;
        }

        let key = (notice.user_id, notice.kind);
        tracing::debug!(
            "Scheduling {} timer for {} in {}s",
            notice.kind.as_str(),
            notice.user_name,
            delay.as_secs()
        );

        self.timers.schedule(key, delay, async move {
            deliver(&http, &notice).await;
        });
    }
}

/// Delay until the world boss reminder, `None` once that moment has passed.
pub fn world_boss_delay(fight_at: i64, now: i64) -> Option<Duration> {
    let remaining = fight_at - WORLD_BOSS_LEAD_SECS - now;
    (remaining > 0).then(|| Duration::from_secs(remaining as u64))
}

async fn deliver(http: &Http, notice: &ReadyNotice) {
    let channel = ChannelId::new(notice.channel_id);

    let result = match notice.mode {
        TimerMode::React => channel
            .create_reaction(
                http,
                MessageId::new(notice.message_id),
                ReactionType::Unicode(READY_REACTION.to_string()),
            )
            .await
            .map(|_| ()),
        _ => match ready_message(notice) {
            Some(content) => channel
                .send_message(http, CreateMessage::new().content(content))
                .await
                .map(|_| ()),
            None => Ok(()),
        },
    };

    if let Err(e) = result {
        tracing::error!(
            "Failed to deliver {} timer for user {}: {}",
            notice.kind.as_str(),
            notice.user_id,
            e
        );
    }
}
