//! Application state shared by the event handler, the commands and the scheduled jobs.
//!
//! Every field is cheap to clone: the database handle is a pool and the rest sits behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{cache::Caches, config::Config, service::timer_notification::ReadyTimerService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
    pub caches: Arc<Caches>,
    /// Pending ready-timer notifications.
    pub timers: ReadyTimerService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
            caches: Arc::new(Caches::default()),
            timers: ReadyTimerService::default(),
        }
    }
}
