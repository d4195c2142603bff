mod bot;
mod cache;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    bot::start::{init_bot, start_bot},
    config::Config,
    error::AppError,
    scheduler::start_scheduler,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("meow_companion=info,serenity=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let state = startup::build_state(config).await?;

    tracing::info!("Starting meow companion");

    let client = init_bot(state.clone()).await?;

    let scheduler_http = client.http.clone();
    tokio::spawn(async move {
        if let Err(e) = start_scheduler(state, scheduler_http).await {
            tracing::error!("Scheduler error: {}", e);
        }
    });

    start_bot(client).await
}
