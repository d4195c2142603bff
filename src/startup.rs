use crate::{config::Config, error::AppError, state::AppState};

/// Connects to the database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the shared state and fills the caches from the database.
///
/// Cache loading never fails startup; a cache that cannot be loaded starts empty.
pub async fn build_state(config: Config) -> Result<AppState, AppError> {
    let db = connect_to_database(&config).await?;
    let state = AppState::new(db, config);

    state.caches.load_all(&state.db).await;

    Ok(state)
}
