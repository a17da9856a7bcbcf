use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

use crate::{config::Config, error::AppError};

/// Log timestamp format, e.g. `04/14/2023 18:03:27`.
const LOG_TIME_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Initializes the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG` and defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(ChronoLocal::new(LOG_TIME_FORMAT.to_string()))
        .init();
}

/// Connects to the SQLite database and runs pending migrations.
///
/// Establishes a connection pool to the database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the
/// database schema is up-to-date. This function must complete successfully before the
/// bot can access the database.
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

    tracing::info!("Database ready");

    Ok(db)
}
