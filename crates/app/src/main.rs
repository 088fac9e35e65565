use migration::{Migrator, MigratorTrait};
use settings::Database;

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "bilancio={level},server={level},ledger={level}",
            level = settings.app.level
        ))
        .init();

    let db = init_storage(&settings.server.database).await?;

    let ledger = ledger::Ledger::builder()
        .database(db.clone())
        .build()
        .await?;

    let bind = settings.server.bind.unwrap_or_else(|| "127.0.0.1".to_string());
    let addr = format!("{}:{}", bind, settings.server.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    server::run_with_listener(ledger, listener).await?;

    shutdown_storage(db).await;

    Ok(())
}

/// Open the configured database and bring its schema up to date.
async fn init_storage(
    config: &Database,
) -> Result<sea_orm::DatabaseConnection, Box<dyn std::error::Error + Send + Sync>> {
    let url = match config {
        Database::Memory => String::from("sqlite::memory:"),
        Database::Sqlite(path) => format!("sqlite:{}?mode=rwc", path),
    };

    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}

/// Release the database connection once the server has stopped.
async fn shutdown_storage(database: sea_orm::DatabaseConnection) {
    if let Err(err) = database.close().await {
        tracing::error!("failed to close database connection: {err}");
    }
}
