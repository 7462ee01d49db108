#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, database_config};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// migrations run once per test process
static MIGRATED: OnceCell<bool> = OnceCell::const_new();

/// Fresh connection for the calling test, or `None` when DB tests are off
/// or the database cannot be reached.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let mut cfg = database_config();
    cfg.min_connections = 1;
    cfg.max_connections = cfg.max_connections.max(5);
    cfg.acquire_timeout_secs = 10;

    let migrated = *MIGRATED
        .get_or_init(|| async {
            match connect_with_config(&cfg).await {
                Ok(db) => match migration::Migrator::up(&db, None).await {
                    Ok(()) => true,
                    Err(e) => {
                        eprintln!("skip: migrate up failed: {}", e);
                        false
                    }
                },
                Err(e) => {
                    eprintln!("skip: cannot connect to db: {}", e);
                    false
                }
            }
        })
        .await;
    if !migrated {
        return None;
    }
    connect_with_config(&cfg).await.ok()
}
