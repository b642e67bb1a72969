// src/db.rs

use std::time::Duration;

use sqlx::{PgPool, migrate::Migrator, postgres::PgPoolOptions};

use crate::config::Config;

/// Schema for quizzes, questions, quiz users and results.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

const CONNECT_ATTEMPTS: u32 = 6;
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// Connects to PostgreSQL, retrying while the database comes up.
pub async fn connect_with_retry(config: &Config) -> Result<PgPool, sqlx::Error> {
    let options = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .acquire_timeout(Duration::from_secs(3));

    let mut attempt = 1;
    loop {
        match options.clone().connect(&config.database_url).await {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < CONNECT_ATTEMPTS => {
                tracing::warn!(attempt, error = %e, "Database not ready, retrying in {:?}", RETRY_DELAY);
                attempt += 1;
                tokio::time::sleep(RETRY_DELAY).await;
            }
            Err(e) => return Err(e),
        }
    }
}
