use anyhow::Context;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Open the pool for the single-file database behind `url`.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<SqlitePool> {
    let db = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect(url)
        .await
        .with_context(|| format!("connect to database {url}"))?;
    Ok(db)
}

pub async fn migrate(db: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR.run(db).await.context("run migrations")?;
    tracing::info!("migrations applied");
    Ok(())
}
