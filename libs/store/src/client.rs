use eyre::Result;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

#[derive(Clone)]
pub struct Client {
    pool: SqlitePool,
}

impl Client {
    pub async fn new(database_url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        // Every connection to `sqlite::memory:` opens its own empty database,
        // so in-memory ledgers are pinned to a single long-lived connection.
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new().max_connections(5).connect_with(options).await?
        };

        Ok(Self { pool })
    }

    pub async fn init(database_url: &str) -> Result<Self> {
        let client = Client::new(database_url).await?;

        // Run migrations or create tables on startup
        sqlx::query(include_str!("../resources/create_tables.sql")).execute(client.pool()).await?;

        Ok(client)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
