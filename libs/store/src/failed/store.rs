use crate::client::Client;
use crate::failed::model::FailedLog;
use sqlx::{Error, SqliteConnection};

#[derive(Clone)]
pub struct Store {
    client: Client,
}

pub(crate) async fn insert(conn: &mut SqliteConnection, failed_log: &FailedLog) -> Result<u64, Error> {
    // Replayed batches re-submit the same raw payload; keep the first diagnosis.
    let query = r#"
        INSERT OR IGNORE INTO failed_logs (raw_log, error_message)
        VALUES (?, ?)
        "#;
    let result = sqlx::query(query)
        .bind(&failed_log.raw_log)
        .bind(&failed_log.error_message)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}

impl Store {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn get_failed_logs(&self) -> Result<Vec<FailedLog>, Error> {
        let query = r#"
            SELECT raw_log, error_message
            FROM failed_logs
            ORDER BY id ASC
            "#;
        sqlx::query_as(query).fetch_all(self.client.pool()).await
    }
}
