use std::time::Duration;

use async_trait::async_trait;
use sqlx::mysql::MySqlPoolOptions;
use sqlx::{MySql, MySqlPool};

use mediaudit_core::{AuditError, CatalogSource, ProjectRecord};

/// Connect a MySQL pool with the configured limits.
pub async fn connect_pool(
    database_url: &str,
    max_connections: u32,
    timeout_seconds: u64,
) -> Result<MySqlPool, AuditError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(timeout_seconds))
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Repository for the audited project catalog
#[derive(Clone)]
pub struct CatalogRepository {
    pool: MySqlPool,
}

impl CatalogRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogSource for CatalogRepository {
    /// Fetch one page of project records for an account, in stable id order.
    #[tracing::instrument(skip(self), fields(db.table = "videos_with_size", db.operation = "select"))]
    async fn fetch_page(
        &self,
        account_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<ProjectRecord>, AuditError> {
        let records = sqlx::query_as::<MySql, ProjectRecord>(
            r#"
            SELECT account_id, id, master_path, poster_path, thumbnail_path
            FROM videos_with_size
            WHERE account_id = ?
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(account_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(
            account_id = %account_id,
            limit,
            offset,
            rows = records.len(),
            "Fetched catalog page"
        );

        Ok(records)
    }
}
