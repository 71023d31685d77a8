use async_trait::async_trait;

use crate::error::AuditError;
use crate::models::ProjectRecord;

/// Supplies paged sequences of project records to the audit runner.
///
/// The source owns pagination: `offset` is an absolute row offset, computed
/// by the operator as `limit * offset_iteration`. Implementations must
/// return records in a stable order; the report preserves it.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_page(
        &self,
        account_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<ProjectRecord>, AuditError>;
}
