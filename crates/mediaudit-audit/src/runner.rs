use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use futures::stream::{self, StreamExt};

use mediaudit_core::{AuditError, CatalogSource, ProjectStatus};

use crate::report::CsvReportSink;
use crate::validator::ProjectValidator;

/// Outcome of one audit run.
#[derive(Debug)]
pub struct AuditSummary {
    /// Every record on the page is processed exactly once.
    pub total_processed: usize,
    /// Reportable statuses in catalog iteration order.
    pub statuses: Vec<ProjectStatus>,
    pub report_path: PathBuf,
    pub elapsed: Duration,
}

/// Orchestrates one batch: fetches a single catalog page, validates every
/// record with bounded concurrency, and hands the reportable set to the
/// report sink.
///
/// Per-project faults never abort the run; a catalog fetch or report write
/// fault is fatal.
pub struct AuditRunner {
    catalog: Arc<dyn CatalogSource>,
    validator: Arc<ProjectValidator>,
    sink: CsvReportSink,
    max_concurrent: usize,
}

impl AuditRunner {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        validator: ProjectValidator,
        sink: CsvReportSink,
        max_concurrent: usize,
    ) -> Self {
        Self {
            catalog,
            validator: Arc::new(validator),
            sink,
            max_concurrent: max_concurrent.max(1),
        }
    }

    pub async fn run(
        &self,
        account_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<AuditSummary, AuditError> {
        let started = Instant::now();

        let records = self.catalog.fetch_page(account_id, limit, offset).await?;
        let total_processed = records.len();
        tracing::info!(
            account_id = %account_id,
            limit,
            offset,
            rows = total_processed,
            "Starting audit"
        );

        // `buffered` (not `buffer_unordered`) keeps emission in catalog
        // order even when checks complete out of order.
        let statuses: Vec<ProjectStatus> = stream::iter(records)
            .map(|record| {
                let validator = Arc::clone(&self.validator);
                async move { validator.validate_project(&record).await }
            })
            .buffered(self.max_concurrent)
            .filter(|status| futures::future::ready(status.is_reportable()))
            .collect()
            .await;

        let report_path = self.sink.write(account_id, &statuses)?;
        let elapsed = started.elapsed();

        tracing::info!(
            total_processed,
            reportable = statuses.len(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            report = %report_path.display(),
            "Audit complete"
        );

        Ok(AuditSummary {
            total_processed,
            statuses,
            report_path,
            elapsed,
        })
    }
}
