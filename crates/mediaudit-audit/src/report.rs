use std::path::{Path, PathBuf};

use mediaudit_core::{AuditError, ProjectStatus};

/// Column order is part of the external report contract.
const REPORT_COLUMNS: [&str; 6] = ["account_id", "id", "master_path", "master", "poster", "thumb"];

/// Writes the per-run CSV report: one file per run, named
/// `{account_id}_{YYYYMMDD-HHMMSS}.csv` with the timestamp taken at write
/// time. An empty reportable set still produces a header-only file.
pub struct CsvReportSink {
    dir: PathBuf,
}

impl CsvReportSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn write(
        &self,
        account_id: &str,
        statuses: &[ProjectStatus],
    ) -> Result<PathBuf, AuditError> {
        std::fs::create_dir_all(&self.dir)?;

        let filename = format!(
            "{}_{}.csv",
            account_id,
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        let path = self.dir.join(filename);
        self.write_to(&path, statuses)?;

        tracing::info!(
            report = %path.display(),
            rows = statuses.len(),
            "Report written"
        );
        Ok(path)
    }

    fn write_to(&self, path: &Path, statuses: &[ProjectStatus]) -> Result<(), AuditError> {
        let mut writer =
            csv::Writer::from_path(path).map_err(|e| AuditError::Report(e.to_string()))?;

        writer
            .write_record(REPORT_COLUMNS)
            .map_err(|e| AuditError::Report(e.to_string()))?;

        for status in statuses {
            let label = |defect: Option<mediaudit_core::SlotDefect>| {
                defect.map(|d| d.as_label().to_string()).unwrap_or_default()
            };
            writer
                .write_record([
                    status.account_id.clone(),
                    status.id.to_string(),
                    status.master_path.clone().unwrap_or_default(),
                    label(status.master),
                    label(status.poster),
                    label(status.thumb),
                ])
                .map_err(|e| AuditError::Report(e.to_string()))?;
        }

        writer.flush()?;
        Ok(())
    }
}
