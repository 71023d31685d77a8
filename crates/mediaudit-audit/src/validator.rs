use mediaudit_core::{AssetOutcome, AssetRole, ProjectRecord, ProjectStatus};

use crate::checker::AssetChecker;

/// Runs the asset checker over a project's three slots and assembles the
/// per-project status.
pub struct ProjectValidator {
    checker: AssetChecker,
}

impl ProjectValidator {
    pub fn new(checker: AssetChecker) -> Self {
        Self { checker }
    }

    /// Validate one catalog record. The three slots are independent reads
    /// and run concurrently; a defect in one never short-circuits the
    /// others. Single pass, no retries.
    pub async fn validate_project(&self, record: &ProjectRecord) -> ProjectStatus {
        let (master, poster, thumb) = tokio::join!(
            self.checker
                .check_asset(AssetRole::Video, record.master_path.as_deref()),
            self.checker
                .check_asset(AssetRole::Image, record.poster_path.as_deref()),
            self.checker
                .check_asset(AssetRole::Image, record.thumbnail_path.as_deref()),
        );

        for (slot, outcome, path) in [
            ("master", master, record.master_path.as_deref()),
            ("poster", poster, record.poster_path.as_deref()),
            ("thumb", thumb, record.thumbnail_path.as_deref()),
        ] {
            if outcome == AssetOutcome::Inconclusive {
                tracing::warn!(
                    project_id = record.id,
                    slot,
                    path = path.unwrap_or(""),
                    "Slot could not be verified; reported as inconclusive"
                );
            }
        }

        ProjectStatus {
            account_id: record.account_id.clone(),
            id: record.id,
            master_path: record.master_path.clone(),
            master: master.defect(),
            poster: poster.defect(),
            thumb: thumb.defect(),
        }
    }
}
