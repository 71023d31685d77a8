//! End-to-end audit runs over a fake catalog and an in-memory store.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use mediaudit_audit::{AssetChecker, AuditRunner, CsvReportSink, ProjectValidator};
use mediaudit_core::{
    AuditError, AuditPolicy, CatalogSource, ObjectMeta, ProjectRecord, SlotDefect,
};
use mediaudit_storage::{MemoryStorage, Storage, StorageResult};

/// Catalog source backed by a fixed list of records.
struct FixedCatalog {
    records: Vec<ProjectRecord>,
}

#[async_trait]
impl CatalogSource for FixedCatalog {
    async fn fetch_page(
        &self,
        _account_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<Vec<ProjectRecord>, AuditError> {
        Ok(self
            .records
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

/// Storage wrapper adding a per-key artificial head latency.
struct SlowStorage {
    inner: MemoryStorage,
    delays_ms: HashMap<String, u64>,
}

#[async_trait]
impl Storage for SlowStorage {
    async fn head_object(&self, storage_key: &str) -> StorageResult<ObjectMeta> {
        if let Some(&ms) = self.delays_ms.get(storage_key) {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
        self.inner.head_object(storage_key).await
    }
}

fn record(id: i64, master: Option<&str>, poster: Option<&str>, thumb: Option<&str>) -> ProjectRecord {
    ProjectRecord {
        account_id: "42".to_string(),
        id,
        master_path: master.map(String::from),
        poster_path: poster.map(String::from),
        thumbnail_path: thumb.map(String::from),
    }
}

fn runner_over(
    records: Vec<ProjectRecord>,
    storage: Arc<dyn Storage>,
    report_dir: &std::path::Path,
    max_concurrent: usize,
) -> AuditRunner {
    let checker = AssetChecker::new(storage, AuditPolicy::default());
    AuditRunner::new(
        Arc::new(FixedCatalog { records }),
        ProjectValidator::new(checker),
        CsvReportSink::new(report_dir),
        max_concurrent,
    )
}

#[tokio::test]
async fn test_run_reports_only_defective_projects() {
    let storage = MemoryStorage::new();
    storage.insert("videos/1.mp4", 5000);
    storage.insert("img/1p.jpg", 300);
    storage.insert("img/1t.png", 300);
    storage.insert("img/2p.jpg", 300);
    storage.insert("img/2t.png", 300);
    storage.insert("videos/3.mp4", 5000);
    storage.insert("img/3p.jpg", 300);
    storage.insert("img/3t.gif", 1);

    let records = vec![
        record(1, Some("videos/1.mp4"), Some("img/1p.jpg"), Some("img/1t.png")),
        record(2, Some("not_found"), Some("img/2p.jpg"), Some("img/2t.png")),
        record(3, Some("videos/3.mp4"), Some("img/3p.jpg"), Some("img/3t.gif")),
    ];

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_over(records, Arc::new(storage), dir.path(), 4);
    let summary = runner.run("42", 100, 0).await.unwrap();

    assert_eq!(summary.total_processed, 3);
    assert_eq!(summary.statuses.len(), 2);

    assert_eq!(summary.statuses[0].id, 2);
    assert_eq!(summary.statuses[0].master, Some(SlotDefect::DataMissing));

    // Record 3's thumbnail exists but is a single byte.
    assert_eq!(summary.statuses[1].id, 3);
    assert_eq!(summary.statuses[1].thumb, Some(SlotDefect::TooSmall));

    let content = std::fs::read_to_string(&summary.report_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "account_id,id,master_path,master,poster,thumb");
    assert_eq!(lines[1], "42,2,not_found,Data missing,,");
    assert_eq!(lines[2], "42,3,videos/3.mp4,,,Too small");
}

#[tokio::test]
async fn test_report_order_matches_catalog_order_under_concurrency() {
    let inner = MemoryStorage::new();
    let mut delays_ms = HashMap::new();
    let mut records = Vec::new();

    // Every record is defective (missing poster); later records resolve
    // faster than earlier ones so completion order inverts input order.
    for i in 0..20i64 {
        let master = format!("videos/{}.mp4", i);
        let thumb = format!("img/{}.png", i);
        inner.insert(master.clone(), 5000);
        inner.insert(thumb.clone(), 300);
        delays_ms.insert(master.clone(), (19 - i as u64) * 3);
        records.push(record(i, Some(&master), Some(""), Some(&thumb)));
    }

    let storage = SlowStorage {
        inner,
        delays_ms,
    };

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_over(records, Arc::new(storage), dir.path(), 8);
    let summary = runner.run("42", 100, 0).await.unwrap();

    assert_eq!(summary.total_processed, 20);
    let ids: Vec<i64> = summary.statuses.iter().map(|s| s.id).collect();
    assert_eq!(ids, (0..20).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_empty_page_still_writes_header_only_report() {
    let dir = tempfile::tempdir().unwrap();
    let runner = runner_over(Vec::new(), Arc::new(MemoryStorage::new()), dir.path(), 4);
    let summary = runner.run("42", 100, 0).await.unwrap();

    assert_eq!(summary.total_processed, 0);
    assert!(summary.statuses.is_empty());

    let content = std::fs::read_to_string(&summary.report_path).unwrap();
    assert_eq!(
        content.trim_end(),
        "account_id,id,master_path,master,poster,thumb"
    );
}

#[tokio::test]
async fn test_inconclusive_slot_appears_in_report() {
    let storage = MemoryStorage::new();
    storage.insert("videos/1.mp4", 5000);
    storage.insert("img/1p.jpg", 300);
    storage.insert("img/1t.png", 300);
    storage.set_unavailable("img/1t.png");

    let records = vec![record(
        1,
        Some("videos/1.mp4"),
        Some("img/1p.jpg"),
        Some("img/1t.png"),
    )];

    let dir = tempfile::tempdir().unwrap();
    let runner = runner_over(records, Arc::new(storage), dir.path(), 2);
    let summary = runner.run("42", 100, 0).await.unwrap();

    assert_eq!(summary.statuses.len(), 1);
    assert_eq!(summary.statuses[0].thumb, Some(SlotDefect::Inconclusive));

    let content = std::fs::read_to_string(&summary.report_path).unwrap();
    assert!(content.lines().nth(1).unwrap().ends_with(",,Inconclusive"));
}
