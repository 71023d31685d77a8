//! Mediaudit CLI — one-shot batch audit of catalog asset references.
//!
//! Set DATABASE_URL (mysql) and AUDIT_ACCOUNT_ID; S3 credentials come from
//! the usual AWS environment variables. Flags override the env settings.

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use mediaudit_audit::{AssetChecker, AuditRunner, CsvReportSink, ProjectValidator};
use mediaudit_cli::init_tracing;
use mediaudit_core::{AuditConfig, AuditPolicy};
use mediaudit_db::{connect_pool, CatalogRepository};
use mediaudit_storage::create_storage;

#[derive(Parser, Debug)]
#[command(
    name = "mediaudit",
    about = "Audit catalog asset references against object storage"
)]
struct Args {
    /// Account whose catalog page is audited (overrides AUDIT_ACCOUNT_ID)
    #[arg(long)]
    account: Option<String>,

    /// Page size (overrides AUDIT_PAGE_LIMIT)
    #[arg(long)]
    limit: Option<u32>,

    /// Page number; the row offset is limit * offset-iteration
    /// (overrides AUDIT_OFFSET_ITERATION)
    #[arg(long)]
    offset_iteration: Option<u32>,

    /// Maximum concurrent project validations
    /// (overrides AUDIT_MAX_CONCURRENT_CHECKS)
    #[arg(long)]
    concurrency: Option<usize>,

    /// Report output directory (overrides REPORT_DIR)
    #[arg(long)]
    report_dir: Option<String>,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Serialize report")?;
    println!("{}", out);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();

    let mut config = AuditConfig::from_env().context(
        "Failed to load audit configuration. Set DATABASE_URL and AUDIT_ACCOUNT_ID",
    )?;
    if let Some(account) = args.account {
        config.account_id = account;
    }
    if let Some(limit) = args.limit {
        config.page_limit = limit;
    }
    if let Some(iteration) = args.offset_iteration {
        config.offset_iteration = iteration;
    }
    if let Some(concurrency) = args.concurrency {
        config.max_concurrent_checks = concurrency;
    }
    if let Some(report_dir) = args.report_dir {
        config.report_dir = report_dir;
    }
    config.validate()?;

    let pool = connect_pool(
        &config.database_url,
        config.db_max_connections,
        config.db_timeout_seconds,
    )
    .await
    .context("Failed to connect to the catalog database")?;
    let catalog = Arc::new(CatalogRepository::new(pool));

    let storage = create_storage(&config).context("Failed to initialize the storage backend")?;

    let checker = AssetChecker::new(storage, AuditPolicy::default());
    let validator = ProjectValidator::new(checker);
    let sink = CsvReportSink::new(&config.report_dir);
    let runner = AuditRunner::new(catalog, validator, sink, config.max_concurrent_checks);

    let summary = runner
        .run(&config.account_id, config.page_limit, config.page_offset())
        .await
        .context("Audit run failed")?;

    println!("total processed: {}", summary.total_processed);
    print_json(&summary.statuses)?;
    println!("report: {}", summary.report_path.display());
    println!("elapsed: {:.2?}", summary.elapsed);

    Ok(())
}
