//! Load, normalize, and save stages of a single run.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use crash_ingest::{ErrorCategory, IngestError, read_csv_table, write_csv_table};
use crash_transform::{NormalizationReport, Normalizer};
use tracing::{info, info_span};

use crate::types::{RunOutcome, RunRequest};

pub fn run_normalizer(request: &RunRequest) -> Result<RunOutcome> {
    let run_span = info_span!("run", input = %request.input.display());
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Load
    // =========================================================================
    let ingest_start = Instant::now();
    let mut table = info_span!("ingest")
        .in_scope(|| read_csv_table(&request.input, &request.csv))
        .with_context(|| format!("load {}", request.input.display()))?;
    info!(
        rows = table.height(),
        columns = table.width(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Normalize
    // =========================================================================
    let report = Normalizer::new()
        .run(&mut table)
        .with_context(|| format!("normalize {}", request.input.display()))?;

    // =========================================================================
    // Stage 3: Save
    // =========================================================================
    if request.dry_run {
        info!(output = %request.output.display(), "dry run, output not written");
    } else {
        let output_start = Instant::now();
        info_span!("output")
            .in_scope(|| write_csv_table(&table, &request.output, &request.csv))
            .with_context(|| format!("write {}", request.output.display()))?;
        info!(
            output = %request.output.display(),
            rows = table.height(),
            duration_ms = output_start.elapsed().as_millis(),
            "output complete"
        );
    }

    Ok(RunOutcome {
        output: request.output.clone(),
        written: !request.dry_run,
        report,
    })
}

/// Writes the run report as pretty-printed JSON.
pub fn write_report(report: &NormalizationReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Classifies a failed run: output write failures are I/O errors, everything
/// else (missing or malformed input, schema, config) is an input error.
pub fn error_category(error: &anyhow::Error) -> ErrorCategory {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<IngestError>())
        .map_or(ErrorCategory::Input, IngestError::category)
}
