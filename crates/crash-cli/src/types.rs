use std::path::PathBuf;

use crash_ingest::CsvOptions;
use crash_transform::NormalizationReport;

/// Everything one run needs, after config and CLI flags are merged.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub csv: CsvOptions,
    pub dry_run: bool,
}

#[derive(Debug)]
pub struct RunOutcome {
    pub output: PathBuf,
    pub written: bool,
    pub report: NormalizationReport,
}
