//! Batch driver: walk a directory tree and convert every PDF found.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use crate::config::{BatchConfig, ExtractOptions, FailurePolicy, INPUT_SUFFIX};
use crate::error::{Result, StatementError};
use crate::extract::extract_tables_from_pdf;
use crate::persist::save;

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in processing order.
    pub written: Vec<PathBuf>,
    /// Documents that failed, with their errors. Only populated under
    /// [`FailurePolicy::KeepGoing`].
    pub failures: Vec<(PathBuf, StatementError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Whether a directory entry name marks an input document.
pub fn is_input_document(name: &str) -> bool {
    name.ends_with(INPUT_SUFFIX)
}

/// Every input document under `root`, sorted by file name within each directory.
pub fn discover(root: &Path) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(is_input_document) {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

/// Extract and persist a single document, returning the output path.
pub fn process_file(path: &Path, options: &ExtractOptions) -> Result<PathBuf> {
    let result = extract_tables_from_pdf(path, options)?;
    save(&result)
}

/// Convert every PDF under `config.input_root`.
pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    run_with(config, |path| process_file(path, &config.extract))
}

/// Walk `config.input_root`, handing each input document to `processor`.
///
/// Under [`FailurePolicy::FailFast`] the first error is returned and no later
/// document is attempted. Under [`FailurePolicy::KeepGoing`] failures are
/// collected in the report.
pub fn run_with<F>(config: &BatchConfig, mut processor: F) -> Result<BatchReport>
where
    F: FnMut(&Path) -> Result<PathBuf>,
{
    let mut report = BatchReport::default();

    for path in discover(config.input_root())? {
        info!(path = %path.display(), "processing");
        match processor(&path) {
            Ok(output) => report.written.push(output),
            Err(err) => match config.failure_policy {
                FailurePolicy::FailFast => return Err(err),
                FailurePolicy::KeepGoing => {
                    warn!(path = %path.display(), error = %err, "skipping document");
                    report.failures.push((path, err));
                }
            },
        }
    }

    Ok(report)
}
