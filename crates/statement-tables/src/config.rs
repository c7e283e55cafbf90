//! Configuration for extraction and batch runs.

use std::path::{Path, PathBuf};

/// Marker printed above the table on AllStar-format statements.
pub const DEFAULT_MARKER: &str = "For the Month Ending";

/// File-name suffix of input documents.
pub const INPUT_SUFFIX: &str = ".pdf";

/// Extension of written output files.
pub const OUTPUT_EXTENSION: &str = "parquet";

/// Options for the per-page extraction cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Literal text anchoring the top of the region used by the second tier.
    pub marker: String,
    /// Whether marker search distinguishes letter case.
    pub case_sensitive: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            case_sensitive: false,
        }
    }
}

/// What the batch driver does when one document fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Abort the batch on the first failure.
    #[default]
    FailFast,
    /// Record the failure and move on to the next document.
    KeepGoing,
}

/// Configuration for a batch run over a directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_root: PathBuf,
    pub extract: ExtractOptions,
    pub failure_policy: FailurePolicy,
}

impl BatchConfig {
    /// Configuration with default options for the given input root.
    pub fn new(input_root: impl Into<PathBuf>) -> Self {
        Self {
            input_root: input_root.into(),
            extract: ExtractOptions::default(),
            failure_policy: FailurePolicy::default(),
        }
    }

    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.extract.marker = marker.into();
        self
    }

    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.extract.case_sensitive = case_sensitive;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn input_root(&self) -> &Path {
        &self.input_root
    }
}
