//! Error types for statement table extraction.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Every failure in the
//! pipeline, from a missing marker on a page to a Parquet write error, is a
//! [`StatementError`] variant.

use std::path::PathBuf;

use pdfplumber::{BBox, PdfError};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StatementError>;

/// Error type for table discovery, extraction, and persistence.
#[derive(Debug, Error)]
pub enum StatementError {
    /// The marker text does not occur on the page.
    #[error("text '{marker}' not found on page {page}")]
    MarkerNotFound {
        /// The literal text that was searched for.
        marker: String,
        /// Page index (0-based).
        page: usize,
    },

    /// No horizontal, black-stroked line primitive exists on the page.
    #[error("no horizontal black rule line found on page {page}")]
    RuleLineNotFound {
        /// Page index (0-based).
        page: usize,
    },

    /// The marker and rule line do not enclose a non-empty region.
    #[error(
        "table region on page {page} is empty: ({:.2}, {:.2}, {:.2}, {:.2})",
        .region.x0,
        .region.top,
        .region.x1,
        .region.bottom
    )]
    DegenerateRegion {
        /// Page index (0-based).
        page: usize,
        /// The rejected region.
        region: BBox,
    },

    /// Every detection tier found zero tables on the page.
    #[error("no tables found in page {page} of {}", .path.display())]
    NoTablesFound {
        /// Page index (0-based).
        page: usize,
        /// Source document.
        path: PathBuf,
    },

    /// The PDF could not be opened or a page could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Pdf {
        /// Document being read.
        path: PathBuf,
        /// Backend error.
        #[source]
        source: PdfError,
    },

    /// Filesystem error while writing output.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Error while walking the input directory tree.
    #[error("failed to walk input directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// Columnar batch construction failed.
    #[error("failed to build columnar data for {}: {source}", .path.display())]
    Arrow {
        /// Source document of the rows.
        path: PathBuf,
        /// Arrow error.
        #[source]
        source: arrow_schema::ArrowError,
    },

    /// Parquet encoding failed.
    #[error("failed to write {}: {source}", .path.display())]
    Parquet {
        /// Output file being written.
        path: PathBuf,
        /// Parquet encoder error.
        #[source]
        source: parquet::errors::ParquetError,
    },
}

impl StatementError {
    /// Page index the error refers to, when it is page-scoped.
    pub fn page(&self) -> Option<usize> {
        match self {
            StatementError::MarkerNotFound { page, .. }
            | StatementError::RuleLineNotFound { page }
            | StatementError::DegenerateRegion { page, .. }
            | StatementError::NoTablesFound { page, .. } => Some(*page),
            _ => None,
        }
    }
}
