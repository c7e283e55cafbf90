//! statement-tables: extract tables from PDF financial statements into Parquet.
//!
//! PDF access and table detection come from [`pdfplumber`]. This crate adds a
//! fallback for statements whose tables the automatic detector misses: the
//! table is assumed to sit between a text marker and a horizontal black rule.
//!
//! # Architecture
//!
//! - [`locate`]: find the marker's bottom edge and the rule line
//! - [`extract`]: the three-tier detection cascade per page
//! - [`persist`]: flatten a document's tables into one Parquet file
//! - [`batch`]: walk a directory tree and convert every PDF
//!
//! # Example
//!
//! ```ignore
//! let config = BatchConfig::new("./sample/2024/AllStar");
//! let report = statement_tables::run(&config)?;
//! println!("{} files written", report.written.len());
//! ```

pub mod batch;
pub mod config;
pub mod drawing;
pub mod error;
pub mod extract;
pub mod locate;
pub mod page;
pub mod persist;
pub mod region;

#[cfg(test)]
mod testing;

pub use batch::{BatchReport, discover, process_file, run, run_with};
pub use config::{BatchConfig, DEFAULT_MARKER, ExtractOptions, FailurePolicy};
pub use drawing::{Drawing, DrawingKind, StrokeColor};
pub use error::{Result, StatementError};
pub use extract::{
    ExtractedTable, TablesResult, Tier, extract_page_tables, extract_tables,
    extract_tables_from_pdf,
};
pub use locate::{locate_header_region, locate_rule_line};
pub use page::{DetectedTable, Detection, TablePage};
pub use persist::{output_path, save};
pub use pdfplumber::BBox;
