//! The table extraction cascade.
//!
//! Each page goes through up to three detection tiers, each one tried only
//! when the previous tier found nothing:
//!
//! 1. automatic ruled-line detection over the whole page,
//! 2. ruled-line detection inside the region between the marker text and the
//!    first horizontal black rule (see [`crate::locate`]),
//! 3. text-alignment detection over the whole page.
//!
//! A missing marker or rule line fails the page. A rule line that does not
//! enclose a region below the marker counts as an empty second tier.
//!
//! A page on which all tiers come up empty fails the document with
//! [`StatementError::NoTablesFound`].

use std::fmt;
use std::path::{Path, PathBuf};

use pdfplumber::{BBox, Pdf};
use tracing::debug;

use crate::config::ExtractOptions;
use crate::error::{Result, StatementError};
use crate::locate::{locate_header_region, locate_rule_line};
use crate::page::{DetectedTable, Detection, TablePage};
use crate::region;

/// The detection tier that produced a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Automatic,
    Region,
    TextAlignment,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Automatic => "automatic",
            Tier::Region => "region",
            Tier::TextAlignment => "text-alignment",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&Detection> for Tier {
    fn from(detection: &Detection) -> Self {
        match detection {
            Detection::Automatic => Tier::Automatic,
            Detection::Region(_) => Tier::Region,
            Detection::TextAlignment => Tier::TextAlignment,
        }
    }
}

/// One table extracted from a document.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedTable {
    /// Page index (0-based).
    pub page: usize,
    pub tier: Tier,
    pub bbox: BBox,
    /// Cell values row by row; `None` for empty cells.
    pub rows: Vec<Vec<Option<String>>>,
}

impl ExtractedTable {
    fn new(page: usize, tier: Tier, table: DetectedTable) -> Self {
        Self {
            page,
            tier,
            bbox: table.bbox,
            rows: table.rows,
        }
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// All tables extracted from one source document, in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct TablesResult {
    pub source: PathBuf,
    pub tables: Vec<ExtractedTable>,
}

impl TablesResult {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            tables: Vec::new(),
        }
    }

    /// Every row of every table, concatenated.
    pub fn rows(&self) -> impl Iterator<Item = &Vec<Option<String>>> {
        self.tables.iter().flat_map(|t| t.rows.iter())
    }

    pub fn row_count(&self) -> usize {
        self.tables.iter().map(|t| t.rows.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Run the detection cascade on a single page.
pub fn extract_page_tables<P: TablePage + ?Sized>(
    page: &P,
    source: &Path,
    options: &ExtractOptions,
) -> Result<Vec<ExtractedTable>> {
    let page_number = page.page_number();

    let mut detection = Detection::Automatic;
    let mut tables = page.find_tables(&detection);

    if tables.is_empty() {
        let header = locate_header_region(page, options)?;
        let rule = locate_rule_line(page)?;
        match region::span(&header, &rule, page_number) {
            Ok(bounds) => {
                detection = Detection::Region(bounds);
                tables = page.find_tables(&detection);
            }
            // An empty region holds no tables; fall through to text alignment.
            Err(err) => debug!(page = page_number, %err, "skipping region detection"),
        }
    }

    if tables.is_empty() {
        detection = Detection::TextAlignment;
        tables = page.find_tables(&detection);
    }

    if tables.is_empty() {
        return Err(StatementError::NoTablesFound {
            page: page_number,
            path: source.to_path_buf(),
        });
    }

    let tier = Tier::from(&detection);
    debug!(
        page = page_number,
        %tier,
        count = tables.len(),
        "tables detected"
    );

    Ok(tables
        .into_iter()
        .map(|t| ExtractedTable::new(page_number, tier, t))
        .collect())
}

/// Run the cascade over every page and collect the tables in page order.
///
/// Stops at the first page that fails.
pub fn extract_tables<P, I>(
    pages: I,
    source: &Path,
    options: &ExtractOptions,
) -> Result<TablesResult>
where
    P: TablePage,
    I: IntoIterator<Item = Result<P>>,
{
    let mut result = TablesResult::new(source);
    for page in pages {
        let page = page?;
        result
            .tables
            .extend(extract_page_tables(&page, source, options)?);
    }
    Ok(result)
}

/// Open the PDF at `path` and extract tables from all of its pages.
pub fn extract_tables_from_pdf(path: &Path, options: &ExtractOptions) -> Result<TablesResult> {
    let pdf = Pdf::open_file(path, None).map_err(|source| StatementError::Pdf {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = (0..pdf.page_count()).map(|idx| {
        pdf.page(idx).map_err(|source| StatementError::Pdf {
            path: path.to_path_buf(),
            source,
        })
    });
    extract_tables(pages, path, options)
}
