//! Page abstraction consumed by the locators and the extraction cascade.
//!
//! [`TablePage`] is the seam between the heuristics in this crate and the PDF
//! backend. It is implemented for [`pdfplumber::Page`]; tests implement it for
//! in-memory pages.

use pdfplumber::{BBox, Page, SearchOptions, Strategy, Table, TableSettings};

use crate::drawing::Drawing;

/// How table detection should run on a page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Detection {
    /// Ruled-line detection over the whole page.
    Automatic,
    /// Ruled-line detection restricted to a region of the page.
    Region(BBox),
    /// Row and column inference from text alignment over the whole page.
    TextAlignment,
}

impl Detection {
    /// Table settings for this detection mode.
    pub fn settings(&self) -> TableSettings {
        match self {
            Detection::Automatic | Detection::Region(_) => TableSettings::default(),
            Detection::TextAlignment => TableSettings {
                strategy: Strategy::Stream,
                ..TableSettings::default()
            },
        }
    }
}

/// A table found on a page: its bounding box and cell text, row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedTable {
    pub bbox: BBox,
    pub rows: Vec<Vec<Option<String>>>,
}

impl From<&Table> for DetectedTable {
    fn from(table: &Table) -> Self {
        let rows = table
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.text.clone()).collect())
            .collect();
        DetectedTable {
            bbox: table.bbox,
            rows,
        }
    }
}

/// Read-only view of one page for table discovery.
pub trait TablePage {
    /// Page index (0-based).
    fn page_number(&self) -> usize;

    /// Page width in points.
    fn width(&self) -> f64;

    /// Bounding boxes of every literal occurrence of `text`, in source order.
    fn search_text(&self, text: &str, case_sensitive: bool) -> Vec<BBox>;

    /// Every vector drawing primitive, in backend enumeration order.
    fn drawings(&self) -> Vec<Drawing>;

    /// Detect tables using the given mode.
    fn find_tables(&self, detection: &Detection) -> Vec<DetectedTable>;
}

impl<P: TablePage + ?Sized> TablePage for &P {
    fn page_number(&self) -> usize {
        (**self).page_number()
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn search_text(&self, text: &str, case_sensitive: bool) -> Vec<BBox> {
        (**self).search_text(text, case_sensitive)
    }

    fn drawings(&self) -> Vec<Drawing> {
        (**self).drawings()
    }

    fn find_tables(&self, detection: &Detection) -> Vec<DetectedTable> {
        (**self).find_tables(detection)
    }
}

impl TablePage for Page {
    fn page_number(&self) -> usize {
        Page::page_number(self)
    }

    fn width(&self) -> f64 {
        Page::width(self)
    }

    fn search_text(&self, text: &str, case_sensitive: bool) -> Vec<BBox> {
        let options = SearchOptions {
            regex: false,
            case_sensitive,
        };
        self.search(text, &options)
            .into_iter()
            .map(|m| m.bbox)
            .collect()
    }

    fn drawings(&self) -> Vec<Drawing> {
        self.lines()
            .iter()
            .map(Drawing::from)
            .chain(self.rects().iter().map(Drawing::from))
            .chain(self.curves().iter().map(Drawing::from))
            .collect()
    }

    fn find_tables(&self, detection: &Detection) -> Vec<DetectedTable> {
        let settings = detection.settings();
        let tables = match detection {
            Detection::Region(bbox) => self.crop(*bbox).find_tables(&settings),
            Detection::Automatic | Detection::TextAlignment => {
                Page::find_tables(self, &settings)
            }
        };
        tables.iter().map(DetectedTable::from).collect()
    }
}
