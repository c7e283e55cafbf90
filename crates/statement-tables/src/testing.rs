//! In-memory pages and PDF fixtures for unit tests.

use std::cell::RefCell;

use lopdf::{Document, Object, Stream, dictionary};
use pdfplumber::{BBox, Page, Pdf};

use crate::drawing::{Drawing, DrawingKind, StrokeColor};
use crate::extract::Tier;
use crate::page::{DetectedTable, Detection, TablePage};

/// A page with scripted text matches, drawings, and detection results.
///
/// Every call to [`TablePage::find_tables`] is recorded so tests can assert
/// which tiers ran.
pub struct FakePage {
    pub number: usize,
    pub width: f64,
    pub text: Vec<(String, BBox)>,
    pub drawings: Vec<Drawing>,
    pub tables: Vec<(Tier, DetectedTable)>,
    pub calls: RefCell<Vec<Detection>>,
}

impl FakePage {
    pub fn new(number: usize) -> Self {
        Self {
            number,
            width: 612.0,
            text: Vec::new(),
            drawings: Vec::new(),
            tables: Vec::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn with_text(mut self, text: &str, bbox: BBox) -> Self {
        self.text.push((text.to_string(), bbox));
        self
    }

    pub fn with_drawing(mut self, drawing: Drawing) -> Self {
        self.drawings.push(drawing);
        self
    }

    pub fn with_table(mut self, tier: Tier, table: DetectedTable) -> Self {
        self.tables.push((tier, table));
        self
    }

    pub fn tiers_called(&self) -> Vec<Tier> {
        self.calls.borrow().iter().map(Tier::from).collect()
    }
}

impl TablePage for FakePage {
    fn page_number(&self) -> usize {
        self.number
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn search_text(&self, text: &str, case_sensitive: bool) -> Vec<BBox> {
        self.text
            .iter()
            .filter(|(t, _)| {
                if case_sensitive {
                    t == text
                } else {
                    t.to_lowercase() == text.to_lowercase()
                }
            })
            .map(|(_, bbox)| *bbox)
            .collect()
    }

    fn drawings(&self) -> Vec<Drawing> {
        self.drawings.clone()
    }

    fn find_tables(&self, detection: &Detection) -> Vec<DetectedTable> {
        self.calls.borrow_mut().push(*detection);
        let tier = Tier::from(detection);
        self.tables
            .iter()
            .filter(|(t, _)| *t == tier)
            .map(|(_, table)| table.clone())
            .collect()
    }
}

/// Wraps a real page and records every detection it is asked to run.
pub struct Recorded<P> {
    pub page: P,
    pub calls: RefCell<Vec<Detection>>,
}

impl<P: TablePage> Recorded<P> {
    pub fn new(page: P) -> Self {
        Self {
            page,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<P: TablePage> TablePage for Recorded<P> {
    fn page_number(&self) -> usize {
        self.page.page_number()
    }

    fn width(&self) -> f64 {
        self.page.width()
    }

    fn search_text(&self, text: &str, case_sensitive: bool) -> Vec<BBox> {
        self.page.search_text(text, case_sensitive)
    }

    fn drawings(&self) -> Vec<Drawing> {
        self.page.drawings()
    }

    fn find_tables(&self, detection: &Detection) -> Vec<DetectedTable> {
        self.calls.borrow_mut().push(*detection);
        self.page.find_tables(detection)
    }
}

/// Marker line at y=720 followed by a black rule at y=500 (top 292 on a
/// Letter page), with no table grid.
pub const MARKER_AND_RULE_CONTENT: &[u8] = b"
    BT /F1 10 Tf 72 720 Td (For the Month Ending January 31, 2024) Tj ET
    0 G 1 w
    36 500 m 576 500 l S
";

/// A one-page Letter-size PDF with Helvetica as `/F1`.
pub fn single_page_pdf(content: &[u8]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.to_vec()));
    let pages_id = doc.new_object_id();

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => Object::Reference(pages_id),
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(612),
            Object::Integer(792),
        ],
        "Contents" => Object::Reference(content_id),
        "Resources" => dictionary! {
            "Font" => dictionary! { "F1" => Object::Reference(font_id) },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => Object::Integer(1),
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => Object::Reference(pages_id),
    });
    doc.trailer.set("Root", Object::Reference(catalog_id));

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Open the first page of an in-memory PDF.
pub fn open_first_page(bytes: &[u8]) -> Page {
    Pdf::open(bytes, None).unwrap().page(0).unwrap()
}

/// A horizontal line spanning `x0..x1` at height `y`.
pub fn hline(x0: f64, x1: f64, y: f64, color: StrokeColor) -> Drawing {
    Drawing::new(DrawingKind::Line, BBox::new(x0, y, x1, y), color)
}

/// A `rows` x `cols` table whose cells read `r{row}c{col}`.
pub fn grid(rows: usize, cols: usize) -> DetectedTable {
    DetectedTable {
        bbox: BBox::new(0.0, 0.0, 10.0 * cols as f64, 10.0 * rows as f64),
        rows: (0..rows)
            .map(|r| (0..cols).map(|c| Some(format!("r{r}c{c}"))).collect())
            .collect(),
    }
}
