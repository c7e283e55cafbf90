//! Vector drawing primitives as seen by the rule-line locator.
//!
//! A [`Drawing`] is a backend-independent view of one painted path on a
//! page: its geometric kind, its bounding box, and its stroke color.

use std::fmt;

use pdfplumber::{BBox, Color, Curve, Line, Rect};

/// Geometric kind of a drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DrawingKind {
    Line,
    Rect,
    Curve,
}

impl fmt::Display for DrawingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawingKind::Line => f.write_str("line"),
            DrawingKind::Rect => f.write_str("rect"),
            DrawingKind::Curve => f.write_str("curve"),
        }
    }
}

/// Stroke color of a drawing primitive, by color space.
#[derive(Debug, Clone, PartialEq)]
pub enum StrokeColor {
    Gray(f64),
    Rgb(f64, f64, f64),
    Cmyk(f64, f64, f64, f64),
    Other(Vec<f64>),
}

impl StrokeColor {
    /// Whether this is pure black in its own color space.
    pub fn is_black(&self) -> bool {
        match self {
            StrokeColor::Gray(g) => *g == 0.0,
            StrokeColor::Rgb(r, g, b) => *r == 0.0 && *g == 0.0 && *b == 0.0,
            StrokeColor::Cmyk(c, m, y, k) => *c == 0.0 && *m == 0.0 && *y == 0.0 && *k == 1.0,
            StrokeColor::Other(_) => false,
        }
    }
}

impl From<&Color> for StrokeColor {
    fn from(color: &Color) -> Self {
        match color {
            Color::Gray(g) => StrokeColor::Gray(f64::from(*g)),
            Color::Rgb(r, g, b) => StrokeColor::Rgb(f64::from(*r), f64::from(*g), f64::from(*b)),
            Color::Cmyk(c, m, y, k) => StrokeColor::Cmyk(
                f64::from(*c),
                f64::from(*m),
                f64::from(*y),
                f64::from(*k),
            ),
            Color::Other(vals) => StrokeColor::Other(vals.iter().map(|v| f64::from(*v)).collect()),
            // Pattern strokes are never a solid rule.
            Color::Pattern(_) | Color::PatternWithBase(..) => StrokeColor::Other(Vec::new()),
        }
    }
}

/// One vector-graphics element on a page.
#[derive(Debug, Clone, PartialEq)]
pub struct Drawing {
    pub kind: DrawingKind,
    pub bbox: BBox,
    pub stroke_color: StrokeColor,
}

impl Drawing {
    pub fn new(kind: DrawingKind, bbox: BBox, stroke_color: StrokeColor) -> Self {
        Self {
            kind,
            bbox,
            stroke_color,
        }
    }

    /// Top and bottom coincide.
    pub fn is_horizontal(&self) -> bool {
        self.bbox.top == self.bbox.bottom
    }

    /// A horizontal, black-stroked line: the visual bottom boundary of a table.
    pub fn is_rule_line(&self) -> bool {
        self.kind == DrawingKind::Line && self.is_horizontal() && self.stroke_color.is_black()
    }
}

impl From<&Line> for Drawing {
    fn from(line: &Line) -> Self {
        Drawing::new(
            DrawingKind::Line,
            BBox::new(line.x0, line.top, line.x1, line.bottom),
            StrokeColor::from(&line.stroke_color),
        )
    }
}

impl From<&Rect> for Drawing {
    fn from(rect: &Rect) -> Self {
        Drawing::new(
            DrawingKind::Rect,
            BBox::new(rect.x0, rect.top, rect.x1, rect.bottom),
            StrokeColor::from(&rect.stroke_color),
        )
    }
}

impl From<&Curve> for Drawing {
    fn from(curve: &Curve) -> Self {
        Drawing::new(
            DrawingKind::Curve,
            BBox::new(curve.x0, curve.top, curve.x1, curve.bottom),
            StrokeColor::from(&curve.stroke_color),
        )
    }
}
