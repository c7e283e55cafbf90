//! Combining locator rectangles into a detection region.

use pdfplumber::BBox;

use crate::error::{Result, StatementError};

/// Build the table region bounded above-left by `header` and below-right by `rule`.
///
/// The region takes its left and top edges from the header rectangle and its
/// right and bottom edges from the rule line. The result must have positive
/// width and height, otherwise [`StatementError::DegenerateRegion`] is returned.
pub fn span(header: &BBox, rule: &BBox, page: usize) -> Result<BBox> {
    let region = BBox::new(header.x0, header.top, rule.x1, rule.bottom);
    if is_valid(&region) {
        Ok(region)
    } else {
        Err(StatementError::DegenerateRegion { page, region })
    }
}

/// Whether `bbox` has `x0 < x1` and `top < bottom`.
pub fn is_valid(bbox: &BBox) -> bool {
    bbox.x0 < bbox.x1 && bbox.top < bbox.bottom
}
