//! Locating the bounds of a table that automatic detection missed.
//!
//! AllStar-format statements print the table directly below a text marker
//! and close it with a horizontal black rule. [`locate_header_region`] finds
//! the top edge from the marker and [`locate_rule_line`] finds the bottom edge
//! from the rule. In both, the first candidate in enumeration order wins.

use std::collections::BTreeSet;

use pdfplumber::BBox;
use tracing::debug;

use crate::config::ExtractOptions;
use crate::error::{Result, StatementError};
use crate::page::TablePage;

/// Zero-height rectangle at the bottom edge of the first `marker` match.
///
/// The rectangle spans the full page width: `(0, y, width, y)` where `y` is the
/// match's bottom edge.
pub fn locate_header_region<P: TablePage + ?Sized>(
    page: &P,
    options: &ExtractOptions,
) -> Result<BBox> {
    let matches = page.search_text(&options.marker, options.case_sensitive);
    let Some(first) = matches.first() else {
        return Err(StatementError::MarkerNotFound {
            marker: options.marker.clone(),
            page: page.page_number(),
        });
    };

    if matches.len() > 1 {
        debug!(
            page = page.page_number(),
            count = matches.len(),
            "marker occurs more than once, using the first match"
        );
    }

    Ok(BBox::new(0.0, first.bottom, page.width(), first.bottom))
}

/// Bounding box of the first horizontal, black-stroked line on the page.
pub fn locate_rule_line<P: TablePage + ?Sized>(page: &P) -> Result<BBox> {
    let drawings = page.drawings();

    let kinds: BTreeSet<_> = drawings.iter().map(|d| d.kind).collect();
    debug!(
        page = page.page_number(),
        kinds = ?kinds,
        "drawing kinds found"
    );

    drawings
        .iter()
        .find(|d| d.is_rule_line())
        .map(|d| d.bbox)
        .ok_or(StatementError::RuleLineNotFound {
            page: page.page_number(),
        })
}
