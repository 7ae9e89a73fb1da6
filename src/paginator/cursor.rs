//! Cursor state owned by one paginator

use crate::document::Document;
use crate::query::KeyBound;

/// Navigation state.
///
/// `page` is advisory: it tracks absolute fetches exactly and relative
/// moves by counting, but windowing never reads it. Relative navigation is
/// driven by the bounds alone.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cursor {
    /// No page fetched yet
    #[default]
    Fresh,
    /// Anchored on the most recently fetched non-empty page
    Positioned {
        /// Best-effort page index
        page: u64,
        /// Composite key of the page's first row
        lower: KeyBound,
        /// Composite key of the page's last row
        upper: KeyBound,
    },
}

impl Cursor {
    /// Returns true if no page has been fetched yet
    pub fn is_fresh(&self) -> bool {
        matches!(self, Cursor::Fresh)
    }

    /// Best-effort index of the current page
    pub fn current_page(&self) -> Option<u64> {
        match self {
            Cursor::Fresh => None,
            Cursor::Positioned { page, .. } => Some(*page),
        }
    }

    /// Key of the first row of the current page
    pub fn lower_bound(&self) -> Option<&KeyBound> {
        match self {
            Cursor::Fresh => None,
            Cursor::Positioned { lower, .. } => Some(lower),
        }
    }

    /// Key of the last row of the current page
    pub fn upper_bound(&self) -> Option<&KeyBound> {
        match self {
            Cursor::Fresh => None,
            Cursor::Positioned { upper, .. } => Some(upper),
        }
    }

    /// Anchors on `rows`, which must be in configured sort order.
    ///
    /// Returns false and leaves the cursor untouched if `rows` is empty.
    pub(crate) fn reposition(&mut self, page: u64, rows: &[Document], sort_field: &str) -> bool {
        let (first, last) = match (rows.first(), rows.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return false,
        };
        *self = Cursor::Positioned {
            page,
            lower: KeyBound::of(first, sort_field),
            upper: KeyBound::of(last, sort_field),
        };
        true
    }
}
