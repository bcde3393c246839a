//! Page window value object.
//!
//! A pager describes one window over an ordered listing: how many entries
//! exist overall, how many fit on a page, and which page is requested. The
//! derived positions are arithmetic only; no listing logic lives here.

use std::fmt;

/// Validation errors returned by [`Pager::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagerValidationError {
    /// The page size was zero.
    ZeroItems,
    /// The requested page number was zero.
    ZeroCurrent,
}

impl fmt::Display for PagerValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroItems => write!(f, "pager items per page must be greater than zero"),
            Self::ZeroCurrent => write!(f, "pager current page must be greater than zero"),
        }
    }
}

impl std::error::Error for PagerValidationError {}

/// Page window over a listing of `total` entries.
///
/// ## Invariants
/// - `items` and `current` are strictly positive.
/// - `total` may be zero; an empty listing is a valid window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    total: u32,
    items: u32,
    current: u32,
}

impl Pager {
    /// Validate and construct a page window.
    pub fn new(total: u32, items: u32, current: u32) -> Result<Self, PagerValidationError> {
        if items == 0 {
            return Err(PagerValidationError::ZeroItems);
        }
        if current == 0 {
            return Err(PagerValidationError::ZeroCurrent);
        }
        Ok(Self {
            total,
            items,
            current,
        })
    }

    /// Total number of entries in the listing.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Entries per page.
    pub fn items(&self) -> u32 {
        self.items
    }

    /// Requested page number, starting at one.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// Number of entries skipped before the current page.
    pub fn offset(&self) -> u32 {
        (self.current - 1) * self.items
    }

    /// First page number: zero for an empty listing, otherwise one.
    pub fn first(&self) -> u32 {
        if self.total == 0 { 0 } else { 1 }
    }

    /// Last page number, rounding a partial page up.
    pub fn last(&self) -> u32 {
        self.total.div_ceil(self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn derives_window_positions() {
        let pager = Pager::new(23, 10, 3).expect("valid pager");
        assert_eq!(pager.offset(), 20);
        assert_eq!(pager.first(), 1);
        assert_eq!(pager.last(), 3);
    }

    #[rstest]
    fn empty_listing_starts_at_page_zero() {
        let pager = Pager::new(0, 10, 1).expect("valid pager");
        assert_eq!(pager.first(), 0);
        assert_eq!(pager.last(), 0);
        assert_eq!(pager.offset(), 0);
    }

    #[rstest]
    fn exact_multiple_does_not_round_up() {
        let pager = Pager::new(30, 10, 2).expect("valid pager");
        assert_eq!(pager.last(), 3);
    }

    #[rstest]
    fn rejects_zero_items() {
        let err = Pager::new(23, 0, 1).expect_err("zero items should fail");
        assert_eq!(err, PagerValidationError::ZeroItems);
    }

    #[rstest]
    fn rejects_zero_current() {
        let err = Pager::new(23, 10, 0).expect_err("zero current should fail");
        assert_eq!(err, PagerValidationError::ZeroCurrent);
    }
}
