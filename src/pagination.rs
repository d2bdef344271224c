//! Page clamping and pagination metadata.

use serde::{Deserialize, Serialize};

/// Page size used when the request does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Upper bound enforced on requested page sizes.
pub const MAX_PAGE_SIZE: usize = 100;

/// Clamp a requested page number to at least 1. Takes the raw signed wire
/// value so zero and negative requests clamp instead of erroring.
pub fn normalize_page(requested: i64) -> usize {
    requested.max(1) as usize
}

/// Clamp a requested page size into `[1, MAX_PAGE_SIZE]`.
pub fn clamp_page_size(requested: i64) -> usize {
    requested.clamp(1, MAX_PAGE_SIZE as i64) as usize
}

/// Pagination metadata echoed back with every page of results.
///
/// `total` and `total_pages` always describe the same filter predicate the
/// page itself was computed from.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl PageInfo {
    /// Builds metadata for a page request. `page` and `page_size` must
    /// already be clamped.
    #[must_use]
    pub fn new(total: usize, page: usize, page_size: usize) -> Self {
        Self {
            total,
            page,
            page_size,
            total_pages: total.div_ceil(page_size),
        }
    }

    /// Row offset of the first item on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }
}
