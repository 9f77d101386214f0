//! Page-window planning for offset-based pagination
//!
//! Pure functions for splitting a paginated result set into fetchable
//! windows. The tracker caps the requested page size server-side and only
//! reveals the page size it actually applied, plus the full result count,
//! in its first response; this module turns that answer into the ordered
//! `(startAt, maxResults)` windows the shell still has to fetch.

use serde::Serialize;

/// One slice of a paginated result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub start_at: u64,
    pub page_size: u64,
}

/// Error type for pagination planning
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be a positive integer, got {0}")]
    InvalidPageSize(u64),
}

/// Compute the ordered page windows covering `[0, total)`
///
/// Window `i` starts at `i * page_size`. Every window is `page_size` items
/// long except the last, which covers whatever remains. A total of zero
/// yields an empty plan.
///
/// # Arguments
/// * `page_size` - Server-confirmed page size, must be positive
/// * `total` - Full result count across all pages
///
/// # Returns
/// The window sequence in `start_at` ascending order, or
/// `PaginationError::InvalidPageSize` when `page_size` is zero
pub fn plan(page_size: u64, total: u64) -> Result<Vec<PageWindow>, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::InvalidPageSize(page_size));
    }

    let page_count = total.div_ceil(page_size);
    let mut windows = Vec::with_capacity(page_count as usize);

    for i in 0..page_count {
        let start_at = i * page_size;
        windows.push(PageWindow {
            start_at,
            page_size: page_size.min(total - start_at),
        });
    }

    Ok(windows)
}
