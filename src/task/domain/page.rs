//! Pagination window values for project task listings.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};

/// Validated 1-indexed pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Creates a pagination window.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPageNumber`] or
    /// [`TaskDomainError::InvalidPageSize`] when either value is zero.
    pub const fn new(page: u32, size: u32) -> Result<Self, TaskDomainError> {
        if page == 0 {
            return Err(TaskDomainError::InvalidPageNumber(page));
        }
        if size == 0 {
            return Err(TaskDomainError::InvalidPageSize(size));
        }
        Ok(Self { page, size })
    }

    /// Returns the 1-indexed page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Returns the page length.
    #[must_use]
    pub const fn size(self) -> u32 {
        self.size
    }

    /// Returns the number of rows skipped before this page starts.
    #[must_use]
    pub const fn offset(self) -> i64 {
        (self.page as i64 - 1) * self.size as i64
    }

    /// Returns the maximum number of rows on this page.
    #[must_use]
    pub const fn limit(self) -> i64 {
        self.size as i64
    }
}

/// Computes the total number of pages needed for `total` tasks.
///
/// Rounds up, so a partially filled final page counts as a page.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidPageSize`] when `size` is zero rather
/// than dividing by it.
pub fn page_count(total: u64, size: u32) -> Result<u64, TaskDomainError> {
    if size == 0 {
        return Err(TaskDomainError::InvalidPageSize(size));
    }
    Ok(total.div_ceil(u64::from(size)))
}
