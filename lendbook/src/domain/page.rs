//! Pagination window types.
//!
//! The listing operation returns a bounded window of the ordered collection.
//! Rather than relying on raw slicing semantics, the window is an explicit
//! contract: page clamps to at least 1 and limit to at least 1, and a page
//! past the end of the collection yields an empty window with the true total.

use serde::{Deserialize, Serialize};

use crate::domain::user::User;

/// A clamped pagination request.
///
/// ## Invariants
/// - `page >= 1`.
/// - `limit >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Page size used when the caller does not specify one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Build a request, clamping `page` and `limit` up to 1.
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self {
            page: if page == 0 { 1 } else { page },
            limit: if limit == 0 { 1 } else { limit },
        }
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Maximum number of records in the window.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Zero-based index of the first record in the window.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.page as usize - 1) * self.limit as usize
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

/// One window of the user collection plus the total record count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    /// Records inside the window, in collection order.
    pub users: Vec<User>,
    /// Total records in the collection, independent of the window.
    pub total: usize,
}
