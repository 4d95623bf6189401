//! Dashboard aggregate counters.

use serde::{Deserialize, Serialize};

/// Headline counters rendered on the console's overview page.
///
/// `total_users` and `active_users` are exact counts over the collection.
/// `users_with_loans` and `users_with_savings` are constant-ratio estimates of
/// the total, not per-record aggregations — the demo dataset carries no loan
/// or savings flags. The ratios live with the façade that computes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total records in the collection.
    pub total_users: u64,
    /// Records whose status is `Active`.
    pub active_users: u64,
    /// Estimated count of users holding loans.
    pub users_with_loans: u64,
    /// Estimated count of users holding savings.
    pub users_with_savings: u64,
}
