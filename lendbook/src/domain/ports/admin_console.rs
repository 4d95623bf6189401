//! Driving port for the console's data-access façade.
//!
//! In hexagonal terms this is the surface the view layer calls: every screen
//! interaction (login form, user table, detail page, overview cards) maps to
//! exactly one operation here. Operations are async so callers treat them as
//! deferred computations, even though the backing store resolves in-process.

use async_trait::async_trait;

use crate::domain::auth::LoginSession;
use crate::domain::error::Error;
use crate::domain::page::UserPage;
use crate::domain::stats::DashboardStats;
use crate::domain::user::{User, UserStatus};

/// Façade surface mediating all reads and writes of user and session data.
#[async_trait]
pub trait AdminConsole: Send + Sync {
    /// Authenticate and persist a fresh session token.
    ///
    /// Any non-empty email/password pair succeeds; no password verification
    /// occurs. Empty or blank fields fail with
    /// [`ErrorCode::Unauthorized`](crate::domain::ErrorCode::Unauthorized).
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, Error>;

    /// True iff a session token is present in the store. No expiry check.
    async fn is_authenticated(&self) -> Result<bool, Error>;

    /// Remove the session token. Idempotent.
    async fn logout(&self) -> Result<(), Error>;

    /// Return one window of the user collection plus the total count.
    ///
    /// `page` and `limit` clamp up to 1; a page past the end yields an empty
    /// window with the true total. Never fails on out-of-range inputs.
    async fn get_users(&self, page: u32, limit: u32) -> Result<UserPage, Error>;

    /// Fetch a single user by identifier.
    ///
    /// Fails with [`ErrorCode::NotFound`](crate::domain::ErrorCode::NotFound)
    /// when no record matches.
    async fn get_user(&self, id: &str) -> Result<User, Error>;

    /// Transition a user's status and persist the collection.
    ///
    /// Unknown identifiers fail with the same not-found kind as
    /// [`get_user`](Self::get_user).
    async fn update_user_status(&self, id: &str, status: UserStatus) -> Result<(), Error>;

    /// Compute the overview counters.
    async fn dashboard_stats(&self) -> Result<DashboardStats, Error>;
}
