//! The console's data-access façade.
//!
//! [`AdminService`] mediates every read and write of user and session data.
//! It holds explicit handles to its driven ports — no ambient singletons —
//! and is constructed once per process or session. Before any read or mutate
//! operation it ensures the store has been seeded; seeding happens at most
//! once per store because the collection key, once written, is never
//! regenerated.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::auth::{LoginCredentials, LoginSession, Operator, SessionToken};
use crate::domain::error::Error;
use crate::domain::page::{PageRequest, UserPage};
use crate::domain::ports::admin_console::AdminConsole;
use crate::domain::ports::key_value_store::{KeyValueStore, StorageError};
use crate::domain::ports::record_generator::RecordGenerator;
use crate::domain::stats::DashboardStats;
use crate::domain::user::{User, UserStatus};

/// Store key holding the serialized user collection.
const USERS_KEY: &str = "lendbook.users";

/// Store key holding the session token.
const TOKEN_KEY: &str = "lendbook.token";

/// Records generated on first access when no count is configured.
pub const DEFAULT_SEED_COUNT: usize = 500;

/// Display name reported for every logged-in operator.
const OPERATOR_DISPLAY_NAME: &str = "Admin User";

/// Share of users reported as holding loans, in percent.
///
/// The demo dataset carries no loan flags; this is a documented constant-ratio
/// estimate, floored to an integer.
const LOAN_HOLDER_PERCENT: u64 = 25;

/// Share of users reported as holding savings, in percent. Same caveat as
/// [`LOAN_HOLDER_PERCENT`].
const SAVINGS_HOLDER_PERCENT: u64 = 60;

/// Data-access façade over the persistent store and the record generator.
pub struct AdminService {
    store: Arc<dyn KeyValueStore>,
    generator: Arc<dyn RecordGenerator>,
    seed_count: usize,
}

impl AdminService {
    /// Build a façade over explicit port handles.
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>, generator: Arc<dyn RecordGenerator>) -> Self {
        Self {
            store,
            generator,
            seed_count: DEFAULT_SEED_COUNT,
        }
    }

    /// Override the number of records seeded on first access.
    #[must_use]
    pub fn with_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    /// Load the user collection, seeding the store first if necessary.
    ///
    /// Idempotent: once the collection key exists, repeated calls never
    /// regenerate or duplicate data.
    fn ensure_seeded(&self) -> Result<Vec<User>, Error> {
        if let Some(raw) = self.store.get(USERS_KEY).map_err(store_failure)? {
            return serde_json::from_str(&raw)
                .map_err(|err| Error::internal(format!("corrupt user collection: {err}")));
        }

        let users = self
            .generator
            .generate(self.seed_count)
            .map_err(|err| Error::internal(err.to_string()))?;
        self.save_users(&users)?;
        info!(count = users.len(), "seeded user collection");
        Ok(users)
    }

    /// Serialize and write the entire collection back to its key.
    fn save_users(&self, users: &[User]) -> Result<(), Error> {
        let raw = serde_json::to_string(users)
            .map_err(|err| Error::internal(format!("cannot serialize user collection: {err}")))?;
        self.store.set(USERS_KEY, &raw).map_err(store_failure)
    }
}

#[async_trait]
impl AdminConsole for AdminService {
    async fn login(&self, email: &str, password: &str) -> Result<LoginSession, Error> {
        let credentials = LoginCredentials::try_from_parts(email, password)
            .map_err(|err| Error::unauthorized(format!("invalid credentials: {err}")))?;

        let token = SessionToken::issue();
        self.store
            .set(TOKEN_KEY, token.as_ref())
            .map_err(store_failure)?;
        info!(operator = credentials.email(), "operator logged in");

        Ok(LoginSession {
            token,
            operator: Operator {
                email: credentials.email().to_owned(),
                display_name: OPERATOR_DISPLAY_NAME.to_owned(),
            },
        })
    }

    async fn is_authenticated(&self) -> Result<bool, Error> {
        Ok(self.store.get(TOKEN_KEY).map_err(store_failure)?.is_some())
    }

    async fn logout(&self) -> Result<(), Error> {
        self.store.remove(TOKEN_KEY).map_err(store_failure)?;
        info!("operator logged out");
        Ok(())
    }

    async fn get_users(&self, page: u32, limit: u32) -> Result<UserPage, Error> {
        let request = PageRequest::new(page, limit);
        let users = self.ensure_seeded()?;
        let total = users.len();

        let window: Vec<User> = users
            .into_iter()
            .skip(request.offset())
            .take(request.limit() as usize)
            .collect();
        debug!(
            page = request.page(),
            limit = request.limit(),
            returned = window.len(),
            total,
            "listed users"
        );

        Ok(UserPage {
            users: window,
            total,
        })
    }

    async fn get_user(&self, id: &str) -> Result<User, Error> {
        let users = self.ensure_seeded()?;
        users
            .into_iter()
            .find(|user| user.id.as_ref() == id)
            .ok_or_else(|| Error::not_found(format!("user '{id}' not found")))
    }

    async fn update_user_status(&self, id: &str, status: UserStatus) -> Result<(), Error> {
        let mut users = self.ensure_seeded()?;
        let user = users
            .iter_mut()
            .find(|user| user.id.as_ref() == id)
            .ok_or_else(|| Error::not_found(format!("user '{id}' not found")))?;

        user.status = status;
        self.save_users(&users)?;
        info!(user = id, %status, "updated user status");
        Ok(())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        let users = self.ensure_seeded()?;
        let total_users = users.len() as u64;
        let active_users = users
            .iter()
            .filter(|user| user.status == UserStatus::Active)
            .count() as u64;

        Ok(DashboardStats {
            total_users,
            active_users,
            users_with_loans: total_users * LOAN_HOLDER_PERCENT / 100,
            users_with_savings: total_users * SAVINGS_HOLDER_PERCENT / 100,
        })
    }
}

/// Storage failures are internal: the caller can only surface them once.
fn store_failure(err: StorageError) -> Error {
    Error::internal(format!("storage failure: {err}"))
}
