//! Data-access core for the Lendbook lending-platform admin console.
//!
//! The console's view layer renders a metrics overview, a paginated user
//! list, and a user-detail view with status transitions. This crate is the
//! layer beneath that: a demo-record generator adapter, a key-value store
//! abstraction with in-memory and file-backed adapters, and an asynchronous
//! façade ([`service::AdminService`]) exposing login/logout/auth-check,
//! paginated listing, user lookup, status updates, and dashboard aggregates.
//!
//! There is no real backend. The user collection is generated once, lazily,
//! on first data access and persisted as a single serialized collection;
//! individual mutations rewrite the whole collection. The session token is an
//! opaque string whose presence in the store signals "authenticated".
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use lendbook::domain::ports::AdminConsole;
//! use lendbook::outbound::seed::DemoRecordGenerator;
//! use lendbook::outbound::storage::MemoryStore;
//! use lendbook::service::AdminService;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let service = AdminService::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(DemoRecordGenerator::default()),
//! )
//! .with_seed_count(40);
//!
//! let page = service.get_users(1, 10).await.expect("listing succeeds");
//! assert_eq!(page.total, 40);
//! assert_eq!(page.users.len(), 10);
//! # }
//! ```

pub mod domain;
pub mod outbound;
pub mod service;
