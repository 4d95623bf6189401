//! Ports between the domain and its adapters.
//!
//! Driving side: [`AdminConsole`], the façade surface the view layer calls.
//! Driven side: [`KeyValueStore`] over the persistent store and
//! [`RecordGenerator`] over the demo-record source. Both driven ports are
//! synchronous because the underlying store resolves in-process with no real
//! I/O wait; the driving port is async so callers can treat operations as
//! deferred computations.

pub mod admin_console;
pub mod key_value_store;
pub mod record_generator;

pub use self::admin_console::AdminConsole;
pub use self::key_value_store::{KeyValueStore, StorageError};
pub use self::record_generator::{FixtureRecordGenerator, RecordGenerator, SeedError};
