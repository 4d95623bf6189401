//! Deterministic demo user records for the Lendbook admin console.
//!
//! This crate produces believable, reproducible user records for the console's
//! demo dataset. It is independent of the console's domain types to avoid
//! circular dependencies; callers map [`UserRecordSeed`] into their own types
//! at the point of use.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Deterministic record generation from a numeric RNG seed
//! - Sequential, zero-padded record identifiers (`user-001`, `user-002`, …)
//! - Independent sampling from fixed candidate sets for categorical fields
//! - Numeric synthesis of phone numbers, account numbers, balances, and
//!   income bounds
//!
//! # Example
//!
//! ```
//! use demo_data::generate_user_records;
//!
//! let records = generate_user_records(3, 42).expect("generation succeeds");
//!
//! assert_eq!(records.len(), 3);
//! assert_eq!(records[0].id, "user-001");
//! // Same seed produces identical records.
//! let again = generate_user_records(3, 42).expect("generation succeeds");
//! assert_eq!(records, again);
//! ```

mod error;
mod generator;
mod profile;
mod seed;

pub use error::GenerationError;
pub use generator::generate_user_records;
pub use profile::{
    BANKS, EDUCATION_LEVELS, EMPLOYMENT_SECTORS, EMPLOYMENT_STATUSES, GENDERS,
    GUARANTOR_RELATIONSHIPS, MARITAL_STATUSES, ORGANIZATIONS, RESIDENCE_TYPES,
};
pub use seed::{GuarantorSeed, StatusSeed, UserRecordSeed};
