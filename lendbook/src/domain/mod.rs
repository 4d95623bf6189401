//! Domain primitives and aggregates.
//!
//! Purpose: define the strongly typed entities the console's façade and
//! storage adapters exchange. Types are constructed through validating
//! constructors and document their invariants and serialisation contracts
//! (serde) in each type's Rustdoc.

pub mod auth;
pub mod error;
pub mod page;
pub mod ports;
pub mod stats;
pub mod user;

pub use self::auth::{LoginCredentials, LoginSession, LoginValidationError, Operator, SessionToken};
pub use self::error::{Error, ErrorCode};
pub use self::page::{PageRequest, UserPage};
pub use self::stats::DashboardStats;
pub use self::user::{Guarantor, IncomeRange, Tier, User, UserId, UserStatus, UserValidationError};
