//! Outbound adapters backing the domain's driven ports.

pub mod seed;
pub mod storage;
