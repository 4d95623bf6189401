//! Error types for the demo-data crate.

use thiserror::Error;

/// Errors that can occur during record generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A categorical field had no candidate values to sample from.
    #[error("no candidate values available for field '{field}'")]
    EmptyCandidateSet {
        /// Name of the field being sampled.
        field: &'static str,
    },
}
