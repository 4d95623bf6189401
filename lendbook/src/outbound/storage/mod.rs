//! Key-value store adapters.
//!
//! [`MemoryStore`] is the ephemeral per-process analogue of the browser
//! store; [`FileStore`] is the durable analogue, persisting one file per key
//! with atomic writes so data survives "reloads" (new processes over the same
//! directory).

mod file;
mod memory;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
