//! Immutable data types for item list retrieval.
//!
//! The decoded [`Record`] and the per-request [`FetchOptions`]. Nothing in
//! here performs I/O.

pub mod options;
pub mod record;

pub use options::{DEFAULT_URL, FetchOptions};
pub use record::Record;
