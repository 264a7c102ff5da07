//! lemann-export
//!
//! Persistence surface for saved Lémann Index results: an in-memory result
//! sheet keyed by unique patient ID, and CSV serialization for client-side
//! download or server-side storage. The scoring crates stay pure; all I/O
//! lives here.

pub mod csv;
pub mod error;
pub mod results;
