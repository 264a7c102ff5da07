//! lemann-index
//!
//! The Lémann Index scoring engine: organ-specific lesion grading, the fixed
//! coefficient tables, per-segment and per-organ scoring, the Global Lémann
//! Index, and the per-session segment registry. Pure and synchronous — no
//! I/O; persistence and display belong to the caller.

pub mod coefficients;
pub mod error;
pub mod grading;
pub mod registry;
pub mod scoring;
