//! lemann-core
//!
//! Pure domain types for the updated Lémann Index (Pariente et al.,
//! Gastroenterology 2021): the four scored organs with their fixed clinical
//! constants, and the per-segment observation record. No I/O and no scoring
//! logic — this is the shared vocabulary of the workspace.

pub mod observation;
pub mod organ;
