//! mindline-core
//!
//! Pure domain types for the Mindline check-in engine. No I/O and no AWS
//! dependency. Shared by the scoring engine, the completion adapter and
//! anything that persists or displays results.

pub mod models;
