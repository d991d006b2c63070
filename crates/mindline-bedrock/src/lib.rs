//! mindline-bedrock
//!
//! Remote completion on Bedrock, with the local heuristic engine as the
//! fallback. Callers go through [`analyst::Analyst`], which never fails: a
//! missing, failing, slow or malformed remote answer is replaced by the
//! heuristic result.

pub mod analyst;
pub mod completion;
pub mod converse;
pub mod error;
pub mod heuristic;
pub mod prompt;
