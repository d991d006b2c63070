//! mindline-engine
//!
//! Heuristic text-scoring engine for journaling check-ins. Pure functions
//! only: no network access, and the only disk access is loading the
//! condition lexicon once at start-up.
//!
//! - [`lexicon`] builds the condition table from `(illness, definition)` rows.
//! - [`detector`] scores free text against that table.
//! - [`sentiment`] scores free-text polarity.
//! - [`assessment`] scores the daily assessment answers.
//! - [`report`] summarises a history of assessments.
//! - [`reply`] composes a short supportive reply.
//!
//! Outputs are heuristic signals, not clinical assessments.

pub mod assessment;
pub mod detector;
pub mod error;
pub mod lexicon;
pub mod reply;
pub mod report;
pub mod sentiment;

pub use detector::ConditionDetector;
pub use lexicon::Lexicon;
