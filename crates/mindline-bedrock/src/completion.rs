//! The completion capability and its fallback combinator.

use std::future::Future;

use mindline_core::models::assessment::{AssessmentInput, AssessmentResult};
use mindline_core::models::sentiment::SentimentResult;
use tracing::{debug, warn};

use crate::error::CompletionError;

/// A unit of work a completion backend can answer.
#[derive(Debug, Clone, Copy)]
pub enum Task<'a> {
    /// Sentiment analysis of a check-in response.
    Checkin(&'a str),
    /// Scoring of the daily assessment.
    Assessment(&'a AssessmentInput),
    /// A brief empathetic reply to a user message.
    SupportiveReply(&'a str),
}

impl Task<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Task::Checkin(_) => "checkin",
            Task::Assessment(_) => "assessment",
            Task::SupportiveReply(_) => "supportive_reply",
        }
    }
}

/// A structured answer to a [`Task`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Checkin(SentimentResult),
    Assessment(AssessmentResult),
    SupportiveReply(String),
}

impl Outcome {
    /// Whether this outcome is the right shape for `task`.
    pub fn answers(&self, task: &Task<'_>) -> bool {
        matches!(
            (self, task),
            (Outcome::Checkin(_), Task::Checkin(_))
                | (Outcome::Assessment(_), Task::Assessment(_))
                | (Outcome::SupportiveReply(_), Task::SupportiveReply(_))
        )
    }
}

/// Anything that can turn a [`Task`] into an [`Outcome`], or fail trying.
pub trait Completion: Send + Sync {
    fn complete(
        &self,
        task: &Task<'_>,
    ) -> impl Future<Output = Result<Outcome, CompletionError>> + Send;
}

/// An absent backend is always [`CompletionError::Unavailable`].
impl<C: Completion> Completion for Option<C> {
    async fn complete(&self, task: &Task<'_>) -> Result<Outcome, CompletionError> {
        match self {
            Some(inner) => inner.complete(task).await,
            None => Err(CompletionError::Unavailable),
        }
    }
}

/// Try `primary`; on any error, or an answer of the wrong shape, ask
/// `secondary` instead.
#[derive(Debug, Clone)]
pub struct Fallback<P, S> {
    primary: P,
    secondary: S,
}

impl<P, S> Fallback<P, S> {
    pub fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: Completion, S: Completion> Completion for Fallback<P, S> {
    async fn complete(&self, task: &Task<'_>) -> Result<Outcome, CompletionError> {
        match self.primary.complete(task).await {
            Ok(outcome) if outcome.answers(task) => return Ok(outcome),
            Ok(_) => warn!(
                task = task.kind(),
                "primary completion answered a different task, falling back"
            ),
            Err(CompletionError::Unavailable) => {
                debug!(task = task.kind(), "primary completion unavailable, falling back")
            }
            Err(e) => warn!(task = task.kind(), error = %e, "primary completion failed, falling back"),
        }
        self.secondary.complete(task).await
    }
}
