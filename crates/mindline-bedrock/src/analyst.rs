//! Typed entry points for callers: remote first, heuristic otherwise.

use mindline_core::models::assessment::{AssessmentInput, AssessmentResult};
use mindline_core::models::sentiment::SentimentResult;
use mindline_engine::{assessment, reply, sentiment};

use crate::completion::{Completion, Fallback, Outcome, Task};
use crate::heuristic::HeuristicCompletion;

/// Wraps a remote backend so every call resolves to a usable result.
///
/// Pass `None::<BedrockCompletion>` to run on heuristics alone.
///
/// [`BedrockCompletion`]: crate::converse::BedrockCompletion
#[derive(Debug, Clone)]
pub struct Analyst<C> {
    completion: Fallback<C, HeuristicCompletion>,
}

impl<C: Completion> Analyst<C> {
    pub fn new(remote: C) -> Self {
        Self {
            completion: Fallback::new(remote, HeuristicCompletion),
        }
    }

    pub fn remote(&self) -> &C {
        self.completion.primary()
    }

    pub async fn analyze_checkin(&self, text: &str) -> SentimentResult {
        match self.completion.complete(&Task::Checkin(text)).await {
            Ok(Outcome::Checkin(result)) => result,
            _ => sentiment::analyze(text),
        }
    }

    pub async fn analyze_assessment(&self, input: &AssessmentInput) -> AssessmentResult {
        match self.completion.complete(&Task::Assessment(input)).await {
            Ok(Outcome::Assessment(result)) => result,
            _ => assessment::score(input),
        }
    }

    pub async fn supportive_reply(&self, text: &str) -> String {
        match self.completion.complete(&Task::SupportiveReply(text)).await {
            Ok(Outcome::SupportiveReply(reply)) => reply,
            _ => reply::supportive_reply(text),
        }
    }
}
