use mindline_engine::{assessment, reply, sentiment};

use crate::completion::{Completion, Outcome, Task};
use crate::error::CompletionError;

/// Answers every task locally with the heuristic engine. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCompletion;

impl HeuristicCompletion {
    pub fn answer(&self, task: &Task<'_>) -> Outcome {
        match *task {
            Task::Checkin(text) => Outcome::Checkin(sentiment::analyze(text)),
            Task::Assessment(input) => Outcome::Assessment(assessment::score(input)),
            Task::SupportiveReply(text) => Outcome::SupportiveReply(reply::supportive_reply(text)),
        }
    }
}

impl Completion for HeuristicCompletion {
    async fn complete(&self, task: &Task<'_>) -> Result<Outcome, CompletionError> {
        Ok(self.answer(task))
    }
}
