//! Prompt rendering and response decoding for remote completion.
//!
//! The model is asked for bare JSON. A response is only accepted when it
//! parses and carries the field each task keys on (`sentiment` as a string,
//! `overallScore` as a number, or a bare JSON string for replies); anything
//! else is reported as an error so the caller can fall back.

use mindline_core::models::assessment::AssessmentResult;
use mindline_core::models::sentiment::SentimentResult;
use serde_json::Value;

use crate::completion::{Outcome, Task};
use crate::error::CompletionError;

pub const SYSTEM_PROMPT: &str = "Return strictly valid JSON. No prose.";

/// Build the user message for a task.
pub fn render(task: &Task<'_>) -> Result<String, CompletionError> {
    let prompt = match task {
        Task::Checkin(text) => format!(
            "Analyze the user's check-in text and return JSON with keys: \
             sentiment one of [positive, neutral, negative]; confidence number 0-1; \
             emotionalIndicators array of strings; suggestedFollowUps array of 2-3 brief \
             questions. Text: {text}"
        ),
        Task::Assessment(input) => format!(
            "Given assessment fields, return JSON with keys: overallScore number 0-10; \
             indicators object with emotionalWellbeing, energyLevel, socialConnection; \
             summary array of brief insights. Input: {}",
            serde_json::to_string(input)?
        ),
        Task::SupportiveReply(text) => format!(
            "Compose a brief, empathetic, supportive 2-3 sentence reply to the user's \
             message. Avoid medical claims; encourage self-care and seeking support when \
             appropriate. Reply with the message text as a single JSON string. Message: {text}"
        ),
    };
    Ok(prompt)
}

/// Decode a raw model response into an outcome for `task`.
pub fn decode(task: &Task<'_>, response: &str) -> Result<Outcome, CompletionError> {
    let value: Value = serde_json::from_str(response.trim())
        .map_err(|e| CompletionError::ResponseParse(format!("response is not JSON: {e}")))?;

    match task {
        Task::Checkin(_) => {
            if !value.get("sentiment").is_some_and(Value::is_string) {
                return Err(CompletionError::SchemaViolation(
                    "missing string field `sentiment`".to_string(),
                ));
            }
            let result: SentimentResult = serde_json::from_value(value).map_err(|e| {
                CompletionError::SchemaViolation(format!("failed to parse SentimentResult: {e}"))
            })?;
            Ok(Outcome::Checkin(result.clamped()))
        }
        Task::Assessment(_) => {
            if !value.get("overallScore").is_some_and(Value::is_number) {
                return Err(CompletionError::SchemaViolation(
                    "missing numeric field `overallScore`".to_string(),
                ));
            }
            let result: AssessmentResult = serde_json::from_value(value).map_err(|e| {
                CompletionError::SchemaViolation(format!("failed to parse AssessmentResult: {e}"))
            })?;
            Ok(Outcome::Assessment(result))
        }
        Task::SupportiveReply(_) => match value {
            Value::String(reply) if !reply.trim().is_empty() => Ok(Outcome::SupportiveReply(reply)),
            _ => Err(CompletionError::SchemaViolation(
                "expected a non-empty JSON string".to_string(),
            )),
        },
    }
}
