use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("remote completion is not configured")]
    Unavailable,

    #[error("model invocation timed out after {0:?}")]
    Timeout(Duration),

    #[error("model invocation failed: {0}")]
    Invocation(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),

    #[error("response did not conform to expected schema: {0}")]
    SchemaViolation(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
