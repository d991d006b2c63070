use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

/// Polarity analysis of a single check-in response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    #[serde(default)]
    pub emotional_indicators: Vec<String>,
    #[serde(default)]
    pub suggested_follow_ups: Vec<String>,
}

impl SentimentResult {
    /// Clamp `confidence` into `[0, 1]`. A NaN confidence becomes 0.
    pub fn clamped(mut self) -> Self {
        self.confidence = if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 1.0)
        };
        self
    }
}
