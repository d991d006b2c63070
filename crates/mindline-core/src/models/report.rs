use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Direction of recent energy levels compared with the ones before them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Trend {
    Improving,
    Stable,
    Declining,
}

/// Roll-up of a user's assessment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReportSummary {
    pub total_assessments: usize,
    /// 0-10, one decimal place.
    pub average_score: f64,
    pub trend: Trend,
    pub key_insights: Vec<String>,
    pub risk_factors: Vec<String>,
}
