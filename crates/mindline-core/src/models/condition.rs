use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse severity tier attached to a condition at lexicon load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// One entry of the keyword lexicon.
///
/// Built once from a `(illness, definition)` row; `symptoms`, `keywords` and
/// `severity` are derived from fixed term tables and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConditionRecord {
    pub illness: String,
    pub definition: String,
    pub symptoms: Vec<String>,
    pub keywords: Vec<String>,
    pub severity: Severity,
}

/// A lexicon condition that scored at or above the retention threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ConditionMatch {
    pub illness: String,
    pub definition: String,
    /// Keyword-match strength in `[0, 1]`. Not a calibrated probability.
    pub confidence: f64,
    pub severity: Severity,
    pub matched_symptoms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

/// Output of the condition detector for one piece of text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DetectionResult {
    /// At most three matches, highest confidence first.
    pub detected_conditions: Vec<ConditionMatch>,
    pub overall_risk: RiskTier,
    /// At most three distinct strings.
    pub recommendations: Vec<String>,
}
