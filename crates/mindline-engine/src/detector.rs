//! Keyword-based condition detection.
//!
//! Every lexicon entry is scored against the lower-cased input:
//!
//! | signal                                   | points |
//! |------------------------------------------|--------|
//! | illness name appears in the text         | 0.50   |
//! | each derived symptom found in the text   | 0.10   |
//! | each derived keyword found in the text   | 0.05   |
//!
//! Points are kept in hundredths so the 0.2 retention threshold compares
//! exactly. Retained matches are ranked by confidence (ties keep lexicon
//! order) and truncated to three; risk and recommendations are computed over
//! every retained match before truncation.

use std::sync::Arc;

use mindline_core::models::condition::{
    ConditionMatch, ConditionRecord, DetectionResult, RiskTier, Severity,
};

use crate::lexicon::Lexicon;

const ILLNESS_POINTS: u32 = 50;
const SYMPTOM_POINTS: u32 = 10;
const KEYWORD_POINTS: u32 = 5;
const MAX_POINTS: u32 = 100;
const RETENTION_POINTS: u32 = 20;

/// Confidence strictly above this marks the result high risk.
const HIGH_CONFIDENCE: f64 = 0.7;

const MAX_CONDITIONS: usize = 3;
const MAX_RECOMMENDATIONS: usize = 3;

static HIGH_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Consider seeking professional mental health support",
    "Reach out to a trusted friend or family member",
    "Consider contacting a mental health crisis line if needed",
];

static MODERATE_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Monitor your symptoms and consider professional consultation",
    "Practice self-care and stress management techniques",
    "Consider journaling to track your mood patterns",
];

static LOW_RISK_RECOMMENDATIONS: [&str; 3] = [
    "Continue maintaining good mental health habits",
    "Practice regular self-care and mindfulness",
    "Stay connected with supportive people in your life",
];

/// Illness-name fragment and the advice appended for it. Only the first
/// matching fragment applies to a given condition.
static CONDITION_RECOMMENDATIONS: [(&str, [&str; 2]); 3] = [
    (
        "depression",
        [
            "Focus on activities that bring you joy and meaning",
            "Maintain regular sleep and meal schedules",
        ],
    ),
    (
        "anxiety",
        [
            "Practice deep breathing and relaxation techniques",
            "Consider mindfulness or meditation practices",
        ],
    ),
    (
        "bipolar",
        [
            "Monitor your mood patterns and energy levels",
            "Maintain a consistent daily routine",
        ],
    ),
];

/// Scores free text against a shared, immutable lexicon.
#[derive(Debug, Clone)]
pub struct ConditionDetector {
    lexicon: Arc<Lexicon>,
}

impl ConditionDetector {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn analyze_text(&self, text: &str) -> DetectionResult {
        let text = text.to_lowercase();

        let mut retained: Vec<ConditionMatch> = self
            .lexicon
            .conditions()
            .iter()
            .filter_map(|record| score_condition(record, &text))
            .collect();

        // `sort_by` is stable, so equal confidences keep lexicon order.
        retained.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

        let overall_risk = overall_risk(&retained);
        let recommendations = recommendations(&retained, overall_risk);

        retained.truncate(MAX_CONDITIONS);

        DetectionResult {
            detected_conditions: retained,
            overall_risk,
            recommendations,
        }
    }
}

/// Score one record against already lower-cased text. Returns `None` when
/// the score falls below the retention threshold.
pub fn score_condition(record: &ConditionRecord, text: &str) -> Option<ConditionMatch> {
    let mut points = 0;

    if text.contains(&record.illness.to_lowercase()) {
        points += ILLNESS_POINTS;
    }

    let matched_symptoms: Vec<String> = record
        .symptoms
        .iter()
        .filter(|symptom| text.contains(symptom.to_lowercase().as_str()))
        .cloned()
        .collect();
    points += SYMPTOM_POINTS * matched_symptoms.len() as u32;

    let matched_keywords = record
        .keywords
        .iter()
        .filter(|keyword| text.contains(keyword.to_lowercase().as_str()))
        .count();
    points += KEYWORD_POINTS * matched_keywords as u32;

    if points < RETENTION_POINTS {
        return None;
    }

    Some(ConditionMatch {
        illness: record.illness.clone(),
        definition: record.definition.clone(),
        confidence: f64::from(points.min(MAX_POINTS)) / 100.0,
        severity: record.severity,
        matched_symptoms,
    })
}

fn overall_risk(retained: &[ConditionMatch]) -> RiskTier {
    if retained.is_empty() {
        return RiskTier::Low;
    }

    let high = retained
        .iter()
        .any(|m| m.confidence > HIGH_CONFIDENCE || m.severity == Severity::Severe);

    if high {
        RiskTier::High
    } else if retained.len() > 1 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

/// Base advice for the risk tier, then condition-specific advice,
/// de-duplicated and cut to three. The base set alone fills all three slots,
/// so condition-specific advice only survives if the base set ever shrinks.
fn recommendations(retained: &[ConditionMatch], risk: RiskTier) -> Vec<String> {
    let base = match risk {
        RiskTier::High => HIGH_RISK_RECOMMENDATIONS,
        RiskTier::Moderate => MODERATE_RISK_RECOMMENDATIONS,
        RiskTier::Low => LOW_RISK_RECOMMENDATIONS,
    };

    let specific = retained.iter().flat_map(|m| {
        let name = m.illness.to_lowercase();
        CONDITION_RECOMMENDATIONS
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map(|(_, advice)| advice.as_slice())
            .unwrap_or_default()
    });

    let mut out: Vec<String> = Vec::with_capacity(MAX_RECOMMENDATIONS);
    for advice in base.iter().chain(specific) {
        if out.len() == MAX_RECOMMENDATIONS {
            break;
        }
        if !out.iter().any(|existing| existing == advice) {
            out.push(advice.to_string());
        }
    }
    out
}
