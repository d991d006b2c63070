//! Summary of an assessment history, newest assessment first.
//!
//! Each assessment contributes the mean of its energy level (read on a 0-5
//! scale and doubled) and its emotional-theme wellbeing. The trend compares
//! the three most recent energy levels against the three before them.

use mindline_core::models::assessment::AssessmentInput;
use mindline_core::models::report::{ReportSummary, Trend};

use crate::assessment::{DEFAULT_LEVEL, theme_wellbeing};

/// Themes counted as negative in reports. Anger is not one of them.
const DISTRESS_THEMES: [&str; 3] = [
    "Chaotic and overwhelming",
    "Anxious and worried",
    "Sad and melancholic",
];

const TREND_WINDOW: usize = 3;
const TREND_MARGIN: f64 = 0.5;

const LOW_ENERGY_AVERAGE: f64 = 5.0;
const LOW_ENERGY_LEVEL: i32 = 4;
const LOW_ENERGY_SHARE: f64 = 0.3;
const DISTRESS_SHARE: f64 = 0.5;

const NO_DATA: &str = "No data available yet";
const LOW_ENERGY_INSIGHT: &str =
    "Low energy levels detected - consider improving sleep and nutrition";
const DISTRESS_INSIGHT: &str =
    "High frequency of negative emotions - consider stress management techniques";
const BALANCED_INSIGHT: &str = "Your mental health patterns appear balanced";
const LOW_ENERGY_RISK: &str = "Persistent low energy levels";
const DISTRESS_RISK: &str = "Predominant negative emotional themes";

pub fn summarize(assessments: &[AssessmentInput]) -> ReportSummary {
    if assessments.is_empty() {
        return ReportSummary {
            total_assessments: 0,
            average_score: 0.0,
            trend: Trend::Stable,
            key_insights: vec![NO_DATA.to_string()],
            risk_factors: Vec::new(),
        };
    }

    let per_assessment: f64 = assessments
        .iter()
        .map(|a| {
            let energy = energy(a) / 5.0 * 10.0;
            (energy + f64::from(theme_wellbeing(&a.emotional_theme))) / 2.0
        })
        .sum();
    let average = per_assessment / assessments.len() as f64;

    ReportSummary {
        total_assessments: assessments.len(),
        average_score: ((average * 10.0).round() / 10.0).clamp(0.0, 10.0),
        trend: trend(assessments),
        key_insights: insights(assessments),
        risk_factors: risk_factors(assessments),
    }
}

/// `Stable` unless there are at least four assessments and the recent
/// energy average moves by more than half a point.
pub fn trend(assessments: &[AssessmentInput]) -> Trend {
    let recent = &assessments[..assessments.len().min(TREND_WINDOW)];
    let previous = assessments
        .get(TREND_WINDOW..assessments.len().min(TREND_WINDOW * 2))
        .unwrap_or_default();

    if recent.len() < 2 || previous.is_empty() {
        return Trend::Stable;
    }

    let recent_avg = mean_energy(recent);
    let previous_avg = mean_energy(previous);

    if recent_avg > previous_avg + TREND_MARGIN {
        Trend::Improving
    } else if recent_avg < previous_avg - TREND_MARGIN {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

fn insights(assessments: &[AssessmentInput]) -> Vec<String> {
    let mut out = Vec::new();
    if mean_energy(assessments) < LOW_ENERGY_AVERAGE {
        out.push(LOW_ENERGY_INSIGHT.to_string());
    }
    if share(assessments, is_distressed) > DISTRESS_SHARE {
        out.push(DISTRESS_INSIGHT.to_string());
    }
    if out.is_empty() {
        out.push(BALANCED_INSIGHT.to_string());
    }
    out
}

fn risk_factors(assessments: &[AssessmentInput]) -> Vec<String> {
    let mut out = Vec::new();
    if share(assessments, |a| energy(a) < f64::from(LOW_ENERGY_LEVEL)) > LOW_ENERGY_SHARE {
        out.push(LOW_ENERGY_RISK.to_string());
    }
    if share(assessments, is_distressed) > DISTRESS_SHARE {
        out.push(DISTRESS_RISK.to_string());
    }
    out
}

fn energy(assessment: &AssessmentInput) -> f64 {
    f64::from(assessment.energy_level.unwrap_or(DEFAULT_LEVEL))
}

fn mean_energy(assessments: &[AssessmentInput]) -> f64 {
    assessments.iter().map(energy).sum::<f64>() / assessments.len() as f64
}

fn is_distressed(assessment: &AssessmentInput) -> bool {
    DISTRESS_THEMES.iter().any(|t| *t == assessment.emotional_theme)
}

fn share(assessments: &[AssessmentInput], pred: impl Fn(&AssessmentInput) -> bool) -> f64 {
    assessments.iter().filter(|a| pred(a)).count() as f64 / assessments.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(theme: &str, energy: Option<i32>) -> AssessmentInput {
        AssessmentInput {
            emotional_theme: theme.to_string(),
            energy_level: energy,
            ..Default::default()
        }
    }

    #[test]
    fn empty_history() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_assessments, 0);
        assert_eq!(summary.average_score, 0.0);
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.key_insights, vec![NO_DATA]);
        assert!(summary.risk_factors.is_empty());
    }

    #[test]
    fn balanced_history() {
        // (8 + 8) / 2 and (6 + 6) / 2 average to 7.
        let history = [day("Happy and joyful", Some(4)), day("Neutral", Some(3))];
        let summary = summarize(&history);
        assert_eq!(summary.total_assessments, 2);
        assert_eq!(summary.average_score, 7.0);
        assert_eq!(summary.trend, Trend::Stable);
        assert_eq!(summary.key_insights, vec![LOW_ENERGY_INSIGHT]);
        // One of two below 4 is over the 30% share.
        assert_eq!(summary.risk_factors, vec![LOW_ENERGY_RISK]);
    }

    #[test]
    fn distressed_history_raises_both_flags() {
        let history = [
            day("Sad and melancholic", Some(1)),
            day("Anxious and worried", Some(2)),
            day("Peaceful and calm", Some(5)),
        ];
        let summary = summarize(&history);
        assert_eq!(summary.key_insights, vec![LOW_ENERGY_INSIGHT, DISTRESS_INSIGHT]);
        assert_eq!(summary.risk_factors, vec![LOW_ENERGY_RISK, DISTRESS_RISK]);
    }

    #[test]
    fn anger_is_not_counted_as_distress() {
        let history = [
            day("Angry and frustrated", Some(5)),
            day("Angry and frustrated", Some(5)),
        ];
        let summary = summarize(&history);
        assert_eq!(summary.key_insights, vec![BALANCED_INSIGHT]);
        assert!(summary.risk_factors.is_empty());
    }

    #[test]
    fn average_is_clamped_to_ten() {
        let history = [day("Happy and joyful", Some(50))];
        assert_eq!(summarize(&history).average_score, 10.0);
    }

    #[test]
    fn trend_compares_recent_three_with_previous_three() {
        let levels = |levels: &[i32]| -> Vec<AssessmentInput> {
            levels.iter().map(|l| day("", Some(*l))).collect()
        };

        assert_eq!(trend(&levels(&[5, 5, 5])), Trend::Stable);
        assert_eq!(trend(&levels(&[5, 5, 5, 2])), Trend::Improving);
        assert_eq!(trend(&levels(&[1, 2, 3, 4, 4, 4])), Trend::Declining);
        assert_eq!(trend(&levels(&[4, 4, 4, 4, 3, 4])), Trend::Stable);
        // Only the first six are compared.
        assert_eq!(trend(&levels(&[3, 3, 3, 3, 3, 3, 1])), Trend::Stable);
    }

    #[test]
    fn missing_energy_counts_as_default() {
        let history = [day("", None), day("", None), day("", None), day("", Some(3))];
        assert_eq!(trend(&history), Trend::Improving);
    }
}
