//! Daily assessment scoring.

use mindline_core::models::assessment::{AssessmentInput, AssessmentResult, Indicators};

/// Emotional-theme labels that score as positive wellbeing.
pub const POSITIVE_THEMES: [&str; 3] = [
    "Peaceful and calm",
    "Happy and joyful",
    "Hopeful and optimistic",
];

/// Emotional-theme labels that score as negative wellbeing.
pub const NEGATIVE_THEMES: [&str; 4] = [
    "Chaotic and overwhelming",
    "Anxious and worried",
    "Sad and melancholic",
    "Angry and frustrated",
];

const POSITIVE_WELLBEING: i32 = 8;
const NEGATIVE_WELLBEING: i32 = 3;
const NEUTRAL_WELLBEING: i32 = 6;

/// Used when energy or social connection is absent.
pub const DEFAULT_LEVEL: i32 = 5;

const LOW_ENERGY: &str = "Energy appears low; consider sleep and gentle activity.";
const LIMITED_CONNECTION: &str = "Social connection is limited; small reaches can help.";
const NEGATIVE_TONE: &str = "Emotional tone leans negative; grounding may help.";
const BALANCED: &str = "Patterns look balanced overall.";

/// Score an assessment. Energy and social connection pass through unchanged,
/// whatever scale the caller used.
pub fn score(input: &AssessmentInput) -> AssessmentResult {
    let emotional_wellbeing = theme_wellbeing(&input.emotional_theme);
    let energy_level = input.energy_level.unwrap_or(DEFAULT_LEVEL);
    let social_connection = input.social_connection.unwrap_or(DEFAULT_LEVEL);

    // Levels are caller-supplied and may sit anywhere in the i32 range.
    let mean = (f64::from(emotional_wellbeing)
        + f64::from(energy_level)
        + f64::from(social_connection))
        / 3.0;
    let overall_score = (mean * 10.0).round() / 10.0;

    let mut summary = Vec::new();
    if energy_level < 5 {
        summary.push(LOW_ENERGY.to_string());
    }
    if social_connection < 5 {
        summary.push(LIMITED_CONNECTION.to_string());
    }
    if emotional_wellbeing <= 4 {
        summary.push(NEGATIVE_TONE.to_string());
    }
    if summary.is_empty() {
        summary.push(BALANCED.to_string());
    }

    AssessmentResult {
        overall_score,
        indicators: Indicators {
            emotional_wellbeing,
            energy_level,
            social_connection,
        },
        summary,
    }
}

/// Unrecognised themes count as neutral.
pub fn theme_wellbeing(theme: &str) -> i32 {
    if POSITIVE_THEMES.iter().any(|t| *t == theme) {
        POSITIVE_WELLBEING
    } else if NEGATIVE_THEMES.iter().any(|t| *t == theme) {
        NEGATIVE_WELLBEING
    } else {
        NEUTRAL_WELLBEING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(theme: &str, energy: Option<i32>, social: Option<i32>) -> AssessmentInput {
        AssessmentInput {
            emotional_theme: theme.to_string(),
            energy_level: energy,
            social_connection: social,
            ..Default::default()
        }
    }

    #[test]
    fn peaceful_high_energy() {
        let result = score(&input("Peaceful and calm", Some(8), Some(9)));
        assert_eq!(result.indicators.emotional_wellbeing, 8);
        assert_eq!(result.indicators.energy_level, 8);
        assert_eq!(result.indicators.social_connection, 9);
        assert_eq!(result.overall_score, 8.3);
        assert_eq!(result.summary, vec![BALANCED]);
    }

    #[test]
    fn struggling_day_collects_every_advisory() {
        let result = score(&input("Anxious and worried", Some(4), Some(3)));
        assert_eq!(result.indicators.emotional_wellbeing, 3);
        assert_eq!(result.overall_score, 3.3);
        assert_eq!(result.summary, vec![LOW_ENERGY, LIMITED_CONNECTION, NEGATIVE_TONE]);
    }

    #[test]
    fn missing_levels_default_to_five() {
        let result = score(&input("Something else entirely", None, None));
        assert_eq!(result.indicators.emotional_wellbeing, 6);
        assert_eq!(result.indicators.energy_level, 5);
        assert_eq!(result.indicators.social_connection, 5);
        assert_eq!(result.overall_score, 5.3);
        assert_eq!(result.summary, vec![BALANCED]);
    }

    #[test]
    fn theme_match_is_exact() {
        assert_eq!(theme_wellbeing("Happy and joyful"), 8);
        assert_eq!(theme_wellbeing("happy and joyful"), 6);
        assert_eq!(theme_wellbeing("Sad and melancholic"), 3);
        assert_eq!(theme_wellbeing(""), 6);
    }

    #[test]
    fn rounds_to_one_decimal() {
        // (3 + 1 + 1) / 3 = 1.666…
        assert_eq!(score(&input("Angry and frustrated", Some(1), Some(1))).overall_score, 1.7);
        // (8 + 10 + 10) / 3 = 9.333…
        assert_eq!(score(&input("Happy and joyful", Some(10), Some(10))).overall_score, 9.3);
    }

    #[test]
    fn extreme_levels_do_not_overflow() {
        let high = score(&input("Nothing in particular", Some(i32::MAX), Some(i32::MAX)));
        assert_eq!(high.indicators.energy_level, i32::MAX);
        // (6 + 2 * 2147483647) / 3 = 1431655766.666…
        assert_eq!(high.overall_score, 1431655766.7);
        assert_eq!(high.summary, vec![BALANCED]);

        let low = score(&input("Sad and melancholic", Some(i32::MIN), Some(i32::MIN)));
        assert!(low.overall_score.is_finite());
        assert!(low.overall_score < 0.0);
        assert_eq!(low.summary, vec![LOW_ENERGY, LIMITED_CONNECTION, NEGATIVE_TONE]);
    }

    #[test]
    fn repeated_scoring_is_identical() {
        let answers = input("Chaotic and overwhelming", Some(2), None);
        let first = score(&answers);
        for _ in 0..3 {
            assert_eq!(score(&answers), first);
        }
    }
}
