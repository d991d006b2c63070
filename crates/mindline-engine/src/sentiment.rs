//! Word-list sentiment heuristic, used whenever remote completion is not
//! available or returns something unusable.

use mindline_core::models::sentiment::{Sentiment, SentimentResult};

pub const POSITIVE_TERMS: [&str; 7] = ["good", "great", "happy", "calm", "peaceful", "hopeful", "joy"];

pub const NEGATIVE_TERMS: [&str; 7] = [
    "sad",
    "depressed",
    "anxious",
    "worried",
    "overwhelmed",
    "angry",
    "hopeless",
];

const NEGATIVE_FOLLOW_UPS: [&str; 3] = [
    "Would you like to share what feels most difficult now?",
    "What has helped you even a little in similar moments?",
    "Is there someone you would like to reach out to today?",
];

const POSITIVE_FOLLOW_UPS: [&str; 2] = [
    "What contributed most to feeling this way today?",
    "How can you carry this into tomorrow?",
];

const NEUTRAL_FOLLOW_UPS: [&str; 2] = [
    "What feeling stands out to you right now?",
    "What small step could improve your day?",
];

const BASE_CONFIDENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 0.9;

/// Score polarity by counting positive and negative terms (substring match,
/// each term counted at most once).
pub fn analyze(text: &str) -> SentimentResult {
    let text = text.to_lowercase();
    let mut score: i32 = 0;
    let mut indicators: Vec<String> = Vec::new();

    for term in POSITIVE_TERMS {
        if text.contains(term) {
            score += 1;
            indicators.push(term.to_string());
        }
    }
    for term in NEGATIVE_TERMS {
        if text.contains(term) {
            score -= 1;
            indicators.push(term.to_string());
        }
    }

    let sentiment = match score {
        s if s > 0 => Sentiment::Positive,
        s if s < 0 => Sentiment::Negative,
        _ => Sentiment::Neutral,
    };

    let confidence = (f64::from(score.abs()) / 5.0 + BASE_CONFIDENCE).min(MAX_CONFIDENCE);

    SentimentResult {
        sentiment,
        confidence,
        emotional_indicators: indicators,
        suggested_follow_ups: follow_ups(sentiment),
    }
}

/// Follow-up prompts depend only on polarity, not on confidence or on which
/// terms matched.
pub fn follow_ups(sentiment: Sentiment) -> Vec<String> {
    let prompts: &[&str] = match sentiment {
        Sentiment::Negative => &NEGATIVE_FOLLOW_UPS,
        Sentiment::Positive => &POSITIVE_FOLLOW_UPS,
        Sentiment::Neutral => &NEUTRAL_FOLLOW_UPS,
    };
    prompts.iter().map(|p| p.to_string()).collect()
}
