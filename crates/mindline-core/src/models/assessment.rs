use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Answers to the daily assessment.
///
/// Free-text fields default to empty. `energy_level` and `social_connection`
/// are coerced leniently: integers, floats (rounded) and numeric strings are
/// accepted, anything else is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct AssessmentInput {
    pub journal_entry: String,
    /// One of the labels in the emotional-theme picker, e.g. "Peaceful and calm".
    pub emotional_theme: String,
    pub memorable_moment: String,
    #[serde(deserialize_with = "lenient_level")]
    pub energy_level: Option<i32>,
    pub physical_tension: String,
    pub positive_experience: String,
    pub emotional_need: String,
    pub heart_weather: String,
    pub energy_drain: String,
    pub coping_mechanism: String,
    #[serde(deserialize_with = "lenient_level")]
    pub social_connection: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Indicators {
    pub emotional_wellbeing: i32,
    pub energy_level: i32,
    pub social_connection: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentResult {
    /// Mean of the three indicators, rounded to one decimal place.
    pub overall_score: f64,
    pub indicators: Indicators,
    #[serde(default)]
    pub summary: Vec<String>,
}

fn lenient_level<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_level))
}

fn coerce_level(value: &serde_json::Value) -> Option<i32> {
    let number = match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        serde_json::Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }
        _ => None,
    }?;
    i32::try_from(number).ok()
}
