//! Condition lexicon: the static table every detector call reads.
//!
//! The external source supplies only two significant columns, the illness
//! name and a free-text definition. Symptoms, keywords and severity are
//! derived here by substring search against fixed term tables, so two loads
//! of the same source always produce the same lexicon.

use std::path::Path;

use mindline_core::models::condition::{ConditionRecord, Severity};
use tracing::{debug, info, warn};

use crate::error::LexiconError;

/// Symptom terms searched for in a condition's definition. Order matters:
/// derived symptom lists follow this order.
pub const SYMPTOM_TERMS: &[&str] = &[
    "sadness",
    "anxiety",
    "worry",
    "panic",
    "fear",
    "depression",
    "mania",
    "mood",
    "hallucinations",
    "delusions",
    "disorganized",
    "intrusive thoughts",
    "compulsions",
    "hyperactivity",
    "inattention",
    "impulsivity",
    "social withdrawal",
    "communication",
    "eating",
    "sleep",
    "substance",
    "trauma",
    "stress",
    "personality",
    "behavior",
];

/// Clinical keyword terms, grouped by disorder family. A term listed under
/// more than one family is only kept once, at its first position.
pub const KEYWORD_FAMILIES: &[(&str, &[&str])] = &[
    (
        "depression",
        &[
            "depressed",
            "sad",
            "hopeless",
            "worthless",
            "empty",
            "crying",
            "tears",
            "loss of interest",
        ],
    ),
    (
        "anxiety",
        &[
            "anxious",
            "worried",
            "panic",
            "fear",
            "nervous",
            "restless",
            "overwhelmed",
            "stress",
        ],
    ),
    (
        "bipolar",
        &[
            "manic",
            "euphoric",
            "irritable",
            "racing thoughts",
            "impulsive",
            "grandiose",
            "elevated",
        ],
    ),
    (
        "ptsd",
        &[
            "trauma",
            "flashback",
            "nightmare",
            "triggered",
            "hypervigilant",
            "avoidance",
            "intrusive",
        ],
    ),
    (
        "ocd",
        &[
            "obsessive",
            "compulsive",
            "rituals",
            "checking",
            "contamination",
            "intrusive thoughts",
        ],
    ),
    (
        "adhd",
        &[
            "distracted",
            "hyperactive",
            "impulsive",
            "inattentive",
            "restless",
            "disorganized",
            "focus",
        ],
    ),
    (
        "eating",
        &[
            "binge",
            "purge",
            "restrict",
            "body image",
            "weight",
            "food guilt",
            "eating",
        ],
    ),
    (
        "personality",
        &[
            "unstable relationships",
            "identity crisis",
            "manipulation",
            "emptiness",
            "abandonment",
        ],
    ),
    (
        "psychosis",
        &[
            "hallucination",
            "delusion",
            "paranoid",
            "disorganized",
            "catatonic",
            "psychotic",
        ],
    ),
    (
        "sleep",
        &[
            "insomnia",
            "hypersomnia",
            "nightmare",
            "sleep paralysis",
            "restless sleep",
            "fatigue",
        ],
    ),
];

/// Illness-name fragments that mark a condition as severe. Checked first.
pub const SEVERE_TERMS: &[&str] = &[
    "schizophrenia",
    "bipolar i",
    "severe",
    "psychotic",
    "delusional",
    "substance use disorder",
    "anorexia nervosa",
    "borderline personality",
];

/// Illness-name fragments that mark a condition as moderate.
pub const MODERATE_TERMS: &[&str] = &[
    "major depressive",
    "panic disorder",
    "ptsd",
    "ocd",
    "bulimia",
    "adhd",
    "autism",
    "narcissistic",
];

/// The loaded condition table. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexicon {
    conditions: Vec<ConditionRecord>,
}

impl Lexicon {
    /// A lexicon with no conditions. The detector never matches anything
    /// against it.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build one record per row, skipping rows with an empty name or
    /// definition.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let conditions = rows
            .into_iter()
            .filter_map(|(illness, definition)| {
                let record = build_record(illness.as_ref(), definition.as_ref());
                if record.is_none() {
                    debug!(illness = illness.as_ref(), "skipping incomplete lexicon row");
                }
                record
            })
            .collect();
        Self { conditions }
    }

    /// Parse CSV text. The first line is a header and is skipped; only the
    /// first two fields of each row are significant.
    pub fn parse_csv(source: &str) -> Self {
        let rows = source
            .lines()
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                let mut fields = split_fields(line).into_iter();
                let illness = fields.next().unwrap_or_default();
                let definition = fields.next().unwrap_or_default();
                (illness, definition)
            });
        Self::from_rows(rows)
    }

    /// Read and parse a CSV lexicon file.
    pub fn try_load(path: &Path) -> Result<Self, LexiconError> {
        let source = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::parse_csv(&source);
        info!(path = %path.display(), count = lexicon.len(), "lexicon loaded");
        Ok(lexicon)
    }

    /// Like [`Lexicon::try_load`], but an unreadable source yields an empty
    /// lexicon instead of an error.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!(error = %e, "lexicon unavailable, condition detection disabled");
                Self::empty()
            }
        }
    }

    pub fn conditions(&self) -> &[ConditionRecord] {
        &self.conditions
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Build a single record, or `None` if either field is blank.
pub fn build_record(illness: &str, definition: &str) -> Option<ConditionRecord> {
    let illness = illness.trim();
    let definition = definition.trim();
    if illness.is_empty() || definition.is_empty() {
        return None;
    }

    Some(ConditionRecord {
        illness: illness.to_string(),
        definition: definition.to_string(),
        symptoms: symptoms(definition),
        keywords: keywords(illness, definition),
        severity: severity(illness),
    })
}

/// Symptom terms that occur in `definition`, in [`SYMPTOM_TERMS`] order.
pub fn symptoms(definition: &str) -> Vec<String> {
    let text = definition.to_lowercase();
    SYMPTOM_TERMS
        .iter()
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

/// Keyword terms that occur in the illness name or its definition.
pub fn keywords(illness: &str, definition: &str) -> Vec<String> {
    let text = format!("{illness} {definition}").to_lowercase();
    let mut found: Vec<String> = Vec::new();
    for term in KEYWORD_FAMILIES.iter().flat_map(|(_, terms)| terms.iter()) {
        if text.contains(term) && !found.iter().any(|f| f == term) {
            found.push(term.to_string());
        }
    }
    found
}

/// Classify an illness name. Severe terms win over moderate ones.
pub fn severity(illness: &str) -> Severity {
    let name = illness.to_lowercase();
    if SEVERE_TERMS.iter().any(|term| name.contains(term)) {
        Severity::Severe
    } else if MODERATE_TERMS.iter().any(|term| name.contains(term)) {
        Severity::Moderate
    } else {
        Severity::Mild
    }
}

/// Split one CSV line into trimmed fields. Double-quoted fields may contain
/// commas, and `""` inside quotes is a literal quote.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
