use std::sync::Arc;

use mindline_core::models::condition::RiskTier;
use mindline_engine::error::LexiconError;
use mindline_engine::{ConditionDetector, Lexicon};

#[test]
fn loads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mental_illnesses.csv");
    std::fs::write(&path, include_str!("fixtures/conditions.csv")).unwrap();

    let lexicon = Lexicon::load(&path);
    assert_eq!(lexicon.len(), 7);
    assert_eq!(Lexicon::try_load(&path).unwrap(), lexicon);
}

#[test]
fn missing_file_degrades_to_empty_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.csv");

    assert!(matches!(Lexicon::try_load(&path), Err(LexiconError::Read { .. })));

    let lexicon = Lexicon::load(&path);
    assert!(lexicon.is_empty());

    let result = ConditionDetector::new(Arc::new(lexicon)).analyze_text("sad and hopeless");
    assert!(result.detected_conditions.is_empty());
    assert_eq!(result.overall_risk, RiskTier::Low);
}
