//! Drives the `mindline` binary end to end against the bundled lexicon,
//! with remote completion disabled.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn bundled_lexicon() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/mental_illnesses.csv")
}

fn mindline(config_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mindline"))
        .args(args)
        .env("MINDLINE_CONFIG", config_dir.join("config.json"))
        .env("MINDLINE_LEXICON", bundled_lexicon())
        .env_remove("MINDLINE_MODEL_ID")
        .env_remove("MINDLINE_REGION")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap()
}

fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn detect_rejects_short_text() {
    let dir = tempfile::tempdir().unwrap();
    let output = mindline(dir.path(), &["detect", "  so sad  "]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn detect_reports_matches_and_disclaimer() {
    let dir = tempfile::tempdir().unwrap();
    let output = mindline(
        dir.path(),
        &["detect", "I feel sad and hopeless with a loss of interest and poor sleep"],
    );
    let json = stdout_json(&output);

    let detected = json["detectedConditions"].as_array().unwrap();
    assert_eq!(detected.len(), 1);
    assert_eq!(detected[0]["illness"], "Major Depressive Disorder");
    assert_eq!(detected[0]["confidence"], 0.25);
    assert_eq!(detected[0]["matchedSymptoms"], serde_json::json!(["sleep"]));
    assert_eq!(json["overallRisk"], "low");
    assert_eq!(json["recommendations"].as_array().unwrap().len(), 3);
    assert!(json["disclaimer"].as_str().unwrap().contains("informational purposes"));
}

#[test]
fn depressive_text_is_high_risk_with_bundled_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let text = "I have been feeling very sad and depressed lately. I feel hopeless and worthless, and I cry often.";
    let json = stdout_json(&mindline(dir.path(), &["detect", text]));

    assert_eq!(json["overallRisk"], "high");
    let names: Vec<&str> = json["detectedConditions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["illness"].as_str().unwrap())
        .collect();
    assert_eq!(
        names,
        vec!["Major Depressive Disorder", "Psychotic Depression", "Postpartum Depression"]
    );
    assert!(names.iter().any(|n| n.to_lowercase().contains("depression")));
    assert_eq!(
        json["recommendations"][0],
        "Consider seeking professional mental health support"
    );
}

#[test]
fn checkin_uses_heuristics_without_remote() {
    let dir = tempfile::tempdir().unwrap();
    let output = mindline(dir.path(), &["checkin", "Feeling anxious and sad about work"]);
    let json = stdout_json(&output);

    assert_eq!(json["analysis"]["sentiment"], "negative");
    assert_eq!(
        json["analysis"]["suggestedFollowUps"].as_array().unwrap().len(),
        3
    );
    assert!(json["reply"].as_str().unwrap().contains("breath"));
}

#[test]
fn assess_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("assessment.json");
    std::fs::write(
        &input,
        r#"{"emotionalTheme":"Happy and joyful","energyLevel":"8","socialConnection":9.2}"#,
    )
    .unwrap();

    let output = mindline(dir.path(), &["assess", "--file", input.to_str().unwrap()]);
    let json = stdout_json(&output);

    assert_eq!(json["overallScore"], 8.3);
    assert_eq!(json["indicators"]["emotionalWellbeing"], 8);
}

#[test]
fn report_summarises_history() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("history.json");
    std::fs::write(
        &history,
        r#"[
            {"emotionalTheme":"Sad and melancholic","energyLevel":2},
            {"emotionalTheme":"Anxious and worried","energyLevel":"3"},
            {"emotionalTheme":"Happy and joyful","energyLevel":5}
        ]"#,
    )
    .unwrap();

    let json = stdout_json(&mindline(
        dir.path(),
        &["report", "--file", history.to_str().unwrap()],
    ));

    assert_eq!(json["totalAssessments"], 3);
    assert_eq!(json["averageScore"], 5.7);
    assert_eq!(json["trend"], "stable");
    assert_eq!(json["keyInsights"].as_array().unwrap().len(), 2);
    assert_eq!(
        json["riskFactors"],
        serde_json::json!([
            "Persistent low energy levels",
            "Predominant negative emotional themes"
        ])
    );
}

#[test]
fn conditions_lists_the_lexicon() {
    let dir = tempfile::tempdir().unwrap();
    let json = stdout_json(&mindline(dir.path(), &["conditions"]));

    let conditions = json.as_array().unwrap();
    assert_eq!(conditions.len(), 27);
    assert_eq!(conditions[0]["illness"], "Major Depressive Disorder");
    assert_eq!(conditions[0]["severity"], "moderate");
}

#[test]
fn config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    let first = mindline(dir.path(), &["config", "init"]);
    assert!(first.status.success());
    assert!(dir.path().join("config.json").exists());

    let second = mindline(dir.path(), &["config", "init"]);
    assert!(!second.status.success());

    let shown = stdout_json(&mindline(dir.path(), &["config", "show"]));
    assert_eq!(shown["config_version"], 1);
    assert!(shown.get("completion").is_none());
}
