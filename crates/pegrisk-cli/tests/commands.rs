use jiff::civil::date;
use pegrisk_cli::cli::EvaluateArgs;
use pegrisk_cli::commands::{build_record, describe, list_models, run_evaluate};
use pegrisk_cli::config::{OutputFormat, PegriskConfig};
use pegrisk_cli::visits::FileVisitCounter;
use pegrisk_core::models::record::FieldValue;
use pegrisk_models::ModelId;

fn args(model: ModelId, fields: &[&str]) -> EvaluateArgs {
    EvaluateArgs {
        model,
        input: None,
        fields: fields.iter().map(|f| f.to_string()).collect(),
        today: Some(date(2025, 1, 1)),
        format: None,
        no_count: false,
    }
}

#[test]
fn lists_all_four_models() {
    let listing = list_models();
    assert_eq!(listing.lines().count(), 4);
    assert!(listing.contains("A-PM"));
    assert!(listing.contains("PRO-MAL"));
}

#[test]
fn describe_emits_field_schema() {
    let json = describe(ModelId::Functional.model()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["fields"][2]["id"], "fvc");
    assert_eq!(value["fields"][2]["kind"]["range"]["step"], 0.1);
}

#[test]
fn field_overrides_parse_by_kind() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("patient.json");
    std::fs::write(&input, r#"{"age": 40, "onset_date": "2023-01-15"}"#).unwrap();

    let record = build_record(
        ModelId::Nutritional.model(),
        Some(&input),
        &["age=62".to_string(), "bmi=21.5".to_string(), "niv_use=yes".to_string()],
    )
    .unwrap();

    assert_eq!(record.get("age"), Some(&FieldValue::Number(62.0)));
    assert_eq!(record.get("bmi"), Some(&FieldValue::Number(21.5)));
    assert_eq!(record.get("niv_use"), Some(&FieldValue::Choice("yes".to_string())));
    assert_eq!(
        record.get("onset_date"),
        Some(&FieldValue::Date(date(2023, 1, 15)))
    );
}

#[test]
fn malformed_overrides_are_rejected() {
    let model = ModelId::Functional.model();
    assert!(build_record(model, None, &["age".to_string()]).is_err());
    assert!(build_record(model, None, &["age=old".to_string()]).is_err());
}

#[test]
fn evaluate_renders_and_counts_a_visit() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = PegriskConfig::default();

    let output = run_evaluate(
        &args(ModelId::Anamnestic, &["age=55", "onset_site=bulbar", "niv_use=yes"]),
        &config,
        &config_path,
    )
    .unwrap();
    assert!(output.contains("Risk: High"));

    let counter = FileVisitCounter::new(dir.path().join("visits.json"));
    assert_eq!(counter.load().unwrap().total, 1);
}

#[test]
fn evaluate_json_output_and_no_count() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let config = PegriskConfig::default();

    let mut evaluate_args = args(
        ModelId::ProMal,
        &["albumin=3.5", "prealbumin=15", "transferrin=180"],
    );
    evaluate_args.format = Some(OutputFormat::Json);
    evaluate_args.no_count = true;

    let output = run_evaluate(&evaluate_args, &config, &config_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["kind"], "pro_mal");
    assert_eq!(value["category"], "short_survival");
    assert!(!dir.path().join("visits.json").exists());
}

#[test]
fn invalid_input_is_reported_and_not_counted() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    let mut config = PegriskConfig::default();
    config.visit_counter.path = Some(dir.path().join("counter.json"));

    let err = run_evaluate(
        &args(ModelId::Anamnestic, &["age=15", "onset_site=bulbar"]),
        &config,
        &config_path,
    )
    .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("invalid input"));
    assert!(message.contains("Use of NIV at Evaluation is required"));
    assert!(!dir.path().join("counter.json").exists());
}
