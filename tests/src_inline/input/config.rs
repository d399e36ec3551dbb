use super::*;
use crate::model::criteria::Criterion;
use crate::model::errors::ModelError;
use crate::model::profiles::ProfileIndex;

fn criteria_json(value: f64) -> String {
    let fields = Criterion::ALL
        .iter()
        .map(|c| format!("\"{}\": {}", c.name(), value))
        .collect::<Vec<_>>();
    format!("{{{}}}", fields.join(", "))
}

#[test]
fn test_parse_weights() {
    let w = parse_weights(&criteria_json(0.5)).unwrap();
    assert_eq!(w.total(), 4.0);
}

#[test]
fn test_parse_weights_missing_criterion() {
    let err = parse_weights(r#"{"energy_kj": 1.0}"#).unwrap_err();
    assert!(matches!(
        err,
        InputError::Model(ModelError::MissingCriterion(_))
    ));
}

#[test]
fn test_parse_weights_bad_json() {
    let err = parse_weights("{not json").unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}

#[test]
fn test_parse_profiles() {
    // Identical profiles satisfy the ordering constraint.
    let parts = ProfileIndex::ALL
        .iter()
        .map(|p| format!("\"{}\": {}", p.name(), criteria_json(1.0)))
        .collect::<Vec<_>>();
    let text = format!("{{{}}}", parts.join(", "));
    let set = parse_profiles(&text).unwrap();
    assert_eq!(set.profile(ProfileIndex::B3).get(Criterion::FiberG), 1.0);
}

#[test]
fn test_parse_profiles_missing_profile() {
    let text = format!("{{\"b1\": {}}}", criteria_json(1.0));
    let err = parse_profiles(&text).unwrap_err();
    assert!(matches!(
        err,
        InputError::Model(ModelError::MissingProfile(ref name)) if name == "b2"
    ));
}

#[test]
fn test_load_profiles_reads_exported_json() {
    let dir = std::env::temp_dir().join(format!("supernutri_config_test_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("profiles.json");

    let rows = (1..=5)
        .map(|v| crate::model::criteria::CriterionValues::new([v as f64; 8]))
        .collect::<Vec<_>>();
    let set = crate::pipeline::stage3_profiles::build_profiles(&rows).unwrap();
    std::fs::write(&path, crate::report::json::render_profiles_json(&set).unwrap()).unwrap();

    let loaded = load_profiles(&path).unwrap();
    assert_eq!(loaded, set);
}
