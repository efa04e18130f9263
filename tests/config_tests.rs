//! Configuration tests - file loading and orchestrator construction

use blockwars::core::{ConfigError, EngineConfig, GridOrchestrator};
use blockwars::types::{FillDirection, GridSnapshot};

#[test]
fn test_orchestrator_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    std::fs::write(
        &path,
        r##"{
            "rows": 4,
            "columns": 3,
            "fill_direction": "upward",
            "seed": 0,
            "palette": [
                {"key": "ember", "hex": "#f97316"},
                {"key": "moss", "hex": "#65a30d"},
                {"key": "ember", "hex": "#000000"}
            ]
        }"##,
    )
    .unwrap();

    let config = EngineConfig::load(&path).unwrap();
    let mut engine = GridOrchestrator::from_config(&config);
    assert_eq!(engine.row_count(), 4);
    assert_eq!(engine.column_count(), 3);
    assert_eq!(engine.fill_direction(), FillDirection::Upward);
    assert_eq!(engine.spawn_seed(), 1);
    assert_eq!(engine.palette().len(), 2);
    assert_eq!(engine.pool().len(), 48);

    let plan = engine.prepare_fill(&GridSnapshot::default());
    assert_eq!(plan.len(), 12);
    assert!(plan.iter().all(|i| i.spawn_row == 4));
    assert!(plan
        .iter()
        .all(|i| i.spec.color_key == "ember" || i.spec.color_key == "moss"));
}

#[test]
fn test_config_parse_error_is_reported() {
    let err = EngineConfig::from_json("{ rows: ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_default_config_matches_default_orchestrator() {
    let from_config = GridOrchestrator::from_config(&EngineConfig::default());
    let direct = GridOrchestrator::new();
    assert_eq!(from_config.pool(), direct.pool());
    assert_eq!(from_config.palette(), direct.palette());
}
