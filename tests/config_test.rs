use hypernymgraph::config::*;
use hypernymgraph::types::{FailurePolicy, PartOfSpeech};
use tempfile::TempDir;

#[test]
fn test_default_config_matches_reference_format() {
    let config = HypernymGraphConfig::default();
    assert_eq!(config.delimiter, ';');
    assert_eq!(config.lemma_separator, ',');
    assert_eq!(config.sense_prefix.name, "oewn");
    assert_eq!(config.sense_prefix.iri, "http://en-word.net/id/");
    assert_eq!(config.relation_prefix.name, "wn");
    assert_eq!(config.failure_policy, FailurePolicy::FailFast);
    assert!(config.part_of_speech.is_none());
}

#[test]
fn test_missing_config_yields_default() {
    let dir = TempDir::new().unwrap();
    let loaded = load_config(&get_config_path(dir.path())).unwrap();
    assert_eq!(loaded, HypernymGraphConfig::default());
}

#[test]
fn test_save_and_load_config() {
    let dir = TempDir::new().unwrap();
    let path = get_config_path(dir.path());
    let config = HypernymGraphConfig {
        failure_policy: FailurePolicy::CollectAndContinue,
        part_of_speech: Some(vec![PartOfSpeech::Adjective, PartOfSpeech::AdjectiveSatellite]),
        inventory_path: Some("oewn.json".to_string()),
        ..HypernymGraphConfig::default()
    };
    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();
    assert_eq!(config, loaded);
    assert!(
        !path.with_extension("tmp").exists(),
        "temporary file should be renamed away"
    );
}

#[test]
fn test_partial_config_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = get_config_path(dir.path());
    std::fs::write(&path, r#"{"parallel": false}"#).unwrap();
    let loaded = load_config(&path).unwrap();
    assert!(!loaded.parallel);
    assert_eq!(loaded.delimiter, ';');
}

#[test]
fn test_non_ascii_delimiter_rejected() {
    let dir = TempDir::new().unwrap();
    let path = get_config_path(dir.path());
    std::fs::write(&path, r#"{"delimiter": "§"}"#).unwrap();
    assert!(load_config(&path).is_err());
}

#[test]
fn test_unparsable_config_rejected() {
    let dir = TempDir::new().unwrap();
    let path = get_config_path(dir.path());
    std::fs::write(&path, "not json").unwrap();
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse config file"));
}
