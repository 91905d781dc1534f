use hypernymgraph::types::*;

#[test]
fn part_of_speech_as_str_roundtrip() {
    let kinds = vec![
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::AdjectiveSatellite,
        PartOfSpeech::Adverb,
    ];

    for kind in kinds {
        let s = kind.as_str();
        let parsed = PartOfSpeech::from_str(s)
            .unwrap_or_else(|| panic!("failed to parse PartOfSpeech from '{}'", s));
        assert_eq!(kind, parsed, "roundtrip failed for PartOfSpeech::{}", s);
    }
}

#[test]
fn part_of_speech_from_str_unknown_returns_none() {
    assert!(PartOfSpeech::from_str("adj").is_none());
    assert!(PartOfSpeech::from_str("").is_none());
}

#[test]
fn part_of_speech_serializes_as_letter_code() {
    let json = serde_json::to_string(&PartOfSpeech::AdjectiveSatellite).unwrap();
    assert_eq!(json, "\"s\"");
    let parsed: PartOfSpeech = serde_json::from_str("\"a\"").unwrap();
    assert_eq!(parsed, PartOfSpeech::Adjective);
}

#[test]
fn edge_from_resolved_pair_carries_hypernym_relation() {
    let edge = Edge::from(ResolvedPair::new("oewn-00001-a", "oewn-00002-a").unwrap());
    assert_eq!(edge.source, "oewn-00001-a");
    assert_eq!(edge.target, "oewn-00002-a");
    assert_eq!(edge.kind.as_str(), "hypernym");
}

#[test]
fn row_failure_display_names_kind_side_lemma_and_definition() {
    let failure = RowFailure {
        line: 4,
        kind: FailureKind::NoMatch,
        side: Some(Side::Hyponym),
        lemma: "serene, tranquil".to_string(),
        definition: "not agitated".to_string(),
        detail: Some("2 candidate(s), none matching and no override".to_string()),
    };
    assert_eq!(
        failure.to_string(),
        "row 4: no-match on hyponym side for lemma 'serene, tranquil' with definition \
         'not agitated' (2 candidate(s), none matching and no override)"
    );
}

#[test]
fn row_failure_display_without_side() {
    let failure = RowFailure {
        line: 2,
        kind: FailureKind::SelfLoop,
        side: None,
        lemma: "cold".to_string(),
        definition: "having a low temperature".to_string(),
        detail: None,
    };
    assert_eq!(
        failure.to_string(),
        "row 2: self-loop for lemma 'cold' with definition 'having a low temperature'"
    );
}

#[test]
fn failure_policy_default_is_fail_fast() {
    assert_eq!(FailurePolicy::default(), FailurePolicy::FailFast);
}

#[test]
fn input_row_side_selects_matching_half() {
    let row = InputRow {
        line: 2,
        hyponym_lemmas: vec!["scarlet".to_string()],
        hypo_definition: "of a brilliant red".to_string(),
        hypernym_lemmas: vec!["red".to_string()],
        hyper_definition: "of the color of blood".to_string(),
    };
    let (lemmas, definition) = row.side(Side::Hypernym);
    assert_eq!(lemmas, ["red".to_string()]);
    assert_eq!(definition, "of the color of blood");
}

#[test]
fn run_summary_serde_roundtrip() {
    let summary = RunSummary {
        rows_total: 2,
        edges_written: 1,
        failures: vec![RowFailure {
            line: 3,
            kind: FailureKind::MalformedRow,
            side: None,
            lemma: String::new(),
            definition: String::new(),
            detail: Some("expected at least 4 fields, found 2".to_string()),
        }],
        output_hash: "00".to_string(),
        duration_ms: 1,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: RunSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back.failures, summary.failures);
    assert!(!back.is_clean());
}
