use hypernymgraph::config::{HypernymGraphConfig, PrefixDecl};
use hypernymgraph::emitter::{content_hash, format_edge, format_header, EdgeEmitter};
use hypernymgraph::errors::HypernymGraphError;
use hypernymgraph::types::*;

fn pair(hypo: &str, hyper: &str) -> ResolvedPair {
    ResolvedPair::new(hypo, hyper).unwrap()
}

#[test]
fn test_header_declares_both_prefixes() {
    let header = format_header(&HypernymGraphConfig::default());
    assert_eq!(
        header,
        "@prefix oewn: <http://en-word.net/id/> .\n\
         @prefix wn: <http://globalwordnet.github.io/schemas/wn.rdf#> .\n\n"
    );
}

#[test]
fn test_edge_line_format() {
    let config = HypernymGraphConfig::default();
    let edge = Edge::from(pair("oewn-01260684-a", "oewn-01259391-a"));
    assert_eq!(
        format_edge(&edge, &config.sense_prefix, &config.relation_prefix),
        "oewn:oewn-01260684-a wn:hypernym oewn:oewn-01259391-a .\n"
    );
}

#[test]
fn test_custom_prefix_names() {
    let sense = PrefixDecl {
        name: "s".to_string(),
        iri: "urn:s:".to_string(),
    };
    let rel = PrefixDecl {
        name: "r".to_string(),
        iri: "urn:r:".to_string(),
    };
    let edge = Edge::from(pair("a1", "b2"));
    assert_eq!(format_edge(&edge, &sense, &rel), "s:a1 r:hypernym s:b2 .\n");
}

#[test]
fn test_emitter_writes_header_then_edges_in_call_order() {
    let config = HypernymGraphConfig::default();
    let mut out = Vec::new();
    let mut emitter = EdgeEmitter::new(&mut out, &config).unwrap();
    emitter.emit_pair(&pair("b", "c")).unwrap();
    emitter.emit_pair(&pair("a", "c")).unwrap();
    assert_eq!(emitter.edges_written(), 2);
    let stats = emitter.finish().unwrap();
    assert_eq!(stats.edges_written, 2);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "");
    assert_eq!(lines[3], "oewn:b wn:hypernym oewn:c .");
    assert_eq!(lines[4], "oewn:a wn:hypernym oewn:c .");
}

#[test]
fn test_emitter_hash_covers_all_bytes() {
    let config = HypernymGraphConfig::default();
    let mut out = Vec::new();
    let mut emitter = EdgeEmitter::new(&mut out, &config).unwrap();
    emitter.emit_pair(&pair("x", "y")).unwrap();
    let stats = emitter.finish().unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(stats.output_hash, content_hash(&text));
    assert_eq!(stats.output_hash.len(), 64);
}

#[test]
fn test_empty_run_still_writes_header() {
    let config = HypernymGraphConfig::default();
    let mut out = Vec::new();
    let stats = EdgeEmitter::new(&mut out, &config).unwrap().finish().unwrap();
    assert_eq!(stats.edges_written, 0);
    assert_eq!(String::from_utf8(out).unwrap(), format_header(&config));
}

#[test]
fn test_self_loop_pair_cannot_be_built() {
    assert!(ResolvedPair::new("oewn-00002-s", "oewn-00002-s").is_none());
}

#[test]
fn test_emitter_refuses_self_loop_edge() {
    let config = HypernymGraphConfig::default();
    let mut out = Vec::new();
    let mut emitter = EdgeEmitter::new(&mut out, &config).unwrap();
    emitter.emit_pair(&pair("a", "b")).unwrap();

    let self_loop = Edge {
        source: "x".to_string(),
        target: "x".to_string(),
        kind: RelationKind::Hypernym,
    };
    let err = emitter.emit(&self_loop).unwrap_err();
    assert!(matches!(err, HypernymGraphError::SelfLoop { ref sense_id } if sense_id == "x"));
    assert_eq!(emitter.edges_written(), 1);
    emitter.finish().unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("oewn:x"));
    assert!(text.ends_with("oewn:a wn:hypernym oewn:b .\n"));
}
