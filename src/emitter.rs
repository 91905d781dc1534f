use std::io::Write;

use sha2::{Digest, Sha256};

use crate::config::{HypernymGraphConfig, PrefixDecl};
use crate::errors::{HypernymGraphError, Result};
use crate::types::{Edge, ResolvedPair};

/// Counters reported once emission is done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitStats {
    pub edges_written: usize,
    /// Hex SHA-256 of every byte written, header included.
    pub output_hash: String,
}

/// Formats the `@prefix` header that opens the output.
pub fn format_header(config: &HypernymGraphConfig) -> String {
    let mut out = String::new();
    for prefix in [&config.sense_prefix, &config.relation_prefix] {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix.name, prefix.iri));
    }
    out.push('\n');
    out
}

/// Formats one edge as a Turtle triple, newline included.
pub fn format_edge(edge: &Edge, sense_prefix: &PrefixDecl, relation_prefix: &PrefixDecl) -> String {
    format!(
        "{sense}:{} {rel}:{} {sense}:{} .\n",
        edge.source,
        edge.kind.as_str(),
        edge.target,
        sense = sense_prefix.name,
        rel = relation_prefix.name,
    )
}

/// Streams edges to a writer, one complete line per edge.
///
/// Lines are written in the order `emit` is called. Each line goes out in a
/// single `write_all`, so an interrupted run never leaves half an edge behind.
pub struct EdgeEmitter<W: Write> {
    writer: W,
    hasher: Sha256,
    sense_prefix: PrefixDecl,
    relation_prefix: PrefixDecl,
    edges_written: usize,
}

impl<W: Write> EdgeEmitter<W> {
    /// Creates an emitter and writes the prefix header.
    pub fn new(writer: W, config: &HypernymGraphConfig) -> Result<Self> {
        let mut emitter = Self {
            writer,
            hasher: Sha256::new(),
            sense_prefix: config.sense_prefix.clone(),
            relation_prefix: config.relation_prefix.clone(),
            edges_written: 0,
        };
        emitter.write_chunk(&format_header(config))?;
        Ok(emitter)
    }

    /// Writes one edge. A self-loop is refused and nothing is written.
    pub fn emit(&mut self, edge: &Edge) -> Result<()> {
        if edge.source == edge.target {
            return Err(HypernymGraphError::SelfLoop {
                sense_id: edge.source.clone(),
            });
        }
        let line = format_edge(edge, &self.sense_prefix, &self.relation_prefix);
        self.write_chunk(&line)?;
        self.edges_written += 1;
        Ok(())
    }

    /// Writes the edge for a resolved pair.
    pub fn emit_pair(&mut self, pair: &ResolvedPair) -> Result<()> {
        self.emit(&Edge::from(pair.clone()))
    }

    /// Number of edges written so far.
    pub fn edges_written(&self) -> usize {
        self.edges_written
    }

    /// Flushes the writer and returns the final counters.
    pub fn finish(mut self) -> Result<EmitStats> {
        self.writer.flush()?;
        Ok(EmitStats {
            edges_written: self.edges_written,
            output_hash: hex::encode(self.hasher.finalize()),
        })
    }

    fn write_chunk(&mut self, chunk: &str) -> Result<()> {
        self.writer.write_all(chunk.as_bytes())?;
        self.hasher.update(chunk.as_bytes());
        Ok(())
    }
}

/// Computes the SHA-256 of a complete output, for comparing runs.
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
