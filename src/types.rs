use std::fmt;

use serde::{Deserialize, Serialize};

/// Part of speech of a sense, using the single-letter codes of the
/// inventory's synset identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adjective,
    #[serde(rename = "s")]
    AdjectiveSatellite,
    #[serde(rename = "r")]
    Adverb,
}

#[allow(clippy::should_implement_trait)]
impl PartOfSpeech {
    /// Returns the single-letter code for this part of speech.
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "a",
            PartOfSpeech::AdjectiveSatellite => "s",
            PartOfSpeech::Adverb => "r",
        }
    }

    /// Parses a single-letter code, returning `None` for unrecognized values.
    pub fn from_str(s: &str) -> Option<PartOfSpeech> {
        match s {
            "n" => Some(PartOfSpeech::Noun),
            "v" => Some(PartOfSpeech::Verb),
            "a" => Some(PartOfSpeech::Adjective),
            "s" => Some(PartOfSpeech::AdjectiveSatellite),
            "r" => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

/// One meaning of a lemma as supplied by the sense inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    pub id: String,
    pub lemma: String,
    pub definition: String,
    pub part_of_speech: PartOfSpeech,
}

/// Relation carried by every emitted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationKind {
    Hypernym,
}

impl RelationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::Hypernym => "hypernym",
        }
    }
}

/// Which half of an input row is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Hyponym,
    Hypernym,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Hyponym => "hyponym",
            Side::Hypernym => "hypernym",
        }
    }
}

/// A validated input row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    /// Line of the record in the input file (the header is line 1).
    pub line: u64,
    pub hyponym_lemmas: Vec<String>,
    pub hypo_definition: String,
    pub hypernym_lemmas: Vec<String>,
    pub hyper_definition: String,
}

impl InputRow {
    /// Returns the lemmas and definition for one side of the row.
    pub fn side(&self, side: Side) -> (&[String], &str) {
        match side {
            Side::Hyponym => (&self.hyponym_lemmas, &self.hypo_definition),
            Side::Hypernym => (&self.hypernym_lemmas, &self.hyper_definition),
        }
    }
}

/// How a sense id was obtained for one side of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedBy {
    /// Selected from the merged candidate set; the index is its position there.
    DefinitionMatch { candidate_index: usize },
    /// Taken from the override table after the matcher found nothing.
    Override,
}

/// Why one side of a row could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnresolvedReason {
    /// Number of candidates the inventory returned across all lemmas.
    pub candidate_count: usize,
}

/// Outcome of resolving one side of a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SenseResolution {
    Resolved {
        sense_id: String,
        resolved_by: ResolvedBy,
    },
    Unresolved(UnresolvedReason),
}

/// A fully resolved row. Only [`ResolvedPair::new`] builds one, so the two
/// sense ids always differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPair {
    hyponym_sense_id: String,
    hypernym_sense_id: String,
}

impl ResolvedPair {
    /// Pairs two sense ids, or returns `None` when they are the same sense.
    pub fn new(
        hyponym_sense_id: impl Into<String>,
        hypernym_sense_id: impl Into<String>,
    ) -> Option<Self> {
        let hyponym_sense_id = hyponym_sense_id.into();
        let hypernym_sense_id = hypernym_sense_id.into();
        if hyponym_sense_id == hypernym_sense_id {
            return None;
        }
        Some(Self {
            hyponym_sense_id,
            hypernym_sense_id,
        })
    }

    pub fn hyponym_sense_id(&self) -> &str {
        &self.hyponym_sense_id
    }

    pub fn hypernym_sense_id(&self) -> &str {
        &self.hypernym_sense_id
    }
}

/// An edge of the output graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
}

impl From<ResolvedPair> for Edge {
    fn from(pair: ResolvedPair) -> Self {
        Edge {
            source: pair.hyponym_sense_id,
            target: pair.hypernym_sense_id,
            kind: RelationKind::Hypernym,
        }
    }
}

/// Kinds of row-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FailureKind {
    NoMatch,
    SelfLoop,
    MalformedRow,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::NoMatch => "no-match",
            FailureKind::SelfLoop => "self-loop",
            FailureKind::MalformedRow => "malformed-row",
        }
    }
}

/// A row that produced no edge, with enough context to locate and fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    pub line: u64,
    pub kind: FailureKind,
    pub side: Option<Side>,
    /// The lemma cell as written in the input.
    pub lemma: String,
    pub definition: String,
    pub detail: Option<String>,
}

impl fmt::Display for RowFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.line, self.kind.as_str())?;
        if let Some(side) = self.side {
            write!(f, " on {} side", side.as_str())?;
        }
        write!(
            f,
            " for lemma '{}' with definition '{}'",
            self.lemma, self.definition
        )?;
        if let Some(detail) = &self.detail {
            write!(f, " ({})", detail)?;
        }
        Ok(())
    }
}

/// Resolution outcome for one input row.
pub type RowOutcome = std::result::Result<ResolvedPair, RowFailure>;

/// What to do when a row fails to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failing row. Edges for earlier rows are kept.
    #[default]
    FailFast,
    /// Emit every resolvable row and report all failures at the end.
    CollectAndContinue,
}

/// Summary of a conversion run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub rows_total: usize,
    pub edges_written: usize,
    pub failures: Vec<RowFailure>,
    /// Hex SHA-256 of the emitted output; empty for dry runs.
    pub output_hash: String,
    pub duration_ms: u64,
}

impl RunSummary {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}
