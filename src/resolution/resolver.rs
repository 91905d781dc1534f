use rayon::prelude::*;

use crate::inventory::SenseInventory;
use crate::overrides::OverrideTable;
use crate::types::*;

use super::matcher::{DefinitionMatcher, MatchOutcome};

/// Resolves input rows into hyponym/hypernym sense pairs.
///
/// The resolver holds only shared, read-only collaborators, so any number of
/// rows can be resolved concurrently and in any order.
pub struct RowResolver<'a> {
    inventory: &'a dyn SenseInventory,
    overrides: &'a OverrideTable,
    /// Candidate senses outside these parts of speech are ignored.
    part_of_speech: Option<Vec<PartOfSpeech>>,
}

impl<'a> RowResolver<'a> {
    /// Creates a resolver over the given inventory and override table.
    pub fn new(inventory: &'a dyn SenseInventory, overrides: &'a OverrideTable) -> Self {
        Self {
            inventory,
            overrides,
            part_of_speech: None,
        }
    }

    /// Restricts candidates to the given parts of speech.
    pub fn with_part_of_speech(mut self, filter: Option<Vec<PartOfSpeech>>) -> Self {
        self.part_of_speech = filter;
        self
    }

    /// Collects the candidate senses of every lemma, in lemma order, with
    /// each lemma's senses in inventory order.
    pub fn candidates(&self, lemmas: &[String]) -> Vec<Sense> {
        let mut merged = Vec::new();
        for lemma in lemmas {
            let senses = self.inventory.lookup(lemma);
            if senses.is_empty() {
                tracing::debug!(lemma = %lemma, "lookup miss");
            }
            merged.extend(senses.into_iter().filter(|s| self.accepts(s)));
        }
        merged
    }

    /// Resolves one side of a row.
    ///
    /// Strategies are tried in order:
    /// 1. **Definition match** -- the first candidate across all lemmas whose
    ///    definition matches.
    /// 2. **Override** -- an exact entry for the definition in the override
    ///    table. Never consulted when step 1 succeeds.
    pub fn resolve_side(&self, lemmas: &[String], definition: &str) -> SenseResolution {
        let candidates = self.candidates(lemmas);

        if let MatchOutcome::Matched { index, sense } =
            DefinitionMatcher::select(&candidates, definition)
        {
            tracing::debug!(
                lemmas = ?lemmas,
                sense_id = %sense.id,
                candidate_index = index,
                "matched definition"
            );
            return SenseResolution::Resolved {
                sense_id: sense.id.clone(),
                resolved_by: ResolvedBy::DefinitionMatch {
                    candidate_index: index,
                },
            };
        }

        match self.overrides.resolve(definition) {
            Some(sense_id) => {
                tracing::debug!(lemmas = ?lemmas, sense_id = %sense_id, "resolved by override");
                SenseResolution::Resolved {
                    sense_id: sense_id.to_string(),
                    resolved_by: ResolvedBy::Override,
                }
            }
            None => SenseResolution::Unresolved(UnresolvedReason {
                candidate_count: candidates.len(),
            }),
        }
    }

    /// Resolves both sides of a row and checks that they differ.
    pub fn resolve_row(&self, row: &InputRow) -> RowOutcome {
        let hyponym_sense_id = self.resolve_required(row, Side::Hyponym)?;
        let hypernym_sense_id = self.resolve_required(row, Side::Hypernym)?;

        let detail = format!(
            "hypernym '{}' resolves to the same sense {}",
            row.hypernym_lemmas.join(", "),
            hyponym_sense_id
        );
        ResolvedPair::new(hyponym_sense_id, hypernym_sense_id).ok_or_else(|| RowFailure {
            line: row.line,
            kind: FailureKind::SelfLoop,
            side: None,
            lemma: row.hyponym_lemmas.join(", "),
            definition: row.hypo_definition.clone(),
            detail: Some(detail),
        })
    }

    /// Resolves every row, returning outcomes in input order.
    ///
    /// With `parallel` set the rows are spread over the rayon pool; the
    /// collected outcomes keep input order either way.
    pub fn resolve_all(&self, rows: &[InputRow], parallel: bool) -> Vec<RowOutcome> {
        if parallel {
            rows.par_iter().map(|row| self.resolve_row(row)).collect()
        } else {
            rows.iter().map(|row| self.resolve_row(row)).collect()
        }
    }

    // ------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------

    fn accepts(&self, sense: &Sense) -> bool {
        self.part_of_speech
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&sense.part_of_speech))
    }

    fn resolve_required(&self, row: &InputRow, side: Side) -> Result<String, RowFailure> {
        let (lemmas, definition) = row.side(side);
        match self.resolve_side(lemmas, definition) {
            SenseResolution::Resolved { sense_id, .. } => Ok(sense_id),
            SenseResolution::Unresolved(reason) => Err(RowFailure {
                line: row.line,
                kind: FailureKind::NoMatch,
                side: Some(side),
                lemma: lemmas.join(", "),
                definition: definition.to_string(),
                detail: Some(format!(
                    "{} candidate(s), none matching and no override",
                    reason.candidate_count
                )),
            }),
        }
    }
}
