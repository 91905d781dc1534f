use crate::types::Sense;

/// Returns `true` if two definitions are equal or either contains the other.
///
/// The rule is deliberately loose so that paraphrased or truncated
/// definitions in the input still find their sense. Strings are compared as
/// given: no trimming, no case folding.
pub fn definitions_match(a: &str, b: &str) -> bool {
    a == b || a.contains(b) || b.contains(a)
}

/// Result of running the matcher over a candidate set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    /// The first candidate whose definition matches, with its position.
    Matched { index: usize, sense: &'a Sense },
    NoMatch,
}

/// Picks the sense whose definition matches a target definition.
pub struct DefinitionMatcher;

impl DefinitionMatcher {
    /// Returns the first candidate, in the given order, that satisfies
    /// [`definitions_match`]. There is no scoring: order is the tie-break.
    pub fn select<'a>(candidates: &'a [Sense], target: &str) -> MatchOutcome<'a> {
        candidates
            .iter()
            .enumerate()
            .find(|(_, sense)| definitions_match(&sense.definition, target))
            .map_or(MatchOutcome::NoMatch, |(index, sense)| MatchOutcome::Matched {
                index,
                sense,
            })
    }
}
