/// Sense resolution module.
///
/// Turns (lemmas, definition) pairs from the input into sense identifiers by
/// matching definitions against inventory candidates, falling back to the
/// override table, and pairs the two sides of a row into a graph edge.
mod matcher;
mod resolver;

pub use matcher::{definitions_match, DefinitionMatcher, MatchOutcome};
pub use resolver::RowResolver;
