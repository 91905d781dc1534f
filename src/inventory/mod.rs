//! Sense inventory access.
//!
//! The resolver only ever asks an inventory for the candidate senses of a
//! lemma. Where those senses come from is up to the implementation.
mod cache;
mod snapshot;

pub use cache::CachedInventory;
pub use snapshot::{SnapshotInventory, SynsetRecord};

use crate::types::Sense;

/// Read-only lookup of candidate senses by lemma.
///
/// Implementations must return candidates in a stable, inventory-defined
/// order: the resolver picks the first match, so order is the tie-break.
/// An unknown lemma yields an empty vector, never an error.
pub trait SenseInventory: Send + Sync {
    fn lookup(&self, lemma: &str) -> Vec<Sense>;
}

impl<T: SenseInventory + ?Sized> SenseInventory for &T {
    fn lookup(&self, lemma: &str) -> Vec<Sense> {
        (**self).lookup(lemma)
    }
}

impl<T: SenseInventory + ?Sized> SenseInventory for Box<T> {
    fn lookup(&self, lemma: &str) -> Vec<Sense> {
        (**self).lookup(lemma)
    }
}
