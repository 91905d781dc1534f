use std::collections::HashMap;
use std::sync::Mutex;

use crate::types::Sense;

use super::SenseInventory;

/// Memoizes lookups per distinct lemma.
///
/// The same lemma recurs across many rows, so each one hits the wrapped
/// inventory once. Entries are only ever added, which keeps the cache safe to
/// share between parallel workers.
pub struct CachedInventory<I> {
    inner: I,
    cache: Mutex<HashMap<String, Vec<Sense>>>,
}

impl<I: SenseInventory> CachedInventory<I> {
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Number of lemmas currently cached.
    pub fn cached_lemmas(&self) -> usize {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Returns the wrapped inventory.
    pub fn inner(&self) -> &I {
        &self.inner
    }
}

impl<I: SenseInventory> SenseInventory for CachedInventory<I> {
    fn lookup(&self, lemma: &str) -> Vec<Sense> {
        if let Some(hit) = self
            .cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(lemma)
        {
            return hit.clone();
        }

        // Two workers may race on the same lemma; both compute the same
        // answer, so the second insert is harmless.
        let senses = self.inner.lookup(lemma);
        self.cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(lemma.to_string(), senses.clone());
        senses
    }
}
