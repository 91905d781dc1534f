use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HypernymGraphError, Result};
use crate::types::{PartOfSpeech, Sense};

use super::SenseInventory;

/// One synset as stored in a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynsetRecord {
    pub id: String,
    pub lemmas: Vec<String>,
    pub definition: String,
    pub part_of_speech: PartOfSpeech,
}

/// In-memory inventory loaded from a JSON snapshot.
///
/// The snapshot is an array of synset records. Lookups return senses in the
/// order their synsets appear in the file, which is what makes resolution
/// reproducible against a fixed snapshot.
#[derive(Debug, Default)]
pub struct SnapshotInventory {
    /// Senses grouped by their exact lemma.
    lemma_index: HashMap<String, Vec<Sense>>,
    synset_count: usize,
}

impl SnapshotInventory {
    /// Loads a snapshot from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| HypernymGraphError::Inventory {
            message: format!("failed to read snapshot: {e}"),
            path: path.display().to_string(),
        })?;

        let records: Vec<SynsetRecord> =
            serde_json::from_str(&contents).map_err(|e| HypernymGraphError::Inventory {
                message: format!("failed to parse snapshot: {e}"),
                path: path.display().to_string(),
            })?;

        let inventory = Self::from_records(records);
        tracing::info!(
            path = %path.display(),
            synsets = inventory.synset_count,
            lemmas = inventory.lemma_index.len(),
            "loaded sense inventory"
        );
        Ok(inventory)
    }

    /// Builds an inventory from synset records, keeping their order.
    pub fn from_records(records: Vec<SynsetRecord>) -> Self {
        let synset_count = records.len();
        let mut lemma_index: HashMap<String, Vec<Sense>> = HashMap::new();

        for record in records {
            for lemma in &record.lemmas {
                let senses = lemma_index.entry(lemma.clone()).or_default();
                // A lemma listed twice in one synset is still one sense.
                if senses.iter().any(|s| s.id == record.id) {
                    continue;
                }
                senses.push(Sense {
                    id: record.id.clone(),
                    lemma: lemma.clone(),
                    definition: record.definition.clone(),
                    part_of_speech: record.part_of_speech,
                });
            }
        }

        Self {
            lemma_index,
            synset_count,
        }
    }

    /// Builds an inventory directly from senses, keeping their order.
    pub fn from_senses(senses: impl IntoIterator<Item = Sense>) -> Self {
        let mut lemma_index: HashMap<String, Vec<Sense>> = HashMap::new();
        let mut ids = HashSet::new();
        for sense in senses {
            ids.insert(sense.id.clone());
            lemma_index
                .entry(sense.lemma.clone())
                .or_default()
                .push(sense);
        }
        Self {
            lemma_index,
            synset_count: ids.len(),
        }
    }

    /// Number of distinct synsets in the snapshot.
    pub fn synset_count(&self) -> usize {
        self.synset_count
    }

    /// Number of distinct lemmas that have at least one sense.
    pub fn lemma_count(&self) -> usize {
        self.lemma_index.len()
    }
}

impl SenseInventory for SnapshotInventory {
    fn lookup(&self, lemma: &str) -> Vec<Sense> {
        self.lemma_index.get(lemma).cloned().unwrap_or_default()
    }
}
