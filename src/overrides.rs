use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{HypernymGraphError, Result};

/// Curated fixes for definitions the inventory cannot resolve on its own:
/// stale ids, multi-word compounds, and short definitions that match nothing.
///
/// Keys are compared byte for byte, so the trailing space on the first entry
/// is significant.
const BUILTIN_OVERRIDES: &[(&str, &str)] = &[
    (
        "especially of psychological coldness; without human warmth or emotion ",
        "oewn-01260684-a",
    ),
    (
        "of the color between blue and yellow in the color spectrum",
        "oewn-00380557-s",
    ),
    ("not containing meat", "oewn-82572455-a"),
    (
        "capable of preventing conception or impregnation",
        "oewn-01893918-s",
    ),
    (
        "indicating the most important performer or role",
        "oewn-00888020-a",
    ),
];

/// A single verified definition-to-sense fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideEntry {
    pub definition: String,
    pub sense_id: String,
}

/// On-disk layout: a list of `[[override]]` tables.
#[derive(Debug, Default, Serialize, Deserialize)]
struct OverrideFile {
    #[serde(rename = "override", default)]
    entries: Vec<OverrideEntry>,
}

/// Exact-match fallback from definition text to a verified sense id.
///
/// The table is immutable once built and is handed to the resolver
/// explicitly. It is consulted only after definition matching fails.
#[derive(Debug, Clone, Default)]
pub struct OverrideTable {
    entries: Vec<OverrideEntry>,
    index: HashMap<String, usize>,
}

impl OverrideTable {
    /// Returns a table with no entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the curated table shipped with the tool.
    pub fn builtin() -> Self {
        let entries = BUILTIN_OVERRIDES.iter().map(|(definition, sense_id)| OverrideEntry {
            definition: definition.to_string(),
            sense_id: sense_id.to_string(),
        });
        // The built-in keys are distinct, so this cannot conflict.
        Self::from_entries(entries).unwrap_or_default()
    }

    /// Builds a table, rejecting a definition mapped to two different ids.
    ///
    /// Repeating an identical entry is allowed and kept once.
    pub fn from_entries(entries: impl IntoIterator<Item = OverrideEntry>) -> Result<Self> {
        let mut table = Self::default();
        for entry in entries {
            if let Some(&existing) = table.index.get(&entry.definition) {
                let existing = &table.entries[existing];
                if existing.sense_id != entry.sense_id {
                    return Err(HypernymGraphError::Config {
                        message: format!(
                            "override for definition '{}' maps to both '{}' and '{}'",
                            entry.definition, existing.sense_id, entry.sense_id
                        ),
                    });
                }
                continue;
            }
            table
                .index
                .insert(entry.definition.clone(), table.entries.len());
            table.entries.push(entry);
        }
        Ok(table)
    }

    /// Parses a table from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: OverrideFile =
            toml::from_str(contents).map_err(|e| HypernymGraphError::Config {
                message: format!("failed to parse override table: {e}"),
            })?;
        Self::from_entries(file.entries)
    }

    /// Loads a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| HypernymGraphError::File {
            message: format!("failed to read override table: {e}"),
            path: path.display().to_string(),
        })?;
        let table = Self::from_toml_str(&contents).map_err(|e| match e {
            HypernymGraphError::Config { message } => HypernymGraphError::Config {
                message: format!("{message} (path: {})", path.display()),
            },
            other => other,
        })?;
        tracing::info!(path = %path.display(), entries = table.len(), "loaded override table");
        Ok(table)
    }

    /// Serializes the table as TOML, preserving entry order.
    pub fn to_toml_string(&self) -> Result<String> {
        let file = OverrideFile {
            entries: self.entries.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| HypernymGraphError::Config {
            message: format!("failed to serialize override table: {e}"),
        })
    }

    /// Writes the table to `path` as TOML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml_string()?;
        fs::write(path, contents).map_err(|e| HypernymGraphError::File {
            message: format!("failed to write override table: {e}"),
            path: path.display().to_string(),
        })
    }

    /// Returns the sense id stored for exactly this definition.
    pub fn resolve(&self, definition: &str) -> Option<&str> {
        self.index
            .get(definition)
            .map(|&i| self.entries[i].sense_id.as_str())
    }

    /// Entries in the order they were defined.
    pub fn entries(&self) -> &[OverrideEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
