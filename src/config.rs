use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{HypernymGraphError, Result};
use crate::types::{FailurePolicy, PartOfSpeech};

/// Name of the configuration file written by `hypernymgraph init`.
pub const CONFIG_FILENAME: &str = "hypernymgraph.json";

/// Name of the override table file written by `hypernymgraph init`.
pub const OVERRIDES_FILENAME: &str = "overrides.toml";

/// A namespace prefix declared at the top of the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixDecl {
    pub name: String,
    pub iri: String,
}

/// Configuration for a conversion run.
///
/// Every field has a default, so a missing file yields a working setup that
/// reproduces the reference output format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypernymGraphConfig {
    /// Schema version of the configuration.
    pub version: u32,
    /// Field delimiter of the input table.
    pub delimiter: char,
    /// Separator between synonymous lemmas inside one lemma cell.
    pub lemma_separator: char,
    /// Prefix used for sense identifiers.
    pub sense_prefix: PrefixDecl,
    /// Prefix used for the relation predicate.
    pub relation_prefix: PrefixDecl,
    /// What to do when a row fails to resolve.
    pub failure_policy: FailurePolicy,
    /// Resolve rows on the rayon thread pool.
    pub parallel: bool,
    /// Restrict candidate senses to these parts of speech. `None` keeps all.
    pub part_of_speech: Option<Vec<PartOfSpeech>>,
    /// Sense inventory snapshot, relative to the working directory.
    pub inventory_path: Option<String>,
    /// Override table; the built-in table is used when unset.
    pub overrides_path: Option<String>,
}

impl Default for HypernymGraphConfig {
    fn default() -> Self {
        Self {
            version: 1,
            delimiter: ';',
            lemma_separator: ',',
            sense_prefix: PrefixDecl {
                name: "oewn".to_string(),
                iri: "http://en-word.net/id/".to_string(),
            },
            relation_prefix: PrefixDecl {
                name: "wn".to_string(),
                iri: "http://globalwordnet.github.io/schemas/wn.rdf#".to_string(),
            },
            failure_policy: FailurePolicy::FailFast,
            parallel: true,
            part_of_speech: None,
            inventory_path: None,
            overrides_path: None,
        }
    }
}

impl HypernymGraphConfig {
    /// Returns the delimiter as the single byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(HypernymGraphError::Config {
                message: format!("delimiter '{}' is not an ASCII character", self.delimiter),
            })
        }
    }
}

/// Returns the path to the configuration file inside the given directory.
pub fn get_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILENAME)
}

/// Loads the configuration from `config_path`.
///
/// If the file does not exist, returns the default configuration.
pub fn load_config(config_path: &Path) -> Result<HypernymGraphConfig> {
    if !config_path.exists() {
        return Ok(HypernymGraphConfig::default());
    }

    let contents = fs::read_to_string(config_path).map_err(|e| HypernymGraphError::Config {
        message: format!(
            "failed to read config file '{}': {}",
            config_path.display(),
            e
        ),
    })?;

    let config: HypernymGraphConfig =
        serde_json::from_str(&contents).map_err(|e| HypernymGraphError::Config {
            message: format!(
                "failed to parse config file '{}': {}",
                config_path.display(),
                e
            ),
        })?;

    config.delimiter_byte()?;
    Ok(config)
}

/// Saves the configuration using an atomic write.
///
/// Writes to a temporary file first and then renames it to the final location,
/// so a partial write never corrupts the configuration.
pub fn save_config(config_path: &Path, config: &HypernymGraphConfig) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| HypernymGraphError::Config {
                message: format!(
                    "failed to create config directory '{}': {}",
                    parent.display(),
                    e
                ),
            })?;
        }
    }

    let tmp_path = config_path.with_extension("tmp");

    let json = serde_json::to_string_pretty(config).map_err(|e| HypernymGraphError::Config {
        message: format!("failed to serialize config: {}", e),
    })?;

    fs::write(&tmp_path, &json).map_err(|e| HypernymGraphError::Config {
        message: format!(
            "failed to write temporary config file '{}': {}",
            tmp_path.display(),
            e
        ),
    })?;

    fs::rename(&tmp_path, config_path).map_err(|e| HypernymGraphError::Config {
        message: format!(
            "failed to rename temporary config file '{}' to '{}': {}",
            tmp_path.display(),
            config_path.display(),
            e
        ),
    })?;

    Ok(())
}
