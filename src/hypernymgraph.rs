use std::io::Write;
use std::path::Path;
use std::time::Instant;

use crate::config::HypernymGraphConfig;
use crate::emitter::EdgeEmitter;
use crate::errors::{HypernymGraphError, Result};
use crate::input::{read_rows_from_path, ParsedRow};
use crate::inventory::{CachedInventory, SenseInventory, SnapshotInventory};
use crate::overrides::OverrideTable;
use crate::resolution::RowResolver;
use crate::types::*;

/// Central orchestrator that reads rows, resolves them, and emits the graph.
pub struct HypernymGraph {
    inventory: Box<dyn SenseInventory>,
    overrides: OverrideTable,
    config: HypernymGraphConfig,
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

impl HypernymGraph {
    /// Assembles a graph builder from explicit collaborators.
    pub fn new(
        inventory: Box<dyn SenseInventory>,
        overrides: OverrideTable,
        config: HypernymGraphConfig,
    ) -> Self {
        Self {
            inventory,
            overrides,
            config,
        }
    }

    /// Opens the inventory and override table named by the configuration.
    ///
    /// The snapshot inventory is wrapped in a per-lemma cache. Without an
    /// `overrides_path` the built-in override table is used.
    pub fn open(config: HypernymGraphConfig) -> Result<Self> {
        let inventory_path =
            config
                .inventory_path
                .as_deref()
                .ok_or_else(|| HypernymGraphError::Config {
                    message: "no sense inventory configured; pass --inventory or set \
                              'inventory_path'"
                        .to_string(),
                })?;
        let inventory = SnapshotInventory::load(Path::new(inventory_path))?;

        let overrides = match config.overrides_path.as_deref() {
            Some(path) => OverrideTable::load(Path::new(path))?,
            None => OverrideTable::builtin(),
        };

        Ok(Self::new(
            Box::new(CachedInventory::new(inventory)),
            overrides,
            config,
        ))
    }
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

impl HypernymGraph {
    /// Converts the input file, writing the graph to `writer`.
    pub fn convert<W: Write>(&self, input: &Path, writer: W) -> Result<RunSummary> {
        let rows = read_rows_from_path(input, &self.config)?;
        self.convert_rows(rows, writer)
    }

    /// Resolves parsed rows and emits one edge per resolved row, in input
    /// order.
    ///
    /// Under `FailFast` the edges of rows before the first failure are
    /// written and flushed, then the failure is returned as an error. Under
    /// `CollectAndContinue` every failure is listed in the summary instead.
    pub fn convert_rows<W: Write>(&self, rows: Vec<ParsedRow>, writer: W) -> Result<RunSummary> {
        let start = Instant::now();
        let rows_total = rows.len();
        let outcomes = self.resolve_rows(rows);

        let mut emitter = EdgeEmitter::new(writer, &self.config)?;
        let mut failures = Vec::new();

        for outcome in outcomes {
            match outcome {
                Ok(pair) => emitter.emit_pair(&pair)?,
                Err(failure) => {
                    tracing::warn!(%failure, "row failed to resolve");
                    match self.config.failure_policy {
                        FailurePolicy::FailFast => {
                            emitter.finish()?;
                            return Err(HypernymGraphError::Unresolved(Box::new(failure)));
                        }
                        FailurePolicy::CollectAndContinue => failures.push(failure),
                    }
                }
            }
        }

        let stats = emitter.finish()?;
        let summary = RunSummary {
            rows_total,
            edges_written: stats.edges_written,
            failures,
            output_hash: stats.output_hash,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        tracing::info!(
            rows = summary.rows_total,
            edges = summary.edges_written,
            failures = summary.failures.len(),
            duration_ms = summary.duration_ms,
            "conversion finished"
        );
        Ok(summary)
    }

    /// Resolves the input file without writing anything, collecting every
    /// failure regardless of the configured policy.
    pub fn check(&self, input: &Path) -> Result<RunSummary> {
        let rows = read_rows_from_path(input, &self.config)?;
        Ok(self.check_rows(rows))
    }

    /// Dry-run counterpart of [`convert_rows`](Self::convert_rows).
    pub fn check_rows(&self, rows: Vec<ParsedRow>) -> RunSummary {
        let start = Instant::now();
        let rows_total = rows.len();
        let mut edges_written = 0;
        let mut failures = Vec::new();

        for outcome in self.resolve_rows(rows) {
            match outcome {
                Ok(_) => edges_written += 1,
                Err(failure) => failures.push(failure),
            }
        }

        RunSummary {
            rows_total,
            edges_written,
            failures,
            output_hash: String::new(),
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Resolves every valid row and threads parse failures through in place,
    /// so the result lines up with the input one-to-one.
    pub fn resolve_rows(&self, rows: Vec<ParsedRow>) -> Vec<RowOutcome> {
        let resolver = RowResolver::new(&*self.inventory, &self.overrides)
            .with_part_of_speech(self.config.part_of_speech.clone());

        let valid: Vec<InputRow> = rows.iter().filter_map(|r| r.as_ref().ok()).cloned().collect();
        let mut resolved = resolver
            .resolve_all(&valid, self.config.parallel)
            .into_iter();

        rows.into_iter()
            .filter_map(|parsed| match parsed {
                Ok(_) => resolved.next(),
                Err(failure) => Some(Err(failure)),
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Accessors
// ---------------------------------------------------------------------------

impl HypernymGraph {
    /// Returns the override table in use.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &HypernymGraphConfig {
        &self.config
    }
}
