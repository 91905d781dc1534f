use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::config::HypernymGraphConfig;
use crate::errors::{HypernymGraphError, Result};
use crate::types::{FailureKind, InputRow, RowFailure, Side};

/// Column holding the hyponym lemma(s).
pub const HYPONYM_LEMMA_COLUMN: &str = "hyponym-lemma";
/// Column holding the hyponym definition.
pub const HYPO_DEFINITION_COLUMN: &str = "hypo_definition";
/// Column holding the hypernym lemma(s).
pub const HYPERNYM_LEMMA_COLUMN: &str = "hypernym-lemma";
/// Column holding the hypernym definition.
pub const HYPER_DEFINITION_COLUMN: &str = "hyper_definition";

/// A parsed record: either a validated row or the reason it was rejected.
pub type ParsedRow = std::result::Result<InputRow, RowFailure>;

/// Positions of the required columns in the header.
struct ColumnMap {
    hyponym_lemma: usize,
    hypo_definition: usize,
    hypernym_lemma: usize,
    hyper_definition: usize,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord, source: &str) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| HypernymGraphError::Parse {
                    message: format!("missing required column '{name}'"),
                    path: source.to_string(),
                    line: Some(1),
                })
        };

        Ok(Self {
            hyponym_lemma: find(HYPONYM_LEMMA_COLUMN)?,
            hypo_definition: find(HYPO_DEFINITION_COLUMN)?,
            hypernym_lemma: find(HYPERNYM_LEMMA_COLUMN)?,
            hyper_definition: find(HYPER_DEFINITION_COLUMN)?,
        })
    }

    fn max_index(&self) -> usize {
        self.hyponym_lemma
            .max(self.hypo_definition)
            .max(self.hypernym_lemma)
            .max(self.hyper_definition)
    }
}

/// Splits a lemma cell into trimmed, non-empty lemmas.
pub fn split_lemmas(cell: &str, separator: char) -> Vec<String> {
    cell.split(separator)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads input rows from a file.
pub fn read_rows_from_path(path: &Path, config: &HypernymGraphConfig) -> Result<Vec<ParsedRow>> {
    let file = File::open(path).map_err(|e| HypernymGraphError::File {
        message: format!("failed to open input: {e}"),
        path: path.display().to_string(),
    })?;
    read_rows(file, &path.display().to_string(), config)
}

/// Reads input rows from any reader.
///
/// The header must name all four required columns, otherwise the whole input
/// is rejected. Individual records that are short, unreadable, or have an
/// empty definition come back as `MalformedRow` failures in their input
/// position. An empty lemma cell yields an empty lemma list. Definitions are
/// kept verbatim, surrounding whitespace included.
pub fn read_rows<R: Read>(
    reader: R,
    source: &str,
    config: &HypernymGraphConfig,
) -> Result<Vec<ParsedRow>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| HypernymGraphError::Parse {
            message: format!("failed to read header: {e}"),
            path: source.to_string(),
            line: Some(1),
        })?
        .clone();
    let columns = ColumnMap::from_headers(&headers, source)?;

    let mut rows = Vec::new();
    let mut last_line = 1;
    for result in csv_reader.records() {
        let parsed = match result {
            Ok(record) => {
                let line = record.position().map_or(last_line + 1, |p| p.line());
                last_line = line;
                parse_record(&record, line, &columns, config.lemma_separator)
            }
            Err(e) => {
                let line = e.position().map_or(last_line + 1, |p| p.line());
                last_line = line;
                Err(malformed(line, None, "", "", format!("unreadable record: {e}")))
            }
        };
        if let Err(failure) = &parsed {
            tracing::warn!(%failure, "rejected input record");
        }
        rows.push(parsed);
    }

    tracing::debug!(source, rows = rows.len(), "read input");
    Ok(rows)
}

fn parse_record(
    record: &StringRecord,
    line: u64,
    columns: &ColumnMap,
    separator: char,
) -> ParsedRow {
    let hyponym_cell = record.get(columns.hyponym_lemma);
    let hypo_definition = record.get(columns.hypo_definition);
    let hypernym_cell = record.get(columns.hypernym_lemma);
    let hyper_definition = record.get(columns.hyper_definition);

    let (Some(hyponym_cell), Some(hypo_definition), Some(hypernym_cell), Some(hyper_definition)) =
        (hyponym_cell, hypo_definition, hypernym_cell, hyper_definition)
    else {
        return Err(malformed(
            line,
            None,
            hyponym_cell.unwrap_or_default(),
            hypo_definition.unwrap_or_default(),
            format!(
                "expected at least {} fields, found {}",
                columns.max_index() + 1,
                record.len()
            ),
        ));
    };

    // An empty lemma cell is a lookup miss; the override table still applies.
    let hyponym_lemmas = split_lemmas(hyponym_cell, separator);
    let hypernym_lemmas = split_lemmas(hypernym_cell, separator);

    let sides = [
        (Side::Hyponym, hyponym_cell, hypo_definition),
        (Side::Hypernym, hypernym_cell, hyper_definition),
    ];
    for (side, cell, definition) in sides {
        if definition.trim().is_empty() {
            return Err(malformed(line, Some(side), cell, definition, "empty definition"));
        }
    }

    Ok(InputRow {
        line,
        hyponym_lemmas,
        hypo_definition: hypo_definition.to_string(),
        hypernym_lemmas,
        hyper_definition: hyper_definition.to_string(),
    })
}

fn malformed(
    line: u64,
    side: Option<Side>,
    lemma: &str,
    definition: &str,
    detail: impl Into<String>,
) -> RowFailure {
    RowFailure {
        line,
        kind: FailureKind::MalformedRow,
        side,
        lemma: lemma.to_string(),
        definition: definition.to_string(),
        detail: Some(detail.into()),
    }
}
