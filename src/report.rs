use crate::overrides::OverrideTable;
use crate::types::RunSummary;

/// Formats a run summary for the terminal.
///
/// Lists every failed row after the totals, in input order.
pub fn format_summary_as_text(summary: &RunSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Resolved {} of {} rows into {} edges in {}ms\n",
        summary.rows_total.saturating_sub(summary.failures.len()),
        summary.rows_total,
        summary.edges_written,
        summary.duration_ms,
    ));
    if !summary.output_hash.is_empty() {
        out.push_str(&format!("  sha256: {}\n", summary.output_hash));
    }

    if !summary.failures.is_empty() {
        out.push_str(&format!("\nUnresolved rows ({}):\n", summary.failures.len()));
        for failure in &summary.failures {
            out.push_str(&format!("  {}\n", failure));
        }
    }

    out
}

/// Formats a run summary as pretty-printed JSON.
pub fn format_summary_as_json(summary: &RunSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_default()
}

/// Formats the override table for auditing, one entry per line.
///
/// Definitions are quoted so trailing whitespace stays visible.
pub fn format_overrides_as_text(table: &OverrideTable) -> String {
    let mut out = String::new();
    out.push_str(&format!("Override table ({} entries)\n", table.len()));
    for entry in table.entries() {
        out.push_str(&format!("  {:?} -> {}\n", entry.definition, entry.sense_id));
    }
    out
}

/// Formats the override table as pretty-printed JSON.
pub fn format_overrides_as_json(table: &OverrideTable) -> String {
    serde_json::to_string_pretty(table.entries()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn make_summary(failures: Vec<RowFailure>) -> RunSummary {
        RunSummary {
            rows_total: 3,
            edges_written: 3 - failures.len(),
            failures,
            output_hash: "abc123".to_string(),
            duration_ms: 7,
        }
    }

    #[test]
    fn test_text_summary_totals() {
        let text = format_summary_as_text(&make_summary(vec![]));
        assert!(text.contains("Resolved 3 of 3 rows into 3 edges"));
        assert!(text.contains("sha256: abc123"));
        assert!(!text.contains("Unresolved rows"));
    }

    #[test]
    fn test_text_summary_lists_failures() {
        let failure = RowFailure {
            line: 4,
            kind: FailureKind::NoMatch,
            side: Some(Side::Hyponym),
            lemma: "calm".to_string(),
            definition: "xyz".to_string(),
            detail: None,
        };
        let text = format_summary_as_text(&make_summary(vec![failure]));
        assert!(text.contains("Unresolved rows (1):"));
        assert!(text.contains(
            "row 4: no-match on hyponym side for lemma 'calm' with definition 'xyz'"
        ));
    }

    #[test]
    fn test_overrides_text_shows_trailing_space() {
        let text = format_overrides_as_text(&OverrideTable::builtin());
        assert!(text.contains("(5 entries)"));
        assert!(text.contains("warmth or emotion \" -> oewn-01260684-a"));
    }

    #[test]
    fn test_summary_json_is_valid() {
        let json = format_summary_as_json(&make_summary(vec![]));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["edges_written"], 3);
    }
}
