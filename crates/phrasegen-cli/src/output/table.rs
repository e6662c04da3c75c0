//! Table formatting utilities for CLI output.

use comfy_table::{presets, CellAlignment, ContentArrangement, Table};
use phrasegen::io::format_weight;
use phrasegen::TranslationResult;

/// Load outcome for a single dictionary file.
pub struct DictionarySummary {
    /// File as given on the command line.
    pub file: String,
    /// Number of tokens, if the file loaded.
    pub tokens: Option<usize>,
    /// Number of candidates across all tokens, if the file loaded.
    pub candidates: Option<usize>,
}

/// Format ranked translations as an ASCII table.
pub fn format_results_table(results: &[TranslationResult]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Translation", "Weight"]);

    for (rank, result) in results.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            result.text.clone(),
            format_weight(result.weight),
        ]);
    }
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    table
}

/// Format dictionary check results as an ASCII table.
pub fn format_check_table(summaries: &[DictionarySummary]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["File", "Tokens", "Candidates", "Status"]);

    for summary in summaries {
        let count = |value: Option<usize>| value.map_or_else(|| "-".to_string(), |n| n.to_string());
        table.add_row(vec![
            summary.file.clone(),
            count(summary.tokens),
            count(summary.candidates),
            if summary.tokens.is_some() { "ok" } else { "error" }.to_string(),
        ]);
    }

    table
}
