//! Plant list import
//!
//! Parses externally supplied plant lists and merges them into the catalog.
//! One row per line: `category,plantName` or a bare `plantName` (category
//! defaults to "Uncategorized"). The first line is dropped as a header when
//! it is not itself a valid data row. Bad rows are skipped, never fatal; the
//! merge is all-or-nothing per row, not per file.

use crate::catalog::PlantCatalog;
use tracing::warn;

/// Per-file import counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}

struct Row<'a> {
    name: &'a str,
    category: Option<&'a str>,
}

/// A valid data row has one or two comma-separated fields and a non-blank
/// plant-name field.
fn parse_row(line: &str) -> Option<Row<'_>> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    match fields.as_slice() {
        [name] if !name.is_empty() => Some(Row {
            name: *name,
            category: None,
        }),
        [category, name] if !name.is_empty() => Some(Row {
            name: *name,
            category: Some(*category),
        }),
        _ => None,
    }
}

/// Merge the rows of `text` into `catalog`.
///
/// Duplicate and malformed rows increment `skipped` and the remaining rows
/// still import.
pub fn import_csv(catalog: &mut PlantCatalog, text: &str) -> ImportSummary {
    let mut summary = ImportSummary::default();
    for (index, line) in text.lines().filter(|l| !l.trim().is_empty()).enumerate() {
        let Some(row) = parse_row(line) else {
            if index == 0 {
                // header row, discarded without counting
                continue;
            }
            warn!("Skipping unparsable import row: {line:?}");
            summary.skipped += 1;
            continue;
        };
        match catalog.add_plant(row.name, row.category) {
            Ok(_) => summary.imported += 1,
            Err(e) => {
                warn!("Skipping import row {line:?}: {e}");
                summary.skipped += 1;
            }
        }
    }
    summary
}
