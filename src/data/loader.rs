use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::error::DataError;
use super::model::EnergyTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a three-column energy table from a text file.
///
/// The file handle lives only for the duration of this call.
pub fn load_table(path: &Path) -> Result<EnergyTable, DataError> {
    let file = File::open(path)?;
    let table = parse_table(BufReader::new(file))?;
    log::info!("Loaded {} rows from {}", table.len(), path.display());
    Ok(table)
}

// ---------------------------------------------------------------------------
// Whitespace table parser
// ---------------------------------------------------------------------------

/// Layout: one sample per line, `distance energy1 energy2`, separated by any
/// run of spaces or tabs. No header. `#` starts a comment; blank lines are
/// skipped.
pub fn parse_table<R: BufRead>(reader: R) -> Result<EnergyTable, DataError> {
    let mut rows = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(row) = parse_row(&line, idx + 1)? {
            rows.push(row);
        }
    }

    EnergyTable::from_rows(rows)
}

/// Parse a single line. `Ok(None)` for blank and comment-only lines.
fn parse_row(line: &str, line_no: usize) -> Result<Option<[f64; 3]>, DataError> {
    let content = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };

    let tokens: Vec<&str> = content.split_whitespace().collect();
    match tokens.len() {
        0 => Ok(None),
        3 => {
            let mut row = [0.0; 3];
            for (slot, tok) in row.iter_mut().zip(&tokens) {
                *slot = parse_number(tok, line_no)?;
            }
            Ok(Some(row))
        }
        found => Err(DataError::ColumnCount {
            line: line_no,
            found,
        }),
    }
}

fn parse_number(tok: &str, line_no: usize) -> Result<f64, DataError> {
    let value = tok.parse::<f64>().map_err(|_| DataError::InvalidNumber {
        line: line_no,
        token: tok.to_string(),
    })?;
    if !value.is_finite() {
        return Err(DataError::NonFinite {
            line: line_no,
            token: tok.to_string(),
        });
    }
    Ok(value)
}
