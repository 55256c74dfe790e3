use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use tracing::debug;

use crate::{domain::DebtRow, errors::Result};

/// Marker accepted in place of a path to read rows from stdin.
pub const STDIN_MARKER: &str = "-";

/// Reads a JSON array of debt rows from `source`, or stdin when it is `-`.
pub fn read_debt_rows(source: &str) -> Result<Vec<DebtRow>> {
    if source == STDIN_MARKER {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        return parse_debt_rows(&buffer);
    }
    load_debt_rows_from_file(Path::new(source))
}

pub fn load_debt_rows_from_file(path: &Path) -> Result<Vec<DebtRow>> {
    let data = fs::read_to_string(path)?;
    let rows = parse_debt_rows(&data)?;
    debug!(path = %path.display(), rows = rows.len(), "loaded debt rows");
    Ok(rows)
}

pub fn parse_debt_rows(data: &str) -> Result<Vec<DebtRow>> {
    Ok(serde_json::from_str(data)?)
}
