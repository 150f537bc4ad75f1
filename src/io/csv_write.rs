use std::path::Path;

use crate::error::Result;
use crate::model::{Cell, Table};

/// Writes the table to a CSV file at `path`, replacing any existing file.
/// Header row first, then one row per record. No index column is emitted;
/// quoting and escaping are handled by the writer.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;

    if !table.columns.is_empty() {
        writer.write_record(&table.columns)?;
    }
    for row in &table.rows {
        writer.write_record(row.iter().map(Cell::to_field))?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_header_then_records() {
        let table = Table {
            columns: vec!["name".to_string(), "value".to_string()],
            rows: vec![
                vec![Cell::Text("alpha".to_string()), Cell::Number(1.25)],
                vec![Cell::Text("beta, raw".to_string()), Cell::Empty],
            ],
        };
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("table.csv");

        write_table(&path, &table).expect("table written");

        let written = fs::read_to_string(&path).expect("CSV read back");
        assert_eq!(written, "name,value\nalpha,1.25\n\"beta, raw\",\n");
    }

    #[test]
    fn empty_table_produces_an_empty_file() {
        let dir = tempdir().expect("temporary directory");
        let path = dir.path().join("empty.csv");

        write_table(&path, &Table::default()).expect("table written");

        let written = fs::read_to_string(&path).expect("CSV read back");
        assert_eq!(written, "");
    }
}
