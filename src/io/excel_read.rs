use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{DataType, Range, Reader, Sheets, open_workbook_auto};

use crate::error::{ExportError, Result};
use crate::model::{Cell, Table};

/// Handle to an open multi-sheet workbook. The concrete format is detected
/// from the file extension when opening.
pub type Workbook = Sheets<BufReader<File>>;

/// Opens a workbook file. Both `.xlsx` and `.xls` files are supported.
pub fn open(path: &Path) -> Result<Workbook> {
    Ok(open_workbook_auto(path)?)
}

/// Reads one worksheet into a [`Table`]. The worksheet's first row supplies
/// the column names; the remaining rows become the records.
pub fn read_table(workbook: &mut Workbook, sheet: &str) -> Result<Table> {
    let range = workbook
        .worksheet_range(sheet)
        .ok_or_else(|| ExportError::MissingSheet(sheet.to_string()))?
        .map_err(ExportError::from)?;
    Ok(range_to_table(&range))
}

fn range_to_table(range: &Range<DataType>) -> Table {
    let mut rows = range.rows();
    let columns = match rows.next() {
        Some(header) => header.iter().map(cell_to_string).collect(),
        None => Vec::new(),
    };
    let rows = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Table { columns, rows }
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(cell: &DataType) -> Cell {
    match cell {
        DataType::Empty => Cell::Empty,
        DataType::Int(value) => Cell::Int(*value),
        DataType::Float(value) => Cell::Number(*value),
        DataType::Bool(value) => Cell::Bool(*value),
        DataType::String(value) => Cell::Text(value.clone()),
        DataType::DateTime(_) => match cell.as_datetime() {
            Some(when) => Cell::DateTime(when),
            None => Cell::Empty,
        },
        other => Cell::Text(other.to_string()),
    }
}
