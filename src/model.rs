use chrono::NaiveDateTime;

/// A single worksheet cell, typed the way the workbook stores it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Blank cell.
    Empty,
    /// Integer literal.
    Int(i64),
    /// Floating point literal.
    Number(f64),
    /// Boolean literal.
    Bool(bool),
    /// Plain string literal.
    Text(String),
    /// Date/time literal decoded from the workbook's serial representation.
    DateTime(NaiveDateTime),
}

impl Cell {
    /// Renders the cell as one CSV field.
    pub fn to_field(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Int(value) => value.to_string(),
            Cell::Number(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
            Cell::Text(value) => value.clone(),
            Cell::DateTime(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}

/// One worksheet read into memory: ordered column names and ordered rows.
/// The worksheet's first row supplies the column names; the remaining rows
/// are the records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Rounds every floating point cell to `places` decimal places.
    /// Fixed-point rounding, half away from zero. All other cell kinds are
    /// left untouched.
    pub fn round_numbers(&mut self, places: i32) {
        let factor = 10f64.powi(places);
        for row in &mut self.rows {
            for cell in row {
                if let Cell::Number(value) = cell {
                    *value = (*value * factor).round() / factor;
                }
            }
        }
    }
}
