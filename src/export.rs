//! Per-workbook tab export.

use std::path::{Path, PathBuf};

use tracing::{error, info, instrument};

use crate::error::Result;
use crate::io::csv_write;
use crate::io::excel_read::{self, Workbook};

/// Decimal places applied to numeric cells before writing. Rounding to six
/// places loses small values such as fuel taxes.
const ROUND_DECIMAL_PLACES: i32 = 10;

/// Exports the named tabs of one workbook as CSV files into `output_dir`.
///
/// Failing to open the workbook aborts the whole workbook and is returned to
/// the caller; no tabs are attempted. A failure on a single tab is logged and
/// the remaining tabs are still attempted. Output files are named
/// `<tab>.csv` and overwrite any existing file of that name. An empty tab
/// set opens the workbook but reads and writes nothing.
#[instrument(level = "debug", skip_all, fields(workbook = %workbook_path.display()))]
pub fn export_tabs(workbook_path: &Path, tabs: &[String], output_dir: &Path) -> Result<()> {
    let mut workbook = excel_read::open(workbook_path)?;

    for tab in tabs {
        match export_tab(&mut workbook, tab, output_dir) {
            Ok(csv_path) => info!(
                workbook = %workbook_path.display(),
                tab = %tab,
                destination = %csv_path.display(),
                "tab exported",
            ),
            Err(error) => error!(
                workbook = %workbook_path.display(),
                tab = %tab,
                %error,
                "tab export failed",
            ),
        }
    }

    Ok(())
}

fn export_tab(workbook: &mut Workbook, tab: &str, output_dir: &Path) -> Result<PathBuf> {
    let mut table = excel_read::read_table(workbook, tab)?;
    table.round_numbers(ROUND_DECIMAL_PLACES);

    let csv_path = output_dir.join(format!("{tab}.csv"));
    csv_write::write_table(&csv_path, &table)?;
    Ok(csv_path)
}
