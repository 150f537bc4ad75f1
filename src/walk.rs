//! Recursive walk over the resolved root directory.
//!
//! Each visited directory is processed independently: the tab set comes from
//! the output files already present there, and every workbook in the
//! directory is exported against that set. Nothing is shared between
//! directories.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error, instrument, warn};
use walkdir::WalkDir;

use crate::error::{ExportError, Result};
use crate::export;

/// File suffixes recognised as workbooks. Matching is case-sensitive.
const WORKBOOK_SUFFIXES: [&str; 2] = [".xlsx", ".xls"];

/// Suffix of exported tab files. Files already carrying it decide which tabs
/// get exported into their directory.
const OUTPUT_SUFFIX: &str = ".csv";

/// Walks every directory under `root` top-down and exports workbook tabs
/// according to the output files already present in each directory.
///
/// A missing root is an error. Failures below the root never abort the walk:
/// unreadable entries and directories are logged and skipped, and workbook
/// and tab failures are isolated inside [`export::export_tabs`].
#[instrument(level = "info", skip_all, fields(root = %root.display()))]
pub fn export_tree(root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(ExportError::MissingInput(root.to_path_buf()));
    }

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                warn!(%error, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        if let Err(error) = export_directory(entry.path()) {
            warn!(directory = %entry.path().display(), %error, "skipping directory");
        }
    }

    Ok(())
}

fn export_directory(dir: &Path) -> Result<()> {
    let (workbooks, tabs) = scan_directory(dir)?;
    if workbooks.is_empty() {
        return Ok(());
    }
    debug!(
        directory = %dir.display(),
        workbooks = workbooks.len(),
        tabs = tabs.len(),
        "processing directory",
    );

    for workbook in &workbooks {
        if let Err(error) = export::export_tabs(workbook, &tabs, dir) {
            error!(workbook = %workbook.display(), %error, "failed to open workbook");
        }
    }

    Ok(())
}

/// Splits a directory listing into workbook paths and the tab names implied
/// by existing output files (their names with the suffix stripped). Both are
/// returned in directory-listing order.
fn scan_directory(dir: &Path) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut workbooks = Vec::new();
    let mut tabs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if WORKBOOK_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
            workbooks.push(entry.path());
        } else if let Some(tab) = name.strip_suffix(OUTPUT_SUFFIX) {
            tabs.push(tab.to_string());
        }
    }

    Ok((workbooks, tabs))
}
