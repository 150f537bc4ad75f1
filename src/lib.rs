//! Core library for the sheetwalk command line application.
//!
//! The library exposes the components that power the command-line interface
//! as well as the unit tests. The modules are structured to keep
//! responsibilities narrow and composable: the folder catalog and selection
//! resolution live in [`catalog`], the terminal menu in [`menu`], workbook
//! and CSV adapters under [`io`], the tabular representation in [`model`],
//! the per-workbook export in [`export`], and the directory walk
//! orchestration in [`walk`].

pub mod catalog;
pub mod error;
pub mod export;
pub mod io;
pub mod menu;
pub mod model;
pub mod walk;

pub use error::{ExportError, Result};
