use std::path::PathBuf;

use clap::Parser;
use sheetwalk::{ExportError, Result, catalog, menu, walk};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging()?;

    let root = match (cli.dirpath, cli.menu_choice) {
        (Some(dirpath), _) => dirpath,
        (None, Some(label)) => PathBuf::from(catalog::resolve(&label)),
        (None, None) => PathBuf::from(catalog::resolve(menu::pick_label()?)),
    };

    info!(root = %root.display(), "processing files");
    walk::export_tree(&root)
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| ExportError::Logging(error.to_string()))
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Export workbook tabs to CSV files across a data tree."
)]
struct Cli {
    /// Catalog folder to process, allowing non-interactive use.
    #[arg(short, long = "menu_choice", value_parser = parse_label)]
    menu_choice: Option<String>,

    /// Arbitrary directory with subfolders of workbook files; bypasses the
    /// catalog and takes precedence over --menu_choice.
    #[arg(short, long)]
    dirpath: Option<PathBuf>,
}

fn parse_label(value: &str) -> std::result::Result<String, String> {
    if catalog::is_label(value) {
        Ok(value.to_string())
    } else {
        Err(format!(
            "unknown folder label '{value}' (expected one of: {})",
            catalog::LABELS.join(", ")
        ))
    }
}
