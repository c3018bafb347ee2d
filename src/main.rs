use anyhow::Result;
use clap::Parser;
use dirtree::core::telemetry::logging::init_logging;
use dirtree::services::fs::tree;
use dirtree::services::render::diagram;
use std::io;
use std::path::PathBuf;

/// Print a directory's contents as an indented tree diagram.
///
/// Examples:
///   dirtree .        # directories only
///   dirtree . -f     # directories and files, with byte sizes
#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(version)]
#[command(about, long_about = None)]
struct Cli {
    /// Directory to diagram
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// The literal value "-f" includes files with their byte sizes; any
    /// other value (or none) keeps directories-only mode.
    #[arg(value_name = "FLAG", allow_hyphen_values = true)]
    flag: Option<String>,
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let include_files = cli.flag.as_deref() == Some("-f");
    tracing::debug!(path = %cli.path.display(), include_files, "building tree");

    let root = tree::build(&cli.path, include_files)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    diagram::render(&root, &mut out)?;
    Ok(())
}
