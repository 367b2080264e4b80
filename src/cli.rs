//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::emit::OutputFormat;

/// Categorize store products and print the API calls that create the
/// category tree and file each product under `<category>/<brand>`.
///
/// Nothing is sent: the calls are printed as `curl` commands or JSON.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "catseed", version, about, long_about = None)]
pub struct Cli {
    /// JSON catalog file (a product array or a `{"data": [...]}` response).
    /// Defaults to the built-in sample catalog.
    #[arg(short, long, value_name = "FILE")]
    pub products: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Settings file to use instead of the default location.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Do not print the banner before the commands.
    #[arg(long)]
    pub no_header: bool,
}
