//! Top-level run: settings, catalog, plan, output.

use std::io::Write;
use std::path::PathBuf;

use tracing::{info, instrument};

use crate::catalog::{load_products, sample_products, Product};
use crate::cli::Cli;
use crate::config::Settings;
use crate::emit::{CommandPlan, OutputFormat};
use crate::error::Result;

/// Effective options after merging the settings file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    /// Catalog file, or `None` for the sample catalog.
    pub products_file: Option<PathBuf>,
    /// Output format.
    pub format: OutputFormat,
    /// Whether to print the banner.
    pub header: bool,
}

impl RunOptions {
    /// Merge `settings` with `cli`. Command-line values win.
    pub fn resolve(settings: Settings, cli: &Cli) -> Self {
        Self {
            products_file: cli.products.clone().or(settings.products_file),
            format: cli.format.unwrap_or(settings.format),
            header: settings.header && !cli.no_header,
        }
    }

    /// Load the catalog these options point at.
    pub fn products(&self) -> Result<Vec<Product>> {
        match &self.products_file {
            Some(path) => Ok(load_products(path)?),
            None => {
                info!("Using built-in sample catalog");
                Ok(sample_products())
            }
        }
    }
}

/// Run once with explicit options, writing to `out`.
#[instrument(skip_all, fields(format = ?options.format))]
pub fn run_with<W: Write>(options: &RunOptions, out: &mut W) -> Result<()> {
    let products = options.products()?;
    let plan = CommandPlan::build(&products);
    plan.render(out, options.format, options.header)?;
    out.flush()?;
    Ok(())
}

/// Run from parsed command-line arguments, writing to `out`.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let options = RunOptions::resolve(settings, cli);
    run_with(&options, out)
}
