//! catseed - print the API calls that seed a store's category tree.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use catseed::cli::Cli;
use catseed::{app, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let stdout = io::stdout();
    let code = match app::run(&cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            eprintln!("Error: {}", e.user_message());
            if let Some(action) = e.suggested_action() {
                eprintln!("{}", action);
            }
            ExitCode::from(e.exit_code())
        }
    };

    logging::shutdown();
    code
}
