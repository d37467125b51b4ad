use std::process::ExitCode;

use clap::Parser;

use gavel::cli::{Cli, Commands};
use gavel::logging::{self, LogTarget};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // The dashboard installs its own file logger
    if !matches!(cli.command, Commands::Dashboard { .. }) {
        logging::init(LogTarget::Stderr);
    }

    match cli.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
