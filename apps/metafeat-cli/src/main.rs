//! metafeat binary
//!
//! Usage: `metafeat <input_file> <op1> [op2] [op3] [op4]`, where each op is
//! one of `mul`, `div`, `add`, `sub`.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use metafeat_cli::{run, Args};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(summary) => {
            println!("{}", summary.message());
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
