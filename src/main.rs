// logsift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (verbose mode support)
// 3. Handing the resolved configuration to the core scanner
//
// Everything here is a thin wrapper; the matching/sorting/chunking logic
// lives in `core::scanner` and takes an explicit `ScanConfig` by value.

use clap::{Parser, Subcommand};
use logsift::core::scanner::{LogScanner, ScanConfig};
use logsift::util;
use std::path::PathBuf;

/// logsift - search log files for terms and write time-sorted results.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse the logs and get all rows that contain either any or all of
    /// the terms.
    ///
    /// Example: logsift parse term1 term2 term3
    Parse {
        /// Terms to search for.
        #[arg(required = true)]
        terms: Vec<String>,

        /// Logs folder path.
        #[arg(short = 'l', long = "logs", default_value = util::constants::DEFAULT_LOGS_DIR)]
        logs: PathBuf,

        /// Output folder path.
        #[arg(short = 'o', long = "output", default_value = util::constants::DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Inclusive mode: only keep lines that contain all the terms.
        #[arg(short = 'i', long = "inclusive")]
        inclusive: bool,

        /// Verbose mode.
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            terms,
            logs,
            output,
            inclusive,
            verbose,
        } => {
            util::logging::init(verbose);

            tracing::debug!(
                version = util::constants::APP_VERSION,
                "logsift starting"
            );

            let config = ScanConfig::new(logs, output, terms, inclusive);
            if let Err(e) = LogScanner::new(config).run() {
                tracing::error!(error = %e, "Scan failed");
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
