//! `cardswap` binary.
//!
//! ```text
//! cardswap swap --dir team/ [--config cardswap.toml] [--max-distance N] [--format text|json] [--strict]
//! cardswap convert < list.txt
//! ```
//!
//! Logs go to stderr (filter with `RUST_LOG`, default `cardswap=info`);
//! stdout carries only the report.

mod cli;
mod commands;

use std::io;

use clap::Parser;
use cli::{Cli, Commands};
use commands::SwapOptions;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "cardswap=info";

fn init_tracing(json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result = match cli.command {
        Commands::Swap {
            dir,
            config,
            max_distance,
            format,
            strict,
        } => {
            tracing::info!(dir = %dir.display(), "Running card swap");
            let opts = SwapOptions {
                dir: &dir,
                config: config.as_deref(),
                max_distance,
                format,
                strict,
            };
            commands::swap(&opts, io::stdout().lock()).map(|_| ())
        }
        Commands::Convert => commands::convert(io::stdin().lock(), io::stdout().lock()),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
