mod cli;
mod config;
mod engine;
mod error;
mod reporter;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use colored::*;
use config::Config;
use engine::Severity;
use std::process::exit;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let args = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) if args.json => {
                reporter::print_json_error(&format!("{:#}", e));
                exit(1);
            }
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to load configuration from {:?}", path));
            }
        },
        None => Config::default(),
    };

    let analysis = match engine::run(&config, &args.path) {
        Ok(analysis) => analysis,
        Err(e) => {
            if args.json {
                reporter::print_json_error(&e.to_string());
            } else {
                eprintln!("{} {}", "Error:".bright_red().bold(), e);
            }
            exit(1);
        }
    };

    if args.json {
        reporter::print_json_report(&analysis);
    } else {
        reporter::print_human_report(&analysis, start_time, args.brutal);
    }

    let has_brutal = analysis
        .violations
        .iter()
        .any(|v| v.severity == Severity::Brutal);
    if has_brutal {
        exit(1);
    }

    Ok(())
}
