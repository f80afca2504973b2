use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Your code is shit. Here's why.", long_about = None)]
pub struct Cli {
    /// File or directory to analyze
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output results in JSON format
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Extra brutal mode: harsher verdicts and full metrics per violation
    #[arg(long, default_value_t = false)]
    pub brutal: bool,

    /// Enable debug logging
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
