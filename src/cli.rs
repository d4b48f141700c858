//! CLI argument parsing for nbastat

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nbastat")]
#[command(version)]
#[command(about = "Analyze NBA player season statistics from a TSV dump", long_about = None)]
pub struct Cli {
    /// Path to the tab-separated stats file (header row required)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Years at which to estimate accuracy from the interpolant
    /// (year Y estimates the Y/Y+1 season)
    #[arg(
        long = "estimate",
        value_name = "YEARS",
        value_delimiter = ',',
        default_value = "2002,2015"
    )]
    pub estimate: Vec<i32>,

    /// Enable debug tracing to stderr
    #[arg(long)]
    pub debug: bool,
}
