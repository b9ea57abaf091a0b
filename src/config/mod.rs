pub mod storage;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "small-fp")]
#[command(about = "Run closure, generator and map/filter/reduce drills and report the results")]
pub struct CliConfig {
    /// Path to a TOML file with exercise inputs; built-in samples are used when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Run only these exercises (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Report format: json, csv or text
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Directory the report is written to
    #[arg(long)]
    pub output_path: Option<String>,

    /// Record failing exercises in the report instead of stopping at the first one
    #[arg(long)]
    pub keep_going: bool,

    /// Also print the text report to stdout
    #[arg(long)]
    pub print: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}
