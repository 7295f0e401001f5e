use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-scan",
    about = "Scan a directory for license files and identify their licenses",
    version
)]
pub struct Cli {
    /// Directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    pub output: OutputFormat,

    /// Write the report to a file instead of stdout (JSON output only)
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    /// Config file [default: ./.license-scan/config.toml, fallback ~/.config/license-scan/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Show the top match's description for each file
    #[arg(short, long)]
    pub verbose: bool,

    /// Show a preview of each license file's content
    #[arg(long)]
    pub show_content: bool,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
