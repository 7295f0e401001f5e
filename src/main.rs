//! `license-scan` — find license files in a directory and identify them.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load scan/report config ([`config::load_config`]).
//! 3. Build the license registry ([`license::registry`]).
//! 4. Discover and classify license files ([`scanner`]).
//! 5. Render the requested report ([`report`]).

mod cli;
mod config;
mod license;
mod models;
mod report;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use cli::{Cli, OutputFormat};
use config::load_config;
use license::registry::LicenseRegistry;
use scanner::Scanner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve scan path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&path, cli.config.as_deref())?;
    let registry = LicenseRegistry::new()?;

    let scan_report = Scanner::new(&path, &registry, &config).scan();

    match cli.output {
        OutputFormat::Json => {
            let json = report::json::render(&scan_report)?;
            match &cli.output_file {
                Some(file) => {
                    std::fs::write(file, &json)
                        .with_context(|| format!("failed to write {}", file.display()))?;
                    eprintln!("{} JSON report saved to: {}", "✓".green(), file.display());
                }
                None => println!("{}", json),
            }
        }
        OutputFormat::Text => {
            report::terminal::render(
                &scan_report,
                &config,
                cli.verbose,
                cli.show_content,
                cli.quiet,
            )?;
        }
    }

    Ok(())
}
