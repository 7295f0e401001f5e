use anyhow::Result;
use colored::*;
use comfy_table::presets::NOTHING;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::config::Config;
use crate::models::{Compatibility, FileReport, RiskLevel, ScanReport};

/// How much of a license file `--show-content` previews.
const CONTENT_PREVIEW_CHARS: usize = 500;

/// Render a colored terminal report.
pub fn render(
    report: &ScanReport,
    config: &Config,
    verbose: bool,
    show_content: bool,
    quiet: bool,
) -> Result<()> {
    let summary = &report.summary;

    if quiet {
        println!(
            "Files: {}  Identified: {}  High: {}  Medium: {}  Low: {}",
            summary.total_files,
            summary.identified,
            summary.high_risk.to_string().red(),
            summary.medium_risk.to_string().yellow(),
            summary.low_risk.to_string().green(),
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "license-scan".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", report.path.display());

    if report.files.is_empty() {
        println!(" {} No license files found", "✗".red());
        println!(
            " {}\n",
            "Hint: expected a LICENSE or COPYING file in the directory".dimmed()
        );
        return Ok(());
    }

    println!(
        " {} Found {} license file(s)\n",
        "✓".green(),
        report.files.len()
    );

    for file in &report.files {
        render_file(file, config, verbose, show_content);
    }

    // Summary stats
    println!(" {}", "Summary".bold());
    println!("   Total files : {}", summary.total_files);
    println!("   Identified  : {}", summary.identified);
    println!("   High risk   : {}", summary.high_risk.to_string().red());
    println!(
        "   Medium risk : {}",
        summary.medium_risk.to_string().yellow()
    );
    println!("   Low risk    : {}", summary.low_risk.to_string().green());

    // Risk assessment
    println!("\n {}", "Assessment".bold());
    if summary.high_risk > 0 {
        println!(" {} High-risk license(s) found!", "⚠".red());
        println!(
            " {}",
            "Hint: check whether these licenses are compatible with your project".dimmed()
        );
    } else if summary.medium_risk > 0 {
        println!(" {} Medium-risk license(s) found", "⚠".yellow());
        println!(
            " {}",
            "Hint: review the usage restrictions of these licenses".dimmed()
        );
    } else {
        println!(" {} All identified licenses are low risk", "✓".green());
    }

    println!();
    Ok(())
}

fn render_file(file: &FileReport, config: &Config, verbose: bool, show_content: bool) {
    println!(" {}", file.name.cyan().bold());
    println!("   Path: {}", file.path.display().to_string().dimmed());
    println!("   Size: {} bytes\n", file.size);

    if file.matches.is_empty() {
        println!("   {}\n", "⚠ Unable to identify the license".red());
        return;
    }

    // All retained matches exceed 50%, but a weak top match still deserves
    // a manual check.
    let top = &file.matches[0];
    if top.confidence < 70.0 {
        println!("   {} Low confidence (< 70%)", "⚠".yellow());
        println!(
            "   {}\n",
            "Hint: verify the license type by hand".dimmed()
        );
    }

    render_matches_table(file, config.report.max_matches);

    if verbose {
        println!("\n   {} {}", "Description:".bold(), top.description);
    }

    println!();

    if show_content {
        if let Some(content) = &file.content {
            println!(
                "   {}",
                format!("Content (first {} chars):", CONTENT_PREVIEW_CHARS).yellow()
            );
            let preview: String = content.chars().take(CONTENT_PREVIEW_CHARS).collect();
            for line in preview.lines() {
                println!("   {}", line.dimmed());
            }
            println!();
        }
    }
}

fn render_matches_table(file: &FileReport, max_matches: usize) {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Confidence").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Compatibility").add_attribute(Attribute::Bold),
        ]);

    for m in file.matches.iter().take(max_matches) {
        let (risk_str, risk_color) = match m.risk {
            RiskLevel::Low => ("low ✓", Color::Green),
            RiskLevel::Medium => ("medium ⚠", Color::Yellow),
            RiskLevel::High => ("high ✗", Color::Red),
        };

        let compat_color = match m.compatibility {
            Compatibility::Excellent => Color::Green,
            Compatibility::Moderate => Color::Yellow,
            Compatibility::Poor | Compatibility::VeryPoor => Color::Red,
        };

        table.add_row(vec![
            Cell::new(&m.name),
            Cell::new(format!("{:.1}%", m.confidence)).set_alignment(CellAlignment::Right),
            Cell::new(risk_str)
                .fg(risk_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(m.compatibility.to_string())
                .fg(compat_color)
                .set_alignment(CellAlignment::Center),
        ]);
    }

    for line in table.to_string().lines() {
        println!("   {}", line);
    }
}
