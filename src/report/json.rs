use anyhow::Result;
use serde::Serialize;

use crate::models::{Compatibility, RiskLevel, ScanReport, ScanSummary};

/// Serialized scan report: `scan_path`, summary counts, and one entry per
/// file with its ranked license candidates.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub scan_path: String,
    pub summary: ScanSummary,
    pub files: Vec<JsonFile>,
}

#[derive(Debug, Serialize)]
pub struct JsonFile {
    pub name: String,
    pub path: String,
    pub size: u64,
    pub licenses: Vec<JsonLicense>,
}

#[derive(Debug, Serialize)]
pub struct JsonLicense {
    pub id: String,
    pub name: String,
    /// Rounded to 2 decimal digits for serialization; ranking uses the
    /// unrounded value.
    pub confidence: f64,
    pub risk_level: RiskLevel,
    pub description: String,
    pub compatibility: Compatibility,
}

/// Build the serializable report, preserving each file's ranked match order.
pub fn build(report: &ScanReport) -> JsonReport {
    JsonReport {
        scan_path: report.path.display().to_string(),
        summary: report.summary.clone(),
        files: report
            .files
            .iter()
            .map(|file| JsonFile {
                name: file.name.clone(),
                path: file.path.display().to_string(),
                size: file.size,
                licenses: file
                    .matches
                    .iter()
                    .map(|m| JsonLicense {
                        id: m.id.clone(),
                        name: m.name.clone(),
                        confidence: round2(m.confidence),
                        risk_level: m.risk,
                        description: m.description.clone(),
                        compatibility: m.compatibility,
                    })
                    .collect(),
            })
            .collect(),
    }
}

/// Render the report as pretty-printed JSON.
pub fn render(report: &ScanReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(&build(report))?)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
