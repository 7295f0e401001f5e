use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Coarse legal-obligation severity assigned per license (not computed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// How easily the license combines with a permissive or proprietary project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Compatibility {
    Excellent,
    Moderate,
    Poor,
    VeryPoor,
}

impl std::fmt::Display for Compatibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compatibility::Excellent => write!(f, "excellent"),
            Compatibility::Moderate => write!(f, "moderate"),
            Compatibility::Poor => write!(f, "poor"),
            Compatibility::VeryPoor => write!(f, "very-poor"),
        }
    }
}

/// One candidate license for a piece of text, produced by the classifier.
///
/// `confidence` is the percentage of the definition's detection rules found
/// in the text; only results strictly above 50% are emitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub id: String,
    pub name: String,
    pub confidence: f64,
    pub risk: RiskLevel,
    pub description: String,
    pub compatibility: Compatibility,
}

/// A candidate license file and its classification results.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
    /// `None` when the file could not be read or decoded.
    pub content: Option<String>,
    /// Ranked by descending confidence; ties keep registry order.
    pub matches: Vec<MatchResult>,
}

/// Aggregate counts over one scan. Risk buckets count each file's top match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanSummary {
    pub total_files: usize,
    pub identified: usize,
    pub high_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
}

/// Result of scanning one directory.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub path: PathBuf,
    pub files: Vec<FileReport>,
    pub summary: ScanSummary,
}
