use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::license::classifier::classify;
use crate::license::registry::LicenseRegistry;
use crate::models::{FileReport, RiskLevel, ScanReport, ScanSummary};

/// Conventional license file names, probed directly in the scan root.
const LICENSE_FILENAMES: &[&str] = &[
    "LICENSE",
    "LICENSE.txt",
    "LICENSE.md",
    "COPYING",
    "COPYING.txt",
    "LICENSE-MIT",
    "LICENSE-APACHE",
];

/// Finds license files in a directory and classifies their content.
pub struct Scanner<'a> {
    root: PathBuf,
    registry: &'a LicenseRegistry,
    extra_filenames: Vec<String>,
}

impl<'a> Scanner<'a> {
    pub fn new(root: &Path, registry: &'a LicenseRegistry, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            registry,
            extra_filenames: config.scan.extra_filenames.clone(),
        }
    }

    /// Candidate license files found directly in the root (non-recursive).
    /// A missing root yields an empty list, not an error.
    pub fn find_license_files(&self) -> Vec<PathBuf> {
        if !self.root.exists() {
            return Vec::new();
        }

        LICENSE_FILENAMES
            .iter()
            .map(|name| self.root.join(name))
            .chain(self.extra_filenames.iter().map(|name| self.root.join(name)))
            .filter(|path| path.is_file())
            .collect()
    }

    /// Scan the root: discover, read, classify, and aggregate.
    ///
    /// Per-file read or decode failures degrade to "no content" (and hence
    /// zero matches) for that file; the scan always completes.
    pub fn scan(&self) -> ScanReport {
        let mut files = Vec::new();
        let mut summary = ScanSummary::default();

        for path in self.find_license_files() {
            let size = std::fs::metadata(&path).map(|m| m.len()).unwrap_or(0);
            let content = std::fs::read_to_string(&path).ok();

            let matches = match &content {
                Some(text) => classify(self.registry, text),
                None => Vec::new(),
            };

            summary.total_files += 1;
            if let Some(top) = matches.first() {
                summary.identified += 1;
                match top.risk {
                    RiskLevel::High => summary.high_risk += 1,
                    RiskLevel::Medium => summary.medium_risk += 1,
                    RiskLevel::Low => summary.low_risk += 1,
                }
            }

            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            files.push(FileReport {
                path,
                name,
                size,
                content,
                matches,
            });
        }

        ScanReport {
            path: self.root.clone(),
            files,
            summary,
        }
    }
}
