use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::models::{Compatibility, RiskLevel};

/// A known license: identity, detection rules, and fixed metadata.
///
/// Rules are tested independently; the share of rules found in a text is the
/// classifier's confidence for this license, so the rule list itself is part
/// of the scoring contract.
pub struct LicenseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub rules: Vec<Regex>,
    pub risk: RiskLevel,
    pub description: &'static str,
    pub compatibility: Compatibility,
}

/// The raw catalog. Patterns are case-insensitive and `.` matches newlines
/// once compiled, so `BSD.*3-Clause` tolerates any intervening text.
const CATALOG: &[(
    &str,
    &str,
    &[&str],
    RiskLevel,
    &str,
    Compatibility,
)] = &[
    (
        "MIT",
        "MIT License",
        &[
            r"MIT\s+License",
            r"Permission is hereby granted, free of charge",
            r#"THE SOFTWARE IS PROVIDED "AS IS""#,
        ],
        RiskLevel::Low,
        "Very permissive; commercial use allowed, no obligation to open-source",
        Compatibility::Excellent,
    ),
    (
        "APACHE-2.0",
        "Apache License 2.0",
        &[
            r"Apache License",
            r"Version 2\.0",
            r"http://www\.apache\.org/licenses/LICENSE-2\.0",
        ],
        RiskLevel::Low,
        "Permissive, but copyright notices and change statements must be kept",
        Compatibility::Excellent,
    ),
    (
        "BSD-3-CLAUSE",
        "BSD 3-Clause License",
        &[
            r"BSD.*3-Clause",
            r"Redistribution and use in source and binary forms",
            r"Neither the name of.*nor the names of its contributors",
        ],
        RiskLevel::Low,
        "Permissive, similar to MIT",
        Compatibility::Excellent,
    ),
    (
        "BSD-2-CLAUSE",
        "BSD 2-Clause License",
        &[
            r"BSD.*2-Clause",
            r"Redistribution and use in source and binary forms",
        ],
        RiskLevel::Low,
        "Simplified BSD license",
        Compatibility::Excellent,
    ),
    (
        "ISC",
        "ISC License",
        &[r"ISC License", r"Permission to use, copy, modify"],
        RiskLevel::Low,
        "Short MIT-like license",
        Compatibility::Excellent,
    ),
    (
        "GPL-2.0",
        "GNU General Public License v2.0",
        &[
            r"GNU GENERAL PUBLIC LICENSE",
            r"Version 2",
            r"Free Software Foundation",
        ],
        RiskLevel::High,
        "Strong copyleft: projects using this code must be open-sourced",
        Compatibility::Poor,
    ),
    (
        "GPL-3.0",
        "GNU General Public License v3.0",
        &[
            r"GNU GENERAL PUBLIC LICENSE",
            r"Version 3",
            r"Free Software Foundation",
        ],
        RiskLevel::High,
        "Strong copyleft, stricter than GPL-2.0",
        Compatibility::Poor,
    ),
    (
        "AGPL-3.0",
        "GNU Affero General Public License v3.0",
        &[r"GNU AFFERO GENERAL PUBLIC LICENSE", r"Version 3"],
        RiskLevel::High,
        "Strongest copyleft: even network services must publish source",
        Compatibility::VeryPoor,
    ),
    (
        "LGPL-2.1",
        "GNU Lesser General Public License v2.1",
        &[r"GNU LESSER GENERAL PUBLIC LICENSE", r"Version 2\.1"],
        RiskLevel::Medium,
        "Weak copyleft: linking is fine, modifications to the library are not",
        Compatibility::Moderate,
    ),
    (
        "LGPL-3.0",
        "GNU Lesser General Public License v3.0",
        &[r"GNU LESSER GENERAL PUBLIC LICENSE", r"Version 3"],
        RiskLevel::Medium,
        "Weak copyleft, slightly stricter than LGPL-2.1",
        Compatibility::Moderate,
    ),
    (
        "MPL-2.0",
        "Mozilla Public License 2.0",
        &[r"Mozilla Public License", r"Version 2\.0"],
        RiskLevel::Medium,
        "File-level copyleft: modified files must be published",
        Compatibility::Moderate,
    ),
    (
        "UNLICENSE",
        "The Unlicense",
        &[
            r"This is free and unencumbered software",
            r"released into the public domain",
        ],
        RiskLevel::Low,
        "Public domain, fully unrestricted",
        Compatibility::Excellent,
    ),
];

/// Immutable catalog of known licenses, compiled once at startup.
///
/// Safe for concurrent read access; nothing is mutated after construction.
pub struct LicenseRegistry {
    definitions: Vec<LicenseDefinition>,
}

impl LicenseRegistry {
    /// Compile every detection rule. Fails only if a built-in pattern is
    /// invalid, which a registry test guards against.
    pub fn new() -> Result<Self> {
        let mut definitions = Vec::with_capacity(CATALOG.len());

        for &(id, name, patterns, risk, description, compatibility) in CATALOG {
            let rules = patterns
                .iter()
                .map(|pattern| {
                    RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .multi_line(true)
                        .dot_matches_new_line(true)
                        .build()
                        .with_context(|| format!("invalid detection rule for {}: {}", id, pattern))
                })
                .collect::<Result<Vec<Regex>>>()?;

            definitions.push(LicenseDefinition {
                id,
                name,
                rules,
                risk,
                description,
                compatibility,
            });
        }

        Ok(Self { definitions })
    }

    /// Full catalog in its fixed, deterministic order.
    pub fn definitions(&self) -> &[LicenseDefinition] {
        &self.definitions
    }

    /// Exact-match lookup; `None` for unknown ids.
    pub fn by_id(&self, id: &str) -> Option<&LicenseDefinition> {
        self.definitions.iter().find(|def| def.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_patterns_compile() {
        LicenseRegistry::new().unwrap();
    }

    #[test]
    fn test_ids_are_unique() {
        let registry = LicenseRegistry::new().unwrap();
        let mut ids: Vec<&str> = registry.definitions().iter().map(|d| d.id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }

    #[test]
    fn test_every_definition_has_rules() {
        let registry = LicenseRegistry::new().unwrap();
        for def in registry.definitions() {
            assert!(!def.rules.is_empty(), "{} has no rules", def.id);
        }
    }

    #[test]
    fn test_by_id() {
        let registry = LicenseRegistry::new().unwrap();
        let mit = registry.by_id("MIT").unwrap();
        assert_eq!(mit.name, "MIT License");
        assert_eq!(mit.risk, RiskLevel::Low);
        assert_eq!(mit.compatibility, Compatibility::Excellent);
        assert!(registry.by_id("NOPE").is_none());
    }

    #[test]
    fn test_rules_tolerate_intervening_text() {
        let registry = LicenseRegistry::new().unwrap();
        let bsd = registry.by_id("BSD-3-CLAUSE").unwrap();
        assert!(bsd.rules[0].is_match("The BSD license,\nspecifically the 3-Clause variant"));
    }

    #[test]
    fn test_rules_are_case_insensitive() {
        let registry = LicenseRegistry::new().unwrap();
        let mit = registry.by_id("MIT").unwrap();
        assert!(mit.rules[0].is_match("mit license"));
    }
}
