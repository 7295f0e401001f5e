use crate::license::registry::LicenseRegistry;
use crate::models::MatchResult;

/// Score `text` against every registered license and return the qualifying
/// candidates, best first.
///
/// Confidence for a license is the percentage of its detection rules found
/// anywhere in the text. Only results strictly above 50% survive, so a
/// two-rule license with one rule matched (exactly 50%) is excluded. The
/// sort is stable: equal confidences keep registry order.
///
/// Pure and total: any string input (including empty or non-license text)
/// yields a result, possibly empty.
pub fn classify(registry: &LicenseRegistry, text: &str) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = registry
        .definitions()
        .iter()
        .filter_map(|def| {
            let matched = def.rules.iter().filter(|rule| rule.is_match(text)).count();
            let confidence = matched as f64 / def.rules.len() as f64 * 100.0;

            if confidence > 50.0 {
                Some(MatchResult {
                    id: def.id.to_string(),
                    name: def.name.to_string(),
                    confidence,
                    risk: def.risk,
                    description: def.description.to_string(),
                    compatibility: def.compatibility,
                })
            } else {
                None
            }
        })
        .collect();

    // Descending by confidence; stable, so ties retain registry order.
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Compatibility, RiskLevel};

    fn registry() -> LicenseRegistry {
        LicenseRegistry::new().unwrap()
    }

    #[test]
    fn test_mit_full_match() {
        let text = "MIT License\nPermission is hereby granted, free of charge\nTHE SOFTWARE IS PROVIDED \"AS IS\"";
        let results = classify(&registry(), text);

        let top = &results[0];
        assert_eq!(top.id, "MIT");
        assert_eq!(top.confidence, 100.0);
        assert_eq!(top.risk, RiskLevel::Low);
        assert_eq!(top.compatibility, Compatibility::Excellent);
    }

    #[test]
    fn test_gpl2_outranks_gpl3_on_shared_rules() {
        let text = "GNU GENERAL PUBLIC LICENSE\nVersion 2\nFree Software Foundation";
        let results = classify(&registry(), text);

        // GPL-2.0 matches all three rules; GPL-3.0 shares two of them.
        assert_eq!(results[0].id, "GPL-2.0");
        assert_eq!(results[0].confidence, 100.0);

        let gpl3 = results.iter().find(|r| r.id == "GPL-3.0").unwrap();
        assert!(gpl3.confidence > 50.0 && gpl3.confidence < 100.0);
        assert!((gpl3.confidence - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_markers_yields_empty() {
        let results = classify(&registry(), "Some random text with no license markers");
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_and_whitespace_yield_empty() {
        assert!(classify(&registry(), "").is_empty());
        assert!(classify(&registry(), "   \n\t  ").is_empty());
    }

    #[test]
    fn test_half_matched_two_rule_excluded() {
        // ISC has two rules; matching just one scores exactly 50% and the
        // filter requires strictly more.
        let results = classify(&registry(), "ISC License");
        assert!(results.iter().all(|r| r.id != "ISC"));
    }

    #[test]
    fn test_two_of_three_rules_qualifies() {
        let text = "MIT License\nPermission is hereby granted, free of charge";
        let results = classify(&registry(), text);

        let mit = results.iter().find(|r| r.id == "MIT").unwrap();
        assert!((mit.confidence - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_idempotent() {
        let text = "Mozilla Public License\nVersion 2.0";
        let registry = registry();
        assert_eq!(classify(&registry, text), classify(&registry, text));
    }

    #[test]
    fn test_ordering_law() {
        // LGPL-3.0 and AGPL-3.0 both fully match this text; their relative
        // order must follow the registry (AGPL-3.0 first).
        let text = "GNU AFFERO GENERAL PUBLIC LICENSE\nGNU LESSER GENERAL PUBLIC LICENSE\nVersion 3";
        let results = classify(&registry(), text);

        for pair in results.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }

        let agpl = results.iter().position(|r| r.id == "AGPL-3.0").unwrap();
        let lgpl = results.iter().position(|r| r.id == "LGPL-3.0").unwrap();
        assert!(agpl < lgpl);
        assert_eq!(results[agpl].confidence, results[lgpl].confidence);
    }

    #[test]
    fn test_non_ascii_input_accepted() {
        assert!(classify(&registry(), "授權條款：保留所有權利 🄯").is_empty());
    }

    #[test]
    fn test_unlicense() {
        let text = "This is free and unencumbered software released into the public domain";
        let results = classify(&registry(), text);
        assert_eq!(results[0].id, "UNLICENSE");
        assert_eq!(results[0].confidence, 100.0);
    }
}
