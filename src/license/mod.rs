//! License identification: the pattern catalog and the scoring engine.
//!
//! - [`registry`] — immutable catalog of [`LicenseDefinition`](registry::LicenseDefinition)s
//!   with compiled detection rules and fixed risk/compatibility metadata.
//! - [`classifier`] — scores raw text against every catalog entry and returns
//!   a ranked, filtered list of [`MatchResult`](crate::models::MatchResult)s.

pub mod classifier;
pub mod registry;
