//! Report renderers for license scan results.
//!
//! - [`terminal`] — colored, tabular per-file output with summary and risk
//!   assessment; respects `--verbose`, `--show-content`, and `--quiet`.
//! - [`json`] — machine-readable report, one JSON object per scan with
//!   nested per-file license arrays.

pub mod json;
pub mod terminal;
