//! The convention engine: parse, classify, check, and collect a report.

pub mod report;
pub mod runner;

pub use report::LintReport;
pub use runner::ConventionEngine;
