//! Stylish text reporter: violations grouped per file, then a summary line.

use std::fmt::Write;

use conform_core::Severity;

use super::{ReportError, Reporter};
use crate::engine::LintReport;

#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for TextReporter {
    fn name(&self) -> &'static str {
        "text"
    }

    fn generate(&self, report: &LintReport) -> Result<String, ReportError> {
        let mut out = String::new();
        let mut current: Option<&str> = None;

        for v in &report.violations {
            if current != Some(v.location.file.as_str()) {
                if current.is_some() {
                    out.push('\n');
                }
                let _ = writeln!(out, "{}", v.location.file);
                current = Some(v.location.file.as_str());
            }
            let severity = match v.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = writeln!(
                out,
                "  {:>4}:{:<3} {:<7}  {}  {}",
                v.location.line,
                v.location.column,
                severity,
                v.message(),
                v.rule
            );
        }

        if !report.violations.is_empty() {
            out.push('\n');
        }
        let errors = report.error_count();
        let warnings = report.warning_count();
        if errors + warnings == 0 {
            let _ = write!(out, "No problems found in {} files", report.files_scanned);
        } else {
            let _ = write!(
                out,
                "{} problems ({} errors, {} warnings) in {} files",
                errors + warnings,
                errors,
                warnings,
                report.files_scanned
            );
        }
        if report.files_failed > 0 {
            let _ = write!(out, ", {} unreadable", report.files_failed);
        }
        out.push('\n');
        Ok(out)
    }
}
