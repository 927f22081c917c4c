//! JSON reporter: the report plus summary counters.

use serde::Serialize;

use super::{ReportError, Reporter};
use crate::conventions::Violation;
use crate::engine::LintReport;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonViolation<'a> {
    #[serde(flatten)]
    violation: &'a Violation,
    code: &'static str,
    message: String,
}

#[derive(Serialize)]
struct JsonSummary {
    errors: usize,
    warnings: usize,
    files_scanned: usize,
    files_failed: usize,
    duration_ms: u64,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: JsonSummary,
    violations: Vec<JsonViolation<'a>>,
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &LintReport) -> Result<String, ReportError> {
        let output = JsonOutput {
            summary: JsonSummary {
                errors: report.error_count(),
                warnings: report.warning_count(),
                files_scanned: report.files_scanned,
                files_failed: report.files_failed,
                duration_ms: report.duration_ms,
            },
            violations: report
                .violations
                .iter()
                .map(|v| JsonViolation {
                    violation: v,
                    code: v.kind.code(),
                    message: v.message(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}
