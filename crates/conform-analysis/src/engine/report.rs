//! The result of one run.

use std::time::Duration;

use conform_core::{RuleId, Severity};
use serde::{Deserialize, Serialize};

use crate::conventions::Violation;

/// Every violation found in a run, plus counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// Sorted by file, line, column, then rule.
    pub violations: Vec<Violation>,
    pub files_scanned: usize,
    /// Files that could not be read.
    pub files_failed: usize,
    pub duration_ms: u64,
}

impl LintReport {
    pub fn new(
        mut violations: Vec<Violation>,
        files_scanned: usize,
        files_failed: usize,
        duration: Duration,
    ) -> Self {
        violations.sort_by(|a, b| {
            (&a.location.file, a.location.line, a.location.column, a.rule).cmp(&(
                &b.location.file,
                b.location.line,
                b.location.column,
                b.rule,
            ))
        });
        Self {
            violations,
            files_scanned,
            files_failed,
            duration_ms: duration.as_millis() as u64,
        }
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Violation count per rule, in rule order, rules without violations omitted.
    pub fn by_rule(&self) -> Vec<(RuleId, usize)> {
        RuleId::all()
            .iter()
            .filter_map(|rule| {
                let count = self.violations.iter().filter(|v| v.rule == *rule).count();
                (count > 0).then_some((*rule, count))
            })
            .collect()
    }

    /// Distinct files with at least one violation, in report order.
    pub fn files_with_violations(&self) -> Vec<&str> {
        let mut files: Vec<&str> = self.violations.iter().map(|v| v.location.file.as_str()).collect();
        files.dedup();
        files
    }
}
