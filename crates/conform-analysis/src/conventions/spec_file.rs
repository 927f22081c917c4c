//! require-spec-file: implementation files with logic need an adjacent spec,
//! and every spec needs its implementation.

use conform_core::{RuleId, Severity};

use super::file_kinds::{
    has_spec_stem, implementation_extension, is_aggregation_spec, is_index_file, is_spec_file,
};
use super::types::{ConventionResult, Violation, ViolationKind};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::patterns::ExcludePatterns;

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/*.spec.js",
    "**/*.spec.ts",
    "**/*.test.js",
    "**/*.test.ts",
    "**/index.js",
    "**/index.ts",
    "**/*.d.ts",
];

/// Suffix length of `.spec` / `.test`.
const SPEC_SUFFIX_LEN: usize = 5;

pub struct SpecFileChecker {
    excludes: ExcludePatterns,
    severity: Severity,
}

impl SpecFileChecker {
    pub fn new(excludes: ExcludePatterns, severity: Severity) -> Self {
        Self { excludes, severity }
    }

    pub fn with_defaults(severity: Severity) -> Self {
        Self::new(ExcludePatterns::from_defaults(DEFAULT_EXCLUDES), severity)
    }

    /// Spec files are validated regardless of exclude patterns.
    fn validate_spec(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> ConventionResult {
        let parsed = &file.parsed;
        if is_aggregation_spec(parsed.name) {
            return ConventionResult::Violation(
                self.violation(file, ViolationKind::AggregationSpecNotAllowed),
            );
        }
        if !has_spec_stem(parsed.name) {
            return ConventionResult::Pass;
        }

        let impl_name = &parsed.name[..parsed.name.len() - SPEC_SUFFIX_LEN];
        let impl_file = format!("{impl_name}{}", parsed.ext);
        if env.probe.exists(&parsed.sibling(&impl_file)) {
            return ConventionResult::Pass;
        }
        ConventionResult::Violation(self.violation(
            file,
            ViolationKind::MissingImplementation {
                spec_file: parsed.base.to_string(),
                impl_file,
            },
        ))
    }

    fn validate_implementation(
        &self,
        file: &FileContext<'_>,
        env: &CheckEnv<'_>,
    ) -> ConventionResult {
        let Some(ext) = implementation_extension(file.path) else {
            return ConventionResult::Pass;
        };
        // An index spec is always rejected, so never ask for one.
        if is_index_file(file.path) {
            return ConventionResult::Pass;
        }
        if self.excludes.is_excluded(file.path) {
            tracing::debug!(path = file.path, rule = %self.id(), "excluded");
            return ConventionResult::Pass;
        }
        if !file.has_logic {
            return ConventionResult::Pass;
        }

        let spec_file = format!("{}.spec{ext}", file.parsed.name);
        if env.probe.exists(&file.parsed.sibling(&spec_file)) {
            return ConventionResult::Pass;
        }
        ConventionResult::Violation(self.violation(file, ViolationKind::MissingSpec { spec_file }))
    }
}

impl ConventionChecker for SpecFileChecker {
    fn id(&self) -> RuleId {
        RuleId::RequireSpecFile
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation> {
        let result = if is_spec_file(file.path) {
            self.validate_spec(file, env)
        } else {
            self.validate_implementation(file, env)
        };
        result.into_violation().into_iter().collect()
    }
}
