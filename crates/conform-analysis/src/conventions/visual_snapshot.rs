//! require-visual-snapshot: every JSX/TSX component needs a spec file and a
//! `<name>.spec-snapshots` folder holding at least one PNG.

use conform_core::{RuleId, Severity};

use super::file_kinds::is_component_file;
use super::types::{ConventionResult, Violation, ViolationKind};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::patterns::ExcludePatterns;

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/*.spec.jsx",
    "**/*.spec.tsx",
    "**/*.test.jsx",
    "**/*.test.tsx",
    "**/index.jsx",
    "**/index.tsx",
];

pub struct VisualSnapshotChecker {
    excludes: ExcludePatterns,
    severity: Severity,
}

impl VisualSnapshotChecker {
    pub fn new(excludes: ExcludePatterns, severity: Severity) -> Self {
        Self { excludes, severity }
    }

    pub fn with_defaults(severity: Severity) -> Self {
        Self::new(ExcludePatterns::from_defaults(DEFAULT_EXCLUDES), severity)
    }

    /// Stops at the first unmet requirement: spec, then folder, then image.
    fn evaluate(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> ConventionResult {
        let parsed = &file.parsed;
        if !is_component_file(parsed.ext) || self.excludes.is_excluded(file.path) {
            return ConventionResult::Pass;
        }

        let spec_file = format!("{}.spec{}", parsed.name, parsed.ext);
        if !env.probe.exists(&parsed.sibling(&spec_file)) {
            return ConventionResult::Violation(
                self.violation(file, ViolationKind::MissingComponentSpec { spec_file }),
            );
        }

        let folder = format!("{}.spec-snapshots", parsed.name);
        let folder_path = parsed.sibling(&folder);
        if !env.probe.is_dir(&folder_path) {
            return ConventionResult::Violation(
                self.violation(file, ViolationKind::MissingSnapshotFolder { folder }),
            );
        }

        let has_png = env
            .probe
            .list_dir(&folder_path)
            .is_some_and(|entries| entries.iter().any(|name| name.to_lowercase().ends_with(".png")));
        if has_png {
            ConventionResult::Pass
        } else {
            ConventionResult::Violation(self.violation(file, ViolationKind::MissingPng { folder }))
        }
    }
}

impl ConventionChecker for VisualSnapshotChecker {
    fn id(&self) -> RuleId {
        RuleId::RequireVisualSnapshot
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation> {
        self.evaluate(file, env).into_violation().into_iter().collect()
    }
}
