//! require-storybook-file: every JSX/TSX component needs `<name>.stories<ext>` beside it.

use conform_core::{RuleId, Severity};

use super::file_kinds::is_component_file;
use super::types::{Violation, ViolationKind};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::patterns::ExcludePatterns;

pub const DEFAULT_EXCLUDES: &[&str] = &[
    "**/*.stories.{jsx,tsx,js,ts}",
    "**/index.jsx",
    "**/index.tsx",
    "**/*.spec.jsx",
    "**/*.spec.tsx",
    "**/*.test.jsx",
    "**/*.test.tsx",
];

pub struct StorybookFileChecker {
    excludes: ExcludePatterns,
    severity: Severity,
}

impl StorybookFileChecker {
    pub fn new(excludes: ExcludePatterns, severity: Severity) -> Self {
        Self { excludes, severity }
    }

    pub fn with_defaults(severity: Severity) -> Self {
        Self::new(ExcludePatterns::from_defaults(DEFAULT_EXCLUDES), severity)
    }
}

impl ConventionChecker for StorybookFileChecker {
    fn id(&self) -> RuleId {
        RuleId::RequireStorybookFile
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation> {
        let parsed = &file.parsed;
        if !is_component_file(parsed.ext) || self.excludes.is_excluded(file.path) {
            return Vec::new();
        }

        let story_file = format!("{}.stories{}", parsed.name, parsed.ext);
        if env.probe.exists(&parsed.sibling(&story_file)) {
            return Vec::new();
        }
        vec![self.violation(file, ViolationKind::MissingStorybook { story_file })]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{MemoryProbe, RunState};

    fn run(probe: &MemoryProbe, path: &str) -> Vec<Violation> {
        let state = RunState::new();
        StorybookFileChecker::with_defaults(Severity::Error)
            .check(&FileContext::without_syntax(path, true), &CheckEnv::new(probe, &state))
    }

    #[test]
    fn component_without_story_is_reported() {
        let probe = MemoryProbe::with_files(["src/Button.tsx"]);
        let v = run(&probe, "src/Button.tsx");
        assert_eq!(
            v[0].kind,
            ViolationKind::MissingStorybook {
                story_file: "Button.stories.tsx".into()
            }
        );
    }

    #[test]
    fn story_present_passes() {
        let probe = MemoryProbe::with_files(["src/Button.jsx", "src/Button.stories.jsx"]);
        assert!(run(&probe, "src/Button.jsx").is_empty());
    }

    #[test]
    fn non_components_and_excluded_files_pass() {
        let probe = MemoryProbe::new();
        assert!(run(&probe, "src/util.js").is_empty());
        assert!(run(&probe, "src/Button.stories.tsx").is_empty());
        assert!(run(&probe, "src/index.jsx").is_empty());
        assert!(run(&probe, "src/Button.spec.jsx").is_empty());
    }
}
