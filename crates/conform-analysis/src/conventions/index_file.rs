//! require-index-file: directories with enough implementation files need `index.js` or `index.ts`.

use conform_core::config::rule_config::DEFAULT_MIN_FILES;
use conform_core::{RuleId, Severity};

use super::file_kinds::{counts_toward_index, has_spec_stem};
use super::types::{ConventionResult, Violation, ViolationKind};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::paths::join;
use crate::patterns::ExcludePatterns;

pub const DEFAULT_EXCLUDES: &[&str] = &["**/examples/**", "**/test/**", "**/tests/**", "**/__tests__/**"];

const INDEX_CANDIDATES: &[&str] = &["index.js", "index.ts"];

pub struct IndexFileChecker {
    excludes: ExcludePatterns,
    min_files: usize,
    severity: Severity,
}

impl IndexFileChecker {
    /// `min_files` has been validated to be at least 1.
    pub fn new(excludes: ExcludePatterns, min_files: usize, severity: Severity) -> Self {
        Self {
            excludes,
            min_files,
            severity,
        }
    }

    pub fn with_defaults(severity: Severity) -> Self {
        Self::new(
            ExcludePatterns::from_defaults(DEFAULT_EXCLUDES),
            DEFAULT_MIN_FILES,
            severity,
        )
    }

    fn is_skipped(&self, file: &FileContext<'_>) -> bool {
        let name = file.parsed.name;
        if name == "index" || has_spec_stem(name) || name.contains(".spec.") || name.contains(".test.") {
            return true;
        }
        // `**/tests/**` needs a trailing separator, so the directory itself is tested with one.
        let dir = format!("{}/", file.parsed.dir);
        self.excludes.is_excluded(file.path) || self.excludes.is_excluded(&dir)
    }

    fn evaluate(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> ConventionResult {
        if self.is_skipped(file) {
            return ConventionResult::Pass;
        }

        let dir = file.parsed.dir;
        let visited = &env.run.visited_dirs;
        if visited.contains(dir) || !env.probe.is_dir(dir) {
            return ConventionResult::Pass;
        }
        let Some(entries) = env.probe.list_dir(dir) else {
            return ConventionResult::Pass;
        };

        let implementation_files = entries
            .iter()
            .filter(|name| counts_toward_index(name) && env.probe.is_file(&join(dir, name)))
            .count();
        if implementation_files < self.min_files {
            return ConventionResult::Pass;
        }

        let has_index = INDEX_CANDIDATES
            .iter()
            .any(|index| env.probe.exists(&join(dir, index)));
        if has_index {
            return ConventionResult::Pass;
        }

        // Another worker may have reported this directory since the fast-path check.
        if !visited.insert(dir) {
            return ConventionResult::Pass;
        }
        ConventionResult::Violation(self.violation(
            file,
            ViolationKind::MissingIndex {
                directory: file.parsed.dir_name().to_string(),
            },
        ))
    }
}

impl ConventionChecker for IndexFileChecker {
    fn id(&self) -> RuleId {
        RuleId::RequireIndexFile
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation> {
        self.evaluate(file, env).into_violation().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{MemoryProbe, RunState};

    fn check(checker: &IndexFileChecker, probe: &MemoryProbe, state: &RunState, path: &str) -> Vec<Violation> {
        let env = CheckEnv::new(probe, state);
        checker.check(&FileContext::without_syntax(path, false), &env)
    }

    #[test]
    fn reports_once_per_directory() {
        let probe = MemoryProbe::with_files(["src/models/user.js", "src/models/product.js"]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        let state = RunState::new();

        let first = check(&checker, &probe, &state, "src/models/user.js");
        assert_eq!(first.len(), 1);
        assert_eq!(
            first[0].kind,
            ViolationKind::MissingIndex {
                directory: "models".into()
            }
        );
        assert!(check(&checker, &probe, &state, "src/models/product.js").is_empty());
    }

    #[test]
    fn next_run_reports_again_after_reset() {
        let probe = MemoryProbe::with_files(["src/a.js", "src/b.js"]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        let state = RunState::new();
        assert_eq!(check(&checker, &probe, &state, "src/a.js").len(), 1);
        state.reset();
        assert_eq!(check(&checker, &probe, &state, "src/a.js").len(), 1);
    }

    #[test]
    fn existing_index_satisfies_rule() {
        let probe = MemoryProbe::with_files(["src/a.js", "src/b.js", "src/index.ts"]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        assert!(check(&checker, &probe, &RunState::new(), "src/a.js").is_empty());
    }

    #[test]
    fn below_threshold_passes() {
        let probe = MemoryProbe::with_files([
            "src/a.js",
            "src/a.spec.js",
            "src/types.d.ts",
            "src/Button.jsx",
        ]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        assert!(check(&checker, &probe, &RunState::new(), "src/a.js").is_empty());

        let strict = IndexFileChecker::new(ExcludePatterns::default(), 1, Severity::Error);
        assert_eq!(check(&strict, &probe, &RunState::new(), "src/a.js").len(), 1);
    }

    #[test]
    fn subdirectories_do_not_count() {
        let mut probe = MemoryProbe::with_files(["src/a.js"]);
        probe.add_dir("src/lib.js");
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        assert!(check(&checker, &probe, &RunState::new(), "src/a.js").is_empty());
    }

    #[test]
    fn index_and_spec_files_are_not_checked() {
        let probe = MemoryProbe::with_files(["src/a.js", "src/b.js", "src/a.spec.js", "src/index.jsx"]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        let state = RunState::new();
        assert!(check(&checker, &probe, &state, "src/a.spec.js").is_empty());
        assert!(check(&checker, &probe, &state, "src/index.jsx").is_empty());
        assert!(state.visited_dirs.is_empty());
    }

    #[test]
    fn test_directories_are_excluded_by_default() {
        let probe = MemoryProbe::with_files(["pkg/tests/a.js", "pkg/tests/b.js"]);
        let checker = IndexFileChecker::with_defaults(Severity::Error);
        assert!(check(&checker, &probe, &RunState::new(), "pkg/tests/a.js").is_empty());
    }
}
