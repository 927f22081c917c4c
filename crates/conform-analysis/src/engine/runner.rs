//! ConventionEngine: owns the checkers, the filesystem probe and the run state.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use conform_core::errors::{ConfigError, ScanError};
use conform_core::{ConformConfig, RuleId};
use rayon::prelude::*;

use super::report::LintReport;
use crate::conventions::{
    CheckEnv, ConventionRegistry, FileContext, FsProbe, RunState, StdFsProbe, Violation,
};
use crate::parsers::ParserManager;
use crate::paths::normalize_path;
use crate::scanner::Scanner;

/// Checks files against the configured conventions.
///
/// One engine can serve many runs; [`ConventionEngine::begin_run`] resets the
/// run-scoped state, and [`ConventionEngine::run`] calls it itself.
pub struct ConventionEngine {
    registry: ConventionRegistry,
    parsers: ParserManager,
    probe: Box<dyn FsProbe>,
    state: RunState,
    scanner: Scanner,
}

impl ConventionEngine {
    /// Build the engine. All configuration errors surface here.
    pub fn from_config(config: &ConformConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = ConventionRegistry::from_config(&config.rules)?;
        Ok(Self {
            registry,
            parsers: ParserManager::new(),
            probe: Box::new(StdFsProbe),
            state: RunState::new(),
            scanner: Scanner::new(config.scan.clone()),
        })
    }

    /// Replace the filesystem probe.
    pub fn with_probe(mut self, probe: impl FsProbe + 'static) -> Self {
        self.probe = Box::new(probe);
        self
    }

    /// Rules this engine checks.
    pub fn rules(&self) -> Vec<RuleId> {
        self.registry.rules()
    }

    /// Start a new run: forget directories reported by the previous one.
    pub fn begin_run(&self) {
        self.state.reset();
    }

    /// Check one file given its contents. `path` may use either separator.
    ///
    /// A file that fails to parse is still checked by the rules that do not
    /// need a syntax tree; it is treated as containing no logic.
    pub fn check_source(&self, path: &str, source: &[u8]) -> Vec<Violation> {
        let canonical = crate::paths::normalize(path);
        let syntax = match self.parsers.parse(source, Path::new(&*canonical)) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!(path = %canonical, error = %e, "parse failed");
                None
            }
        };
        let file = FileContext::new(&canonical, syntax.as_ref());
        let env = CheckEnv::new(self.probe.as_ref(), &self.state);
        self.registry.run_all(&file, &env)
    }

    /// Read and check one file from disk.
    pub fn check_file(&self, path: &Path) -> Result<Vec<Violation>, ScanError> {
        let source = std::fs::read(path)?;
        Ok(self.check_source(&normalize_path(path), &source))
    }

    /// Discover and check every source file under `root`.
    pub fn run(&self, root: &Path) -> Result<LintReport, ScanError> {
        let start = Instant::now();
        self.begin_run();

        let (files, _stats) = self.scanner.discover(root)?;
        let failed = AtomicUsize::new(0);

        let violations: Vec<Violation> = files
            .par_iter()
            .flat_map_iter(|file| match self.check_file(&file.path) {
                Ok(found) => found,
                Err(e) => {
                    // Non-fatal: skip the file and keep going
                    tracing::warn!(
                        path = %file.path.display(),
                        error = %e,
                        "file read error"
                    );
                    failed.fetch_add(1, Ordering::Relaxed);
                    Vec::new()
                }
            })
            .collect();

        let report = LintReport::new(
            violations,
            files.len(),
            failed.load(Ordering::Relaxed),
            start.elapsed(),
        );
        tracing::info!(
            root = %root.display(),
            files = report.files_scanned,
            errors = report.error_count(),
            warnings = report.warning_count(),
            duration_ms = report.duration_ms,
            "run complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::{MemoryProbe, ViolationKind};

    fn engine(probe: MemoryProbe) -> ConventionEngine {
        ConventionEngine::from_config(&ConformConfig::default())
            .unwrap()
            .with_probe(probe)
    }

    #[test]
    fn check_source_classifies_and_probes() {
        let engine = engine(MemoryProbe::with_files(["src/calculator.js"]));
        let found = engine.check_source(
            "src/calculator.js",
            b"export function multiply(a, b) { return a * b; }",
        );
        assert_eq!(found.len(), 1);
        assert_eq!(
            found[0].kind,
            ViolationKind::MissingSpec {
                spec_file: "calculator.spec.js".into()
            }
        );
    }

    #[test]
    fn constants_need_no_spec() {
        let engine = engine(MemoryProbe::with_files(["src/constants.ts"]));
        let found = engine.check_source("src/constants.ts", b"export const PI = 3.14;");
        assert!(found.is_empty());
    }

    #[test]
    fn backslash_paths_are_canonicalized() {
        let engine = engine(MemoryProbe::with_files(["src/calculator.js"]));
        let found = engine.check_source(r"src\calculator.js", b"const f = () => { return 1; };");
        assert_eq!(found[0].location.file, "src/calculator.js");
    }

    #[test]
    fn begin_run_resets_directory_dedup() {
        let engine = engine(MemoryProbe::with_files(["src/models/user.js", "src/models/product.js"]));
        let count = |engine: &ConventionEngine| {
            engine
                .check_source("src/models/user.js", b"export const A = 1;")
                .into_iter()
                .filter(|v| v.rule == RuleId::RequireIndexFile)
                .count()
        };
        assert_eq!(count(&engine), 1);
        assert_eq!(count(&engine), 0);
        engine.begin_run();
        assert_eq!(count(&engine), 1);
    }

    #[test]
    fn invalid_config_is_rejected_at_build_time() {
        let config = ConformConfig::from_toml(
            "[rules.no-logic-in-index]\nexclude_patterns = [\"\"]\n",
        )
        .unwrap();
        assert!(ConventionEngine::from_config(&config).is_err());
    }
}
