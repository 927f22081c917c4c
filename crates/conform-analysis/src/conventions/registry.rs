//! ConventionRegistry: builds the enabled checkers from configuration and runs them.

use conform_core::config::RulesConfig;
use conform_core::errors::ConfigError;
use conform_core::RuleId;

use super::aggregation::{self, AggregationChecker};
use super::index_file::{self, IndexFileChecker};
use super::spec_file::{self, SpecFileChecker};
use super::storybook_file::{self, StorybookFileChecker};
use super::types::Violation;
use super::visual_snapshot::{self, VisualSnapshotChecker};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::patterns::ExcludePatterns;

/// The set of checkers active for a run, in reporting order.
pub struct ConventionRegistry {
    checkers: Vec<Box<dyn ConventionChecker>>,
}

impl ConventionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            checkers: Vec::new(),
        }
    }

    /// Build every enabled rule. Pattern and option errors surface here, once.
    pub fn from_config(rules: &RulesConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::new();
        for rule in RuleId::all() {
            let Some(severity) = rules.level(*rule).severity() else {
                continue;
            };
            let configured = rules.exclude_patterns(*rule);
            let checker: Box<dyn ConventionChecker> = match rule {
                RuleId::RequireSpecFile => Box::new(SpecFileChecker::new(
                    ExcludePatterns::resolve(*rule, configured, spec_file::DEFAULT_EXCLUDES)?,
                    severity,
                )),
                RuleId::RequireIndexFile => {
                    let min_files = rules.require_index_file.effective_min_files();
                    if min_files < 1 {
                        return Err(ConfigError::InvalidMinFiles {
                            rule: rule.name().to_string(),
                            value: min_files,
                        });
                    }
                    Box::new(IndexFileChecker::new(
                        ExcludePatterns::resolve(*rule, configured, index_file::DEFAULT_EXCLUDES)?,
                        min_files,
                        severity,
                    ))
                }
                RuleId::RequireStorybookFile => Box::new(StorybookFileChecker::new(
                    ExcludePatterns::resolve(*rule, configured, storybook_file::DEFAULT_EXCLUDES)?,
                    severity,
                )),
                RuleId::RequireVisualSnapshot => Box::new(VisualSnapshotChecker::new(
                    ExcludePatterns::resolve(*rule, configured, visual_snapshot::DEFAULT_EXCLUDES)?,
                    severity,
                )),
                RuleId::NoLogicInIndex => Box::new(AggregationChecker::new(
                    ExcludePatterns::resolve(*rule, configured, aggregation::DEFAULT_EXCLUDES)?,
                    severity,
                )),
            };
            registry.register(checker);
        }
        tracing::debug!(rules = registry.count(), "convention registry built");
        Ok(registry)
    }

    /// Register a checker.
    pub fn register(&mut self, checker: Box<dyn ConventionChecker>) {
        self.checkers.push(checker);
    }

    /// Run every checker on one file. A panicking checker is logged and skipped.
    pub fn run_all(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation> {
        let mut violations = Vec::new();
        for checker in &self.checkers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                checker.check(file, env)
            }));
            match result {
                Ok(found) => violations.extend(found),
                Err(_) => {
                    tracing::error!(
                        rule = %checker.id(),
                        path = file.path,
                        "checker panicked"
                    );
                }
            }
        }
        violations
    }

    /// Rules with a registered checker.
    pub fn rules(&self) -> Vec<RuleId> {
        self.checkers.iter().map(|c| c.id()).collect()
    }

    /// Total number of registered checkers.
    pub fn count(&self) -> usize {
        self.checkers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }
}

impl Default for ConventionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
