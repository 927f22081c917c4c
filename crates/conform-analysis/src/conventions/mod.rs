//! Convention checkers, one per file-organization rule.
//!
//! Each checker sees one file at a time through a [`FileContext`] and probes
//! the filesystem through the [`CheckEnv`]. Checkers never fail: probe errors
//! mean "artifact absent" and a checker that finds nothing returns no violations.

pub mod aggregation;
pub mod file_kinds;
pub mod index_file;
pub mod probe;
pub mod registry;
pub mod spec_file;
pub mod storybook_file;
pub mod types;
pub mod visit_set;
pub mod visual_snapshot;

use conform_core::{RuleId, Severity};

use crate::parsers::ParsedSource;
use crate::paths::ParsedPath;

pub use probe::{FsProbe, MemoryProbe, StdFsProbe};
pub use registry::ConventionRegistry;
pub use types::{ConventionResult, Location, Violation, ViolationKind};
pub use visit_set::{DirectoryVisitSet, RunState};

/// Everything a checker knows about the file under inspection.
#[derive(Clone, Copy)]
pub struct FileContext<'a> {
    /// Canonical (forward-slash) path.
    pub path: &'a str,
    pub parsed: ParsedPath<'a>,
    /// Syntax tree, when the file parsed.
    pub syntax: Option<&'a ParsedSource>,
    /// Whether any declaration in the file is logic.
    pub has_logic: bool,
}

impl<'a> FileContext<'a> {
    pub fn new(path: &'a str, syntax: Option<&'a ParsedSource>) -> Self {
        Self {
            path,
            parsed: ParsedPath::parse(path),
            syntax,
            has_logic: syntax.is_some_and(ParsedSource::has_logic),
        }
    }

    /// A context with no syntax tree and an explicit logic flag.
    pub fn without_syntax(path: &'a str, has_logic: bool) -> Self {
        Self {
            path,
            parsed: ParsedPath::parse(path),
            syntax: None,
            has_logic,
        }
    }
}

/// Environment shared by all checkers for the duration of one run.
#[derive(Clone, Copy)]
pub struct CheckEnv<'a> {
    pub probe: &'a dyn FsProbe,
    pub run: &'a RunState,
}

impl<'a> CheckEnv<'a> {
    pub fn new(probe: &'a dyn FsProbe, run: &'a RunState) -> Self {
        Self { probe, run }
    }
}

/// A single file-organization rule.
pub trait ConventionChecker: Send + Sync {
    fn id(&self) -> RuleId;

    fn severity(&self) -> Severity;

    /// Check one file. Returns every violation found, usually zero or one.
    fn check(&self, file: &FileContext<'_>, env: &CheckEnv<'_>) -> Vec<Violation>;

    /// File-level violation at 1:1 for this rule.
    fn violation(&self, file: &FileContext<'_>, kind: ViolationKind) -> Violation {
        Violation::new(self.id(), kind, Location::file(file.path), self.severity())
    }
}
