//! Violation records produced by convention checkers.

use conform_core::{RuleId, Severity};
use serde::{Deserialize, Serialize};

use crate::syntax::Position;

/// Where a violation was found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Canonical (forward-slash) path of the file being checked.
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, position: Position) -> Self {
        Self {
            file: file.into(),
            line: position.line,
            column: position.column,
        }
    }

    /// File-level location, reported at 1:1.
    pub fn file(file: impl Into<String>) -> Self {
        Self::new(file, Position::START)
    }
}

/// What went wrong, with the artifact names needed to render the message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ViolationKind {
    MissingSpec {
        spec_file: String,
    },
    /// Missing spec for a UI component. Same code as `MissingSpec`, component wording.
    MissingComponentSpec {
        spec_file: String,
    },
    MissingImplementation {
        spec_file: String,
        impl_file: String,
    },
    AggregationSpecNotAllowed,
    MissingIndex {
        directory: String,
    },
    MissingStorybook {
        story_file: String,
    },
    MissingSnapshotFolder {
        folder: String,
    },
    MissingPng {
        folder: String,
    },
    LogicInAggregation {
        node_type: String,
    },
}

impl ViolationKind {
    /// Stable kebab-case identifier.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingSpec { .. } | Self::MissingComponentSpec { .. } => "missing-spec",
            Self::MissingImplementation { .. } => "missing-implementation",
            Self::AggregationSpecNotAllowed => "aggregation-spec-not-allowed",
            Self::MissingIndex { .. } => "missing-index",
            Self::MissingStorybook { .. } => "missing-storybook",
            Self::MissingSnapshotFolder { .. } => "missing-snapshot-folder",
            Self::MissingPng { .. } => "missing-png",
            Self::LogicInAggregation { .. } => "logic-in-aggregation",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::MissingSpec { spec_file } => {
                format!("Missing spec file: \"{spec_file}\" should exist alongside this file.")
            }
            Self::MissingComponentSpec { spec_file } => format!(
                "Missing spec file: \"{spec_file}\" should exist alongside this component file."
            ),
            Self::MissingImplementation {
                spec_file,
                impl_file,
            } => format!(
                "Spec file \"{spec_file}\" has no corresponding implementation file \"{impl_file}\"."
            ),
            Self::AggregationSpecNotAllowed => "Spec files cannot be named \"index.spec.*\". \
                 Spec files must match their implementation file names."
                .to_string(),
            Self::MissingIndex { directory } => format!(
                "Directory \"{directory}\" contains multiple files but is missing an index file \
                 (index.js or index.ts)."
            ),
            Self::MissingStorybook { story_file } => format!(
                "Missing Storybook file: \"{story_file}\" should exist alongside this component file."
            ),
            Self::MissingSnapshotFolder { folder } => format!(
                "Missing snapshot folder: \"{folder}\" should exist alongside this component file."
            ),
            Self::MissingPng { folder } => format!(
                "Snapshot folder \"{folder}\" exists but contains no PNG files. \
                 At least one PNG file is required."
            ),
            Self::LogicInAggregation { node_type } => format!(
                "Index files should only contain re-exports, not logic. \
                 Found {node_type} with implementation."
            ),
        }
    }

    /// Name of the artifact the violation asks for, if any.
    pub fn expected_artifact(&self) -> Option<&str> {
        match self {
            Self::MissingSpec { spec_file } | Self::MissingComponentSpec { spec_file } => {
                Some(spec_file)
            }
            Self::MissingImplementation { impl_file, .. } => Some(impl_file),
            Self::MissingStorybook { story_file } => Some(story_file),
            Self::MissingSnapshotFolder { folder } | Self::MissingPng { folder } => Some(folder),
            Self::MissingIndex { .. } => Some("index.js"),
            Self::AggregationSpecNotAllowed | Self::LogicInAggregation { .. } => None,
        }
    }
}

/// A single reported convention violation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub rule: RuleId,
    #[serde(flatten)]
    pub kind: ViolationKind,
    pub location: Location,
    pub severity: Severity,
}

impl Violation {
    pub fn new(rule: RuleId, kind: ViolationKind, location: Location, severity: Severity) -> Self {
        Self {
            rule,
            kind,
            location,
            severity,
        }
    }

    pub fn message(&self) -> String {
        self.kind.message()
    }

    /// The path the violation is about.
    pub fn subject(&self) -> &str {
        &self.location.file
    }
}

/// Outcome of one checker invocation on one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConventionResult {
    Pass,
    Violation(Violation),
}

impl ConventionResult {
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    pub fn into_violation(self) -> Option<Violation> {
        match self {
            Self::Pass => None,
            Self::Violation(v) => Some(v),
        }
    }
}
