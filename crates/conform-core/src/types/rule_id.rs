//! Identifiers for the five file-organization conventions.

use serde::{Deserialize, Serialize};

/// One of the conventions checked by conform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    /// Implementation files with logic need an adjacent spec file.
    RequireSpecFile,
    /// Directories with enough implementation files need an index file.
    RequireIndexFile,
    /// JSX/TSX components need an adjacent Storybook file.
    RequireStorybookFile,
    /// JSX/TSX components need a spec file and a snapshot folder with PNGs.
    RequireVisualSnapshot,
    /// Index files may only re-export.
    #[serde(alias = "no-logic-in-aggregation")]
    NoLogicInIndex,
}

impl RuleId {
    /// All rules, in reporting order.
    pub fn all() -> &'static [RuleId] {
        &[
            Self::RequireSpecFile,
            Self::RequireIndexFile,
            Self::RequireStorybookFile,
            Self::RequireVisualSnapshot,
            Self::NoLogicInIndex,
        ]
    }

    /// Rule name as used in config files and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RequireSpecFile => "require-spec-file",
            Self::RequireIndexFile => "require-index-file",
            Self::RequireStorybookFile => "require-storybook-file",
            Self::RequireVisualSnapshot => "require-visual-snapshot",
            Self::NoLogicInIndex => "no-logic-in-index",
        }
    }

    /// One-line description shown by `conform rules` and in SARIF output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RequireSpecFile => {
                "Require spec file alongside JS/TS files with logic; ensure specs match implementations"
            }
            Self::RequireIndexFile => "Require an index file in directories with multiple files",
            Self::RequireStorybookFile => {
                "Require a Storybook file to exist alongside each JSX/TSX component file"
            }
            Self::RequireVisualSnapshot => {
                "Require JSX/TSX components to have a spec file and a visual snapshot folder with PNG files"
            }
            Self::NoLogicInIndex => {
                "Disallow logic in index files - index files should only contain re-exports"
            }
        }
    }

    /// Parse from string. Accepts `no-logic-in-aggregation` as an alias.
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "require-spec-file" => Some(Self::RequireSpecFile),
            "require-index-file" => Some(Self::RequireIndexFile),
            "require-storybook-file" => Some(Self::RequireStorybookFile),
            "require-visual-snapshot" => Some(Self::RequireVisualSnapshot),
            "no-logic-in-index" | "no-logic-in-aggregation" => Some(Self::NoLogicInIndex),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
