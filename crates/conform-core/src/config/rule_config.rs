//! Per-rule options and presets.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::rule_id::RuleId;
use crate::types::severity::Severity;

/// Exclude list used by the `strict` preset for `require-spec-file`.
/// Drops the rule default's index entries; index files are still skipped by
/// the rule itself.
pub const STRICT_SPEC_EXCLUDES: &[&str] = &[
    "**/*.spec.js",
    "**/*.test.js",
    "**/*.spec.ts",
    "**/*.test.ts",
    "**/*.d.ts",
];

/// Default `min_files` threshold for `require-index-file`.
pub const DEFAULT_MIN_FILES: usize = 2;

/// How a rule participates in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    Off,
    #[serde(alias = "warning")]
    Warn,
    #[default]
    Error,
}

impl RuleLevel {
    /// Severity for reported violations, `None` when the rule is off.
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(Severity::Warning),
            Self::Error => Some(Severity::Error),
        }
    }
}

/// Options shared by every rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RuleConfig {
    pub level: RuleLevel,
    /// Paths matching any of these patterns are exempt. `None` keeps the rule's defaults;
    /// an empty list disables exclusion entirely.
    #[serde(alias = "excludePatterns", skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
}

/// Options for `require-index-file`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct IndexRuleConfig {
    pub level: RuleLevel,
    #[serde(alias = "excludePatterns", skip_serializing_if = "Option::is_none")]
    pub exclude_patterns: Option<Vec<String>>,
    /// Minimum number of implementation files before an index is required. Default: 2.
    #[serde(alias = "minFiles", skip_serializing_if = "Option::is_none")]
    pub min_files: Option<usize>,
}

impl IndexRuleConfig {
    pub fn effective_min_files(&self) -> usize {
        self.min_files.unwrap_or(DEFAULT_MIN_FILES)
    }
}

/// The `[rules]` table. Unknown rule names are rejected at parse time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RulesConfig {
    #[serde(rename = "require-spec-file")]
    pub require_spec_file: RuleConfig,
    #[serde(rename = "require-index-file")]
    pub require_index_file: IndexRuleConfig,
    #[serde(rename = "require-storybook-file")]
    pub require_storybook_file: RuleConfig,
    #[serde(rename = "require-visual-snapshot")]
    pub require_visual_snapshot: RuleConfig,
    #[serde(rename = "no-logic-in-index", alias = "no-logic-in-aggregation")]
    pub no_logic_in_index: RuleConfig,
}

impl RulesConfig {
    pub fn level(&self, rule: RuleId) -> RuleLevel {
        match rule {
            RuleId::RequireSpecFile => self.require_spec_file.level,
            RuleId::RequireIndexFile => self.require_index_file.level,
            RuleId::RequireStorybookFile => self.require_storybook_file.level,
            RuleId::RequireVisualSnapshot => self.require_visual_snapshot.level,
            RuleId::NoLogicInIndex => self.no_logic_in_index.level,
        }
    }

    pub fn set_level(&mut self, rule: RuleId, level: RuleLevel) {
        match rule {
            RuleId::RequireSpecFile => self.require_spec_file.level = level,
            RuleId::RequireIndexFile => self.require_index_file.level = level,
            RuleId::RequireStorybookFile => self.require_storybook_file.level = level,
            RuleId::RequireVisualSnapshot => self.require_visual_snapshot.level = level,
            RuleId::NoLogicInIndex => self.no_logic_in_index.level = level,
        }
    }

    /// User-supplied exclude patterns for a rule, if any.
    pub fn exclude_patterns(&self, rule: RuleId) -> Option<&[String]> {
        match rule {
            RuleId::RequireSpecFile => self.require_spec_file.exclude_patterns.as_deref(),
            RuleId::RequireIndexFile => self.require_index_file.exclude_patterns.as_deref(),
            RuleId::RequireStorybookFile => self.require_storybook_file.exclude_patterns.as_deref(),
            RuleId::RequireVisualSnapshot => {
                self.require_visual_snapshot.exclude_patterns.as_deref()
            }
            RuleId::NoLogicInIndex => self.no_logic_in_index.exclude_patterns.as_deref(),
        }
    }

    /// Turn off every rule not in `rules`. Levels of the kept rules are unchanged.
    pub fn retain_only(&mut self, rules: &[RuleId]) {
        for rule in RuleId::all() {
            if !rules.contains(rule) {
                self.set_level(*rule, RuleLevel::Off);
            }
        }
    }

    /// Rules that will run, in reporting order.
    pub fn enabled(&self) -> Vec<RuleId> {
        RuleId::all()
            .iter()
            .copied()
            .filter(|r| self.level(*r) != RuleLevel::Off)
            .collect()
    }
}

/// Shareable starting configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at error with its default options.
    Recommended,
    /// Like `Recommended`, with the narrowed `require-spec-file` exclude list.
    Strict,
}

impl Preset {
    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
        }
    }

    pub fn rules(&self) -> RulesConfig {
        let mut rules = RulesConfig::default();
        if *self == Self::Strict {
            rules.require_spec_file.exclude_patterns =
                Some(STRICT_SPEC_EXCLUDES.iter().map(|p| p.to_string()).collect());
        }
        rules
    }
}
