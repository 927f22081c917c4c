//! Validated exclude lists, built once per rule at initialization.

use conform_core::errors::ConfigError;
use conform_core::RuleId;

use super::matcher::{is_excluded, BraceGroup};

/// A rule's exclude patterns, checked for syntax when the rule is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludePatterns {
    patterns: Vec<String>,
}

impl ExcludePatterns {
    /// Validate user-supplied patterns for `rule`.
    pub fn new(rule: RuleId, patterns: Vec<String>) -> Result<Self, ConfigError> {
        for pattern in &patterns {
            if let Err(reason) = validate_pattern(pattern) {
                return Err(ConfigError::InvalidPattern {
                    rule: rule.name().to_string(),
                    pattern: pattern.clone(),
                    reason: reason.to_string(),
                });
            }
        }
        Ok(Self { patterns })
    }

    /// Built-in defaults. These are known-good and skip validation.
    pub fn from_defaults(defaults: &[&str]) -> Self {
        Self {
            patterns: defaults.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// User patterns when configured, otherwise the rule defaults.
    pub fn resolve(
        rule: RuleId,
        configured: Option<&[String]>,
        defaults: &[&str],
    ) -> Result<Self, ConfigError> {
        match configured {
            Some(patterns) => Self::new(rule, patterns.to_vec()),
            None => Ok(Self::from_defaults(defaults)),
        }
    }

    pub fn is_excluded(&self, path: &str) -> bool {
        is_excluded(path, &self.patterns)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Syntax check for a single pattern.
///
/// Rejects empty patterns and brace usage the matcher cannot honour:
/// unbalanced or nested braces, a second group, empty groups or alternatives.
pub fn validate_pattern(pattern: &str) -> Result<(), &'static str> {
    if pattern.trim().is_empty() {
        return Err("pattern is empty");
    }

    let opens = pattern.matches('{').count();
    let closes = pattern.matches('}').count();
    if opens == 0 && closes == 0 {
        return Ok(());
    }
    if opens != closes {
        return Err("unbalanced braces");
    }
    if opens > 1 {
        return Err("only one brace group is supported per pattern");
    }

    let group = BraceGroup::find(pattern).ok_or("empty or misplaced brace group")?;
    if group.alternatives().iter().any(|alt| alt.is_empty()) {
        return Err("empty alternative in brace group");
    }
    Ok(())
}
