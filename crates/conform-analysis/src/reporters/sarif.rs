//! SARIF v2.1.0 output for CI/CD integration. One SARIF rule per convention.

use conform_core::RuleId;
use serde::{Deserialize, Serialize};

use super::{ReportError, Reporter};
use crate::conventions::Violation;
use crate::engine::LintReport;

const SARIF_SCHEMA: &str =
    "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json";

pub struct SarifReporter {
    tool_name: String,
    tool_version: String,
}

impl SarifReporter {
    pub fn new() -> Self {
        Self {
            tool_name: "conform".to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for SarifReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for SarifReporter {
    fn name(&self) -> &'static str {
        "sarif"
    }

    fn generate(&self, report: &LintReport) -> Result<String, ReportError> {
        let sarif = generate_sarif(report, &self.tool_name, &self.tool_version);
        Ok(serde_json::to_string_pretty(&sarif)?)
    }
}

/// Build a SARIF document from a lint report.
pub fn generate_sarif(report: &LintReport, tool_name: &str, tool_version: &str) -> SarifReport {
    SarifReport {
        schema: SARIF_SCHEMA.to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: tool_name.to_string(),
                    version: tool_version.to_string(),
                    rules: build_rules(),
                },
            },
            results: report.violations.iter().map(build_sarif_result).collect(),
        }],
    }
}

fn build_rules() -> Vec<SarifRule> {
    RuleId::all()
        .iter()
        .map(|rule| SarifRule {
            id: rule.name().to_string(),
            name: rule.name().to_string(),
            short_description: SarifMessage {
                text: rule.description().to_string(),
            },
            help_uri: None,
        })
        .collect()
}

fn build_sarif_result(violation: &Violation) -> SarifResult {
    let rule_index = RuleId::all()
        .iter()
        .position(|r| *r == violation.rule)
        .unwrap_or(0);

    SarifResult {
        rule_id: violation.rule.name().to_string(),
        rule_index,
        level: violation.severity.name().to_string(),
        message: SarifMessage {
            text: violation.message(),
        },
        locations: vec![SarifLocation {
            physical_location: SarifPhysicalLocation {
                artifact_location: SarifArtifactLocation {
                    uri: violation.location.file.clone(),
                },
                region: SarifRegion {
                    start_line: violation.location.line,
                    start_column: Some(violation.location.column),
                },
            },
        }],
    }
}

// --- SARIF data structures ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifReport {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifDriver {
    pub name: String,
    pub version: String,
    pub rules: Vec<SarifRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifRule {
    pub id: String,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: SarifMessage,
    #[serde(rename = "helpUri", skip_serializing_if = "Option::is_none")]
    pub help_uri: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifResult {
    #[serde(rename = "ruleId")]
    pub rule_id: String,
    #[serde(rename = "ruleIndex")]
    pub rule_index: usize,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifMessage {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    pub artifact_location: SarifArtifactLocation,
    pub region: SarifRegion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifArtifactLocation {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SarifRegion {
    #[serde(rename = "startLine")]
    pub start_line: u32,
    #[serde(rename = "startColumn", skip_serializing_if = "Option::is_none")]
    pub start_column: Option<u32>,
}
