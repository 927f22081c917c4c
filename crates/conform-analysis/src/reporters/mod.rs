//! Report output formats: stylish text, JSON, and SARIF 2.1.0.

pub mod json;
pub mod sarif;
pub mod text;

use crate::engine::LintReport;

/// Errors while rendering a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Renders a [`LintReport`] to a string.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;

    fn generate(&self, report: &LintReport) -> Result<String, ReportError>;
}

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Sarif,
}

impl ReportFormat {
    pub fn all() -> &'static [ReportFormat] {
        &[Self::Text, Self::Json, Self::Sarif]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Sarif => "sarif",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "text" | "stylish" => Some(Self::Text),
            "json" => Some(Self::Json),
            "sarif" => Some(Self::Sarif),
            _ => None,
        }
    }

    pub fn reporter(&self) -> Box<dyn Reporter> {
        match self {
            Self::Text => Box::new(text::TextReporter::new()),
            Self::Json => Box::new(json::JsonReporter),
            Self::Sarif => Box::new(sarif::SarifReporter::new()),
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
