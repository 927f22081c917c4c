//! # conform-core
//!
//! Foundation crate for the conform convention checker.
//! Defines configuration, errors, tracing setup, and the shared rule/severity types.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ConformConfig, Preset, ScanConfig};
pub use errors::error_code::ConformErrorCode;
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::rule_id::RuleId;
pub use types::severity::Severity;
