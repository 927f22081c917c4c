//! Scanner configuration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Configuration for the file scanner subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Default: 1MB (1_048_576).
    pub max_file_size: Option<u64>,
    /// Number of threads. 0 = let rayon/ignore pick.
    pub threads: Option<usize>,
    /// Include glob patterns. If non-empty, only matching paths are scanned.
    /// Patterns use gitignore syntax (e.g., "src/**", "lib/**").
    pub include: Vec<String>,
    /// Additional ignore patterns beyond .gitignore/.conformignore.
    pub extra_ignore: Vec<String>,
    /// Follow symbolic links. Default: false.
    pub follow_symlinks: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective thread count, defaulting to 0 (auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
