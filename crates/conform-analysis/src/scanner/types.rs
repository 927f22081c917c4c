//! Scanner output types.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::language_detect::Language;

/// A source file found by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredFile {
    pub path: PathBuf,
    pub file_size: u64,
    pub language: Language,
}

/// Discovery statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    pub total_files: usize,
    pub total_size_bytes: u64,
    pub discovery_ms: u64,
}
