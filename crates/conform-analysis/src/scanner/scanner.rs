//! Top-level Scanner: discovery plus statistics.

use std::path::Path;
use std::time::Instant;

use conform_core::config::ScanConfig;
use conform_core::errors::ScanError;

use super::types::{DiscoveredFile, ScanStats};
use super::walker;

/// Finds the source files a run should check.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Discover every supported source file under `root`, sorted by path.
    pub fn discover(&self, root: &Path) -> Result<(Vec<DiscoveredFile>, ScanStats), ScanError> {
        let start = Instant::now();
        let files = walker::walk_directory(root, &self.config)?;
        let stats = ScanStats {
            total_files: files.len(),
            total_size_bytes: files.iter().map(|f| f.file_size).sum(),
            discovery_ms: start.elapsed().as_millis() as u64,
        };
        tracing::debug!(
            root = %root.display(),
            files = stats.total_files,
            discovery_ms = stats.discovery_ms,
            "discovery complete"
        );
        Ok((files, stats))
    }
}
