//! Filesystem probes. Any I/O failure reads as "absent".

use std::path::Path;

use conform_core::{FxHashMap, FxHashSet};

/// Read-only filesystem queries used by the checkers. Paths are canonical.
pub trait FsProbe: Send + Sync {
    fn exists(&self, path: &str) -> bool;
    fn is_dir(&self, path: &str) -> bool;
    fn is_file(&self, path: &str) -> bool;
    /// Entry names of a directory, `None` when it cannot be read.
    fn list_dir(&self, path: &str) -> Option<Vec<String>>;
}

/// Probes the real filesystem through `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFsProbe;

impl FsProbe for StdFsProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_dir(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    fn is_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn list_dir(&self, path: &str) -> Option<Vec<String>> {
        let entries = match std::fs::read_dir(path) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(path, error = %e, "directory listing failed");
                return None;
            }
        };
        Some(
            entries
                .filter_map(Result::ok)
                .map(|entry| entry.file_name().to_string_lossy().into_owned())
                .collect(),
        )
    }
}

/// In-memory file tree for tests and dry runs.
///
/// Directories are implied by the files beneath them and can also be added empty.
#[derive(Debug, Default, Clone)]
pub struct MemoryProbe {
    files: FxHashSet<String>,
    dirs: FxHashMap<String, Vec<String>>,
}

impl MemoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut probe = Self::new();
        for file in files {
            probe.add_file(file);
        }
        probe
    }

    pub fn add_file(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.register(&path);
        self.files.insert(path);
    }

    pub fn add_dir(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.register(&path);
        self.dirs.entry(path).or_default();
    }

    /// Record `path` as an entry of each of its ancestors.
    fn register(&mut self, path: &str) {
        let mut child = path;
        while let Some(idx) = child.rfind('/') {
            let (parent, name) = (&child[..idx], &child[idx + 1..]);
            let parent = if parent.is_empty() { "/" } else { parent };
            let entries = self.dirs.entry(parent.to_string()).or_default();
            if !entries.iter().any(|e| e == name) {
                entries.push(name.to_string());
            }
            if parent == "/" {
                break;
            }
            child = parent;
        }
    }
}

impl FsProbe for MemoryProbe {
    fn exists(&self, path: &str) -> bool {
        self.is_file(path) || self.is_dir(path)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains_key(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    fn list_dir(&self, path: &str) -> Option<Vec<String>> {
        self.dirs.get(path).cloned()
    }
}
