//! Run-scoped state: the set of directories already reported by the index-file rule.

use std::sync::{Mutex, PoisonError};

use conform_core::FxHashSet;

/// Directories already reported for a missing index file during this run.
///
/// Shared across rayon workers. `insert` is the atomic claim: only the caller
/// that inserts a directory first may report it.
#[derive(Debug, Default)]
pub struct DirectoryVisitSet {
    dirs: Mutex<FxHashSet<String>>,
}

impl DirectoryVisitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, dir: &str) -> bool {
        self.dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(dir)
    }

    /// Returns `true` when `dir` was not yet present.
    pub fn insert(&self, dir: &str) -> bool {
        self.dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(dir.to_string())
    }

    pub fn clear(&self) {
        self.dirs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn len(&self) -> usize {
        self.dirs.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// All state that lives for exactly one run.
#[derive(Debug, Default)]
pub struct RunState {
    pub visited_dirs: DirectoryVisitSet,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from the previous run.
    pub fn reset(&self) {
        self.visited_dirs.clear();
    }
}
