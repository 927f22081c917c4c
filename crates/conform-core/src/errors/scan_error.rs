//! Scanner errors.

use std::path::PathBuf;

use super::error_code::{self, ConformErrorCode};

/// Errors that abort a whole scan. Per-file failures never surface here.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConformErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RootNotFound(_) => error_code::SCAN_ROOT_NOT_FOUND,
            Self::Io(_) => error_code::SCAN_IO_ERROR,
        }
    }
}
