//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ConformErrorCode};

/// Errors from routing a file to a tree-sitter grammar and parsing it.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Unsupported language for extension: {extension}")]
    UnsupportedLanguage { extension: String },

    #[error("Grammar not found for language: {language}")]
    GrammarNotFound { language: String },

    #[error("tree-sitter failed on {}: {message}", .path.display())]
    TreeSitterError { path: PathBuf, message: String },
}

impl ConformErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::PARSE_UNSUPPORTED_LANGUAGE,
            Self::GrammarNotFound { .. } => error_code::PARSE_GRAMMAR_NOT_FOUND,
            Self::TreeSitterError { .. } => error_code::PARSE_TREE_SITTER_ERROR,
        }
    }
}
