//! ParserManager: routes files to the correct tree-sitter grammar.

use std::path::Path;

use conform_core::errors::ParseError;
use tree_sitter::{Parser, Tree};

use crate::classify::contains_logic;
use crate::scanner::language_detect::Language;
use crate::syntax::ts_node::{program_statements, TsNode};

/// A parsed file: the tree plus the language it was parsed as.
pub struct ParsedSource {
    pub tree: Tree,
    pub language: Language,
}

impl ParsedSource {
    /// Top-level statements, comments excluded.
    pub fn statements(&self) -> Vec<TsNode<'_>> {
        program_statements(self.tree.root_node())
    }

    /// Whether any declaration anywhere in the file is logic.
    pub fn has_logic(&self) -> bool {
        contains_logic(TsNode::new(self.tree.root_node()))
    }

    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }
}

/// Chooses a grammar per file extension and parses.
///
/// Stateless: a fresh `tree_sitter::Parser` is created per call, so one
/// manager can be shared across rayon workers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ParserManager;

impl ParserManager {
    pub fn new() -> Self {
        Self
    }

    /// Detect language from file extension.
    pub fn detect_language(&self, path: &Path) -> Option<Language> {
        Language::from_extension(path.extension().and_then(|e| e.to_str()))
    }

    /// Parse a file, detecting the language from its extension.
    pub fn parse(&self, source: &[u8], path: &Path) -> Result<ParsedSource, ParseError> {
        let lang = self.detect_language(path).ok_or_else(|| {
            ParseError::UnsupportedLanguage {
                extension: path
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("unknown")
                    .to_string(),
            }
        })?;
        self.parse_with_language(source, path, lang)
    }

    /// Parse a file with a known language (skips detection).
    pub fn parse_with_language(
        &self,
        source: &[u8],
        path: &Path,
        lang: Language,
    ) -> Result<ParsedSource, ParseError> {
        let mut parser = Parser::new();
        parser
            .set_language(&lang.ts_language())
            .map_err(|_e| ParseError::GrammarNotFound {
                language: lang.name().to_string(),
            })?;

        let tree = parser.parse(source, None).ok_or_else(|| ParseError::TreeSitterError {
            path: path.to_path_buf(),
            message: "tree-sitter returned None".to_string(),
        })?;

        if tree.root_node().has_error() {
            tracing::debug!(path = %path.display(), language = %lang, "parsed with syntax errors");
        }

        Ok(ParsedSource {
            tree,
            language: lang,
        })
    }
}
