//! Language detection from file extension.

use serde::{Deserialize, Serialize};

/// Source languages the convention checkers understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    TypeScript,
    /// TypeScript with JSX. Needs its own grammar.
    Tsx,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[Language::JavaScript, Language::TypeScript, Language::Tsx]
    }

    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "mts" | "cts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Tsx => "tsx",
        }
    }

    /// The tree-sitter grammar for this language.
    pub fn ts_language(&self) -> tree_sitter::Language {
        match self {
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_extensions_to_grammars() {
        assert_eq!(Language::from_extension(Some("jsx")), Some(Language::JavaScript));
        assert_eq!(Language::from_extension(Some("mjs")), Some(Language::JavaScript));
        assert_eq!(Language::from_extension(Some("cts")), Some(Language::TypeScript));
        assert_eq!(Language::from_extension(Some("tsx")), Some(Language::Tsx));
        assert_eq!(Language::from_extension(Some("py")), None);
        assert_eq!(Language::from_extension(None), None);
    }
}
