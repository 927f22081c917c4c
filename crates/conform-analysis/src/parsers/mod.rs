//! Tree-sitter parsing for JavaScript, TypeScript and TSX sources.

pub mod manager;

pub use manager::{ParsedSource, ParserManager};
