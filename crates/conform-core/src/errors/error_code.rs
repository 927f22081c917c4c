//! Stable, machine-readable error codes.

/// Implemented by every error enum so callers (CLI exit paths, JSON output)
/// can report a code that does not change with message wording.
pub trait ConformErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CONFIG_INVALID_PATTERN: &str = "CONFIG_INVALID_PATTERN";
pub const CONFIG_INVALID_MIN_FILES: &str = "CONFIG_INVALID_MIN_FILES";
pub const CONFIG_READ_ERROR: &str = "CONFIG_READ_ERROR";
pub const CONFIG_PARSE_ERROR: &str = "CONFIG_PARSE_ERROR";
pub const CONFIG_UNKNOWN_PRESET: &str = "CONFIG_UNKNOWN_PRESET";
pub const CONFIG_UNKNOWN_RULE: &str = "CONFIG_UNKNOWN_RULE";
pub const SCAN_ROOT_NOT_FOUND: &str = "SCAN_ROOT_NOT_FOUND";
pub const SCAN_IO_ERROR: &str = "SCAN_IO_ERROR";
pub const PARSE_UNSUPPORTED_LANGUAGE: &str = "PARSE_UNSUPPORTED_LANGUAGE";
pub const PARSE_GRAMMAR_NOT_FOUND: &str = "PARSE_GRAMMAR_NOT_FOUND";
pub const PARSE_TREE_SITTER_ERROR: &str = "PARSE_TREE_SITTER_ERROR";
