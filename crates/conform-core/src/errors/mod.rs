//! Error types for every subsystem, each mapped to a stable error code.

pub mod config_error;
pub mod error_code;
pub mod parse_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use parse_error::ParseError;
pub use scan_error::ScanError;
