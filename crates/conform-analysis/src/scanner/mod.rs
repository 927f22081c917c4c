//! Source discovery: parallel directory walk filtered to JavaScript and TypeScript files.

pub mod language_detect;
pub mod scanner;
pub mod types;
pub mod walker;

pub use language_detect::Language;
pub use scanner::Scanner;
pub use types::{DiscoveredFile, ScanStats};
