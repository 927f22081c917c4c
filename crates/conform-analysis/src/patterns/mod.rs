//! Exclusion patterns: a narrow glob subset tuned for file-convention exemptions.
//!
//! Supported forms:
//! - `**/*.ext` suffix match
//! - `**/name` trailing path match
//! - `**/dir/**` directory containment at any depth
//! - `**/pre*post` loose containment within the file name
//! - `{a,b}` alternation, once per pattern
//! - anything else is a plain substring

pub mod exclude;
pub mod matcher;

pub use exclude::ExcludePatterns;
pub use matcher::{is_excluded, matches_pattern};
