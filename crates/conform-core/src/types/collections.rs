//! Fast hash collections keyed by paths and rule names.

pub use rustc_hash::{FxHashMap, FxHashSet};
