//! File-name predicates shared by the checkers. All take canonical paths or bare names.

use crate::paths::ParsedPath;

const SPEC_MARKERS: &[&str] = &[".spec.js", ".spec.ts", ".test.js", ".test.ts"];
const INDEX_FILES: &[&str] = &["index.js", "index.ts", "index.jsx", "index.tsx"];

/// Aggregation file: `index.{js,ts,jsx,tsx}`.
pub fn is_index_file(path: &str) -> bool {
    INDEX_FILES.contains(&ParsedPath::parse(path).base)
}

/// Spec or test file by name (`.spec.js`, `.test.ts`, ... anywhere in the path).
pub fn is_spec_file(path: &str) -> bool {
    SPEC_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Stem ends in `.spec` or `.test`.
pub fn has_spec_stem(name: &str) -> bool {
    name.ends_with(".spec") || name.ends_with(".test")
}

/// `index.spec.*` or `index.test.*`.
pub fn is_aggregation_spec(name: &str) -> bool {
    name == "index.spec" || name == "index.test"
}

/// TypeScript declaration file.
pub fn is_declaration_file(path: &str) -> bool {
    path.ends_with(".d.ts")
}

/// Extension of a file that may need a spec: `.js`, or `.ts` that is not `.d.ts`.
pub fn implementation_extension(path: &str) -> Option<&'static str> {
    if path.ends_with(".js") {
        Some(".js")
    } else if path.ends_with(".ts") && !is_declaration_file(path) {
        Some(".ts")
    } else {
        None
    }
}

/// UI component file: `.jsx` or `.tsx`.
pub fn is_component_file(ext: &str) -> bool {
    ext == ".jsx" || ext == ".tsx"
}

/// Whether a directory entry counts toward the index-file threshold.
///
/// Only `.js`/`.ts` files that are not index, spec, test or declaration files.
pub fn counts_toward_index(file_name: &str) -> bool {
    let js_or_ts = file_name.ends_with(".js") || file_name.ends_with(".ts");
    let index = file_name == "index.js" || file_name == "index.ts";
    let spec = file_name.contains(".spec.") || file_name.contains(".test.");
    js_or_ts && !index && !spec && !is_declaration_file(file_name)
}
