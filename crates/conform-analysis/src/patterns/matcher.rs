//! Pattern evaluation as an explicit case analysis.
//!
//! Patterns are interpreted at match time; nothing is compiled or cached.

use smallvec::SmallVec;

use crate::paths::normalize;

/// True iff any pattern matches `path`. An empty pattern list excludes nothing.
///
/// `path` is normalized first, so `a\b\c.js` and `a/b/c.js` behave identically.
pub fn is_excluded<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    if patterns.is_empty() {
        return false;
    }
    let path = normalize(path);
    patterns
        .iter()
        .any(|pattern| matches_pattern(&path, pattern.as_ref()))
}

/// Evaluate one pattern against an already-normalized path.
pub fn matches_pattern(path: &str, pattern: &str) -> bool {
    match BraceGroup::find(pattern) {
        Some(group) => group
            .alternatives()
            .iter()
            .any(|alt| matches_single(path, &group.expand(alt))),
        None => matches_single(path, pattern),
    }
}

/// Evaluate a pattern with no brace group.
fn matches_single(path: &str, pattern: &str) -> bool {
    // `**/<segment>/**`: directory containment at any depth.
    if pattern.len() >= 6 && pattern.starts_with("**/") && pattern.ends_with("/**") {
        let segment = &pattern[3..pattern.len() - 3];
        return path.contains(&format!("/{segment}/"));
    }

    if let Some(idx) = pattern.find("**/") {
        let suffix = [&pattern[..idx], &pattern[idx + 3..]].concat();

        if let Some(rest) = suffix.strip_prefix('*') {
            return path.ends_with(rest);
        }

        if suffix.contains('*') {
            let basename = path.rsplit('/').next().unwrap_or(path);
            return contains_in_order(basename, &suffix);
        }

        return ends_with_segment(path, &suffix);
    }

    path.contains(pattern)
}

/// Every `*`-separated part of `pattern` occurs in `text`, left to right and
/// without overlapping.
fn contains_in_order(text: &str, pattern: &str) -> bool {
    let mut rest = text;
    pattern.split('*').all(|part| match rest.find(part) {
        Some(at) => {
            rest = &rest[at + part.len()..];
            true
        }
        None => false,
    })
}

/// `path` ends with `/` + `suffix`.
fn ends_with_segment(path: &str, suffix: &str) -> bool {
    path.len() > suffix.len()
        && path.ends_with(suffix)
        && path[..path.len() - suffix.len()].ends_with('/')
}

/// The first `{...}` group of a pattern, if any.
///
/// Mirrors the leftmost match of `\{([^}]+)\}`: an empty `{}` is skipped and
/// the search continues at the next `{`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BraceGroup<'a> {
    pattern: &'a str,
    open: usize,
    close: usize,
}

impl<'a> BraceGroup<'a> {
    pub(crate) fn find(pattern: &'a str) -> Option<Self> {
        let mut from = 0;
        while let Some(rel) = pattern[from..].find('{') {
            let open = from + rel;
            let close = open + 1 + pattern[open + 1..].find('}')?;
            if close > open + 1 {
                return Some(Self {
                    pattern,
                    open,
                    close,
                });
            }
            from = open + 1;
        }
        None
    }

    pub(crate) fn inner(&self) -> &'a str {
        &self.pattern[self.open + 1..self.close]
    }

    pub(crate) fn alternatives(&self) -> SmallVec<[&'a str; 4]> {
        self.inner().split(',').collect()
    }

    /// The pattern with this group replaced by `alt`.
    pub(crate) fn expand(&self, alt: &str) -> String {
        [
            &self.pattern[..self.open],
            alt,
            &self.pattern[self.close + 1..],
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_list_excludes_nothing() {
        let none: [&str; 0] = [];
        assert!(!is_excluded("src/a.js", &none));
    }

    #[test]
    fn extension_suffix() {
        assert!(matches_pattern("src/math.spec.js", "**/*.spec.js"));
        assert!(!matches_pattern("src/math.js", "**/*.spec.js"));
        assert!(matches_pattern("types/global.d.ts", "**/*.d.ts"));
    }

    #[test]
    fn trailing_path() {
        assert!(matches_pattern("src/index.js", "**/index.js"));
        assert!(!matches_pattern("src/myindex.js", "**/index.js"));
        assert!(matches_pattern("a/src/lib/util.js", "**/lib/util.js"));
        assert!(!matches_pattern("index.js", "**/index.js"));
    }

    #[test]
    fn directory_containment() {
        assert!(matches_pattern("src/errors/not-found.js", "**/errors/**"));
        assert!(matches_pattern("a/b/errors/deep/x.ts", "**/errors/**"));
        assert!(!matches_pattern("src/errors.js", "**/errors/**"));
        assert!(!matches_pattern("src/my-errors/x.js", "**/errors/**"));
    }

    #[test]
    fn loose_wildcard_in_basename() {
        assert!(matches_pattern("src/hooks/useAuthHook.js", "**/use*Hook.js"));
        assert!(!matches_pattern("src/hooks/useAuth.js", "**/use*Hook.js"));
        assert!(!matches_pattern("src/barfoo.js", "**/foo*bar"));
        assert!(matches_pattern("src/foo_and_bar.js", "**/foo*bar"));
        assert!(!matches_pattern("src/Hook.useless.js", "**/use*Hook.js"));
        assert!(!matches_pattern("use/Hook.js/x.ts", "**/use*Hook.js"));
    }

    #[test]
    fn plain_substring() {
        assert!(matches_pattern("src/generated/api.js", "generated"));
        assert!(!matches_pattern("src/api.js", "generated"));
    }

    #[test]
    fn brace_alternation() {
        assert!(matches_pattern("a/b-error.js", "**/*-error.{js,ts}"));
        assert!(matches_pattern("a/b-error.ts", "**/*-error.{js,ts}"));
        assert!(!matches_pattern("a/b-error.tsx", "**/*-error.{js,ts}"));
    }

    #[test]
    fn brace_group_detection_skips_empty_groups() {
        let group = BraceGroup::find("a{}b{c,d}").unwrap();
        assert_eq!(group.inner(), "c,d");
        assert_eq!(group.expand("c"), "a{}bc");
        assert!(BraceGroup::find("no-braces").is_none());
        assert!(BraceGroup::find("open{only").is_none());
    }

    #[test]
    fn only_first_brace_group_is_expanded() {
        let group = BraceGroup::find("**/{a,b}.{js,ts}").unwrap();
        assert_eq!(group.expand("a"), "**/a.{js,ts}");
    }

    #[test]
    fn windows_separators_are_normalized() {
        assert!(is_excluded(r"src\errors\x.js", &["**/errors/**"]));
        assert!(is_excluded(r"C:\repo\src\index.ts", &["**/index.ts"]));
    }

    #[test]
    fn degenerate_double_star_does_not_panic() {
        assert!(!matches_pattern("src/a.js", "**/**"));
        assert!(matches_pattern("src/a*", "**/**"));
    }
}
