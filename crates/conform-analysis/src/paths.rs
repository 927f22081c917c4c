//! Path canonicalization and `dir / name / ext` splitting.
//!
//! Every comparison in the engine happens on the canonical form produced by
//! [`normalize`], so Windows-style separators behave exactly like `/`.

use std::borrow::Cow;
use std::path::Path;

/// Replace every `\` with `/`.
///
/// Idempotent: `normalize(&normalize(p)) == normalize(p)`.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if path.contains('\\') {
        Cow::Owned(path.replace('\\', "/"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Canonical string form of a filesystem path.
pub fn normalize_path(path: &Path) -> String {
    normalize(&path.to_string_lossy()).into_owned()
}

/// Join a canonical directory and a file name. An empty directory yields the bare name.
pub fn join(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else if dir.ends_with('/') {
        format!("{dir}{name}")
    } else {
        format!("{dir}/{name}")
    }
}

/// A canonical path split into its parts.
///
/// `src/components/Button.spec.tsx` splits into
/// `dir = "src/components"`, `base = "Button.spec.tsx"`,
/// `name = "Button.spec"`, `ext = ".tsx"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    pub dir: &'a str,
    pub base: &'a str,
    pub name: &'a str,
    pub ext: &'a str,
}

impl<'a> ParsedPath<'a> {
    /// Split a canonical (forward-slash) path.
    pub fn parse(path: &'a str) -> Self {
        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let (dir, base) = match trimmed.rfind('/') {
            Some(0) => ("/", &trimmed[1..]),
            Some(idx) => (&trimmed[..idx], &trimmed[idx + 1..]),
            None => ("", trimmed),
        };
        // A leading dot is part of the name (".eslintrc" has no extension).
        let (name, ext) = match base.rfind('.') {
            Some(idx) if idx > 0 => (&base[..idx], &base[idx..]),
            _ => (base, ""),
        };
        Self { dir, base, name, ext }
    }

    /// Sibling path with the given file name.
    pub fn sibling(&self, name: &str) -> String {
        join(self.dir, name)
    }

    /// Last component of the directory, or the directory itself when it has none.
    pub fn dir_name(&self) -> &'a str {
        match self.dir.trim_end_matches('/').rsplit('/').next() {
            Some(last) if !last.is_empty() => last,
            _ => self.dir,
        }
    }
}
