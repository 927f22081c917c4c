//! Parallel file walker using the `ignore` crate's `WalkParallel`.
//!
//! Supports `.conformignore` (gitignore syntax, hierarchical) and the default ignore patterns.

use std::path::Path;

use ignore::overrides::OverrideBuilder;

use conform_core::config::ScanConfig;
use conform_core::errors::ScanError;
use crossbeam_channel as channel;

use super::language_detect::Language;
use super::types::DiscoveredFile;

/// Custom ignore file honoured in every directory.
pub const IGNORE_FILE_NAME: &str = ".conformignore";

/// Default ignore patterns applied to every scan.
pub const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "coverage",
    ".next",
    ".nuxt",
    ".nyc_output",
    ".turbo",
    ".cache",
    "storybook-static",
    "out",
];

/// Blacklist every default ignore, both the directory itself and anything below it.
fn add_default_ignores(overrides: &mut OverrideBuilder) {
    for pattern in DEFAULT_IGNORES {
        for glob in [format!("!{pattern}/**"), format!("!{pattern}")] {
            if let Err(e) = overrides.add(&glob) {
                tracing::warn!(pattern = %glob, error = %e, "invalid default ignore pattern");
            }
        }
    }
}

/// Walk a directory tree in parallel, collecting JavaScript and TypeScript files.
///
/// Respects `.gitignore`, `.conformignore`, and the default ignore patterns.
/// Returns files sorted by path for deterministic output.
pub fn walk_directory(root: &Path, config: &ScanConfig) -> Result<Vec<DiscoveredFile>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::RootNotFound(root.to_path_buf()));
    }

    let (tx, rx) = channel::unbounded();

    let max_file_size = config.effective_max_file_size();
    let follow_links = config.follow_symlinks.unwrap_or(false);
    let threads = config.effective_threads();

    let mut builder = ignore::WalkBuilder::new(root);
    builder
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .add_custom_ignore_filename(IGNORE_FILE_NAME)
        .max_filesize(Some(max_file_size))
        .follow_links(follow_links);

    if threads > 0 {
        builder.threads(threads);
    }

    // Include patterns are a whitelist; everything else is added negated as a blacklist.
    let mut overrides = OverrideBuilder::new(root);
    for pattern in &config.include {
        if let Err(e) = overrides.add(pattern) {
            tracing::warn!(pattern = %pattern, error = %e, "invalid include pattern");
        }
    }
    add_default_ignores(&mut overrides);
    for pattern in &config.extra_ignore {
        if let Err(e) = overrides.add(&format!("!{pattern}")) {
            tracing::warn!(pattern = %pattern, error = %e, "invalid ignore pattern");
        }
    }
    match overrides.build() {
        Ok(built) => {
            builder.overrides(built);
        }
        Err(e) => tracing::warn!(error = %e, "failed to build path overrides"),
    }

    let walker = builder.build_parallel();

    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    tracing::debug!(error = %e, "walk error");
                    return ignore::WalkState::Continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                return ignore::WalkState::Continue;
            }

            let path = entry.path();
            let Some(language) = Language::from_extension(path.extension().and_then(|e| e.to_str()))
            else {
                return ignore::WalkState::Continue;
            };

            let file_size = match entry.metadata() {
                Ok(m) => m.len(),
                Err(_) => return ignore::WalkState::Continue,
            };

            let _ = tx.send(DiscoveredFile {
                path: path.to_path_buf(),
                file_size,
                language,
            });

            ignore::WalkState::Continue
        })
    });

    drop(tx);
    let mut files: Vec<DiscoveredFile> = rx.into_iter().collect();
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
