//! Exclusion pattern properties, checked over generated paths.

use conform_analysis::patterns::{is_excluded, ExcludePatterns};
use conform_core::RuleId;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn dir_path() -> impl Strategy<Value = String> {
    prop::collection::vec(segment(), 1..4).prop_map(|segments| segments.join("/"))
}

fn extension() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["js", "ts", "jsx", "tsx", "mjs", "d.ts", "json"]).prop_map(String::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn extension_pattern_matches_iff_suffix(dir in dir_path(), stem in segment(), ext in extension(), want in extension()) {
        let path = format!("{dir}/{stem}.{ext}");
        let pattern = format!("**/*.{want}");
        prop_assert_eq!(is_excluded(&path, &[pattern]), path.ends_with(&format!(".{want}")));
    }

    #[test]
    fn name_pattern_matches_final_segment(dir in dir_path(), name in segment(), other in segment()) {
        let path = format!("{dir}/{name}.js");
        let own = format!("**/{name}.js");
        prop_assert!(is_excluded(&path, &[own]));
        if other != name && !name.ends_with(&other) {
            let foreign = format!("**/{other}.js");
            prop_assert!(!is_excluded(&path, &[foreign]));
        }
    }

    #[test]
    fn matching_is_separator_invariant(dir in dir_path(), stem in segment(), ext in extension(), seg in segment()) {
        let forward = format!("{dir}/{stem}.{ext}");
        let backward = forward.replace('/', "\\");
        let patterns = [
            format!("**/*.{ext}"),
            format!("**/{seg}/**"),
            format!("**/{stem}.{ext}"),
            seg.clone(),
        ];
        for pattern in &patterns {
            prop_assert_eq!(
                is_excluded(&forward, std::slice::from_ref(pattern)),
                is_excluded(&backward, std::slice::from_ref(pattern)),
                "pattern {}", pattern
            );
        }
    }

    #[test]
    fn directory_pattern_is_containment(prefix in dir_path(), seg in segment(), rest in dir_path()) {
        let inside = format!("{prefix}/{seg}/{rest}.js");
        let pattern = format!("**/{seg}/**");
        prop_assert!(is_excluded(&inside, std::slice::from_ref(&pattern)));
        let top_level = format!("{seg}.js");
        prop_assert!(!is_excluded(&top_level, std::slice::from_ref(&pattern)));
    }

    #[test]
    fn empty_pattern_list_excludes_nothing(dir in dir_path(), stem in segment(), ext in extension()) {
        let path = format!("{dir}/{stem}.{ext}");
        prop_assert!(!is_excluded::<String>(&path, &[]));
    }
}

#[test]
fn brace_group_expands_alternatives() {
    let patterns = ["**/*-error.{js,ts}"];
    assert!(is_excluded("a/b-error.js", &patterns));
    assert!(is_excluded("a/b-error.ts", &patterns));
    assert!(!is_excluded("a/b-error.tsx", &patterns));
}

#[test]
fn errors_directory_in_any_separator_style() {
    let patterns = ["**/errors/**"];
    assert!(is_excluded("src/errors/http.js", &patterns));
    assert!(is_excluded(r"src\errors\http.js", &patterns));
    assert!(is_excluded(r"C:\repo\lib\errors\deep\x.ts", &patterns));
    assert!(!is_excluded("src/errors.js", &patterns));
}

#[test]
fn loose_wildcard_parts_match_in_order() {
    let patterns = ["**/use*Hook.js"];
    assert!(is_excluded("src/useFetchHook.js", &patterns));
    assert!(is_excluded("src/useHook.js", &patterns));
    assert!(!is_excluded("src/Hook.js.useless", &patterns));
    assert!(!is_excluded("src/use/other.js", &patterns));
}

#[test]
fn plain_patterns_are_substrings() {
    assert!(is_excluded("src/legacy/old.js", &["legacy"]));
    assert!(!is_excluded("src/modern/new.js", &["legacy"]));
}

#[test]
fn configured_patterns_are_validated() {
    let ok = ExcludePatterns::new(RuleId::RequireSpecFile, vec!["**/*.{js,ts}".into()]);
    assert!(ok.is_ok());

    for bad in ["", "**/*.{js,ts", "**/*.{js,}", "**/*.{}"] {
        assert!(
            ExcludePatterns::new(RuleId::RequireSpecFile, vec![bad.to_string()]).is_err(),
            "{bad:?} should be rejected"
        );
    }
}
