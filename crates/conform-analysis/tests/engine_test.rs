//! Whole-tree runs through the engine: discovery, parsing, every rule.

use std::fs;

use conform_analysis::conventions::ViolationKind;
use conform_analysis::engine::ConventionEngine;
use conform_core::config::RuleLevel;
use conform_core::errors::ScanError;
use conform_core::{ConformConfig, Preset, RuleId};
use tempfile::TempDir;

fn write(root: &TempDir, rel: &str, content: &str) {
    let path = root.path().join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn only(rules: &[RuleId]) -> ConformConfig {
    let mut config = ConformConfig::default();
    config.rules.retain_only(rules);
    config
}

fn kinds_for(report: &conform_analysis::engine::LintReport, rule: RuleId) -> Vec<ViolationKind> {
    report
        .violations
        .iter()
        .filter(|v| v.rule == rule)
        .map(|v| v.kind.clone())
        .collect()
}

#[test]
fn t3_eng_01_models_directory_yields_one_missing_index() {
    let root = TempDir::new().unwrap();
    write(&root, "src/models/user.js", "export class User {}\n");
    write(&root, "src/models/product.js", "export class Product {}\n");
    write(&root, "src/models/order.js", "export class Order {}\n");

    let engine = ConventionEngine::from_config(&only(&[RuleId::RequireIndexFile])).unwrap();
    let report = engine.run(root.path()).unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(
        kinds_for(&report, RuleId::RequireIndexFile),
        vec![ViolationKind::MissingIndex {
            directory: "models".into()
        }]
    );

    // A second run on the same engine reports the directory again.
    let again = engine.run(root.path()).unwrap();
    assert_eq!(again.violations.len(), 1);
}

#[test]
fn t3_eng_02_component_with_full_artifacts_is_clean() {
    let root = TempDir::new().unwrap();
    write(&root, "ui/Button.jsx", "export const Button = () => <button />;\n");
    write(&root, "ui/Button.spec.jsx", "it('renders', () => {});\n");
    write(&root, "ui/Button.spec-snapshots/shot.PNG", "");

    let config = only(&[
        RuleId::RequireSpecFile,
        RuleId::RequireIndexFile,
        RuleId::RequireVisualSnapshot,
        RuleId::NoLogicInIndex,
    ]);
    let engine = ConventionEngine::from_config(&config).unwrap();
    let report = engine.run(root.path()).unwrap();
    assert!(report.is_clean(), "unexpected: {:?}", report.violations);
    assert_eq!(report.files_scanned, 2);
}

#[test]
fn t3_eng_03_mixed_tree_sorted_and_counted() {
    let root = TempDir::new().unwrap();
    write(&root, "src/calculator.js", "export function multiply(a, b) { return a * b; }\n");
    write(&root, "src/index.js", "export * from './calculator';\nexport const run = () => { go(); };\n");
    write(&root, "src/index.spec.js", "test('x', () => {});\n");

    let mut config = ConformConfig::default();
    config
        .rules
        .set_level(RuleId::RequireIndexFile, RuleLevel::Warn);
    let engine = ConventionEngine::from_config(&config).unwrap();
    let report = engine.run(root.path()).unwrap();

    assert_eq!(
        kinds_for(&report, RuleId::RequireSpecFile),
        vec![
            ViolationKind::MissingSpec {
                spec_file: "calculator.spec.js".into()
            },
            ViolationKind::AggregationSpecNotAllowed,
        ]
    );
    assert_eq!(kinds_for(&report, RuleId::NoLogicInIndex).len(), 1);
    assert!(kinds_for(&report, RuleId::RequireIndexFile).is_empty());
    assert_eq!(report.error_count(), 3);
    assert!(report.has_errors());

    let files: Vec<&str> = report.violations.iter().map(|v| v.location.file.as_str()).collect();
    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn t3_eng_04_index_files_need_no_spec_under_any_preset() {
    let root = TempDir::new().unwrap();
    write(&root, "index.ts", "export function main() { run(); }\n");
    write(&root, "src/index.ts", "export function boot() { start(); }\n");
    write(&root, "src/boot.ts", "export function boot() { start(); }\n");

    for preset in [Preset::Recommended, Preset::Strict] {
        let engine = ConventionEngine::from_config(&ConformConfig::for_preset(preset)).unwrap();
        let report = engine.run(root.path()).unwrap();
        assert_eq!(
            kinds_for(&report, RuleId::RequireSpecFile),
            vec![ViolationKind::MissingSpec {
                spec_file: "boot.spec.ts".into()
            }],
            "preset {}",
            preset.name()
        );
    }
}

#[test]
fn t3_eng_05_ignored_directories_are_not_scanned() {
    let root = TempDir::new().unwrap();
    write(&root, "node_modules/lib/a.js", "export function a() { return 1; }\n");
    write(&root, "src/b.js", "export const B = 1;\n");

    let engine = ConventionEngine::from_config(&ConformConfig::default()).unwrap();
    let report = engine.run(root.path()).unwrap();
    assert_eq!(report.files_scanned, 1);
    assert!(report.is_clean());
}

#[test]
fn t3_eng_06_syntax_errors_do_not_stop_the_run() {
    let root = TempDir::new().unwrap();
    write(&root, "src/broken.js", "export function ( {{{\n");
    write(&root, "src/Widget.tsx", "export const Widget = () => <div />;\n");

    let engine = ConventionEngine::from_config(&only(&[RuleId::RequireStorybookFile])).unwrap();
    let report = engine.run(root.path()).unwrap();
    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].location.file.ends_with("src/Widget.tsx"));
}

#[test]
fn t3_eng_07_missing_root_is_an_error() {
    let root = TempDir::new().unwrap();
    let engine = ConventionEngine::from_config(&ConformConfig::default()).unwrap();
    let err = engine.run(&root.path().join("absent")).unwrap_err();
    assert!(matches!(err, ScanError::RootNotFound(_)));
}

#[test]
fn t3_eng_08_excluded_paths_are_skipped() {
    let root = TempDir::new().unwrap();
    write(&root, "src/legacy/old.js", "export function old() { return 1; }\n");

    let config = ConformConfig::from_toml(
        "[rules.require-spec-file]\nexclude_patterns = [\"**/legacy/**\"]\n",
    )
    .unwrap();
    let engine = ConventionEngine::from_config(&config).unwrap();
    let report = engine.run(root.path()).unwrap();
    assert!(kinds_for(&report, RuleId::RequireSpecFile).is_empty());
}
