//! no-logic-in-index: aggregation files may only re-export.

use conform_core::{RuleId, Severity};

use super::file_kinds::is_index_file;
use super::types::{Location, Violation, ViolationKind};
use super::{CheckEnv, ConventionChecker, FileContext};
use crate::classify::is_logic;
use crate::patterns::ExcludePatterns;
use crate::syntax::{NodeKind, Position, SyntaxNode};

/// No defaults: every index file is checked unless configured otherwise.
pub const DEFAULT_EXCLUDES: &[&str] = &[];

pub struct AggregationChecker {
    excludes: ExcludePatterns,
    severity: Severity,
}

impl AggregationChecker {
    pub fn new(excludes: ExcludePatterns, severity: Severity) -> Self {
        Self { excludes, severity }
    }

    pub fn with_defaults(severity: Severity) -> Self {
        Self::new(ExcludePatterns::from_defaults(DEFAULT_EXCLUDES), severity)
    }

    /// Check the top-level statements of an index file.
    pub fn check_statements<N: SyntaxNode>(&self, path: &str, statements: &[N]) -> Vec<Violation> {
        let mut violations = Vec::new();
        for statement in statements {
            self.check_statement(path, statement, &mut violations);
        }
        violations
    }

    fn check_statement<N: SyntaxNode>(&self, path: &str, statement: &N, out: &mut Vec<Violation>) {
        match statement.kind() {
            NodeKind::ExportAll | NodeKind::ExportTypeOnly => {}
            NodeKind::ExportNamed if statement.has_source() => {}
            NodeKind::ExportNamed | NodeKind::ExportDefault => {
                let Some(declaration) = statement.exported() else {
                    return;
                };
                if declaration.kind() == NodeKind::VariableDeclaration {
                    self.check_initializers(path, &declaration, out);
                } else if is_logic(Some(&declaration)) {
                    out.push(self.logic_at(path, statement.position(), &declaration));
                }
            }
            NodeKind::FunctionDeclaration | NodeKind::Class => {
                if is_logic(Some(statement)) {
                    out.push(self.logic_at(path, statement.position(), statement));
                }
            }
            NodeKind::VariableDeclaration => self.check_initializers(path, statement, out),
            _ => {}
        }
    }

    /// One violation per declarator whose initializer is logic, placed at the declarator.
    fn check_initializers<N: SyntaxNode>(&self, path: &str, declaration: &N, out: &mut Vec<Violation>) {
        for declarator in declaration.declarators() {
            if is_logic(Some(&declarator.value)) {
                out.push(self.logic_at(path, declarator.position, &declarator.value));
            }
        }
    }

    fn logic_at<N: SyntaxNode>(&self, path: &str, at: Position, found: &N) -> Violation {
        Violation::new(
            self.id(),
            ViolationKind::LogicInAggregation {
                node_type: found.kind().label().to_string(),
            },
            Location::new(path, at),
            self.severity,
        )
    }
}

impl ConventionChecker for AggregationChecker {
    fn id(&self) -> RuleId {
        RuleId::NoLogicInIndex
    }

    fn severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, file: &FileContext<'_>, _env: &CheckEnv<'_>) -> Vec<Violation> {
        if !is_index_file(file.path) || self.excludes.is_excluded(file.path) {
            return Vec::new();
        }
        match file.syntax {
            Some(syntax) => self.check_statements(file.path, &syntax.statements()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::fixture::FixtureNode;
    use crate::syntax::{ClassMember, Declarator, ExpressionKind};

    fn check(statements: &[FixtureNode]) -> Vec<Violation> {
        AggregationChecker::with_defaults(Severity::Error).check_statements("src/index.js", statements)
    }

    #[test]
    fn re_exports_are_allowed() {
        assert!(check(&[
            FixtureNode::export_all(),
            FixtureNode::reexport(),
            FixtureNode::export_type_only(),
        ])
        .is_empty());
    }

    #[test]
    fn constants_are_allowed() {
        let constants = FixtureNode::variables(vec![
            FixtureNode::other(),
            FixtureNode::arrow_expression(ExpressionKind::Identifier),
        ]);
        assert!(check(&[constants.clone(), FixtureNode::export_named(constants)]).is_empty());
    }

    #[test]
    fn exported_function_is_reported_at_the_statement() {
        let stmt = FixtureNode::export_named(FixtureNode::function_declaration()).at(3, 1);
        let v = check(&[stmt]);
        assert_eq!(v.len(), 1);
        assert_eq!((v[0].location.line, v[0].location.column), (3, 1));
        assert_eq!(
            v[0].kind,
            ViolationKind::LogicInAggregation {
                node_type: "function declaration".into()
            }
        );
    }

    #[test]
    fn each_logic_declarator_is_reported_at_its_name() {
        let at = |column| Position { line: 1, column };
        let decl = FixtureNode::declared(vec![
            Declarator::new(at(7), FixtureNode::arrow_block().at(1, 11)),
            Declarator::new(at(26), FixtureNode::other().at(1, 30)),
            Declarator::new(at(33), FixtureNode::function_expression().at(1, 40)),
        ]);
        let v = check(&[decl]);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].location.column, 7);
        assert_eq!(v[1].location.column, 33);
        assert_eq!(
            v[1].kind,
            ViolationKind::LogicInAggregation {
                node_type: "function expression".into()
            }
        );
    }

    #[test]
    fn default_exports_and_classes() {
        let v = check(&[
            FixtureNode::export_default(FixtureNode::class(vec![ClassMember::method()])),
            FixtureNode::export_default(FixtureNode::other()),
            FixtureNode::class(vec![ClassMember::field()]),
            FixtureNode::function_declaration(),
        ]);
        assert_eq!(v.len(), 2);
        assert!(v[0].message().contains("Found class with implementation"));
    }

    #[test]
    fn non_index_files_are_ignored() {
        let checker = AggregationChecker::with_defaults(Severity::Error);
        let probe = crate::conventions::MemoryProbe::new();
        let state = crate::conventions::RunState::new();
        let env = CheckEnv::new(&probe, &state);
        assert!(checker
            .check(&FileContext::without_syntax("src/util.js", true), &env)
            .is_empty());
    }
}
