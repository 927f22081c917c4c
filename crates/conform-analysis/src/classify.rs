//! Logic classification: does a declaration contain executable logic?
//!
//! Single-level structural check. No data-flow or control-flow analysis:
//! a function is logic because of the shape of its body, a class because it
//! has at least one method with a body.

use serde::{Deserialize, Serialize};

use crate::syntax::ts_node::TsNode;
use crate::syntax::{FunctionBody, MemberKind, NodeKind, SyntaxNode};

/// Structural shape of a declaration, as far as logic detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeclarationShape {
    /// `function f() { ... }`, `() => { ... }`.
    FunctionWithBlockBody,
    /// `() => 42`, `() => CONST`, `() => ({ a })`, `() => [a]`.
    FunctionWithSimpleBody,
    /// `() => a + b`, `() => call()`.
    FunctionWithExpressionBody,
    ClassWithMethods,
    ClassWithoutMethods,
    Other,
}

impl DeclarationShape {
    pub fn of<N: SyntaxNode>(node: &N) -> Self {
        let kind = node.kind();
        if kind.is_function_like() {
            return match node.function_body() {
                Some(FunctionBody::Block) => Self::FunctionWithBlockBody,
                Some(FunctionBody::Expression(expr)) if expr.is_simple() => {
                    Self::FunctionWithSimpleBody
                }
                Some(FunctionBody::Expression(_)) => Self::FunctionWithExpressionBody,
                None => Self::Other,
            };
        }
        if kind == NodeKind::Class {
            let has_method = node
                .class_members()
                .iter()
                .any(|m| m.kind == MemberKind::Method && m.has_body);
            return if has_method {
                Self::ClassWithMethods
            } else {
                Self::ClassWithoutMethods
            };
        }
        Self::Other
    }

    pub fn is_logic(&self) -> bool {
        matches!(
            self,
            Self::FunctionWithBlockBody | Self::FunctionWithExpressionBody | Self::ClassWithMethods
        )
    }
}

/// Whether `node` represents executable logic. An absent node is not logic.
pub fn is_logic<N: SyntaxNode>(node: Option<&N>) -> bool {
    node.is_some_and(|n| DeclarationShape::of(n).is_logic())
}

/// Whether any function-like or class node at any depth under `root` is logic.
///
/// Method definitions with a body count too (object-literal methods included),
/// since their value is a function expression.
pub fn contains_logic(root: TsNode<'_>) -> bool {
    let mut cursor = root.raw().walk();
    loop {
        let node = cursor.node();
        if node.kind() == "method_definition" && node.child_by_field_name("body").is_some() {
            return true;
        }
        let wrapped = TsNode::new(node);
        let kind = wrapped.kind();
        if (kind.is_function_like() || kind == NodeKind::Class) && is_logic(Some(&wrapped)) {
            return true;
        }

        if cursor.goto_first_child() || cursor.goto_next_sibling() {
            continue;
        }
        loop {
            if !cursor.goto_parent() {
                return false;
            }
            if cursor.goto_next_sibling() {
                break;
            }
        }
    }
}
