//! [`SyntaxNode`] over tree-sitter JavaScript / TypeScript / TSX trees.

use tree_sitter::Node;

use super::{
    ClassMember, Declarator, ExpressionKind, FunctionBody, MemberKind, NodeKind, Position, SyntaxNode,
};

/// A borrowed tree-sitter node.
#[derive(Debug, Clone, Copy)]
pub struct TsNode<'t>(pub Node<'t>);

impl<'t> TsNode<'t> {
    pub fn new(node: Node<'t>) -> Self {
        Self(node)
    }

    pub fn raw(&self) -> Node<'t> {
        self.0
    }

    /// Named children, comments excluded.
    pub fn children(&self) -> Vec<TsNode<'t>> {
        let mut cursor = self.0.walk();
        let children = self
            .0
            .named_children(&mut cursor)
            .filter(|child| !is_trivia(child.kind()))
            .map(TsNode)
            .collect();
        children
    }

    fn field(&self, name: &str) -> Option<TsNode<'t>> {
        self.0.child_by_field_name(name).map(TsNode)
    }

    /// Skip through any number of wrapping parentheses.
    fn unparenthesized(self) -> TsNode<'t> {
        let mut node = self;
        while node.0.kind() == "parenthesized_expression" {
            match node.children().into_iter().next() {
                Some(inner) => node = inner,
                None => break,
            }
        }
        node
    }

    fn has_token(&self, token: &str) -> bool {
        let mut cursor = self.0.walk();
        let found = self
            .0
            .children(&mut cursor)
            .any(|child| !child.is_named() && child.kind() == token);
        found
    }

    fn export_kind(&self) -> NodeKind {
        let mut cursor = self.0.walk();
        let star = self
            .0
            .children(&mut cursor)
            .any(|child| child.kind() == "*" || child.kind() == "namespace_export");
        if star {
            NodeKind::ExportAll
        } else if self.has_token("type") {
            NodeKind::ExportTypeOnly
        } else if self.has_token("default") {
            NodeKind::ExportDefault
        } else {
            NodeKind::ExportNamed
        }
    }
}

/// Top-level statements of a `program` node.
pub fn program_statements(root: Node<'_>) -> Vec<TsNode<'_>> {
    TsNode(root)
        .children()
        .into_iter()
        .filter(|stmt| stmt.0.kind() != "hash_bang_line")
        .collect()
}

fn is_trivia(kind: &str) -> bool {
    matches!(kind, "comment" | "html_comment")
}

fn expression_kind(node: TsNode<'_>) -> ExpressionKind {
    match node.unparenthesized().0.kind() {
        "string" | "number" | "true" | "false" | "null" | "regex" => ExpressionKind::Literal,
        "identifier" | "undefined" => ExpressionKind::Identifier,
        "object" => ExpressionKind::ObjectLiteral,
        "array" => ExpressionKind::ArrayLiteral,
        _ => ExpressionKind::Other,
    }
}

fn member(node: TsNode<'_>) -> ClassMember {
    match node.0.kind() {
        "method_definition" => ClassMember {
            kind: MemberKind::Method,
            has_body: node.field("body").is_some(),
        },
        "method_signature" | "abstract_method_signature" => ClassMember::signature(),
        "field_definition" | "public_field_definition" => ClassMember::field(),
        _ => ClassMember {
            kind: MemberKind::Other,
            has_body: false,
        },
    }
}

impl<'t> SyntaxNode for TsNode<'t> {
    fn kind(&self) -> NodeKind {
        match self.0.kind() {
            "function_declaration" | "generator_function_declaration" => {
                NodeKind::FunctionDeclaration
            }
            "function_expression" | "function" | "generator_function" => {
                NodeKind::FunctionExpression
            }
            "arrow_function" => NodeKind::ArrowFunction,
            "class_declaration" | "class" | "abstract_class_declaration" => NodeKind::Class,
            "lexical_declaration" | "variable_declaration" => NodeKind::VariableDeclaration,
            "export_statement" => self.export_kind(),
            _ => NodeKind::Other,
        }
    }

    fn function_body(&self) -> Option<FunctionBody> {
        if !self.kind().is_function_like() {
            return None;
        }
        let body = self.field("body")?;
        if body.0.kind() == "statement_block" {
            Some(FunctionBody::Block)
        } else {
            Some(FunctionBody::Expression(expression_kind(body)))
        }
    }

    fn class_members(&self) -> Vec<ClassMember> {
        if self.kind() != NodeKind::Class {
            return Vec::new();
        }
        match self.field("body") {
            Some(body) => body.children().into_iter().map(member).collect(),
            None => Vec::new(),
        }
    }

    fn exported(&self) -> Option<Self> {
        if self.0.kind() != "export_statement" {
            return None;
        }
        self.field("declaration")
            .or_else(|| self.field("value"))
            .map(TsNode::unparenthesized)
    }

    fn has_source(&self) -> bool {
        self.0.kind() == "export_statement" && self.field("source").is_some()
    }

    fn declarators(&self) -> Vec<Declarator<Self>> {
        if self.kind() != NodeKind::VariableDeclaration {
            return Vec::new();
        }
        self.children()
            .into_iter()
            .filter(|child| child.0.kind() == "variable_declarator")
            .filter_map(|declarator| {
                let value = declarator.field("value")?;
                Some(Declarator::new(declarator.position(), value.unparenthesized()))
            })
            .collect()
    }

    fn position(&self) -> Position {
        let point = self.0.start_position();
        Position {
            line: point.row as u32 + 1,
            column: point.column as u32 + 1,
        }
    }
}
