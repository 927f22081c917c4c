//! Hand-built syntax nodes for exercising the classifier without a parser.

use super::{ClassMember, Declarator, ExpressionKind, FunctionBody, NodeKind, Position, SyntaxNode};

/// An owned node that answers [`SyntaxNode`] queries from its fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureNode {
    pub kind: NodeKind,
    pub body: Option<FunctionBody>,
    pub members: Vec<ClassMember>,
    pub exported: Option<Box<FixtureNode>>,
    pub has_source: bool,
    pub declarators: Vec<Declarator<FixtureNode>>,
    pub position: Position,
}

impl FixtureNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            body: None,
            members: Vec::new(),
            exported: None,
            has_source: false,
            declarators: Vec::new(),
            position: Position::START,
        }
    }

    /// `function f() { ... }`
    pub fn function_declaration() -> Self {
        Self {
            body: Some(FunctionBody::Block),
            ..Self::new(NodeKind::FunctionDeclaration)
        }
    }

    /// `function () { ... }` used as a value.
    pub fn function_expression() -> Self {
        Self {
            body: Some(FunctionBody::Block),
            ..Self::new(NodeKind::FunctionExpression)
        }
    }

    /// `() => { ... }`
    pub fn arrow_block() -> Self {
        Self {
            body: Some(FunctionBody::Block),
            ..Self::new(NodeKind::ArrowFunction)
        }
    }

    /// `() => <expr>`
    pub fn arrow_expression(expr: ExpressionKind) -> Self {
        Self {
            body: Some(FunctionBody::Expression(expr)),
            ..Self::new(NodeKind::ArrowFunction)
        }
    }

    pub fn class(members: Vec<ClassMember>) -> Self {
        Self {
            members,
            ..Self::new(NodeKind::Class)
        }
    }

    /// `const a = <init>, b = <init>;` with each declarator where its value starts.
    pub fn variables(initializers: Vec<FixtureNode>) -> Self {
        Self::declared(
            initializers
                .into_iter()
                .map(|init| Declarator::new(init.position, init))
                .collect(),
        )
    }

    /// A variable declaration with explicitly placed declarators.
    pub fn declared(declarators: Vec<Declarator<FixtureNode>>) -> Self {
        Self {
            declarators,
            ..Self::new(NodeKind::VariableDeclaration)
        }
    }

    /// `export <declaration>`
    pub fn export_named(declaration: FixtureNode) -> Self {
        Self {
            exported: Some(Box::new(declaration)),
            ..Self::new(NodeKind::ExportNamed)
        }
    }

    /// `export { a } from './a'`
    pub fn reexport() -> Self {
        Self {
            has_source: true,
            ..Self::new(NodeKind::ExportNamed)
        }
    }

    pub fn export_default(value: FixtureNode) -> Self {
        Self {
            exported: Some(Box::new(value)),
            ..Self::new(NodeKind::ExportDefault)
        }
    }

    pub fn export_all() -> Self {
        Self {
            has_source: true,
            ..Self::new(NodeKind::ExportAll)
        }
    }

    pub fn export_type_only() -> Self {
        Self::new(NodeKind::ExportTypeOnly)
    }

    /// A literal, identifier or any other non-declaration expression.
    pub fn other() -> Self {
        Self::new(NodeKind::Other)
    }

    pub fn at(mut self, line: u32, column: u32) -> Self {
        self.position = Position { line, column };
        self
    }
}

impl SyntaxNode for FixtureNode {
    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn function_body(&self) -> Option<FunctionBody> {
        self.body
    }

    fn class_members(&self) -> Vec<ClassMember> {
        self.members.clone()
    }

    fn exported(&self) -> Option<Self> {
        self.exported.as_deref().cloned()
    }

    fn has_source(&self) -> bool {
        self.has_source
    }

    fn declarators(&self) -> Vec<Declarator<Self>> {
        self.declarators.clone()
    }

    fn position(&self) -> Position {
        self.position
    }
}
