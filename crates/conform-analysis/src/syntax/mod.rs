//! Minimal capability interface over syntax trees.
//!
//! The classifier and the index-file checker only ever ask a node for its kind
//! tag, its function body shape, its class members, the declaration an export
//! wraps, and the initializers of a variable declaration. [`SyntaxNode`]
//! captures exactly that, so the same logic runs over tree-sitter nodes
//! ([`ts_node::TsNode`]) and hand-built fixtures ([`fixture::FixtureNode`]).

pub mod fixture;
pub mod ts_node;

use serde::{Deserialize, Serialize};

/// Kind tag of a declaration or top-level statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,
    Class,
    VariableDeclaration,
    /// `export { a }`, `export { a } from './a'`, `export const x = ...`.
    ExportNamed,
    ExportDefault,
    /// `export * from './a'`.
    ExportAll,
    /// `export type { A } from './a'`.
    ExportTypeOnly,
    Other,
}

impl NodeKind {
    pub fn is_function_like(&self) -> bool {
        matches!(
            self,
            Self::FunctionDeclaration | Self::FunctionExpression | Self::ArrowFunction
        )
    }

    /// Human-readable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FunctionDeclaration => "function declaration",
            Self::FunctionExpression => "function expression",
            Self::ArrowFunction => "arrow function",
            Self::Class => "class",
            Self::VariableDeclaration => "variable declaration",
            Self::ExportNamed => "named export",
            Self::ExportDefault => "default export",
            Self::ExportAll => "export all",
            Self::ExportTypeOnly => "type-only export",
            Self::Other => "statement",
        }
    }
}

/// Shape of a single-expression function body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpressionKind {
    Literal,
    Identifier,
    ObjectLiteral,
    ArrayLiteral,
    Other,
}

impl ExpressionKind {
    /// Literal, bare identifier, object literal or array literal.
    pub fn is_simple(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Body of a function-like node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FunctionBody {
    Block,
    Expression(ExpressionKind),
}

/// What a class member is, as far as logic detection cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    Method,
    Field,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClassMember {
    pub kind: MemberKind,
    pub has_body: bool,
}

impl ClassMember {
    pub fn method() -> Self {
        Self {
            kind: MemberKind::Method,
            has_body: true,
        }
    }

    /// Abstract method or overload signature.
    pub fn signature() -> Self {
        Self {
            kind: MemberKind::Method,
            has_body: false,
        }
    }

    pub fn field() -> Self {
        Self {
            kind: MemberKind::Field,
            has_body: false,
        }
    }
}

/// 1-based source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub const START: Position = Position { line: 1, column: 1 };
}

/// One initialized declarator of a variable declaration: `name = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarator<N> {
    /// Start of the declarator (its name), not of the value.
    pub position: Position,
    pub value: N,
}

impl<N> Declarator<N> {
    pub fn new(position: Position, value: N) -> Self {
        Self { position, value }
    }
}

/// Read-only view of a syntax node.
pub trait SyntaxNode: Sized {
    fn kind(&self) -> NodeKind;

    /// Body of a function-like node; `None` for everything else and for bodiless signatures.
    fn function_body(&self) -> Option<FunctionBody>;

    /// Members of a class; empty for everything else.
    fn class_members(&self) -> Vec<ClassMember>;

    /// The declaration or value wrapped by an export statement.
    fn exported(&self) -> Option<Self>;

    /// Whether an export statement re-exports from another module (`... from './x'`).
    fn has_source(&self) -> bool;

    /// Initialized declarators of a variable declaration, in source order.
    fn declarators(&self) -> Vec<Declarator<Self>>;

    /// Initializer expressions of a variable declaration, one per initialized declarator.
    fn initializers(&self) -> Vec<Self> {
        self.declarators().into_iter().map(|d| d.value).collect()
    }

    fn position(&self) -> Position {
        Position::START
    }
}
