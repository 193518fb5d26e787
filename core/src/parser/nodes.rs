#![deny(missing_docs)]

//! # Structural Nodes
//!
//! A small, closed view over a TypeScript module: only the shapes the patcher
//! navigates (imports, classes with decorators, interfaces, variables, object
//! and array literals). Every node carries byte offsets into the original text.

/// Half-open byte range `[start, end)` into the original source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    /// Offset of the first byte.
    pub start: usize,
    /// Offset one past the last byte.
    pub end: usize,
}

impl TextRange {
    /// Creates a new range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the range covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the slice of `text` covered by this range.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or_default()
    }
}

/// A single binding introduced by an import declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import { imported as local } from '...'`
    Named {
        /// Exported name in the source module.
        imported: String,
        /// Local alias (equal to `imported` when not renamed).
        local: String,
    },
    /// `import local from '...'`
    Default {
        /// Local name.
        local: String,
    },
    /// `import * as local from '...'`
    Namespace {
        /// Local namespace alias.
        local: String,
    },
}

/// A top-level `import` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportNode {
    /// Full statement range, including the terminating `;` when present.
    pub range: TextRange,
    /// Module reference without quotes.
    pub module_reference: String,
    /// Quote character used around the module reference.
    pub quote: char,
    /// `import type { ... }`
    pub type_only: bool,
    /// Whether the statement ends with `;`.
    pub terminated: bool,
    /// Bindings in declaration order.
    pub bindings: Vec<ImportBinding>,
}

/// An array literal with the ranges of its elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayLiteral {
    /// Range from `[` to `]` inclusive.
    pub range: TextRange,
    /// Existing elements in order; holes are skipped.
    pub elements: Vec<TextRange>,
}

/// A property of an object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyNode {
    /// Static key text (`None` for computed keys and spreads).
    pub key: Option<String>,
    /// Range from the key to the end of the value.
    pub range: TextRange,
    /// The property value.
    pub value: ExprNode,
}

/// An object literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLiteral {
    /// Range from `{` to `}` inclusive.
    pub range: TextRange,
    /// Properties in order.
    pub properties: Vec<PropertyNode>,
}

impl ObjectLiteral {
    /// Finds a property by its static key.
    pub fn property(&self, key: &str) -> Option<&PropertyNode> {
        self.properties
            .iter()
            .find(|p| p.key.as_deref() == Some(key))
    }
}

/// The expression shapes the patcher distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode {
    /// `{ ... }`
    Object(ObjectLiteral),
    /// `[ ... ]`
    Array(ArrayLiteral),
    /// Anything else, kept only as a range.
    Other(TextRange),
}

impl ExprNode {
    /// Range covered by the expression.
    pub fn range(&self) -> TextRange {
        match self {
            ExprNode::Object(o) => o.range,
            ExprNode::Array(a) => a.range,
            ExprNode::Other(r) => *r,
        }
    }
}

/// A decorator applied to a class, e.g. `@NgModule({...})`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorNode {
    /// Callee name (`NgModule`; the property name for `core.NgModule`).
    pub name: String,
    /// Range from `@` to the end of the decorator expression.
    pub range: TextRange,
    /// Call arguments; `None` for a bare `@Name` that is not called.
    pub arguments: Option<Vec<ExprNode>>,
}

/// A top-level class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassNode {
    /// Class name (`None` for anonymous default exports).
    pub name: Option<String>,
    /// Range of the class declaration.
    pub range: TextRange,
    /// Decorators in source order.
    pub decorators: Vec<DecoratorNode>,
}

/// A top-level interface declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceNode {
    /// Interface name.
    pub name: String,
    /// Range from `{` to `}` inclusive.
    pub body: TextRange,
    /// Member signatures in order.
    pub members: Vec<TextRange>,
}

/// A top-level variable declarator (`const reducers = {...}`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableNode {
    /// Binding name.
    pub name: String,
    /// Initializer, if any.
    pub init: Option<ExprNode>,
}

/// Top-level items the patcher can navigate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopLevel {
    /// `class` / `export class` / `export default class`
    Class(ClassNode),
    /// `interface` / `export interface`
    Interface(InterfaceNode),
    /// `const` / `let` / `var` declarators
    Variable(VariableNode),
}

/// The structural representation of a parsed module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyntaxTree {
    /// End offset of a leading `'use strict'` directive.
    pub directive_end: Option<usize>,
    /// Top-level imports in source order.
    pub imports: Vec<ImportNode>,
    /// Other top-level items in source order.
    pub items: Vec<TopLevel>,
}

impl SyntaxTree {
    /// Iterates over top-level classes.
    pub fn classes(&self) -> impl Iterator<Item = &ClassNode> {
        self.items.iter().filter_map(|item| match item {
            TopLevel::Class(c) => Some(c),
            TopLevel::Interface(_) | TopLevel::Variable(_) => None,
        })
    }

    /// Iterates over top-level interfaces.
    pub fn interfaces(&self) -> impl Iterator<Item = &InterfaceNode> {
        self.items.iter().filter_map(|item| match item {
            TopLevel::Interface(i) => Some(i),
            TopLevel::Class(_) | TopLevel::Variable(_) => None,
        })
    }

    /// Finds a top-level variable by name.
    pub fn variable(&self, name: &str) -> Option<&VariableNode> {
        self.items.iter().find_map(|item| match item {
            TopLevel::Variable(v) if v.name == name => Some(v),
            TopLevel::Class(_) | TopLevel::Interface(_) | TopLevel::Variable(_) => None,
        })
    }
}
