#![deny(missing_docs)]

//! # Parser Module
//!
//! Handles parsing of TypeScript source code using the SWC parser.
//! Lowers imports, decorated classes, interfaces and top-level variables into a
//! closed set of node types with byte ranges into the original text.

pub mod document;
pub mod nodes;

pub use document::{parse, SourceDocument};
pub use nodes::{
    ArrayLiteral, ClassNode, DecoratorNode, ExprNode, ImportBinding, ImportNode, InterfaceNode,
    ObjectLiteral, PropertyNode, SyntaxTree, TextRange, TopLevel, VariableNode,
};
