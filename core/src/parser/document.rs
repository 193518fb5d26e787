#![deny(missing_docs)]

//! # Source Document
//!
//! Parses TypeScript with SWC and lowers the parts of the AST the patcher needs
//! into the closed node set from [`crate::parser::nodes`].

use crate::error::{AppError, AppResult};
use crate::parser::nodes::{
    ArrayLiteral, ClassNode, DecoratorNode, ExprNode, ImportBinding, ImportNode, InterfaceNode,
    ObjectLiteral, PropertyNode, SyntaxTree, TextRange, TopLevel, VariableNode,
};
use std::path::PathBuf;
use swc_common::sync::Lrc;
use swc_common::{FileName, FilePathMapping, SourceMap, Span, Spanned};
use swc_ecma_ast::{
    Callee, Class, Decl, DefaultDecl, EsVersion, Expr, ImportDecl, ImportSpecifier, Lit,
    MemberProp, ModuleDecl, ModuleExportName, ModuleItem, Pat, Prop, PropName, PropOrSpread, Stmt,
};
use swc_ecma_parser::{lexer::Lexer, Parser, StringInput, Syntax, TsSyntax};
use tracing::debug;

/// An immutable parsed file: path, the exact text it was parsed from, and its
/// structural tree. All ranges in the tree index into `text`.
#[derive(Debug, Clone)]
pub struct SourceDocument {
    path: String,
    text: String,
    tree: SyntaxTree,
}

impl SourceDocument {
    /// Path the document was read from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The original text snapshot.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The structural tree.
    pub fn tree(&self) -> &SyntaxTree {
        &self.tree
    }

    /// Text covered by `range`.
    pub fn slice(&self, range: TextRange) -> &str {
        range.slice(&self.text)
    }
}

/// Parses `text` as a TypeScript module.
///
/// # Errors
///
/// Returns `AppError::Parse` (with line/column) if SWC reports any error,
/// including recovered ones: only well-formed files are patched.
pub fn parse(path: &str, text: &str) -> AppResult<SourceDocument> {
    let cm = Lrc::new(SourceMap::new(FilePathMapping::empty()));
    let file_name = Lrc::new(FileName::Real(PathBuf::from(path)));
    let source_file = cm.new_source_file(file_name, text.to_string());

    let tsx = path.ends_with(".tsx");
    let lexer = Lexer::new(
        Syntax::Typescript(TsSyntax {
            tsx,
            decorators: true,
            ..Default::default()
        }),
        EsVersion::latest(),
        StringInput::from(&*source_file),
        None,
    );
    let mut parser = Parser::new_from(lexer);

    let parse_error = |e: swc_ecma_parser::error::Error| {
        let loc = cm.lookup_char_pos(e.span().lo);
        AppError::Parse {
            path: path.to_string(),
            message: format!("{}:{} {}", loc.line, loc.col.0 + 1, e.kind().msg()),
        }
    };

    let module = parser.parse_module().map_err(&parse_error)?;
    if let Some(e) = parser.take_errors().into_iter().next() {
        return Err(parse_error(e));
    }

    let lowering = Lowering {
        text,
        base: source_file.start_pos.0,
    };
    let tree = lowering.module(&module.body);

    debug!(
        path,
        imports = tree.imports.len(),
        items = tree.items.len(),
        "Parsed source document"
    );

    Ok(SourceDocument {
        path: path.to_string(),
        text: text.to_string(),
        tree,
    })
}

/// Converts SWC nodes into `nodes` types, rebasing spans onto `text`.
struct Lowering<'a> {
    text: &'a str,
    base: u32,
}

impl Lowering<'_> {
    fn range(&self, span: Span) -> TextRange {
        TextRange::new(
            span.lo.0.saturating_sub(self.base) as usize,
            span.hi.0.saturating_sub(self.base) as usize,
        )
    }

    fn source(&self, span: Span) -> &str {
        self.range(span).slice(self.text)
    }

    fn module(&self, body: &[ModuleItem]) -> SyntaxTree {
        let mut tree = SyntaxTree::default();

        for (index, item) in body.iter().enumerate() {
            match item {
                ModuleItem::ModuleDecl(ModuleDecl::Import(import)) => {
                    tree.imports.push(self.import(import));
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDecl(export)) => {
                    self.decl(&export.decl, &mut tree.items);
                }
                ModuleItem::ModuleDecl(ModuleDecl::ExportDefaultDecl(export)) => {
                    if let DefaultDecl::Class(class_expr) = &export.decl {
                        let name = class_expr.ident.as_ref().map(|i| i.sym.to_string());
                        tree.items.push(TopLevel::Class(self.class(name, &class_expr.class)));
                    }
                }
                ModuleItem::Stmt(Stmt::Decl(decl)) => self.decl(decl, &mut tree.items),
                ModuleItem::Stmt(Stmt::Expr(stmt)) if index == 0 => {
                    if let Expr::Lit(Lit::Str(s)) = &*stmt.expr {
                        let raw = self.source(s.span);
                        if unquote(raw) == "use strict" {
                            let (range, _) = self.terminated(self.range(stmt.span));
                            tree.directive_end = Some(range.end);
                        }
                    }
                }
                _ => {}
            }
        }

        tree
    }

    /// Extends a statement range over its `;` when the span stops short of it.
    fn terminated(&self, mut range: TextRange) -> (TextRange, bool) {
        if self.text[..range.end].ends_with(';') {
            return (range, true);
        }
        let rest = &self.text[range.end..];
        let gap = rest.len() - rest.trim_start_matches([' ', '\t']).len();
        if rest[gap..].starts_with(';') {
            range.end += gap + 1;
            return (range, true);
        }
        (range, false)
    }

    fn import(&self, import: &ImportDecl) -> ImportNode {
        let (range, terminated) = self.terminated(self.range(import.span));

        let raw_src = self.source(import.src.span);
        let quote = raw_src.chars().next().unwrap_or('\'');

        let bindings = import
            .specifiers
            .iter()
            .map(|spec| match spec {
                ImportSpecifier::Named(named) => {
                    let local = named.local.sym.to_string();
                    let imported = match &named.imported {
                        Some(ModuleExportName::Ident(ident)) => ident.sym.to_string(),
                        Some(other) => unquote(self.source(other.span())).to_string(),
                        None => local.clone(),
                    };
                    ImportBinding::Named { imported, local }
                }
                ImportSpecifier::Default(default) => ImportBinding::Default {
                    local: default.local.sym.to_string(),
                },
                ImportSpecifier::Namespace(ns) => ImportBinding::Namespace {
                    local: ns.local.sym.to_string(),
                },
            })
            .collect();

        ImportNode {
            range,
            module_reference: unquote(raw_src).to_string(),
            quote,
            type_only: import.type_only,
            terminated,
            bindings,
        }
    }

    fn decl(&self, decl: &Decl, items: &mut Vec<TopLevel>) {
        match decl {
            Decl::Class(class_decl) => {
                let name = Some(class_decl.ident.sym.to_string());
                items.push(TopLevel::Class(self.class(name, &class_decl.class)));
            }
            Decl::TsInterface(iface) => {
                items.push(TopLevel::Interface(InterfaceNode {
                    name: iface.id.sym.to_string(),
                    body: self.range(iface.body.span),
                    members: iface
                        .body
                        .body
                        .iter()
                        .map(|m| self.range(m.span()))
                        .collect(),
                }));
            }
            Decl::Var(var) => {
                for declarator in &var.decls {
                    if let Pat::Ident(binding) = &declarator.name {
                        items.push(TopLevel::Variable(VariableNode {
                            name: binding.id.sym.to_string(),
                            init: declarator.init.as_deref().map(|e| self.expr(e)),
                        }));
                    }
                }
            }
            _ => {}
        }
    }

    fn class(&self, name: Option<String>, class: &Class) -> ClassNode {
        let decorators = class
            .decorators
            .iter()
            .filter_map(|decorator| {
                let (callee, arguments) = match &*decorator.expr {
                    Expr::Call(call) => match &call.callee {
                        Callee::Expr(callee) => (
                            &**callee,
                            Some(call.args.iter().map(|a| self.expr(&a.expr)).collect()),
                        ),
                        _ => return None,
                    },
                    other => (other, None),
                };
                let name = match callee {
                    Expr::Ident(ident) => ident.sym.to_string(),
                    Expr::Member(member) => match &member.prop {
                        MemberProp::Ident(prop) => prop.sym.to_string(),
                        _ => return None,
                    },
                    _ => return None,
                };
                Some(DecoratorNode {
                    name,
                    range: self.range(decorator.span),
                    arguments,
                })
            })
            .collect();

        ClassNode {
            name,
            range: self.range(class.span),
            decorators,
        }
    }

    fn expr(&self, expr: &Expr) -> ExprNode {
        match expr {
            Expr::Object(object) => {
                let properties = object
                    .props
                    .iter()
                    .map(|prop| match prop {
                        PropOrSpread::Spread(spread) => PropertyNode {
                            key: None,
                            range: TextRange::new(
                                self.range(spread.dot3_token).start,
                                self.range(spread.expr.span()).end,
                            ),
                            value: self.expr(&spread.expr),
                        },
                        PropOrSpread::Prop(prop) => self.property(prop),
                    })
                    .collect();
                ExprNode::Object(ObjectLiteral {
                    range: self.range(object.span),
                    properties,
                })
            }
            Expr::Array(array) => {
                let elements = array
                    .elems
                    .iter()
                    .flatten()
                    .map(|elem| {
                        let expr_range = self.range(elem.expr.span());
                        let start = elem
                            .spread
                            .map_or(expr_range.start, |dots| self.range(dots).start);
                        TextRange::new(start, expr_range.end)
                    })
                    .collect();
                ExprNode::Array(ArrayLiteral {
                    range: self.range(array.span),
                    elements,
                })
            }
            other => ExprNode::Other(self.range(other.span())),
        }
    }

    fn property(&self, prop: &Prop) -> PropertyNode {
        match prop {
            Prop::KeyValue(kv) => {
                let key_range = self.range(kv.key.span());
                let value = self.expr(&kv.value);
                PropertyNode {
                    key: self.prop_name(&kv.key),
                    range: TextRange::new(key_range.start, value.range().end),
                    value,
                }
            }
            Prop::Shorthand(ident) => {
                let range = self.range(ident.span);
                PropertyNode {
                    key: Some(ident.sym.to_string()),
                    range,
                    value: ExprNode::Other(range),
                }
            }
            other => {
                let range = self.range(other.span());
                PropertyNode {
                    key: None,
                    range,
                    value: ExprNode::Other(range),
                }
            }
        }
    }

    fn prop_name(&self, name: &PropName) -> Option<String> {
        match name {
            PropName::Ident(ident) => Some(ident.sym.to_string()),
            PropName::Str(s) => Some(unquote(self.source(s.span)).to_string()),
            PropName::Num(n) => Some(self.source(n.span).to_string()),
            _ => None,
        }
    }
}

/// Strips one pair of matching quotes from a string literal's raw text.
fn unquote(raw: &str) -> &str {
    let bytes = raw.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && matches!(first, b'\'' | b'"' | b'`') {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    const MODULE: &str = r#"import { NgModule } from '@angular/core';
import { BrowserModule } from "@angular/platform-browser";
import * as fromAuth from './auth/reducers';

@NgModule({
  declarations: [AppComponent],
  imports: [BrowserModule, ...SHARED],
  providers: [],
})
export class AppModule {}
"#;

    #[test]
    fn test_parse_imports() {
        let doc = parse("app.module.ts", MODULE).unwrap();
        let imports = &doc.tree().imports;
        assert_eq!(imports.len(), 3);

        assert_eq!(imports[0].module_reference, "@angular/core");
        assert_eq!(imports[0].quote, '\'');
        assert!(imports[0].terminated);
        assert_eq!(
            doc.slice(imports[0].range),
            "import { NgModule } from '@angular/core';"
        );

        assert_eq!(imports[1].quote, '"');
        assert_eq!(
            imports[2].bindings,
            vec![ImportBinding::Namespace {
                local: "fromAuth".into()
            }]
        );
    }

    #[test]
    fn test_bare_decorator_has_no_arguments() {
        let doc = parse("a.ts", "@Injectable\nexport class A {}\n").unwrap();
        let class = doc.tree().classes().next().unwrap();
        assert_eq!(class.decorators[0].name, "Injectable");
        assert_eq!(class.decorators[0].arguments, None);
    }

    #[test]
    fn test_parse_decorated_class() {
        let doc = parse("app.module.ts", MODULE).unwrap();
        let class = doc.tree().classes().next().unwrap();
        assert_eq!(class.name.as_deref(), Some("AppModule"));
        assert_eq!(class.decorators.len(), 1);

        let decorator = &class.decorators[0];
        assert_eq!(decorator.name, "NgModule");
        let ExprNode::Object(config) = &decorator.arguments.as_ref().unwrap()[0] else {
            panic!("Expected object literal argument");
        };
        assert_eq!(config.properties.len(), 3);

        let imports = config.property("imports").unwrap();
        let ExprNode::Array(array) = &imports.value else {
            panic!("Expected array literal");
        };
        assert_eq!(doc.slice(array.range), "[BrowserModule, ...SHARED]");
        let elements: Vec<&str> = array.elements.iter().map(|r| doc.slice(*r)).collect();
        assert_eq!(elements, vec!["BrowserModule", "...SHARED"]);

        let ExprNode::Array(providers) = &config.property("providers").unwrap().value else {
            panic!("Expected array literal");
        };
        assert!(providers.elements.is_empty());
    }

    #[test]
    fn test_parse_interface_and_variable() {
        let code = r#"export interface State {
  auth: fromAuth.State;
}

export const reducers: ActionReducerMap<State> = {
  auth: fromAuth.reducer,
};
"#;
        let doc = parse("index.ts", code).unwrap();
        let iface = doc.tree().interfaces().next().unwrap();
        assert_eq!(iface.name, "State");
        assert_eq!(iface.members.len(), 1);
        assert!(doc.slice(iface.members[0]).starts_with("auth: fromAuth.State"));

        let reducers = doc.tree().variable("reducers").unwrap();
        let Some(ExprNode::Object(object)) = &reducers.init else {
            panic!("Expected object initializer");
        };
        assert_eq!(object.properties[0].key.as_deref(), Some("auth"));
        assert_eq!(doc.slice(object.properties[0].range), "auth: fromAuth.reducer");
    }

    #[test]
    fn test_use_strict_directive() {
        let doc = parse("a.ts", "'use strict';\n\nexport const a = 1;\n").unwrap();
        assert_eq!(doc.tree().directive_end, Some("'use strict';".len()));
    }

    #[test]
    fn test_parse_failure_reports_path() {
        let err = parse("broken.ts", "@NgModule({ imports: [ })\nexport class X {}").unwrap_err();
        match err {
            AppError::Parse { path, .. } => assert_eq!(path, "broken.ts"),
            other => panic!("Expected parse error, got {other}"),
        }
    }

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("'a'"), "a");
        assert_eq!(unquote("\"b\""), "b");
        assert_eq!(unquote("c"), "c");
    }
}
