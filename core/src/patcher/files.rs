//! File-level patching: import statements.

use crate::parser::{ImportBinding, ImportNode, SourceDocument};
use crate::patcher::changes::{ChangeKind, InsertionChange};
use crate::patcher::common::{after_trailing_comment, detect_newline};
use tracing::debug;

/// A dependency that must be imported by the patched file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpecifier {
    /// Bound name. For named imports this may list several names separated by
    /// commas (`reducers, metaReducers`); for namespace imports it is the alias.
    pub imported_name: String,
    /// Module reference as written in the `from` clause.
    pub module_reference: String,
    /// `import name from '...'`
    pub is_default: bool,
    /// `import * as name from '...'`
    pub is_namespace: bool,
}

impl ImportSpecifier {
    /// `import { name } from 'module'`
    pub fn named(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            imported_name: name.into(),
            module_reference: module.into(),
            is_default: false,
            is_namespace: false,
        }
    }

    /// `import * as alias from 'module'`
    pub fn namespace(alias: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            is_namespace: true,
            ..Self::named(alias, module)
        }
    }

    /// `import name from 'module'`
    pub fn default_import(name: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            is_default: true,
            ..Self::named(name, module)
        }
    }

    fn names(&self) -> impl Iterator<Item = &str> {
        self.imported_name
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
    }
}

/// Computes the insertion that imports `spec`, or `None` if it is already present.
///
/// Named imports count as present when every listed name is bound (by exported
/// name or alias) by a value import from the same module; only missing names
/// are inserted. Namespace imports count as present when any namespace binding
/// from the module exists. The new statement goes right after the last import,
/// after a leading `'use strict'` directive, or at offset 0.
pub fn insert_import(doc: &SourceDocument, spec: &ImportSpecifier) -> Option<InsertionChange> {
    let tree = doc.tree();
    let from_module: Vec<&ImportNode> = tree
        .imports
        .iter()
        .filter(|i| !i.type_only && i.module_reference == spec.module_reference)
        .collect();
    let bindings = from_module.iter().flat_map(|i| i.bindings.iter());

    let clause = if spec.is_namespace {
        if bindings
            .clone()
            .any(|b| matches!(b, ImportBinding::Namespace { .. }))
        {
            return None;
        }
        format!("* as {}", spec.imported_name.trim())
    } else if spec.is_default {
        let name = spec.imported_name.trim();
        if bindings
            .clone()
            .any(|b| matches!(b, ImportBinding::Default { local } if local == name))
        {
            return None;
        }
        name.to_string()
    } else {
        let missing: Vec<&str> = spec
            .names()
            .filter(|name| {
                !bindings.clone().any(|b| match b {
                    ImportBinding::Named { imported, local } => imported == name || local == name,
                    ImportBinding::Default { local } => local == name,
                    ImportBinding::Namespace { .. } => false,
                })
            })
            .collect();
        if missing.is_empty() {
            return None;
        }
        format!("{{ {} }}", missing.join(", "))
    };

    let text = doc.text();
    let newline = detect_newline(text);
    let last = tree.imports.last();
    let quote = last.map_or('\'', |i| i.quote);
    let terminator = match last {
        Some(i) if !i.terminated => "",
        _ => ";",
    };
    let statement = format!(
        "import {clause} from {quote}{}{quote}{terminator}",
        spec.module_reference
    );

    let change = match (last, tree.directive_end) {
        (Some(import), _) => InsertionChange::new(
            after_trailing_comment(text, import.range.end),
            format!("{newline}{statement}"),
            ChangeKind::Import,
        ),
        (None, Some(end)) => InsertionChange::new(
            after_trailing_comment(text, end),
            format!("{newline}{statement}"),
            ChangeKind::Import,
        ),
        (None, None) => {
            InsertionChange::new(0, format!("{statement}{newline}"), ChangeKind::Import)
        }
    };

    debug!(
        path = doc.path(),
        module = %spec.module_reference,
        offset = change.offset,
        "Computed import insertion"
    );
    Some(change)
}
