//! Insertion changes and the single-pass applier.

use crate::error::{AppError, AppResult};
use crate::parser::SourceDocument;
use std::fmt::Display;

/// What an insertion adds to the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// A new import statement.
    Import,
    /// A new element appended to an existing array literal.
    ArrayElement,
    /// A new property added to an object literal.
    NewProperty,
    /// A new member signature added to an interface.
    InterfaceMember,
}

/// A pure insertion of `text` at `offset` into the original text of a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InsertionChange {
    /// Byte offset into the original text.
    pub offset: usize,
    /// Text to insert.
    pub text: String,
    /// Category of the insertion.
    pub kind: ChangeKind,
}

impl InsertionChange {
    /// Creates a new insertion.
    pub fn new(offset: usize, text: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            offset,
            text: text.into(),
            kind,
        }
    }
}

impl Display for InsertionChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} @{}: {:?}", self.kind, self.offset, self.text)
    }
}

/// Ordered insertions computed against one document snapshot.
///
/// Identical import insertions are recorded once, so two registrations that
/// both need `StoreModule` produce a single import statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchSet {
    changes: Vec<InsertionChange>,
}

impl PatchSet {
    /// Creates an empty patch set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a change, dropping an import that is already queued.
    pub fn push(&mut self, change: InsertionChange) {
        if change.kind == ChangeKind::Import && self.changes.contains(&change) {
            return;
        }
        self.changes.push(change);
    }

    /// Appends a change if one was computed.
    pub fn push_opt(&mut self, change: Option<InsertionChange>) {
        if let Some(change) = change {
            self.push(change);
        }
    }

    /// Appends every change of `other`, keeping its order.
    pub fn extend(&mut self, other: PatchSet) {
        for change in other.changes {
            self.push(change);
        }
    }

    /// Whether there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of queued changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Queued changes in caller order.
    pub fn changes(&self) -> &[InsertionChange] {
        &self.changes
    }

    /// Applies the set to `doc`. See [`apply_changes`].
    pub fn apply(&self, doc: &SourceDocument) -> AppResult<String> {
        apply_changes(doc, &self.changes)
    }
}

/// Applies insertions to the original text of `doc` in a single pass.
///
/// Changes are stably sorted by offset, so insertions at the same offset keep
/// the caller's order. Offsets always refer to the unmodified original, so no
/// adjustment happens between insertions.
///
/// # Errors
///
/// Fails if an offset is past the end of the text or not on a char boundary.
pub fn apply_changes(doc: &SourceDocument, changes: &[InsertionChange]) -> AppResult<String> {
    let original = doc.text();

    let mut ordered: Vec<&InsertionChange> = changes.iter().collect();
    ordered.sort_by_key(|c| c.offset);

    let extra: usize = ordered.iter().map(|c| c.text.len()).sum();
    let mut output = String::with_capacity(original.len() + extra);
    let mut cursor = 0;

    for change in ordered {
        if !original.is_char_boundary(change.offset) {
            return Err(AppError::General(format!(
                "Invalid insertion offset {} in {} (length {})",
                change.offset,
                doc.path(),
                original.len()
            )));
        }
        output.push_str(&original[cursor..change.offset]);
        output.push_str(&change.text);
        cursor = change.offset;
    }
    output.push_str(&original[cursor..]);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> SourceDocument {
        parse("test.ts", text).unwrap()
    }

    #[test]
    fn test_apply_in_offset_order() {
        let d = doc("const a = 1;\nconst b = 2;\n");
        let changes = vec![
            InsertionChange::new(13, "// b\n", ChangeKind::NewProperty),
            InsertionChange::new(0, "// a\n", ChangeKind::Import),
        ];
        let out = apply_changes(&d, &changes).unwrap();
        assert_eq!(out, "// a\nconst a = 1;\n// b\nconst b = 2;\n");
    }

    #[test]
    fn test_equal_offsets_keep_caller_order() {
        let d = doc("let x = 1;\n");
        let changes = vec![
            InsertionChange::new(0, "import { A } from 'a';\n", ChangeKind::Import),
            InsertionChange::new(0, "import { B } from 'b';\n", ChangeKind::Import),
        ];
        let out = apply_changes(&d, &changes).unwrap();
        assert!(out.starts_with("import { A } from 'a';\nimport { B } from 'b';\n"));
    }

    #[test]
    fn test_insertion_at_end() {
        let d = doc("let x = 1;");
        let changes = vec![InsertionChange::new(10, "\n", ChangeKind::NewProperty)];
        assert_eq!(apply_changes(&d, &changes).unwrap(), "let x = 1;\n");
    }

    #[test]
    fn test_invalid_offset_rejected() {
        let d = doc("let x = 1;");
        let changes = vec![InsertionChange::new(99, "!", ChangeKind::NewProperty)];
        assert!(apply_changes(&d, &changes).is_err());
    }

    #[test]
    fn test_patch_set_dedups_imports_only() {
        let mut set = PatchSet::new();
        let import = InsertionChange::new(0, "import { A } from 'a';\n", ChangeKind::Import);
        set.push(import.clone());
        set.push(import);
        set.push(InsertionChange::new(3, ", A", ChangeKind::ArrayElement));
        set.push(InsertionChange::new(3, ", A", ChangeKind::ArrayElement));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_empty_patch_set_is_identity() {
        let d = doc("export class A {}\n");
        assert_eq!(PatchSet::new().apply(&d).unwrap(), d.text());
    }
}
