//! Object and interface augmentation: new properties and member signatures.

use crate::parser::{InterfaceNode, ObjectLiteral, SourceDocument};
use crate::patcher::changes::{ChangeKind, InsertionChange};
use crate::patcher::common::{detect_indent, detect_newline, skip_separator, spans_lines};

const DEFAULT_INDENT: &str = "  ";

/// Computes the insertion adding `key: value` as the last property of `object`.
///
/// Follows the object's layout: single-line objects get `, key: value`,
/// multi-line objects get a new line at the indentation of the last property.
/// A trailing comma style is preserved.
pub fn append_property(
    doc: &SourceDocument,
    object: &ObjectLiteral,
    key: &str,
    value: &str,
) -> InsertionChange {
    let text = doc.text();
    let newline = detect_newline(text);
    let property = format!("{key}: {value}");

    let Some(last) = object.properties.last() else {
        let open = object.range.start + 1;
        let close = object.range.end - 1;
        if spans_lines(text, open, close) {
            return InsertionChange::new(
                close,
                format!("{DEFAULT_INDENT}{property}{newline}"),
                ChangeKind::NewProperty,
            );
        }
        return InsertionChange::new(open, format!(" {property} "), ChangeKind::NewProperty);
    };

    let multiline = spans_lines(text, object.range.start, last.range.start);
    let indent = detect_indent(text, last.range.start).unwrap_or(DEFAULT_INDENT);

    let (offset, insert) = match (skip_separator(text, last.range.end, ','), multiline) {
        (Some(after_comma), true) => (after_comma, format!("{newline}{indent}{property},")),
        (Some(after_comma), false) => (after_comma, format!(" {property},")),
        (None, true) => (last.range.end, format!(",{newline}{indent}{property}")),
        (None, false) => (last.range.end, format!(", {property}")),
    };
    InsertionChange::new(offset, insert, ChangeKind::NewProperty)
}

/// Computes the insertion adding `member` (e.g. `users: fromUsers.State;`) as
/// the last member of `iface`.
pub fn append_interface_member(
    doc: &SourceDocument,
    iface: &InterfaceNode,
    member: &str,
) -> InsertionChange {
    let text = doc.text();
    let newline = detect_newline(text);

    match iface.members.last() {
        None => InsertionChange::new(
            iface.body.end - 1,
            format!("{DEFAULT_INDENT}{member}{newline}"),
            ChangeKind::InterfaceMember,
        ),
        Some(last) => {
            let indent = detect_indent(text, last.start).unwrap_or(DEFAULT_INDENT);
            let source = last.slice(text);
            let offset = [';', ',']
                .into_iter()
                .filter(|sep| !source.ends_with(*sep))
                .find_map(|sep| skip_separator(text, last.end, sep))
                .unwrap_or(last.end);
            InsertionChange::new(
                offset,
                format!("{newline}{indent}{member}"),
                ChangeKind::InterfaceMember,
            )
        }
    }
}
