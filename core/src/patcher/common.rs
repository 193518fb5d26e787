//! Layout detection shared by the patchers.

/// Returns the newline convention of the file (`\r\n` if it appears anywhere).
pub(crate) fn detect_newline(text: &str) -> &'static str {
    if text.contains("\r\n") {
        "\r\n"
    } else {
        "\n"
    }
}

/// Detects the indentation of the line that starts at `offset`'s node.
///
/// Returns `None` when other code precedes the node on its line.
pub(crate) fn detect_indent(text: &str, offset: usize) -> Option<&str> {
    let line_start = text[..offset].rfind('\n').map_or(0, |pos| pos + 1);
    let prefix = &text[line_start..offset];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        Some(prefix)
    } else {
        None
    }
}

/// If the next non-whitespace character after `offset` is `sep`, returns the
/// offset just past it.
pub(crate) fn skip_separator(text: &str, offset: usize, sep: char) -> Option<usize> {
    let rest = &text[offset..];
    let trimmed = rest.trim_start();
    if trimmed.starts_with(sep) {
        Some(offset + (rest.len() - trimmed.len()) + sep.len_utf8())
    } else {
        None
    }
}

/// Moves `offset` to the end of its line when only a comment follows it
/// there (`// ...` or a closed `/* ... */`). The line break itself is kept after.
pub(crate) fn after_trailing_comment(text: &str, offset: usize) -> usize {
    let rest = &text[offset..];
    let line = rest[..rest.find('\n').unwrap_or(rest.len())].trim_end_matches('\r');
    let trimmed = line.trim();
    let comment_only = trimmed.starts_with("//")
        || trimmed
            .strip_prefix("/*")
            .is_some_and(|body| body.find("*/").is_some_and(|end| end + 2 == body.len()));
    if comment_only {
        offset + line.len()
    } else {
        offset
    }
}

/// Whether a line break occurs in `text[start..end]`.
pub(crate) fn spans_lines(text: &str, start: usize, end: usize) -> bool {
    text.get(start..end).is_some_and(|s| s.contains('\n'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_newline() {
        assert_eq!(detect_newline("a\r\nb"), "\r\n");
        assert_eq!(detect_newline("a\nb"), "\n");
        assert_eq!(detect_newline("ab"), "\n");
    }

    #[test]
    fn test_detect_indent() {
        let text = "{\n    foo: 1,\n  bar: 2 }";
        assert_eq!(detect_indent(text, 6), Some("    "));
        let bar = text.find("bar").unwrap();
        assert_eq!(detect_indent(text, bar), Some("  "));
        assert_eq!(detect_indent("{ a: 1 }", 2), None);
    }

    #[test]
    fn test_skip_separator() {
        assert_eq!(skip_separator("A,\n]", 1, ','), Some(2));
        assert_eq!(skip_separator("A \n ,]", 1, ','), Some(5));
        assert_eq!(skip_separator("A\n]", 1, ','), None);
    }

    #[test]
    fn test_spans_lines() {
        assert!(spans_lines("{\n a }", 0, 4));
        assert!(!spans_lines("{ a }", 0, 4));
    }

    #[test]
    fn test_after_trailing_comment() {
        let text = "import a from 'a'; // keep\r\nnext";
        assert_eq!(after_trailing_comment(text, 18), 26);
        assert_eq!(after_trailing_comment("a; /* x */\n", 2), 10);
        assert_eq!(after_trailing_comment("a; /* x */ b;\n", 2), 2);
        assert_eq!(after_trailing_comment("a;\n// next line\n", 2), 2);
        assert_eq!(after_trailing_comment("a;", 2), 2);
    }
}
