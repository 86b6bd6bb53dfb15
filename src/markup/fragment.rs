//! Markup fragments: split-marker handling and string escaping.

/// The line that marks where a layout's children are inserted. The marker
/// line's own indentation becomes the indentation of every child line.
pub const SPLIT_MARKER: &str = "// **closing_key**";

/// A fragment split at its marker line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Lines before the marker (every line when there is no marker).
    pub head: Vec<&'a str>,
    /// Lines after the marker.
    pub tail: Vec<&'a str>,
    /// Leading whitespace of the marker line.
    pub indent: &'a str,
    /// How many marker lines the fragment contains.
    pub markers: usize,
}

impl<'a> Fragment<'a> {
    /// Split `text` at its first marker line, counting all of them.
    pub fn split(text: &'a str) -> Self {
        let mut head = Vec::new();
        let mut tail = Vec::new();
        let mut indent = "";
        let mut markers = 0;

        for line in text.split('\n') {
            let trimmed = line.trim_start();
            if trimmed.trim_end() == SPLIT_MARKER {
                if markers == 0 {
                    indent = &line[..line.len() - trimmed.len()];
                }
                markers += 1;
                continue;
            }
            if markers == 0 {
                head.push(line);
            } else {
                tail.push(line);
            }
        }

        Self {
            head,
            tail,
            indent,
            markers,
        }
    }
}

/// Escape text for a double-quoted markup string literal.
pub fn escape_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

/// Prefix every non-empty line of `text` with `indent`.
pub fn indent_lines<'t>(text: &'t str, indent: &'t str) -> impl Iterator<Item = String> + 't {
    text.split('\n').map(move |line| {
        if line.is_empty() {
            String::new()
        } else {
            format!("{indent}{line}")
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_layout_fragment() {
        let f = Fragment::split("Row {\n    spacing: 6\n    // **closing_key**\n}");
        assert_eq!(f.head, vec!["Row {", "    spacing: 6"]);
        assert_eq!(f.tail, vec!["}"]);
        assert_eq!(f.indent, "    ");
        assert_eq!(f.markers, 1);
    }

    #[test]
    fn split_without_marker() {
        let f = Fragment::split("Label {\n}");
        assert_eq!(f.head, vec!["Label {", "}"]);
        assert!(f.tail.is_empty());
        assert_eq!(f.indent, "");
        assert_eq!(f.markers, 0);
    }

    #[test]
    fn marker_with_trailing_spaces_counts() {
        let f = Fragment::split("A {\n  // **closing_key**  \n}");
        assert_eq!(f.markers, 1);
        assert_eq!(f.indent, "  ");
    }

    #[test]
    fn counts_every_marker() {
        let f = Fragment::split("// **closing_key**\nX\n// **closing_key**");
        assert_eq!(f.markers, 2);
    }

    #[test]
    fn escape() {
        assert_eq!(escape_string(r#"say "hi"\now"#), r#"say \"hi\"\\now"#);
        assert_eq!(escape_string("a\nb"), "a\\nb");
        assert_eq!(escape_string("Olá"), "Olá");
    }

    #[test]
    fn indent_skips_empty_lines() {
        let lines: Vec<String> = indent_lines("A {\n\n}", "  ").collect();
        assert_eq!(lines, vec!["  A {", "", "  }"]);
    }
}
