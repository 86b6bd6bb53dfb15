//! Markup compiler: composition tree → host markup text.
//!
//! Each node's fragment is split at its marker line into head and tail. The
//! children are compiled recursively, in order, and every non-empty line of
//! their text is indented by the marker line's indentation. The output is
//! `head + children + tail`, joined by newlines. Compilation is pure.

use super::fragment::{indent_lines, Fragment};
use crate::compose::{Composition, NodeId};
use crate::elements::ElementKind;

/// Errors from compiling a composition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("fragment of {kind} `{name}` has {markers} split markers")]
    MalformedFragment {
        name: String,
        kind: ElementKind,
        markers: usize,
    },
    #[error("composition has no root")]
    EmptyTree,
}

/// Compile the whole composition, starting at its root.
pub fn compile(composition: &Composition) -> Result<String, CompileError> {
    let root = composition.root().ok_or(CompileError::EmptyTree)?;
    let markup = compile_node(composition, root)?;
    tracing::debug!(
        "compiled {} nodes into {} lines of markup",
        composition.len(),
        markup.lines().count()
    );
    Ok(markup)
}

/// Compile the subtree rooted at `id`.
pub fn compile_node(composition: &Composition, id: NodeId) -> Result<String, CompileError> {
    let data = composition.get(id).ok_or(CompileError::EmptyTree)?;
    let fragment = Fragment::split(&data.fragment);

    // Layouts need exactly one insertion point; elements may omit it.
    let well_formed = if data.is_layout() {
        fragment.markers == 1
    } else {
        fragment.markers <= 1
    };
    if !well_formed {
        return Err(CompileError::MalformedFragment {
            name: data.name.clone(),
            kind: data.kind,
            markers: fragment.markers,
        });
    }

    let mut lines: Vec<String> = fragment.head.iter().map(|l| (*l).to_owned()).collect();
    for &child in composition.children(id) {
        let text = compile_node(composition, child)?;
        lines.extend(indent_lines(&text, fragment.indent));
    }
    lines.extend(fragment.tail.iter().map(|l| (*l).to_owned()));

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::NodeData;
    use crate::elements::{Button, MainFrame, Row};
    use pretty_assertions::assert_eq;

    fn node(kind: ElementKind, name: &str, fragment: &str) -> NodeData {
        NodeData::new(kind, name, fragment)
    }

    #[test]
    fn empty_tree() {
        assert_eq!(compile(&Composition::new()), Err(CompileError::EmptyTree));
    }

    #[test]
    fn nested_indentation_follows_marker_lines() {
        let mut ui = Composition::new();
        let root = ui
            .set_root_node(node(ElementKind::Column, "root", "Root {\n    // **closing_key**\n}"))
            .unwrap();
        ui.add_node(root, node(ElementKind::Label, "a", "A {\n    objectName: \"a\"\n}"))
            .unwrap();
        let inner = ui
            .add_node(root, node(ElementKind::Row, "inner", "Inner {\n  // **closing_key**\n}"))
            .unwrap();
        ui.add_node(inner, node(ElementKind::Label, "b", "B {}")).unwrap();

        let expected = "\
Root {
    A {
        objectName: \"a\"
    }
    Inner {
      B {}
    }
}";
        assert_eq!(compile(&ui).unwrap(), expected);
    }

    #[test]
    fn children_keep_registration_order() {
        let mut ui = Composition::new();
        let root = ui
            .set_root_node(node(ElementKind::Row, "r", "[\n// **closing_key**\n]"))
            .unwrap();
        for name in ["one", "two", "three"] {
            ui.add_node(root, node(ElementKind::Label, name, name)).unwrap();
        }
        assert_eq!(compile(&ui).unwrap(), "[\none\ntwo\nthree\n]");
    }

    #[test]
    fn empty_child_lines_stay_empty() {
        let mut ui = Composition::new();
        let root = ui
            .set_root_node(node(ElementKind::Row, "r", "R {\n    // **closing_key**\n}"))
            .unwrap();
        ui.add_node(root, node(ElementKind::Label, "l", "L {\n\n}")).unwrap();
        assert_eq!(compile(&ui).unwrap(), "R {\n    L {\n\n    }\n}");
    }

    #[test]
    fn layout_without_marker_is_malformed() {
        let mut ui = Composition::new();
        let root = ui
            .set_root_node(node(ElementKind::Column, "root", "Root {\n    // **closing_key**\n}"))
            .unwrap();
        ui.add_node(root, node(ElementKind::Row, "bad", "Row {\n}")).unwrap();

        assert_eq!(
            compile(&ui),
            Err(CompileError::MalformedFragment {
                name: "bad".into(),
                kind: ElementKind::Row,
                markers: 0,
            })
        );
    }

    #[test]
    fn layout_with_two_markers_is_malformed() {
        let mut ui = Composition::new();
        ui.set_root_node(node(
            ElementKind::Row,
            "twice",
            "// **closing_key**\n// **closing_key**",
        ))
        .unwrap();
        assert!(matches!(
            compile(&ui),
            Err(CompileError::MalformedFragment { markers: 2, .. })
        ));
    }

    #[test]
    fn element_may_carry_one_marker() {
        let mut ui = Composition::new();
        let root = ui
            .set_root_node(node(ElementKind::Row, "r", "R {\n  // **closing_key**\n}"))
            .unwrap();
        ui.add_node(root, node(ElementKind::Button, "b", "B {\n  // **closing_key**\n}"))
            .unwrap();
        assert_eq!(compile(&ui).unwrap(), "R {\n  B {\n  }\n}");
    }

    #[test]
    fn row_of_buttons_nests_one_level() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Demo"));
        let row = ui.add(root, "row", Row::new()).unwrap();
        ui.add(row, "ok", Button::new("OK")).unwrap();
        ui.add(row, "cancel", Button::new("Cancel")).unwrap();

        let markup = compile(&ui).unwrap();
        let row_line = markup
            .lines()
            .find(|l| l.trim() == "objectName: \"row\"")
            .unwrap();
        let ok_line = markup
            .lines()
            .find(|l| l.trim() == "objectName: \"ok\"")
            .unwrap();
        let cancel_line = markup
            .lines()
            .find(|l| l.trim() == "objectName: \"cancel\"")
            .unwrap();

        let depth = |line: &str| line.len() - line.trim_start().len();
        assert_eq!(depth(ok_line), depth(row_line) + 4);
        assert_eq!(depth(cancel_line), depth(ok_line));

        let ok_at = markup.find("\"ok\"").unwrap();
        let cancel_at = markup.find("\"cancel\"").unwrap();
        assert!(ok_at < cancel_at);
    }

    #[test]
    fn deterministic() {
        let (mut ui, root) = Composition::with_root("window", MainFrame::new("Demo"));
        ui.add(root, "ok", Button::new("OK")).unwrap();
        assert_eq!(compile(&ui).unwrap(), compile(&ui).unwrap());
    }
}
