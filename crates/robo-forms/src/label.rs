//! Label resolution
//!
//! A control's label is looked up once, when the field is built:
//! 1. `aria-label` on the control itself
//! 2. `<label for=ID>` nested in the control, then anywhere in the document
//! 3. an enclosing `<label>`
//! 4. otherwise the empty string

use robo_dom::{Document, ElementData, NodeId};

use crate::tag::normalize_text;

/// Resolve the human-readable label of a control
pub fn resolve_label(doc: &Document, node: NodeId) -> String {
    let Some(elem) = doc.element(node) else {
        return String::new();
    };

    if let Some(aria) = elem.attr("aria-label") {
        return normalize_text(aria);
    }

    if let Some(id) = elem.id().filter(|id| !id.is_empty()) {
        let label_for = |_: NodeId, e: &ElementData| e.is("label") && e.attr("for") == Some(id);
        let found = doc
            .find(node, label_for)
            .or_else(|| doc.find(doc.tree().root(), label_for));
        if let Some(label) = found {
            return normalize_text(&doc.text_content(label));
        }
    }

    doc.tree()
        .ancestors(node)
        .find(|(_, n)| n.as_element().is_some_and(|e| e.is("label")))
        .map(|(label, _)| normalize_text(&doc.text_content(label)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Document holding a single `<input>` with the given attributes
    fn input_with(attrs: &[(&str, &str)]) -> (Document, NodeId) {
        let mut doc = Document::default();
        let tree = doc.tree_mut();
        let input = tree.create_element("input");
        for (k, v) in attrs {
            tree.element_mut(input).unwrap().set_attr(k, *v);
        }
        tree.append_child(tree.root(), input);
        (doc, input)
    }

    #[test]
    fn test_aria_label_wins() {
        let (doc, input) = input_with(&[("aria-label", " Search  terms "), ("id", "q")]);
        assert_eq!(resolve_label(&doc, input), "Search terms");
    }

    #[test]
    fn test_label_for_anywhere() {
        let (mut doc, input) = input_with(&[("id", "user")]);
        let tree = doc.tree_mut();
        let label = tree.create_element("label");
        tree.element_mut(label).unwrap().set_attr("for", "user");
        let text = tree.create_text("Username");
        tree.append_child(label, text);
        tree.append_child(tree.root(), label);

        assert_eq!(resolve_label(&doc, input), "Username");
    }

    #[test]
    fn test_label_for_nested_in_control_first() {
        let mut doc = Document::default();
        let tree = doc.tree_mut();
        let label_with = |tree: &mut robo_dom::DomTree, text: &str| {
            let label = tree.create_element("label");
            tree.element_mut(label).unwrap().set_attr("for", "x");
            let text = tree.create_text(text);
            tree.append_child(label, text);
            label
        };
        // Comes first in document order, but is not inside the control
        let outer = label_with(tree, "Outer");
        tree.append_child(tree.root(), outer);
        let input = tree.create_element("input");
        tree.element_mut(input).unwrap().set_attr("id", "x");
        tree.append_child(tree.root(), input);
        let inner = label_with(tree, " Inner ");
        tree.append_child(input, inner);

        assert_eq!(resolve_label(&doc, input), "Inner");
    }

    #[test]
    fn test_enclosing_label() {
        let mut doc = Document::default();
        let tree = doc.tree_mut();
        let label = tree.create_element("label");
        let text = tree.create_text(" Remember me ");
        let input = tree.create_element("input");
        tree.append_child(tree.root(), label);
        tree.append_child(label, text);
        tree.append_child(label, input);

        assert_eq!(resolve_label(&doc, input), "Remember me");
    }

    #[test]
    fn test_no_label() {
        let (doc, input) = input_with(&[("id", "lonely")]);
        assert_eq!(resolve_label(&doc, input), "");
        assert_eq!(resolve_label(&doc, NodeId::NONE), "");
    }
}
