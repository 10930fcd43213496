//! HTML5 Parser implementation
//!
//! Uses html5ever's RcDom and converts it to our arena DOM. Conversion
//! walks the RcDom with an explicit stack so deeply nested markup cannot
//! overflow the call stack, and allocates nodes in pre-order so `NodeId`
//! order matches document order.

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData as RcNodeData, RcDom};
use robo_dom::{Document, DomTree, NodeId};

/// HTML5 parser
#[derive(Debug, Clone, Copy)]
pub struct HtmlParser;

impl HtmlParser {
    /// Create a new HTML parser
    pub fn new() -> Self {
        Self
    }

    /// Parse HTML string into a Document
    pub fn parse(&self, html: &str) -> Document {
        self.parse_with_url(html, "about:blank")
    }

    /// Parse raw response bytes, replacing invalid UTF-8
    pub fn parse_bytes(&self, bytes: &[u8], url: &str) -> Document {
        self.parse_with_url(&String::from_utf8_lossy(bytes), url)
    }

    /// Parse HTML with a base URL
    pub fn parse_with_url(&self, html: &str, url: &str) -> Document {
        tracing::debug!("Parsing HTML document: {}", url);

        // html5ever recovers from every error, so this cannot fail
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let mut document = Document::new(url);
        convert(&dom.document, document.tree_mut());

        tracing::debug!("Parsed {} nodes", document.tree().len());
        document
    }
}

impl Default for HtmlParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an RcDom tree into our DOM format
fn convert(document: &Handle, tree: &mut DomTree) {
    let mut stack: Vec<(Handle, NodeId)> = document
        .children
        .borrow()
        .iter()
        .rev()
        .map(|child| (child.clone(), tree.root()))
        .collect();

    while let Some((handle, parent)) = stack.pop() {
        let Some(id) = convert_node(&handle, tree) else {
            continue;
        };
        tree.append_child(parent, id);

        for child in handle.children.borrow().iter().rev() {
            stack.push((child.clone(), id));
        }
    }
}

/// Allocate one node; returns `None` for node kinds we drop
fn convert_node(handle: &Handle, tree: &mut DomTree) -> Option<NodeId> {
    match &handle.data {
        RcNodeData::Document => None,
        RcNodeData::Doctype { name, public_id, system_id } => {
            Some(tree.create_doctype(name, public_id, system_id))
        }
        RcNodeData::Text { contents } => Some(tree.create_text(&contents.borrow())),
        RcNodeData::Comment { contents } => Some(tree.create_comment(contents)),
        RcNodeData::Element { name, attrs, .. } => {
            let id = tree.create_element(&name.local);
            if let Some(elem) = tree.element_mut(id) {
                for attr in attrs.borrow().iter() {
                    // html5ever already lowercases HTML attribute names;
                    // set_attr lowercases again for foreign content
                    elem.set_attr(&attr.name.local, attr.value.to_string());
                }
            }
            Some(id)
        }
        RcNodeData::ProcessingInstruction { .. } => None,
    }
}
