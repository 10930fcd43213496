//! Document - High-level document API

use crate::{DomTree, ElementData, NodeId};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
}

impl Document {
    /// Create an empty document (document node only)
    pub fn new(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
        }
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// Element data for a node
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    /// All elements under `scope` matching `predicate`, in document order
    pub fn find_all<F>(&self, scope: NodeId, mut predicate: F) -> Vec<NodeId>
    where
        F: FnMut(NodeId, &ElementData) -> bool,
    {
        self.tree
            .descendants(scope)
            .filter_map(|(id, node)| {
                let elem = node.as_element()?;
                predicate(id, elem).then_some(id)
            })
            .collect()
    }

    /// First element under `scope` matching `predicate`
    pub fn find<F>(&self, scope: NodeId, mut predicate: F) -> Option<NodeId>
    where
        F: FnMut(NodeId, &ElementData) -> bool,
    {
        self.tree.descendants(scope).find_map(|(id, node)| {
            let elem = node.as_element()?;
            predicate(id, elem).then_some(id)
        })
    }

    /// All elements with one of the given tag names, in document order
    pub fn elements_by_tag_name(&self, names: &[&str]) -> Vec<NodeId> {
        self.find_all(self.tree.root(), |_, elem| names.iter().any(|n| elem.is(n)))
    }

    /// Get element by ID
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.find(self.tree.root(), |_, elem| elem.id() == Some(id))
    }

    /// Text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.tree.text_content(id)
    }

    /// Get document title
    pub fn title(&self) -> String {
        self.find(self.tree.root(), |_, elem| elem.is("title"))
            .map(|id| self.tree.text_content(id).trim().to_string())
            .unwrap_or_default()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
