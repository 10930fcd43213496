//! Link lookup
//!
//! Links are `<a>` and `<button>` elements, matched by their text and
//! attributes.

use regex::Regex;
use robo_dom::{Document, NodeId};

/// How a string is matched
#[derive(Debug, Clone)]
pub enum Pattern {
    /// Whole value, case-sensitive
    Exact(String),
    /// One whitespace-separated token (how `class` is matched)
    Token(String),
    /// Case-insensitive substring
    Contains(String),
    Regex(Regex),
}

impl Pattern {
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Self::Exact(s) => value == s,
            Self::Token(s) => value.split_whitespace().any(|t| t == s),
            Self::Contains(s) => value.to_lowercase().contains(&s.to_lowercase()),
            Self::Regex(re) => re.is_match(value),
        }
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Self::Exact(s.to_string())
    }
}

impl From<Regex> for Pattern {
    fn from(re: Regex) -> Self {
        Self::Regex(re)
    }
}

/// Criteria for [`find_links`]; an empty query matches every link
#[derive(Debug, Clone, Default)]
pub struct LinkQuery {
    pub text: Option<Pattern>,
    pub attrs: Vec<(String, Pattern)>,
}

impl LinkQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Link text contains `text`, ignoring case
    pub fn text(mut self, text: &str) -> Self {
        self.text = Some(Pattern::Contains(text.to_string()));
        self
    }

    pub fn text_pattern(mut self, pattern: impl Into<Pattern>) -> Self {
        self.text = Some(pattern.into());
        self
    }

    /// Attribute `name` is present and matches `pattern`
    pub fn attr(mut self, name: &str, pattern: impl Into<Pattern>) -> Self {
        self.attrs.push((name.to_ascii_lowercase(), pattern.into()));
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.attr("class", Pattern::Token(class.to_string()))
    }

    pub fn matches(&self, link: &Link) -> bool {
        if let Some(text) = &self.text {
            if !text.matches(&link.text) {
                return false;
            }
        }
        self.attrs
            .iter()
            .all(|(name, pattern)| link.attr(name).is_some_and(|v| pattern.matches(v)))
    }
}

impl From<&str> for LinkQuery {
    fn from(text: &str) -> Self {
        Self::new().text(text)
    }
}

impl From<Regex> for LinkQuery {
    fn from(re: Regex) -> Self {
        Self::new().text_pattern(re)
    }
}

/// A link found on a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub node: NodeId,
    /// `a` or `button`
    pub tag: String,
    pub href: Option<String>,
    /// Whitespace-normalized text content
    pub text: String,
    pub attrs: Vec<(String, String)>,
}

impl Link {
    fn from_element(doc: &Document, node: NodeId) -> Option<Self> {
        let elem = doc.element(node)?;
        let text = doc
            .text_content(node)
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        Some(Self {
            node,
            tag: elem.name.clone(),
            href: elem.attr("href").map(str::to_string),
            text,
            attrs: elem
                .attrs()
                .map(|a| (a.name.clone(), a.value.clone()))
                .collect(),
        })
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Every link in `doc` matching `query`, in document order
pub fn find_links(doc: &Document, query: &LinkQuery) -> Vec<Link> {
    doc.elements_by_tag_name(&["a", "button"])
        .into_iter()
        .filter_map(|node| Link::from_element(doc, node))
        .filter(|link| query.matches(link))
        .collect()
}
