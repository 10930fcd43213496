//! robo HTML Parser
//!
//! HTML5 parser built on html5ever. Produces a [`robo_dom::Document`].

mod parser;

pub use parser::HtmlParser;
pub use robo_dom::{Document, NodeId};

/// Parse an HTML string into a document
pub fn parse(html: &str) -> Document {
    HtmlParser::new().parse(html)
}
