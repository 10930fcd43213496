//! Page Representation
//!
//! A fetched response plus its lazily parsed document.

use std::cell::OnceCell;

use robo_dom::Document;
use robo_html::HtmlParser;
use robo_net::Response;

/// A loaded web page
#[derive(Debug)]
pub struct Page {
    /// Final URL, after redirects
    pub url: String,
    pub response: Response,
    document: OnceCell<Document>,
}

impl Page {
    pub fn new(response: Response) -> Self {
        Self {
            url: response.url.clone(),
            response,
            document: OnceCell::new(),
        }
    }

    /// Parsed document, built on first access
    pub fn document(&self) -> &Document {
        self.document
            .get_or_init(|| HtmlParser::new().parse_bytes(&self.response.body, &self.url))
    }

    /// Page title
    pub fn title(&self) -> String {
        self.document().title()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_is_cached() {
        let page = Page::new(Response::new(
            "http://example.com/",
            200,
            "<title> Hello </title><p>body</p>",
        ));
        assert_eq!(page.title(), "Hello");

        let first: *const Document = page.document();
        let second: *const Document = page.document();
        assert_eq!(first, second);
        assert_eq!(page.document().url(), "http://example.com/");
    }
}
