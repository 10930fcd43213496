//! HTTP requests
//!
//! A [`Request`] keeps query pairs, form pairs and file pairs apart; the
//! transport decides how to encode them.

/// HTTP method
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Options,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
        }
    }

    /// Parse a method name; unknown names are GET
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            _ => Method::Get,
        }
    }
}

/// Request configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// Appended to the URL's query string
    pub query: Vec<(String, String)>,
    /// Sent as an urlencoded body, or as text parts of a multipart body
    pub form: Vec<(String, String)>,
    /// Field name to local file path; forces multipart
    pub files: Vec<(String, String)>,
    pub multipart: bool,
    /// Raw body, used when there are no form pairs or files
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn get(url: &str) -> Self {
        Self::new(Method::Get, url)
    }

    pub fn post(url: &str) -> Self {
        Self::new(Method::Post, url)
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.push((key.to_string(), value.to_string()));
        self
    }

    pub fn with_query(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(pairs);
        self
    }

    pub fn with_form(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.form.extend(pairs);
        self
    }

    pub fn with_files(mut self, pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        self.files.extend(pairs);
        self
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    /// Send form pairs as `multipart/form-data` even without files
    pub fn multipart(mut self) -> Self {
        self.multipart = true;
        self
    }

    /// Whether the body goes out as `multipart/form-data`
    pub fn is_multipart(&self) -> bool {
        self.multipart || !self.files.is_empty()
    }
}
