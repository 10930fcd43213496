//! Robotic browser
//!
//! Opens pages through a [`Transport`], keeps them in a [`History`], and
//! finds links and forms on the current page.

use std::path::Path;

use robo_dom::Document;
use robo_forms::{FieldId, Form, FormEnctype, FormMethod};
use robo_net::{HttpClient, Request, Response, Transport};
use url::Url;

use crate::config::BrowserConfig;
use crate::error::{BrowserError, BrowserResult};
use crate::history::History;
use crate::links::{Link, LinkQuery, find_links};
use crate::page::Page;

/// Scriptable web browser
pub struct RoboBrowser<T: Transport = HttpClient> {
    transport: T,
    config: BrowserConfig,
    history: History<Page>,
}

impl RoboBrowser<HttpClient> {
    /// Create a browser backed by a real HTTP client
    pub fn new(config: BrowserConfig) -> BrowserResult<Self> {
        let transport = config.http_client()?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> RoboBrowser<T> {
    pub fn with_transport(transport: T, config: BrowserConfig) -> Self {
        let history = History::new(config.history);
        Self {
            transport,
            config,
            history,
        }
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn history(&self) -> &History<Page> {
        &self.history
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// GET `url` and make it the current page
    pub fn open(&mut self, url: &str) -> BrowserResult<()> {
        self.navigate(Request::get(url))
    }

    fn navigate(&mut self, request: Request) -> BrowserResult<()> {
        let response = self.transport.send(request)?;
        tracing::info!("Loaded {} ({})", response.url, response.status);
        self.history.push(Page::new(response));
        Ok(())
    }

    pub fn back(&mut self, n: usize) -> BrowserResult<()> {
        self.history.back(n)?;
        Ok(())
    }

    pub fn forward(&mut self, n: usize) -> BrowserResult<()> {
        self.history.forward(n)?;
        Ok(())
    }

    // =========================================================================
    // Current state
    // =========================================================================

    pub fn page(&self) -> BrowserResult<&Page> {
        self.history.current().ok_or(BrowserError::NoState)
    }

    pub fn url(&self) -> BrowserResult<&str> {
        Ok(&self.page()?.url)
    }

    pub fn response(&self) -> BrowserResult<&Response> {
        Ok(&self.page()?.response)
    }

    pub fn document(&self) -> BrowserResult<&Document> {
        Ok(self.page()?.document())
    }

    /// Resolve `href` against the current URL
    pub fn resolve_url(&self, href: &str) -> BrowserResult<String> {
        Ok(self.join_url(href)?.to_string())
    }

    fn join_url(&self, href: &str) -> BrowserResult<Url> {
        let base = self.url()?;
        let base = Url::parse(base).map_err(|source| BrowserError::Url {
            url: base.to_string(),
            source,
        })?;
        base.join(href).map_err(|source| BrowserError::Url {
            url: href.to_string(),
            source,
        })
    }

    // =========================================================================
    // Links
    // =========================================================================

    /// First link matching `query`
    pub fn get_link(&self, query: &LinkQuery) -> BrowserResult<Option<Link>> {
        Ok(find_links(self.document()?, query).into_iter().next())
    }

    pub fn get_links(&self, query: &LinkQuery) -> BrowserResult<Vec<Link>> {
        Ok(find_links(self.document()?, query))
    }

    pub fn follow_link(&mut self, link: &Link) -> BrowserResult<()> {
        let href = link.href.as_deref().ok_or(BrowserError::MissingHref)?;
        let url = self.join_url(href)?;
        self.open(url.as_str())
    }

    /// Follow the first link matching `query`
    ///
    /// A plain string matches link text case-insensitively.
    pub fn follow_link_matching(&mut self, query: impl Into<LinkQuery>) -> BrowserResult<()> {
        let link = self
            .get_link(&query.into())?
            .ok_or(BrowserError::LinkNotFound)?;
        self.follow_link(&link)
    }

    // =========================================================================
    // Forms
    // =========================================================================

    /// First form on the page, or the first with the given `id`
    pub fn get_form(&self, id: Option<&str>) -> BrowserResult<Option<Form>> {
        let doc = self.document()?;
        let node = doc.find(doc.tree().root(), |_, elem| {
            elem.is("form") && id.is_none_or(|id| elem.id() == Some(id))
        });
        Ok(node.map(|node| Form::from_element(doc, node)).transpose()?)
    }

    pub fn get_forms(&self) -> BrowserResult<Vec<Form>> {
        Ok(Form::all_from_document(self.document()?)?)
    }

    /// Submit `form`, optionally through the submit control `submit`
    ///
    /// GET forms replace the action's query string with the payload; file
    /// inputs then contribute their file name only.
    pub fn submit_form(&mut self, form: &Form, submit: Option<FieldId>) -> BrowserResult<()> {
        let submission = form.submission(submit)?;
        let mut url = self.join_url(&submission.action)?;
        let args = submission.payload.to_request_arguments(submission.method);

        let request = match submission.method {
            FormMethod::Get => {
                url.set_query(None);
                let files = args
                    .files
                    .into_iter()
                    .map(|(name, path)| (name, file_name(&path)));
                Request::get(url.as_str()).with_query(args.params.into_iter().chain(files))
            }
            FormMethod::Post => {
                let request = Request::post(url.as_str())
                    .with_form(args.data)
                    .with_files(args.files);
                if submission.enctype == FormEnctype::Multipart {
                    request.multipart()
                } else {
                    request
                }
            }
        };

        tracing::info!("Submitting form: {} {}", submission.method.as_str(), url);
        self.navigate(request)
    }
}

fn file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

impl<T: Transport> std::fmt::Debug for RoboBrowser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.url() {
            Ok(url) => write!(f, "<RoboBrowser url={}>", url),
            Err(_) => write!(f, "<RoboBrowser>"),
        }
    }
}
