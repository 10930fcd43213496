//! HTTP Client
//!
//! [`Transport`] is the seam the browser sends requests through;
//! [`HttpClient`] implements it over `reqwest::blocking`.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, multipart};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::{Url, form_urlencoded};

use crate::{Method, NetError, Request, Response};

/// User agent sent unless configured otherwise
pub const DEFAULT_USER_AGENT: &str = concat!("robo/", env!("CARGO_PKG_VERSION"));

/// Something that can answer HTTP requests
pub trait Transport {
    fn send(&mut self, request: Request) -> Result<Response, NetError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, request: Request) -> Result<Response, NetError> {
        (**self).send(request)
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string
    pub user_agent: String,
    /// Whole-request timeout (`None` = wait forever)
    pub timeout: Option<Duration>,
    /// Max redirects to follow
    pub max_redirects: usize,
    /// Sent with every request
    pub default_headers: Vec<(String, String)>,
    /// `(user, password)` for HTTP basic auth
    pub basic_auth: Option<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(30)),
            max_redirects: 10,
            default_headers: Vec::new(),
            basic_auth: None,
        }
    }
}

/// HTTP client builder
#[derive(Debug, Clone, Default)]
pub struct HttpClientBuilder {
    config: ClientConfig,
}

impl HttpClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_agent(mut self, ua: &str) -> Self {
        self.config.user_agent = ua.to_string();
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        self.config
            .default_headers
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn basic_auth(mut self, user: &str, password: &str) -> Self {
        self.config.basic_auth = Some((user.to_string(), password.to_string()));
        self
    }

    pub fn build(self) -> Result<HttpClient, NetError> {
        HttpClient::with_config(self.config)
    }
}

/// HTTP client
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self, NetError> {
        Self::builder().build()
    }

    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::new()
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, NetError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let invalid = || NetError::InvalidHeader(name.clone());
            let name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.append(name, value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Transport for HttpClient {
    fn send(&mut self, request: Request) -> Result<Response, NetError> {
        tracing::info!("HTTP {} {}", request.method.as_str(), request.url);

        let mut url = Url::parse(&request.url)
            .map_err(|e| NetError::InvalidUrl(format!("{}: {}", request.url, e)))?;
        if !request.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.query);
        }

        let mut builder = self.client.request(reqwest_method(request.method), url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some((user, password)) = &self.config.basic_auth {
            builder = builder.basic_auth(user, Some(password));
        }
        let builder = attach_body(builder, request)?;

        let response = builder.send()?;
        let url = response.url().to_string();
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes()?.to_vec();

        tracing::debug!("HTTP {} from {} ({} bytes)", status, url, body.len());
        Ok(Response {
            url,
            status,
            headers,
            body,
        })
    }
}

fn reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Patch => reqwest::Method::PATCH,
    }
}

/// Encode form pairs, files or a raw body onto `builder`
fn attach_body(builder: RequestBuilder, request: Request) -> Result<RequestBuilder, NetError> {
    if request.is_multipart() {
        let mut form = multipart::Form::new();
        for (name, value) in request.form {
            form = form.text(name, value);
        }
        for (name, path) in request.files {
            form = if path.is_empty() {
                // Browsers send an empty part for an empty file input
                form.part(name, multipart::Part::bytes(Vec::new()).file_name(""))
            } else {
                form.file(name, &path)?
            };
        }
        return Ok(builder.multipart(form));
    }

    if !request.form.is_empty() {
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&request.form)
            .finish();
        return Ok(builder
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body));
    }

    Ok(match request.body {
        Some(body) => builder.body(body),
        None => builder,
    })
}
