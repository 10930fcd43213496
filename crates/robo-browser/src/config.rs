//! Browser configuration

use std::time::Duration;

use robo_net::{DEFAULT_USER_AGENT, HttpClient, NetError};

/// How many pages the browser remembers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryLimit {
    /// Keep every page
    #[default]
    Unbounded,
    /// Keep only the current page; back/forward are errors
    Disabled,
    /// Keep at most `n` pages, dropping the oldest (`Max(0)` is `Disabled`)
    Max(usize),
}

impl HistoryLimit {
    /// Maximum number of pages kept, if bounded
    pub fn max_len(&self) -> Option<usize> {
        match *self {
            Self::Unbounded => None,
            Self::Disabled | Self::Max(0) => Some(1),
            Self::Max(n) => Some(n),
        }
    }

    /// Whether back/forward are allowed
    pub fn is_tracking(&self) -> bool {
        !matches!(self, Self::Disabled | Self::Max(0))
    }
}

/// Browser configuration
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub user_agent: String,
    /// Sent with every request
    pub headers: Vec<(String, String)>,
    /// `(user, password)` for HTTP basic auth
    pub auth: Option<(String, String)>,
    pub history: HistoryLimit,
    pub timeout: Option<Duration>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            headers: Vec::new(),
            auth: None,
            history: HistoryLimit::Unbounded,
            timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl BrowserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user_agent(mut self, ua: &str) -> Self {
        self.user_agent = ua.to_string();
        self
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_auth(mut self, user: &str, password: &str) -> Self {
        self.auth = Some((user.to_string(), password.to_string()));
        self
    }

    pub fn with_history(mut self, history: HistoryLimit) -> Self {
        self.history = history;
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the HTTP client this configuration describes
    pub fn http_client(&self) -> Result<HttpClient, NetError> {
        let mut builder = HttpClient::builder()
            .user_agent(&self.user_agent)
            .timeout(self.timeout);
        for (name, value) in &self.headers {
            builder = builder.default_header(name, value);
        }
        if let Some((user, password)) = &self.auth {
            builder = builder.basic_auth(user, password);
        }
        builder.build()
    }
}
