// ABOUTME: Configuration options for dictionary lookups: rule set, timeout, user agent and headers.
// ABOUTME: ClientBuilder provides a fluent API for constructing Client instances with custom settings.

use std::collections::HashMap;
use std::time::Duration;

use crate::client::Client;
use crate::error::{BuildError, RulesError};
use crate::extractors::rules::DictionaryRules;
use crate::source::{HttpSource, PageSource};

/// Browser-like user agent; some dictionary sites refuse unknown clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration options for the lookup client.
#[derive(Debug, Clone)]
pub struct Options {
    pub rules: DictionaryRules,
    pub timeout: Duration,
    pub user_agent: String,
    pub http_client: Option<reqwest::Client>,
    pub headers: HashMap<String, String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rules: DictionaryRules::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http_client: None,
            headers: HashMap::new(),
        }
    }
}

impl Options {
    /// Build the HTTP page source these options describe.
    pub fn http_source(&self) -> reqwest::Result<HttpSource> {
        let client = match &self.http_client {
            Some(client) => client.clone(),
            None => reqwest::Client::builder()
                .user_agent(&self.user_agent)
                .timeout(self.timeout)
                .gzip(true)
                .brotli(true)
                .deflate(true)
                .build()?,
        };
        Ok(HttpSource::new(client, self.headers.clone()))
    }
}

/// Builder for constructing Client instances with custom configuration.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    opts: Options,
}

impl ClientBuilder {
    /// Create a new ClientBuilder with default options.
    pub fn new() -> Self {
        Self {
            opts: Options::default(),
        }
    }

    /// Use the given dictionary rule set.
    pub fn rules(mut self, rules: DictionaryRules) -> Self {
        self.opts.rules = rules;
        self
    }

    /// Use a built-in rule set by name.
    pub fn preset(mut self, name: &str) -> Result<Self, RulesError> {
        self.opts.rules = DictionaryRules::preset(name)?;
        Ok(self)
    }

    /// Override the base URL of the current rule set.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.opts.rules.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    /// Use a custom HTTP client. Timeout and user agent settings are then
    /// the caller's responsibility.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.opts.http_client = Some(client);
        self
    }

    /// Add a custom header to all requests.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.opts.headers.insert(key.into(), value.into());
        self
    }

    pub fn options(&self) -> &Options {
        &self.opts
    }

    /// Build a Client that fetches over HTTP.
    pub fn build(self) -> Result<Client, BuildError> {
        let source = self.opts.http_source()?;
        Ok(Client::with_source(self.opts.rules, source)?)
    }

    /// Build a Client that reads pages from `source` instead of the network.
    pub fn build_with_source<S: PageSource>(
        self,
        source: S,
    ) -> Result<Client<S>, BuildError> {
        Ok(Client::with_source(self.opts.rules, source)?)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
