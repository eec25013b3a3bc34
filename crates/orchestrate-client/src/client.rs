//! Main client implementation.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use tracing::debug;
use url::Url;

use crate::api::{EventBuilder, GraphBuilder, Mode, SearchBuilder};
use crate::endpoint::{QueryParam, compose_url};
use crate::error::{Error, Result};
use crate::response::{RawResponse, Response, validate};

/// Production API host.
pub const DEFAULT_BASE_URL: &str = "https://api.orchestrate.io/";

/// API version path prefix.
pub const DEFAULT_API_VERSION: &str = "v0";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "ORCHESTRATE_API_KEY";

/// Environment variable overriding the API host.
pub const API_URL_ENV: &str = "ORCHESTRATE_API_URL";

/// Orchestrate API client.
///
/// Cloning is cheap; clones share one connection pool and the same
/// credentials.
///
/// # Example
///
/// ```no_run
/// use orchestrate_client::OrchestrateClient;
///
/// # async fn example() -> orchestrate_client::Result<()> {
/// let client = OrchestrateClient::new("your-api-key")?;
///
/// let user = client.get("users", "sjkaliski@gmail.com").await?;
/// println!("{}", user.body);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OrchestrateClient {
    /// Inner shared state.
    inner: Arc<ClientInner>,
}

/// Inner client state (shared across clones).
struct ClientInner {
    /// HTTP client.
    http: reqwest::Client,
    /// API key, sent as the basic-auth username.
    token: String,
    /// Host plus version prefix, always ending in `/`.
    api_url: Url,
}

impl fmt::Debug for OrchestrateClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrchestrateClient")
            .field("api_url", &self.inner.api_url.as_str())
            .finish_non_exhaustive()
    }
}

impl OrchestrateClient {
    /// Create a client for the production API.
    ///
    /// Fails if `token` is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::builder().token(token).build()
    }

    /// Create a client from `ORCHESTRATE_API_KEY` and, if set,
    /// `ORCHESTRATE_API_URL`.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(API_KEY_ENV)
            .map_err(|_| Error::Config(format!("{} is not set", API_KEY_ENV)))?;
        let mut builder = Self::builder().token(token);
        if let Ok(url) = std::env::var(API_URL_ENV) {
            builder = builder.base_url(url);
        }
        builder.build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The versioned API root, e.g. `https://api.orchestrate.io/v0/`.
    pub fn api_url(&self) -> &Url {
        &self.inner.api_url
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Builders
    // ─────────────────────────────────────────────────────────────────────────

    /// Start a paged search.
    pub fn search_builder(&self) -> SearchBuilder {
        SearchBuilder::new(self.clone())
    }

    /// Start a relation write (`create` / `remove`).
    pub fn graph_builder(&self) -> GraphBuilder {
        GraphBuilder::new(self.clone(), Mode::Write)
    }

    /// Start a relation traversal (`get`).
    pub fn graph_reader(&self) -> GraphBuilder {
        GraphBuilder::new(self.clone(), Mode::Read)
    }

    /// Start an event write (`create`).
    pub fn event_builder(&self) -> EventBuilder {
        EventBuilder::new(self.clone(), Mode::Write)
    }

    /// Start an event range read (`get`).
    pub fn event_reader(&self) -> EventBuilder {
        EventBuilder::new(self.clone(), Mode::Read)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internal HTTP methods
    // ─────────────────────────────────────────────────────────────────────────

    /// Build a URL below the API root.
    pub(crate) fn compose_url(&self, segments: &[&str], query: &[QueryParam<'_>]) -> Result<Url> {
        compose_url(&self.inner.api_url, segments, query)
    }

    /// Make a GET request.
    pub(crate) async fn do_get(&self, url: Url) -> Result<Response> {
        debug!(method = "GET", url = %url, "sending request");
        let request = self.inner.http.get(url);
        self.send(request).await
    }

    /// Make a PUT request with a JSON body. `headers` override the defaults.
    pub(crate) async fn do_put(
        &self,
        url: Url,
        body: &serde_json::Value,
        headers: HeaderMap,
    ) -> Result<Response> {
        debug!(method = "PUT", url = %url, conditional = !headers.is_empty(), "sending request");
        let request = self.inner.http.put(url).json(body).headers(headers);
        self.send(request).await
    }

    /// Make a DELETE request. `query_suffix` is appended to the URL as-is.
    pub(crate) async fn do_delete(&self, url: Url, query_suffix: Option<&str>) -> Result<Response> {
        let target = match query_suffix {
            Some(suffix) => format!("{}{}", url, suffix),
            None => url.to_string(),
        };
        debug!(method = "DELETE", url = %target, "sending request");
        let request = self.inner.http.delete(target);
        self.send(request).await
    }

    /// Attach credentials, send, and normalize the response.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        let response = request
            .basic_auth(&self.inner.token, Some(""))
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.text().await?;
        debug!(status, bytes = body.len(), "received response");

        validate(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Builder for creating an OrchestrateClient.
#[derive(Debug)]
pub struct ClientBuilder {
    token: Option<String>,
    base_url: String,
    api_version: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with defaults.
    pub fn new() -> Self {
        Self {
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the API key.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Point the client at another host (a proxy, or a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API version prefix.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }

    /// Have the transport abort requests that take longer than `timeout`.
    /// There is no timeout by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<OrchestrateClient> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| Error::Config("API token is required".to_string()))?;

        // Parse and normalize base URL
        let mut base_url = Url::parse(&self.base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }
        let version = self.api_version.trim_matches('/');
        let api_url = if version.is_empty() {
            base_url
        } else {
            base_url.join(&format!("{}/", version))?
        };

        // Build default headers
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        // Build HTTP client
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("orchestrate-client/{}", env!("CARGO_PKG_VERSION")));

        // Redirects surface as `Error::Api` instead of a second request
        let mut http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .redirect(reqwest::redirect::Policy::none());
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(OrchestrateClient {
            inner: Arc::new(ClientInner {
                http: http.build()?,
                token,
                api_url,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_token() {
        let result = ClientBuilder::new().build();
        assert!(matches!(result, Err(Error::Config(_))));

        let result = OrchestrateClient::new("");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_default_api_url() {
        let client = OrchestrateClient::new("test-token").unwrap();
        assert_eq!(client.api_url().as_str(), "https://api.orchestrate.io/v0/");
    }

    #[test]
    fn test_builder_normalizes_trailing_slash() {
        let client = ClientBuilder::new()
            .token("test-token")
            .base_url("http://localhost:8080/proxy")
            .build()
            .unwrap();
        assert_eq!(client.api_url().as_str(), "http://localhost:8080/proxy/v0/");

        let client = ClientBuilder::new()
            .token("test-token")
            .base_url("http://localhost:8080/")
            .api_version("/v1/")
            .build()
            .unwrap();
        assert_eq!(client.api_url().as_str(), "http://localhost:8080/v1/");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = ClientBuilder::new()
            .token("test-token")
            .base_url("not a url")
            .build();
        assert!(matches!(result, Err(Error::InvalidUrl(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let client = OrchestrateClient::new("secret-token").unwrap();
        let rendered = format!("{:?}", client);
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("api.orchestrate.io"));
    }

    #[test]
    fn test_url_building() {
        let client = OrchestrateClient::new("test-token").unwrap();
        let url = client
            .compose_url(&["users", "byrd@bowery.io"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.orchestrate.io/v0/users/byrd%40bowery.io"
        );
    }
}
