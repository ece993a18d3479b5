// GitHub API HTTP client.
// Unauthenticated requests with default headers and a bounded per-request timeout.

use std::time::Duration;

use reqwest::{
    Client, Response,
    header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT},
};

use crate::error::{GitfolioError, Result};

const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Upper bound on any single request, so a hung upstream call cannot
/// indefinitely stall the callers sharing its in-flight fetch.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client. No token is presented; requests run under the
/// unauthenticated rate limit and any non-success response is a hard failure.
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client against the public GitHub API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(GITHUB_API_BASE)
    }

    /// Create a client against a custom API base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("gitfolio"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Make a GET request to an API endpoint.
    pub(crate) async fn get(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).send().await?;

        check_response(response)
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_params<T: serde::Serialize + ?Sized>(
        &self,
        endpoint: &str,
        params: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        let response = self.http.get(&url).query(params).send().await?;

        check_response(response)
    }

    /// Make a GET request to an absolute URL. Raw README content lives on a
    /// separate host from the API base.
    pub(crate) async fn get_url(&self, url: &str) -> Result<Response> {
        let response = self.http.get(url).send().await?;

        check_response(response)
    }
}

/// Convert any non-success status into a hard failure carrying the status
/// code and reason text.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GitfolioError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("unknown").to_string(),
        })
    }
}
