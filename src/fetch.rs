//! HTTP fetching.
//!
//! The crawl loop depends only on the [`Fetch`] trait; [`HttpFetcher`] is the
//! blocking `reqwest` implementation used by the binary.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::{debug, warn};
use url::Url;

use crate::encoding;
use crate::error::{Error, Result};

/// Browser user agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// `Accept-Language` sent with every request.
pub const ACCEPT_LANGUAGES: &str = "en,zh-CN;q=0.9,zh;q=0.8";

/// Per-request timeout.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A successfully retrieved page body.
#[derive(Debug, Clone)]
pub struct Fetched {
    /// Final URL after redirects.
    pub url: Url,
    /// Raw response body.
    pub body: Vec<u8>,
    /// `Content-Type` response header, if any.
    pub content_type: Option<String>,
}

impl Fetched {
    /// Body decoded to UTF-8 using the header or `<meta>` charset.
    #[must_use]
    pub fn text(&self) -> String {
        encoding::transcode_to_utf8(&self.body, self.content_type.as_deref())
    }
}

/// Source of page bodies.
pub trait Fetch {
    /// Retrieve `url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fetch`] on transport failure or a non-success status.
    fn fetch(&self, url: &Url) -> Result<Fetched>;
}

/// Blocking HTTP fetcher with browser-like headers.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the TLS backend or client cannot be
    /// initialised.
    pub fn new() -> Result<Self> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Build a fetcher with a custom per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Client`] when the client cannot be built.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(ACCEPT_LANGUAGES));

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Fetched> {
        let failure = |reason: String| Error::Fetch {
            url: url.to_string(),
            reason,
        };

        debug!(url = %url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "non-success status");
            return Err(failure(format!("HTTP status {status}")));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().map_err(|e| failure(e.to_string()))?.to_vec();

        debug!(url = %final_url, bytes = body.len(), "fetched");
        Ok(Fetched {
            url: final_url,
            body,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::{Method::GET, MockServer};

    fn url(server: &MockServer, path: &str) -> Url {
        Url::parse(&server.url(path)).expect("valid mock url")
    }

    #[test]
    fn test_fetch_sends_browser_headers() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/page")
                .header("user-agent", USER_AGENT)
                .header("accept-language", ACCEPT_LANGUAGES);
            then.status(200)
                .header("content-type", "text/html; charset=utf-8")
                .body("<p>hi</p>");
        });

        let fetched = HttpFetcher::new()
            .expect("client")
            .fetch(&url(&server, "/page"))
            .expect("fetched");

        mock.assert();
        assert_eq!(fetched.body, b"<p>hi</p>");
        assert_eq!(fetched.content_type.as_deref(), Some("text/html; charset=utf-8"));
        assert_eq!(fetched.text(), "<p>hi</p>");
    }

    #[test]
    fn test_non_success_status_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/missing");
            then.status(404);
        });

        let err = HttpFetcher::new()
            .expect("client")
            .fetch(&url(&server, "/missing"))
            .expect_err("404");

        match err {
            Error::Fetch { url, reason } => {
                assert!(url.ends_with("/missing"));
                assert!(reason.contains("404"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_text_uses_header_charset() {
        let fetched = Fetched {
            url: Url::parse("https://x.org/").expect("valid url"),
            body: b"<p>Caf\xE9</p>".to_vec(),
            content_type: Some("text/html; charset=ISO-8859-1".to_string()),
        };
        assert_eq!(fetched.text(), "<p>Caf\u{e9}</p>");
    }
}
