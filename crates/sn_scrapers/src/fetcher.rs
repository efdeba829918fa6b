use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use sn_core::{Error, FetchedPage, PageFetcher, Result};
use tracing::debug;

use crate::scrapers::utils;

/// User-Agent string for page requests.
pub const USER_AGENT: &str = concat!("sn/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, Default)]
pub struct FetcherConfig {
    /// Per-request timeout; `None` keeps the client default (no timeout).
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

/// Plain HTTP GET over a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        let parsed = utils::parse_url(url)?;
        debug!("GET {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!("{} returned {}", url, status)));
        }

        let final_url = response.url().to_string();
        // Decodes using the Content-Type charset, falling back to UTF-8.
        let body = response.text().await?;
        debug!("Fetched {} bytes from {}", body.len(), final_url);

        Ok(FetchedPage {
            url: final_url,
            status: status.as_u16(),
            body: body.into_bytes(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/news"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetcherConfig::default()).unwrap();
        let page = fetcher.fetch(&format!("{}/news", server.uri())).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.text(), "<html>ok</html>");
        assert!(page.url.ends_with("/news"));
    }

    #[tokio::test]
    async fn test_fetch_decodes_declared_charset() {
        let server = MockServer::start().await;
        // "Café résumé" in ISO-8859-1.
        let latin1: Vec<u8> = b"<p>Caf\xe9 r\xe9sum\xe9</p>".to_vec();
        Mock::given(method("GET"))
            .and(path("/latin1"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(latin1, "text/html; charset=iso-8859-1"))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetcherConfig::default()).unwrap();
        let page = fetcher.fetch(&format!("{}/latin1", server.uri())).await.unwrap();
        assert_eq!(page.text(), "<p>Café résumé</p>");
    }

    #[tokio::test]
    async fn test_fetch_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let fetcher = HttpFetcher::new(FetcherConfig::default()).unwrap();
        let err = fetcher
            .fetch(&format!("{}/missing", server.uri()))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fetch(_)));
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_rejects_invalid_url() {
        let fetcher = HttpFetcher::new(FetcherConfig::default()).unwrap();
        let err = fetcher.fetch("not-a-url").await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
