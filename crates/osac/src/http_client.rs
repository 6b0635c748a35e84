//! HTTP client wrapping reqwest.
//!
//! One GET per call, no retries and no caching. Pages come back as parsed
//! `scraper` documents; downloads come back as the open response so the
//! body can be streamed to disk.

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::config::ClientConfig;
use crate::types::{OsacError, OsacResult};

/// HTTP client bound to one release index.
#[derive(Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpClient {
    /// Create a client from the given configuration.
    pub fn new(config: &ClientConfig) -> OsacResult<Self> {
        let mut builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str());

        // Idle limits only; total transfer time stays unbounded.
        if let Some(timeout) = config.timeout {
            builder = builder.connect_timeout(timeout).read_timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|source| OsacError::Transport {
                url: config.base_url.to_string(),
                source,
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Root of the release index.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Perform a GET and fail unless the server answered 200.
    pub async fn get(&self, url: &Url) -> OsacResult<reqwest::Response> {
        debug!(%url, "GET");
        let resp = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| OsacError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(OsacError::Status {
                url: url.to_string(),
                status,
            });
        }

        Ok(resp)
    }

    /// Fetch `url` and parse the body as an HTML document.
    ///
    /// The body is read completely and the connection released before the
    /// document is built.
    pub async fn fetch_document(&self, url: &Url) -> OsacResult<Html> {
        let resp = self.get(url).await?;
        let body = resp.text().await.map_err(|source| OsacError::Body {
            url: url.to_string(),
            source,
        })?;
        debug!(%url, bytes = body.len(), "parsed document");
        Ok(Html::parse_document(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HttpClient {
        let config = ClientConfig::new(Url::parse(&server.uri()).unwrap());
        HttpClient::new(&config).unwrap()
    }

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new(&ClientConfig::default()).unwrap();
        assert_eq!(client.base_url().as_str(), "https://opensource.apple.com/");
    }

    #[tokio::test]
    async fn test_fetch_document_parses_html() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<html><body><h1 class=\"t\">hello</h1></body></html>"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let doc = client.fetch_document(client.base_url()).await.unwrap();
        let sel = Selector::parse(".t").unwrap();
        let text: String = doc.select(&sel).next().unwrap().text().collect();
        assert_eq!(text, "hello");
    }

    #[tokio::test]
    async fn test_fetch_document_non_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let url = client.base_url().join("/missing").unwrap();
        let err = client.fetch_document(&url).await.unwrap_err();
        assert!(matches!(err, OsacError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_document_transport_failure() {
        // reserve a port, then free it so nothing listens there
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let url = Url::parse(&format!("http://127.0.0.1:{port}/")).unwrap();
        let client = HttpClient::new(&ClientConfig::new(url.clone())).unwrap();

        let err = client.fetch_document(&url).await.unwrap_err();
        assert!(matches!(err, OsacError::Transport { .. }));
    }
}
