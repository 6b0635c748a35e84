//! Client configuration loading and resolution.

use std::time::Duration;

use url::Url;

use crate::types::{OsacError, OsacResult};

/// Release index used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "https://opensource.apple.com";

/// Environment variable overriding the release index.
pub const BASE_URL_ENV: &str = "OSAC_BASE_URL";

/// Environment variable setting the connect/read idle timeout, in seconds.
pub const TIMEOUT_ENV: &str = "OSAC_TIMEOUT";

/// Settings for talking to the release index.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Root of the site; release and download hrefs are joined onto it.
    pub base_url: Url,
    /// Idle limit for connecting and for each read. `None` keeps the
    /// transport defaults; a transfer that keeps receiving bytes is never cut.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl ClientConfig {
    /// Configuration pointing at `base_url` with no timeout and the default user agent.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: None,
            user_agent: format!("osac/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Build a configuration from explicit values, falling back to the
    /// environment and then to built-in defaults.
    pub fn resolve(base_url: Option<&str>, timeout_secs: Option<u64>) -> OsacResult<Self> {
        let mut config = Self::new(resolve_base_url(base_url)?);
        config.timeout = resolve_timeout_secs(timeout_secs).map(Duration::from_secs);
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        // the constant is a valid absolute URL
        Self::new(Url::parse(DEFAULT_BASE_URL).expect("default base url"))
    }
}

/// Resolve the release index URL.
pub fn resolve_base_url(explicit: Option<&str>) -> OsacResult<Url> {
    let raw = match explicit {
        Some(url) => url.to_string(),
        None => std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
    };

    Url::parse(&raw).map_err(|source| OsacError::InvalidUrl { href: raw, source })
}

fn resolve_timeout_secs(explicit: Option<u64>) -> Option<u64> {
    explicit.or_else(|| {
        std::env::var(TIMEOUT_ENV)
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_url_wins() {
        let url = resolve_base_url(Some("http://127.0.0.1:8080")).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = resolve_base_url(Some("not a url")).unwrap_err();
        assert!(matches!(err, OsacError::InvalidUrl { .. }));
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url.as_str(), "https://opensource.apple.com/");
        assert_eq!(config.timeout, None);
        assert!(config.user_agent.starts_with("osac/"));
    }

    #[test]
    fn test_explicit_timeout() {
        let config = ClientConfig::resolve(Some("https://example.com"), Some(5)).unwrap();
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
