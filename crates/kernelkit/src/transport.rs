//! HTTP transport handed to chat completion services

use crate::error::{KernelKitError, Result};
use reqwest::{Client, Url};
use std::time::Duration;

/// Base address of the local OpenAI-compatible endpoint (Ollama default)
pub const LOCAL_ENDPOINT: &str = "http://localhost:11434/v1/";

const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// HTTP client bound to a base address
#[derive(Debug, Clone)]
pub struct Transport {
    client: Client,
    base_url: Url,
}

impl Transport {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve `path` relative to the base address
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| KernelKitError::InvalidBaseUrl {
                url: format!("{}{}", self.base_url, path),
                reason: e.to_string(),
            })
    }
}

/// Parse a base address, adding the trailing slash relative joins rely on
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let with_slash = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    Url::parse(&with_slash).map_err(|e| KernelKitError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

/// Creates transports. Creation must not perform network I/O.
pub trait TransportFactory: Send + Sync {
    fn create(&self, base_url: &str) -> Result<Transport>;
}

/// Builds a fresh `reqwest` client per transport
#[derive(Debug, Clone)]
pub struct ReqwestTransportFactory {
    timeout: Duration,
    user_agent: String,
}

impl ReqwestTransportFactory {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("kernelkit/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the per-request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

impl Default for ReqwestTransportFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TransportFactory for ReqwestTransportFactory {
    fn create(&self, base_url: &str) -> Result<Transport> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()?;

        Ok(Transport::new(client, base_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_endpoint_is_kept_verbatim() {
        let transport = ReqwestTransportFactory::new().create(LOCAL_ENDPOINT).unwrap();
        assert_eq!(transport.base_url().as_str(), LOCAL_ENDPOINT);
    }

    #[test]
    fn test_endpoint_join_keeps_version_prefix() {
        let transport = ReqwestTransportFactory::new().create(LOCAL_ENDPOINT).unwrap();
        let url = transport.endpoint("chat/completions").unwrap();
        assert_eq!(url.as_str(), "http://localhost:11434/v1/chat/completions");
    }

    #[test]
    fn test_trailing_slash_is_added() {
        let url = parse_base_url("https://azure.example").unwrap();
        assert_eq!(url.as_str(), "https://azure.example/");
    }

    #[test]
    fn test_malformed_base_url() {
        let err = ReqwestTransportFactory::new().create("not a url").unwrap_err();
        assert!(matches!(err, KernelKitError::InvalidBaseUrl { .. }));

        let err = parse_base_url("").unwrap_err();
        assert!(matches!(err, KernelKitError::InvalidBaseUrl { .. }));
    }
}
