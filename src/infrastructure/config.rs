//! Application configuration

use std::env;
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, Result};

/// Default OpenAI-compatible API base URL
pub const DEFAULT_LLM_BASE_URL: &str = "https://api.openai.com";

/// Default chat model
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o-mini";

/// Application configuration loaded from environment
#[derive(Clone)]
pub struct AppConfig {
    /// Bearer key for the chat provider; requests go out unauthenticated without one
    pub llm_api_key: Option<String>,
    /// Chat provider base URL (OpenAI-compatible)
    pub llm_base_url: String,
    /// Model used for every generation request
    pub llm_model: String,
    /// Request timeout; `None` keeps the HTTP client's default
    pub llm_timeout: Option<Duration>,

    /// Origins allowed to call the API from a browser
    pub cors_origins: CorsOrigins,

    pub server_host: IpAddr,
    pub server_port: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_api_key: None,
            llm_base_url: DEFAULT_LLM_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_timeout: None,
            cors_origins: CorsOrigins::Any,
            server_host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            server_port: 8001,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup; unset keys take the defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            llm_api_key: lookup("LLM_API_KEY").filter(|key| !key.trim().is_empty()),
            llm_base_url: lookup("LLM_BASE_URL").unwrap_or(defaults.llm_base_url),
            llm_model: lookup("LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout: parse_var::<u64, _>(&lookup, "LLM_TIMEOUT_SECS")
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
                .map(Duration::from_secs),

            cors_origins: lookup("CORS_ORIGINS")
                .map(|raw| CorsOrigins::parse(&raw))
                .unwrap_or(defaults.cors_origins),

            server_host: parse_var(&lookup, "SERVER_HOST")
                .context("SERVER_HOST must be a valid IP address")?
                .unwrap_or(defaults.server_host),
            server_port: parse_var(&lookup, "SERVER_PORT")
                .context("SERVER_PORT must be a valid port number")?
                .unwrap_or(defaults.server_port),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.server_host, self.server_port)
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("llm_api_key", &self.llm_api_key.as_ref().map(|_| "<redacted>"))
            .field("llm_base_url", &self.llm_base_url)
            .field("llm_model", &self.llm_model)
            .field("llm_timeout", &self.llm_timeout)
            .field("cors_origins", &self.cors_origins)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

/// Parses an optional variable; unset is `Ok(None)`, malformed is an error
fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => Ok(Some(raw.trim().parse()?)),
        None => Ok(None),
    }
}

/// Browser origins allowed by CORS
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `*` - any origin
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. A `*` entry, or an empty list,
    /// allows every origin.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_parse() {
        assert_eq!(CorsOrigins::parse("*"), CorsOrigins::Any);
        assert_eq!(CorsOrigins::parse(""), CorsOrigins::Any);
        assert_eq!(
            CorsOrigins::parse("http://localhost:3000, https://alexandria.example ,"),
            CorsOrigins::List(vec![
                "http://localhost:3000".to_string(),
                "https://alexandria.example".to_string(),
            ])
        );
        assert_eq!(
            CorsOrigins::parse("http://localhost:3000,*"),
            CorsOrigins::Any
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AppConfig {
            llm_api_key: Some("sk-secret".to_string()),
            ..AppConfig::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let pairs: Vec<(String, String)> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        }
    }

    #[test]
    fn test_from_lookup_unset_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.llm_api_key, None);
        assert_eq!(config.llm_base_url, DEFAULT_LLM_BASE_URL);
        assert_eq!(config.llm_model, DEFAULT_LLM_MODEL);
        assert_eq!(config.llm_timeout, None);
        assert_eq!(config.cors_origins, CorsOrigins::Any);
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8001");
    }

    #[test]
    fn test_from_lookup_reads_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("LLM_API_KEY", "sk-live"),
            ("LLM_MODEL", "llama3.2"),
            ("LLM_TIMEOUT_SECS", " 45 "),
            ("CORS_ORIGINS", "http://localhost:3000"),
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.llm_api_key.as_deref(), Some("sk-live"));
        assert_eq!(config.llm_model, "llama3.2");
        assert_eq!(config.llm_timeout, Some(Duration::from_secs(45)));
        assert_eq!(
            config.cors_origins,
            CorsOrigins::List(vec!["http://localhost:3000".to_string()])
        );
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = AppConfig::from_lookup(lookup_from(&[("LLM_API_KEY", "   ")])).unwrap();
        assert_eq!(config.llm_api_key, None);
    }

    #[test]
    fn test_malformed_numbers_are_startup_errors() {
        let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "70000")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_PORT"));

        let err =
            AppConfig::from_lookup(lookup_from(&[("LLM_TIMEOUT_SECS", "-1")])).unwrap_err();
        assert!(err.to_string().contains("LLM_TIMEOUT_SECS"));

        let err = AppConfig::from_lookup(lookup_from(&[("SERVER_HOST", "localhost")])).unwrap_err();
        assert!(err.to_string().contains("SERVER_HOST"));
    }

    #[test]
    fn test_default_socket_addr() {
        assert_eq!(AppConfig::default().socket_addr().to_string(), "0.0.0.0:8001");
    }
}
