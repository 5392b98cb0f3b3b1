//! Client options and protocol constants.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Workflow component used when the caller does not name one.
pub const DEFAULT_WORKFLOW_COMPONENT: &str = "dapr";

/// API version tag pinned for every workflow request.
pub const WORKFLOW_API_VERSION: &str = "v1.0-alpha1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "http" => Ok(Self::Http),
            "https" => Ok(Self::Https),
            other => Err(format!("Unknown protocol: '{}' (expected http or https)", other)),
        }
    }
}

/// Connection settings for the sidecar's HTTP API.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub host: String,
    pub port: u16,
    pub protocol: Protocol,
    /// Sent as `dapr-api-token` when set
    pub api_token: Option<String>,
    /// Component substituted when an operation is called without one
    pub default_component: String,
    /// Per-request timeout applied by the HTTP executor
    pub timeout: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3500,
            protocol: Protocol::Http,
            api_token: None,
            default_component: DEFAULT_WORKFLOW_COMPONENT.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

impl ClientOptions {
    /// Base URL of the sidecar, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host.trim_end_matches('/'), self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ClientOptions::default();
        assert_eq!(options.base_url(), "http://127.0.0.1:3500");
        assert_eq!(options.default_component, "dapr");
        assert!(options.api_token.is_none());
    }

    #[test]
    fn test_protocol_from_str() {
        assert_eq!("HTTPS".parse::<Protocol>(), Ok(Protocol::Https));
        assert_eq!("http".parse::<Protocol>(), Ok(Protocol::Http));
        assert!("grpc".parse::<Protocol>().is_err());
    }
}
