//! Request execution capability: the one place a workflow operation suspends.
//!
//! A `RequestExecutor` takes an API version tag, a path, and request options, and
//! returns whatever the sidecar sent back: a structured JSON value or raw text.

pub mod http;

use std::fmt;

use async_trait::async_trait;

use crate::error::TransportError;

pub use http::HttpRequestExecutor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self { method, body: None }
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw result of an executed request.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    Json(serde_json::Value),
    Text(String),
}

impl ApiPayload {
    /// Interpret a response body: JSON when it parses, raw text otherwise.
    pub fn from_body(body: String) -> Self {
        if body.trim().is_empty() {
            return Self::Text(body);
        }
        match serde_json::from_str(&body) {
            Ok(value) => Self::Json(value),
            Err(_) => Self::Text(body),
        }
    }
}

#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(
        &self,
        api_version: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiPayload, TransportError>;
}
