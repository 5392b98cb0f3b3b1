//! HTTP executor: sends workflow requests to the sidecar with reqwest.

use async_trait::async_trait;

use super::{ApiPayload, HttpMethod, RequestExecutor, RequestOptions};
use crate::config::ClientOptions;
use crate::error::TransportError;

const API_TOKEN_HEADER: &str = "dapr-api-token";

pub struct HttpRequestExecutor {
    client: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl HttpRequestExecutor {
    pub fn new(options: &ClientOptions) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().timeout(options.timeout).build()?;

        Ok(Self {
            client,
            base_url: options.base_url(),
            api_token: options.api_token.clone(),
        })
    }

    /// `{base_url}/{api_version}{path}`
    pub fn endpoint_url(&self, api_version: &str, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{}", path)
        };
        format!("{}/{}{}", self.base_url, api_version.trim_matches('/'), path)
    }
}

fn to_reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
    }
}

#[async_trait]
impl RequestExecutor for HttpRequestExecutor {
    async fn execute(
        &self,
        api_version: &str,
        path: &str,
        options: RequestOptions,
    ) -> Result<ApiPayload, TransportError> {
        let url = self.endpoint_url(api_version, path);

        tracing::debug!("[HttpExecutor] {} {}", options.method, url);

        let mut request = self.client.request(to_reqwest_method(options.method), &url);
        if let Some(token) = &self.api_token {
            request = request.header(API_TOKEN_HEADER, token);
        }
        if let Some(body) = &options.body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(ApiPayload::from_body(body))
    }
}
