//! Base REST client: one network round-trip per call, status mapped to errors.

use async_trait::async_trait;
use log::{debug, error};
use reqwest::StatusCode;
use serde_json::Value;

use super::Client;
use crate::error::{ApiError, ApiResult};
use crate::request::RequestConfig;

/// REST client bound to a base URL, with optional bearer-token authentication.
///
/// Performs exactly one network call per request. No retries and no timeout
/// enforcement; a hung call hangs its caller.
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    /// Creates a client wrapping the given reqwest Client.
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Sets a bearer token sent as `Authorization: Bearer <token>` on every
    /// request that does not already carry an Authorization header.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl Client for RestClient {
    #[tracing::instrument(skip(self, config))]
    async fn request(&self, endpoint: &str, mut config: RequestConfig) -> ApiResult<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("{} {}...", config.method, url);

        if let Some(token) = &self.token {
            config
                .headers
                .entry("Authorization".to_string())
                .or_insert_with(|| format!("Bearer {}", token));
        }

        let mut builder = self.client.request(config.method.clone(), &url);
        for (name, value) in &config.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = config.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!("Request to {} failed: {}", url, e);
            ApiError::Transport(e)
        })?;

        let status = response.status();
        match status {
            StatusCode::OK | StatusCode::CREATED => {
                let text = response.text().await.map_err(ApiError::Transport)?;
                serde_json::from_str(&text).map_err(|e| {
                    error!("Unparseable response body from {}: {}", url, e);
                    ApiError::Decode(e)
                })
            }
            // 204 carries no content; the body is never read.
            StatusCode::NO_CONTENT => Ok(Value::Null),
            _ => {
                let err = ApiError::from_status(status);
                error!("{} {} failed: {}", config.method, url, err);
                Err(err)
            }
        }
    }
}
