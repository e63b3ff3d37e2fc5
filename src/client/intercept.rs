//! Request and response interceptor pipelines.

use async_trait::async_trait;
use log::error;
use serde_json::Value;

use super::Client;
use crate::error::{ApiError, ApiResult};
use crate::request::RequestConfig;

/// Callback mutating the request configuration before the call.
pub type RequestInterceptor =
    Box<dyn Fn(RequestConfig) -> anyhow::Result<RequestConfig> + Send + Sync>;

/// Callback mutating the response value after the call.
pub type ResponseInterceptor = Box<dyn Fn(Value) -> anyhow::Result<Value> + Send + Sync>;

/// Decorator running ordered interceptor pipelines around the inner client.
///
/// Request interceptors fold over the config left-to-right in registration
/// order, then the call goes through, then response interceptors fold over the
/// result the same way. An interceptor error aborts the whole call and is
/// propagated unchanged; a failing request interceptor means no network call
/// happens at all.
pub struct InterceptingClient<C> {
    inner: C,
    request_interceptors: Vec<RequestInterceptor>,
    response_interceptors: Vec<ResponseInterceptor>,
}

impl<C> InterceptingClient<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Appends a request interceptor; it runs after all previously added ones.
    pub fn add_request_interceptor<F>(&mut self, interceptor: F)
    where
        F: Fn(RequestConfig) -> anyhow::Result<RequestConfig> + Send + Sync + 'static,
    {
        self.request_interceptors.push(Box::new(interceptor));
    }

    /// Appends a response interceptor; it runs after all previously added ones.
    pub fn add_response_interceptor<F>(&mut self, interceptor: F)
    where
        F: Fn(Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.response_interceptors.push(Box::new(interceptor));
    }
}

#[async_trait]
impl<C: Client> Client for InterceptingClient<C> {
    #[tracing::instrument(skip(self, config))]
    async fn request(&self, endpoint: &str, mut config: RequestConfig) -> ApiResult<Value> {
        for interceptor in &self.request_interceptors {
            config = interceptor(config).map_err(|e| {
                error!("Request interceptor failed: {}", e);
                ApiError::Interceptor(e)
            })?;
        }

        let mut value = self.inner.request(endpoint, config).await?;

        for interceptor in &self.response_interceptors {
            value = interceptor(value).map_err(|e| {
                error!("Response interceptor failed: {}", e);
                ApiError::Interceptor(e)
            })?;
        }

        Ok(value)
    }
}
