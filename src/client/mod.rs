//! Client layers: the base REST client and its caching and intercepting decorators.

mod cache;
mod intercept;
mod rest;

pub use cache::{CACHE_TIMEOUT, CachingClient};
pub use intercept::{InterceptingClient, RequestInterceptor, ResponseInterceptor};
pub use rest::RestClient;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::request::{RequestConfig, with_query};

/// The client capability: one `request` primitive plus per-method conveniences.
///
/// Decorators implement this over an inner client, so caching and interception
/// compose by wrapping rather than subclassing.
#[async_trait]
pub trait Client: Send + Sync {
    /// Issues one round-trip for `endpoint` with the given configuration.
    async fn request(&self, endpoint: &str, config: RequestConfig) -> ApiResult<Value>;

    async fn get(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::new(Method::GET)).await
    }

    /// GET with URL-encoded query parameters appended to the endpoint.
    async fn get_with_query(&self, endpoint: &str, params: &[(&str, &str)]) -> ApiResult<Value> {
        self.get(&with_query(endpoint, params)).await
    }

    /// GET and deserialize the response into `T`.
    async fn get_as<T>(&self, endpoint: &str) -> ApiResult<T>
    where
        T: DeserializeOwned + Send,
    {
        let value = self.get(endpoint).await?;
        serde_json::from_value(value).map_err(ApiError::Decode)
    }

    async fn post(&self, endpoint: &str, data: &Value) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::json(Method::POST, data))
            .await
    }

    async fn put(&self, endpoint: &str, data: &Value) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::json(Method::PUT, data))
            .await
    }

    async fn patch(&self, endpoint: &str, data: &Value) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::json(Method::PATCH, data))
            .await
    }

    async fn delete(&self, endpoint: &str) -> ApiResult<Value> {
        self.request(endpoint, RequestConfig::new(Method::DELETE))
            .await
    }
}
