//! Layered REST API client.
//!
//! [`RestClient`] issues single round-trips against a base URL and maps HTTP
//! statuses to a typed error. [`CachingClient`] and [`InterceptingClient`]
//! decorate any [`Client`] to add time-boxed GET memoization and ordered
//! request/response interceptor pipelines.

pub mod client;
pub mod error;
pub mod request;

pub use client::{
    CACHE_TIMEOUT, CachingClient, Client, InterceptingClient, RequestInterceptor,
    ResponseInterceptor, RestClient,
};
pub use error::{ApiError, ApiResult};
pub use request::{RequestConfig, with_query};
