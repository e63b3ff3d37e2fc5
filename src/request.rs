//! Per-call request configuration and query-string building.

use reqwest::Method;
use serde_json::Value;
use std::collections::BTreeMap;

/// Configuration for a single request, built fresh per call.
///
/// Headers are a plain string map so interceptors can inspect and rewrite them
/// without touching reqwest types; the body, when present, is already
/// serialized JSON.
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub method: Method,
    pub headers: BTreeMap<String, String>,
    pub body: Option<String>,
}

impl RequestConfig {
    /// Creates a config for a body-less request with the default JSON headers.
    pub fn new(method: Method) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            method,
            headers,
            body: None,
        }
    }

    /// Creates a config carrying `data` serialized as the JSON body.
    pub fn json(method: Method, data: &Value) -> Self {
        let mut config = Self::new(method);
        config.body = Some(data.to_string());
        config
    }

    /// Sets a header, replacing any existing value for that name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Appends URL-encoded query parameters to an endpoint string.
///
/// The query becomes part of the endpoint, so cached GETs are keyed on the
/// full path including parameters.
pub fn with_query(endpoint: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return endpoint.to_string();
    }

    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in params {
        serializer.append_pair(name, value);
    }

    let separator = if endpoint.contains('?') { '&' } else { '?' };
    format!("{}{}{}", endpoint, separator, serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_sets_json_content_type() {
        let config = RequestConfig::new(Method::GET);
        assert_eq!(
            config.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert!(config.body.is_none());
    }

    #[test]
    fn test_json_serializes_body() {
        let config = RequestConfig::json(Method::POST, &json!({"name": "John Doe"}));
        assert_eq!(config.body.as_deref(), Some(r#"{"name":"John Doe"}"#));
    }

    #[test]
    fn test_header_replaces_existing() {
        let config = RequestConfig::new(Method::GET)
            .header("X-Request-Id", "1")
            .header("X-Request-Id", "2");
        assert_eq!(
            config.headers.get("X-Request-Id").map(String::as_str),
            Some("2")
        );
    }

    #[test]
    fn test_with_query_encodes_pairs() {
        let endpoint = with_query("/users", &[("page", "1"), ("limit", "10")]);
        assert_eq!(endpoint, "/users?page=1&limit=10");
    }

    #[test]
    fn test_with_query_escapes_values() {
        let endpoint = with_query("/users/search", &[("q", "John Doe"), ("order", "asc")]);
        assert_eq!(endpoint, "/users/search?q=John+Doe&order=asc");
    }

    #[test]
    fn test_with_query_appends_to_existing_query() {
        let endpoint = with_query("/users?role=admin", &[("page", "2")]);
        assert_eq!(endpoint, "/users?role=admin&page=2");
    }

    #[test]
    fn test_with_query_empty_params() {
        assert_eq!(with_query("/users", &[]), "/users");
    }
}
