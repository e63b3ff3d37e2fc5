//! Error taxonomy for the REST client layers.

use reqwest::StatusCode;

/// Convenience alias used throughout the client layers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by a client call.
///
/// HTTP failures get one variant per status category, with `Http` carrying the
/// numeric code for everything outside the named set. Interceptor errors are
/// passed through verbatim from whatever the callback returned.
#[derive(Debug)]
pub enum ApiError {
    /// No response was obtained (connect failure, dropped connection, ...).
    Transport(reqwest::Error),
    /// The response body could not be parsed as JSON.
    Decode(serde_json::Error),
    /// HTTP 400.
    BadRequest(String),
    /// HTTP 401.
    Unauthorized(String),
    /// HTTP 403.
    Forbidden(String),
    /// HTTP 404.
    NotFound(String),
    /// HTTP 409.
    Conflict(String),
    /// HTTP 500.
    ServerError(String),
    /// Any other non-success status, carrying the numeric code.
    Http { status: u16, message: String },
    /// Error returned by a request or response interceptor.
    Interceptor(anyhow::Error),
}

impl ApiError {
    /// Maps a non-success status code to its error variant.
    pub fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ApiError::BadRequest("Invalid request".to_string()),
            StatusCode::UNAUTHORIZED => {
                ApiError::Unauthorized("Authentication required".to_string())
            }
            StatusCode::FORBIDDEN => ApiError::Forbidden("Access forbidden".to_string()),
            StatusCode::NOT_FOUND => ApiError::NotFound("Resource not found".to_string()),
            StatusCode::CONFLICT => ApiError::Conflict("Data conflict".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR => {
                ApiError::ServerError("Internal server error".to_string())
            }
            s => ApiError::Http {
                status: s.as_u16(),
                message: s
                    .canonical_reason()
                    .unwrap_or("Unknown HTTP error")
                    .to_string(),
            },
        }
    }

    /// Numeric status code for the HTTP-category variants, `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest(_) => Some(400),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Conflict(_) => Some(409),
            ApiError::ServerError(_) => Some(500),
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "Transport error: {}", e),
            ApiError::Decode(e) => write!(f, "Failed to parse response body: {}", e),
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ServerError(msg) => write!(f, "Server error: {}", msg),
            ApiError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            // Interceptor errors pass through exactly as raised.
            ApiError::Interceptor(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Decode(e) => Some(e),
            ApiError::Interceptor(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
