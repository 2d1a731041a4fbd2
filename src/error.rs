// src/error.rs
use std::fmt;

/// Failure of a single call to the analysis service. Every variant resolves
/// to the same fallback advice; the distinction exists for the logs.
#[derive(Debug)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, I/O).
    Request(reqwest::Error),
    /// The service answered with a non-2xx status.
    Status(reqwest::StatusCode),
    /// The response body could not be decoded as advice.
    Malformed(reqwest::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request(e) => write!(f, "request failed: {}", e),
            ApiError::Status(code) => write!(f, "service returned HTTP {}", code),
            ApiError::Malformed(e) => write!(f, "malformed advice payload: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Request(e) | ApiError::Malformed(e) => Some(e),
            ApiError::Status(_) => None,
        }
    }
}
