//! Client-side error types for provider requests.

use serde::{Deserialize, Serialize};

/// RFC7807 Problem Details (application/problem+json)
///
/// The content provider wraps request failures in this envelope; parsing it
/// lets the page surface a meaningful message instead of a raw status code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub type_url: String,
    /// A short, human-readable summary of the problem type.
    pub title: String,
    /// HTTP status code.
    pub status: u16,
    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// A URI reference that identifies the specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Attempt to parse an RFC7807 (or RFC7807-ish) JSON body into a user-facing
/// message. Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

/// Error returned by the provider API client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Http { status: u16, body: String },
    Deserialize(String),
}

impl ApiError {
    /// A message fit for display in the page's error state.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { body, .. } => {
                try_problem_detail(body).unwrap_or_else(|| self.to_string())
            }
            other => other.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {}", msg),
            ApiError::Http { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Deserialize(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn problem_detail_prefers_detail_over_title() {
        let body = r#"{"type":"about:blank","title":"Not Found","status":404,"detail":"No current post is published."}"#;
        assert_eq!(
            try_problem_detail(body).as_deref(),
            Some("No current post is published.")
        );
    }

    #[test]
    fn problem_detail_falls_back_to_title() {
        let body = r#"{"type":"about:blank","title":"Not Found","status":404}"#;
        assert_eq!(try_problem_detail(body).as_deref(), Some("Not Found"));
    }

    #[test]
    fn non_problem_bodies_yield_no_detail() {
        assert_eq!(try_problem_detail("<html>oops</html>"), None);
        assert_eq!(try_problem_detail(""), None);
    }

    #[test]
    fn user_message_unwraps_http_problem_bodies() {
        let err = ApiError::Http {
            status: 404,
            body: r#"{"type":"about:blank","title":"Not Found","status":404,"detail":"Gone."}"#
                .to_string(),
        };
        assert_eq!(err.user_message(), "Gone.");

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.user_message(), "Network error: connection refused");
    }
}
