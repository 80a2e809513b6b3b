// SPDX-FileCopyrightText: 2026 Lingo Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canonical error taxonomy for provider calls.
//!
//! Every failure that leaves an adapter is a [`LingoError`]. The variant is
//! chosen where the failure happens (credential lookup, HTTP call, JSON
//! parse, schema check), so callers can branch on [`LingoError::kind`]
//! without looking at message text.

use serde::Deserialize;
use strum::{Display, EnumString};
use thiserror::Error;

/// Boxed error cause carried by transport and parse failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The error type returned by every provider operation.
#[derive(Debug, Error)]
pub enum LingoError {
    /// Credentials or endpoint are missing, malformed, or rejected by the vendor.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network failure, non-success HTTP status, or broken response stream.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        source: Option<BoxError>,
    },

    /// The vendor response could not be parsed as JSON.
    #[error("malformed response: {message}")]
    Parse {
        message: String,
        source: Option<BoxError>,
    },

    /// The vendor returned JSON that does not match the suggestion schema.
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// Anything that fits none of the above.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Canonical error kind, independent of vendor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ErrorKind {
    ConfigurationError,
    TransportError,
    ParseError,
    SchemaError,
    UnknownError,
}

impl LingoError {
    /// Returns the canonical kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            LingoError::Config(_) => ErrorKind::ConfigurationError,
            LingoError::Transport { .. } => ErrorKind::TransportError,
            LingoError::Parse { .. } => ErrorKind::ParseError,
            LingoError::Schema(_) => ErrorKind::SchemaError,
            LingoError::Internal(_) => ErrorKind::UnknownError,
        }
    }

    /// Builds a transport error wrapping an underlying cause.
    pub fn transport(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        LingoError::Transport {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Builds the error reported when a provider has no usable credentials.
    pub fn missing_credentials(display_name: &str, settings_key: &str) -> Self {
        LingoError::Config(format!(
            "{display_name} is not configured; set `{settings_key}` in lingo.toml"
        ))
    }
}

/// Generic `{"error": {...}}` envelope shared by OpenAI-style, Anthropic and Gemini APIs.
#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    type_: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Maps a non-success vendor HTTP response to a canonical error.
///
/// 401 and 403 mean the credentials were rejected and are reported as
/// configuration errors; every other status is a transport error. The vendor's
/// own error message is used when the body carries one.
pub fn normalize_api_error(vendor: &str, status: u16, body: &str) -> LingoError {
    let detail = match serde_json::from_str::<ApiErrorEnvelope>(body) {
        Ok(envelope) => {
            let label = envelope.error.type_.or(envelope.error.status);
            match (label, envelope.error.message) {
                (Some(label), Some(message)) => format!("{label}: {message}"),
                (None, Some(message)) => message,
                (Some(label), None) => label,
                (None, None) => body.to_string(),
            }
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };

    if matches!(status, 401 | 403) {
        return LingoError::Config(format!(
            "{vendor} rejected the credentials ({status}): {detail}"
        ));
    }

    LingoError::Transport {
        message: format!("{vendor} API returned {status}: {detail}"),
        source: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(
            LingoError::Config("x".into()).kind(),
            ErrorKind::ConfigurationError
        );
        assert_eq!(
            LingoError::Transport {
                message: "x".into(),
                source: None
            }
            .kind(),
            ErrorKind::TransportError
        );
        assert_eq!(
            LingoError::Parse {
                message: "x".into(),
                source: None
            }
            .kind(),
            ErrorKind::ParseError
        );
        assert_eq!(LingoError::Schema("x".into()).kind(), ErrorKind::SchemaError);
        assert_eq!(
            LingoError::Internal("x".into()).kind(),
            ErrorKind::UnknownError
        );
    }

    #[test]
    fn message_mentioning_json_stays_transport() {
        let err = normalize_api_error("OpenAI", 500, "invalid JSON in upstream");
        assert_eq!(err.kind(), ErrorKind::TransportError);
    }

    #[test]
    fn openai_style_error_body_is_extracted() {
        let body = r#"{"error":{"message":"model not found","type":"invalid_request_error"}}"#;
        let err = normalize_api_error("OpenAI", 404, body);
        assert_eq!(err.kind(), ErrorKind::TransportError);
        let msg = err.to_string();
        assert!(msg.contains("invalid_request_error: model not found"), "got: {msg}");
        assert!(msg.contains("404"), "got: {msg}");
    }

    #[test]
    fn gemini_style_error_uses_status_label() {
        let body = r#"{"error":{"code":400,"message":"bad key","status":"INVALID_ARGUMENT"}}"#;
        let msg = normalize_api_error("Gemini", 400, body).to_string();
        assert!(msg.contains("INVALID_ARGUMENT: bad key"), "got: {msg}");
    }

    #[test]
    fn unauthorized_is_configuration_error() {
        let err = normalize_api_error("Claude", 401, r#"{"error":{"message":"invalid x-api-key"}}"#);
        assert_eq!(err.kind(), ErrorKind::ConfigurationError);
        assert!(err.to_string().contains("invalid x-api-key"));
    }

    #[test]
    fn empty_body_is_described() {
        let msg = normalize_api_error("Kimi", 502, "").to_string();
        assert!(msg.contains("empty response body"), "got: {msg}");
    }

    #[test]
    fn error_kind_display_round_trips() {
        use std::str::FromStr;
        for kind in [
            ErrorKind::ConfigurationError,
            ErrorKind::TransportError,
            ErrorKind::ParseError,
            ErrorKind::SchemaError,
            ErrorKind::UnknownError,
        ] {
            assert_eq!(ErrorKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }
}
