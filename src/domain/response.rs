//! Channel-agnostic structured response.
//!
//! What the caller gets back for one command. Adapters decide whether this
//! becomes an embed, a plain message or a JSON line.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::CorrelationId;

/// Color used when no configured palette is available (alert red).
pub const FALLBACK_ERROR_COLOR: u32 = 0xE74C3C;

/// Severity classification of a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseKind::Success => "success",
            ResponseKind::Info => "info",
            ResponseKind::Warning => "warning",
            ResponseKind::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Author block shown on success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseAuthor {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub kind: ResponseKind,

    pub title: String,

    pub body: String,

    /// 24-bit RGB color for the severity.
    pub color: u32,

    /// Present on every `Error` response: `Execution ID: <correlation id>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<ResponseAuthor>,

    /// Trace identifier of the invocation that produced this response.
    pub correlation_id: CorrelationId,
}

impl Response {
    /// Minimal error response used when rendering itself failed.
    pub fn fallback(correlation_id: CorrelationId) -> Self {
        Self {
            kind: ResponseKind::Error,
            title: "Something went wrong".to_string(),
            body: "The command could not be completed. Please try again.".to_string(),
            color: FALLBACK_ERROR_COLOR,
            footer: Some(execution_footer(correlation_id)),
            author: None,
            correlation_id,
        }
    }
}

/// Footer text carrying the correlation identifier.
pub fn execution_footer(correlation_id: CorrelationId) -> String {
    format!("Execution ID: {}", correlation_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_an_error_with_footer() {
        let id = CorrelationId::new();
        let response = Response::fallback(id);

        assert_eq!(response.kind, ResponseKind::Error);
        assert_eq!(response.footer, Some(format!("Execution ID: {}", id)));
        assert_eq!(response.correlation_id, id);
    }

    #[test]
    fn serialization_omits_absent_blocks() {
        let response = Response::fallback(CorrelationId::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["kind"], "error");
        assert!(json.get("author").is_none());
    }
}
