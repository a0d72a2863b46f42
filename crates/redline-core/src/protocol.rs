//! Wire types for the redaction server endpoints

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Body returned by `POST /preview`.
///
/// The server sends either `preview` or `error`; a non-empty `error` wins
/// when both are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PreviewResponse {
    pub fn preview(text: impl Into<String>) -> Self {
        Self {
            preview: Some(text.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            preview: None,
            error: Some(message.into()),
        }
    }

    /// Preview text, or the server-reported error
    pub fn into_result(self) -> Result<String> {
        match (self.error, self.preview) {
            (Some(error), _) if !error.is_empty() => Err(Error::Server(error)),
            (_, Some(preview)) => Ok(preview),
            _ => Err(Error::Decode("preview response carries neither preview nor error".to_string())),
        }
    }
}

/// Body sent to `POST /update_redaction`.
///
/// `action` is whatever the user typed; the server validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub term: String,
    pub action: String,
}

impl UpdateRequest {
    pub fn new(term: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            action: action.into(),
        }
    }
}

/// Body returned by `POST /update_redaction`. A missing flag reads as failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    #[serde(default)]
    pub success: bool,
}

/// One paragraph matching a search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// 1-based paragraph index
    pub paragraph: usize,
    pub context: String,
}

/// Body returned by `POST /search`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub results: Vec<SearchHit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    pub fn into_result(self) -> Result<Vec<SearchHit>> {
        if self.success {
            Ok(self.results)
        } else {
            Err(Error::Server(
                self.error.unwrap_or_else(|| "search failed".to_string()),
            ))
        }
    }
}
