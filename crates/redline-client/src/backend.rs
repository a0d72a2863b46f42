//! Backend trait

use async_trait::async_trait;
use redline_core::{
    PreviewResponse, RedactionForm, Result, SearchResponse, UpdateRequest, UpdateResponse,
};

/// The server-side redaction engine, as seen from the editor.
///
/// Implementations report transport and decoding problems as errors; a
/// server that answers with `{error}` or `{success: false}` is a successful
/// call whose payload says so.
#[async_trait]
pub trait RedactionBackend: Send + Sync {
    /// Render the document with the given form state applied
    async fn preview(&self, form: &RedactionForm) -> Result<PreviewResponse>;

    /// Change the action of a single term
    async fn update_redaction(&self, request: &UpdateRequest) -> Result<UpdateResponse>;

    /// Find paragraphs containing `query`
    async fn search(&self, query: &str) -> Result<SearchResponse>;
}
