//! Core domain models for redline
//!
//! This crate contains:
//! - Redaction actions and terms
//! - The redaction form (field naming conventions)
//! - Wire types for the preview, update and search endpoints

pub mod action;
pub mod error;
pub mod form;
pub mod markup;
pub mod protocol;

pub use action::Action;
pub use error::{Error, Result};
pub use form::{RedactionForm, Term};
pub use markup::preview_markup;
pub use protocol::{
    PreviewResponse, SearchHit, SearchResponse, UpdateRequest, UpdateResponse,
};
