//! Page model for the redaction editor
//!
//! This crate provides:
//! - An element arena standing in for the browser DOM
//! - Semantic roles resolved once per element
//! - Loading of server-rendered markup

pub mod error;
pub mod html;
pub mod node;
pub mod page;
pub mod role;

pub use error::{PageError, Result};
pub use node::{Element, ElementBuilder, NodeId};
pub use page::Page;
pub use role::{Role, Scope};
