//! Error types for redline-page

use thiserror::Error;

use crate::NodeId;

pub type Result<T> = std::result::Result<T, PageError>;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("No such node: {0}")]
    UnknownNode(NodeId),

    #[error("Node {0} is not an element")]
    NotAnElement(NodeId),

    #[error("Missing element: {0}")]
    MissingElement(String),
}
