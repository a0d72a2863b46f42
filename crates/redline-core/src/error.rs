use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode response: {0}")]
    Decode(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Update rejected for term: {0}")]
    UpdateRejected(String),

    #[error("Invalid action: {0}")]
    InvalidAction(String),

    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
