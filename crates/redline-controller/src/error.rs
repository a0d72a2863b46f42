use redline_page::PageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Core(#[from] redline_core::Error),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Command {command} is missing argument: {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, ControllerError>;
