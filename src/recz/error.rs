use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReczError {
    #[error("The --{0} flag has to be specified")]
    MissingArgument(&'static str),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Operation {0} not allowed")]
    UnsupportedOperation(String),

    #[error("Record id must not be empty")]
    EmptyId,
}

pub type Result<T> = std::result::Result<T, ReczError>;
