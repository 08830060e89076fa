
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Command Error: {0}")]
    Command(String),

    #[error("Validation Error: {0}")]
    Validation(String),

    #[error("Parse Error: {0}")]
    Parse(String),
}

pub type SwResult<T> = Result<T, SweepError>;
