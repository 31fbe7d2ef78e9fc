use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("event error: {0}")]
    Event(String),
    #[error("comparison error: {0}")]
    Comparison(String),
    #[error("the compare response did not include a file list")]
    MissingFileList,
    #[error("output error: {0}")]
    Output(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
