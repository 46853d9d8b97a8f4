use reqwest::StatusCode;
use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("server error: {0}")]
    ServerError(StatusCode),

    #[error("json error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("io error: {0}")]
    IoError(#[from] io::Error),

    #[error("bussiness error: {0}")]
    BusinessError(String),
}
