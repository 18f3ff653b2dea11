//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown storage backend: {0}")]
    UnknownStorage(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    #[error("invalid sort: {0}")]
    InvalidSort(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("storage: {0}")]
    Storage(String),
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }

    /// The underlying message without the variant prefix.
    pub fn message(&self) -> String {
        match self {
            AppError::NotFound(msg) | AppError::InvalidSort(msg) | AppError::Storage(msg) => {
                msg.clone()
            }
            AppError::Db(e) => e.to_string(),
        }
    }

    /// Failure for a specific endpoint: 404 with no body for missing records,
    /// otherwise `status` with `"<context>: <message>"` as a plain-text body.
    pub fn into_failure(self, status: StatusCode, context: &str) -> Failure {
        if self.is_not_found() {
            return Failure::NotFound;
        }
        Failure::Message {
            status,
            body: format!("{}: {}", context, self.message()),
        }
    }
}

/// Response produced by a handler that failed. Bodies are plain text, never JSON.
#[derive(Debug)]
pub enum Failure {
    NotFound,
    Message { status: StatusCode, body: String },
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        match self {
            Failure::NotFound => StatusCode::NOT_FOUND.into_response(),
            Failure::Message { status, body } => (status, body).into_response(),
        }
    }
}
