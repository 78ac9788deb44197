//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. The error taxonomy
//! mirrors the failure modes of the store: missing catalog entries, rejected
//! form input, rejected uploads, and infrastructure failures. `Error` also
//! implements [`IntoResponse`] so handlers can bubble failures straight out of
//! a request with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Phone {id} not found")]
    PhoneNotFound { id: i64 },

    #[error("{message}")]
    Validation { message: String },

    #[error("File type not allowed: {filename}")]
    UploadRejected { filename: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// HTTP status for this error when it escapes a handler unhandled.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::PhoneNotFound { .. } => StatusCode::NOT_FOUND,
            Error::Validation { .. } | Error::UploadRejected { .. } => StatusCode::BAD_REQUEST,
            Error::Config { .. } | Error::Database(_) | Error::Io(_) | Error::EnvVar(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, self.to_string()).into_response()
    }
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
