use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use serde::{Deserialize, Serialize};

use crate::store::{NoteRepository, RepoError};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn NoteRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn NoteRepository>) -> Self {
        Self { repo }
    }
}

/// Body of every non-2xx response produced by a handler.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq)]
pub struct ErrorBody {
    pub error_code: u16,
    pub error_msg: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error_code: status.as_u16(),
            error_msg: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<RepoError> for ApiError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => Self::NotFound,
            RepoError::Transient(_) => {
                tracing::warn!(error = %err, "transient store failure");
                Self::Internal(err.to_string())
            }
            RepoError::Fatal(_) => {
                tracing::error!(error = %err, "store failure");
                Self::Internal(err.to_string())
            }
        }
    }
}
