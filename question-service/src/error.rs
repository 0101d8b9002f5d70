use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use question_store::StoreError;
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{1}")]
    Server(StatusCode, String),
    // Froms
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl Error {
    fn status(&self) -> StatusCode {
        match self {
            Error::Server(c, _) => *c,
            Error::Store(StoreError::Validation(_)) => StatusCode::BAD_REQUEST,
            Error::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
            Error::Store(StoreError::Unavailable(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Error::Store(StoreError::NotFound(_)) => "Question not found".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = ?self, "request failed");
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

impl From<Error> for StatusCode {
    fn from(error: Error) -> Self {
        error.status()
    }
}
