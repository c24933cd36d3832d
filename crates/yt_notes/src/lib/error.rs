use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::yt::TranscriptError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),
    #[error("No transcript available: {0}")]
    TranscriptUnavailable(String),
    #[error("{0}")]
    Upstream(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::TranscriptUnavailable(_) => StatusCode::NOT_FOUND,
            Error::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TranscriptError> for Error {
    fn from(value: TranscriptError) -> Self {
        if value.is_unavailable() {
            Error::TranscriptUnavailable(value.to_string())
        } else {
            Error::Upstream(format!("Transcript error: {value}"))
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = self.to_string();

        if status.is_server_error() {
            tracing::error!(%status, %detail, "Request failed");
        } else {
            tracing::warn!(%status, %detail, "Request rejected");
        }

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
