use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use tracing::{error, warn};

use crate::error::BingoError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// A `BingoError` on its way out of a handler.
#[derive(Debug)]
pub struct ApiError(pub BingoError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BingoError::Validation(_) | BingoError::NotDrawing | BingoError::PoolExhausted => {
                StatusCode::BAD_REQUEST
            }
            BingoError::DuplicateKey(_) => StatusCode::CONFLICT,
            BingoError::NotFound(_) => StatusCode::NOT_FOUND,
            BingoError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<BingoError> for ApiError {
    fn from(err: BingoError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(target: "api", error = %self.0, "request failed");
            "internal server error".to_string()
        } else {
            warn!(target: "api", status = status.as_u16(), error = %self.0, "request rejected");
            self.0.to_string()
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
