use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::utils::error::ViewerError;

/// Failures that escape page rendering itself.
///
/// Upstream and transport errors never reach here; they are rendered
/// inline as part of the page.
pub struct AppError(ViewerError);

impl From<ViewerError> for AppError {
    fn from(err: ViewerError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!("Internal server error: {:?}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal server error: {}", self.0),
        )
            .into_response()
    }
}
