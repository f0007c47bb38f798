use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::models::ErrorResponse;
use thiserror::Error;

pub type RoastResult<T> = Result<T, RoastError>;

#[derive(Error, Debug)]
pub enum RoastError {
    /// Missing or empty request field. Detected before any I/O.
    #[error("{0}")]
    InvalidRequest(String),
    /// The external provider call failed. Terminal for the request; there is
    /// no downgrade to the fallback pool once the external path was chosen.
    #[error("generation failed: {0}")]
    Generation(String),
}

impl IntoResponse for RoastError {
    fn into_response(self) -> Response {
        match self {
            RoastError::InvalidRequest(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            RoastError::Generation(cause) => {
                // Operators get the cause; the caller gets a generic message.
                tracing::error!("Roast generation failed: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: "Failed to generate roast".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
