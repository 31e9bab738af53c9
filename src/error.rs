use alchm_celestial::CelestialError;
use alchm_recommendation::RecommendationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Celestial error: {0}")]
    Celestial(#[from] CelestialError),

    #[error("Recommendation error: {0}")]
    Recommendation(#[from] RecommendationError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Celestial(CelestialError::IncompletePositionData { .. }) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Celestial(_) | AppError::Recommendation(_) => StatusCode::BAD_REQUEST,
        };

        tracing::debug!(error = %self, "request rejected");

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
