use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::outfit::errors::RecommendationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for RecommendationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            RecommendationError::CatalogUnavailable => {
                (StatusCode::SERVICE_UNAVAILABLE, "CatalogError")
            }
            RecommendationError::GenerationParse
            | RecommendationError::GenerationFailed
            | RecommendationError::GenerationTimeout => {
                (StatusCode::INTERNAL_SERVER_ERROR, "GenerationError")
            }
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: self.to_string(),
            }),
        )
    }
}
