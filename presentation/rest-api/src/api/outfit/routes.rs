use std::sync::Arc;

use poem::http::StatusCode;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::outfit::use_cases::recommend::{
    RecommendOutfitsParams, RecommendOutfitsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::outfit::dto::{OutfitRecommendationResponse, RecommendOutfitsRequest};
use crate::api::tags::ApiTags;

pub struct OutfitApi {
    recommend_use_case: Arc<dyn RecommendOutfitsUseCase>,
}

impl OutfitApi {
    pub fn new(recommend_use_case: Arc<dyn RecommendOutfitsUseCase>) -> Self {
        Self { recommend_use_case }
    }
}

/// Outfit API
///
/// Endpoints for outfit recommendations built from the shopper's activity.
#[OpenApi]
impl OutfitApi {
    /// Recommend outfits
    ///
    /// Returns a basic outfit (top + bottom), a layered outfit
    /// (top + bottom + outer) and up to five extra products. Every id is
    /// guaranteed to exist in the catalog. When the generator is slow or its
    /// answer is unusable, a deterministic catalog-order fallback is returned
    /// with `source = fallback`.
    #[oai(path = "/recommendations/outfits", method = "post", tag = "ApiTags::Recommendations")]
    async fn recommend_outfits(
        &self,
        body: Json<RecommendOutfitsRequest>,
    ) -> RecommendOutfitsResponse {
        let params = RecommendOutfitsParams {
            behavior: body.0.into_behavior(),
        };

        match self.recommend_use_case.execute(params).await {
            Ok(outfit) => RecommendOutfitsResponse::Ok(Json(outfit.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                if status == StatusCode::SERVICE_UNAVAILABLE {
                    RecommendOutfitsResponse::ServiceUnavailable(json)
                } else {
                    RecommendOutfitsResponse::InternalError(json)
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RecommendOutfitsResponse {
    #[oai(status = 200)]
    Ok(Json<OutfitRecommendationResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
    #[oai(status = 503)]
    ServiceUnavailable(Json<ErrorResponse>),
}
