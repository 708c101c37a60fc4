use async_trait::async_trait;

use super::errors::RecommendationError;
use super::model::PromptPayload;

/// Service port for the external generative recommender.
///
/// Returns the generator's raw text untouched. Transport failures surface as
/// `RecommendationError::GenerationFailed`; implementations never retry.
#[async_trait]
pub trait OutfitGeneratorService: Send + Sync {
    async fn generate(&self, prompt: &PromptPayload) -> Result<String, RecommendationError>;
}
