use async_trait::async_trait;

use crate::domain::outfit::errors::RecommendationError;
use crate::domain::outfit::model::{BehaviorSignal, OutfitRecommendation};

pub struct RecommendOutfitsParams {
    pub behavior: BehaviorSignal,
}

#[async_trait]
pub trait RecommendOutfitsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RecommendOutfitsParams,
    ) -> Result<OutfitRecommendation, RecommendationError>;
}
