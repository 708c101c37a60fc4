use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::logger::Logger;
use crate::domain::outfit::errors::RecommendationError;
use crate::domain::outfit::model::{
    OutfitRecommendation, Recommendation, RecommendationSource,
};
use crate::domain::outfit::prompt::compile_prompt;
use crate::domain::outfit::recommender::OutfitRecommender;
use crate::domain::outfit::use_cases::recommend::{
    RecommendOutfitsParams, RecommendOutfitsUseCase,
};

pub struct RecommendOutfitsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub recommender: Arc<OutfitRecommender>,
    pub logger: Arc<dyn Logger>,
    pub timeout: Duration,
    pub candidate_limit: usize,
}

#[async_trait]
impl RecommendOutfitsUseCase for RecommendOutfitsUseCaseImpl {
    async fn execute(
        &self,
        params: RecommendOutfitsParams,
    ) -> Result<OutfitRecommendation, RecommendationError> {
        self.logger.info(&format!(
            "Recommending outfits ({} viewed, {} in cart)",
            params.behavior.viewed.len(),
            params.behavior.cart.len()
        ));

        let candidates = self
            .repository
            .get_candidates(self.candidate_limit)
            .await
            .map_err(|e| {
                self.logger
                    .error(&format!("Failed to load catalog candidates: {}", e));
                RecommendationError::CatalogUnavailable
            })?;

        if candidates.is_empty() {
            self.logger.warn("Catalog is empty, skipping generation");
            return Ok(OutfitRecommendation::new(
                Recommendation::default(),
                RecommendationSource::Fallback,
            ));
        }

        if params.behavior.is_empty() {
            self.logger
                .debug("No shopper activity, recommending from the catalog alone");
        }

        let catalog = self.recommender.typed_catalog(&candidates);
        let prompt = compile_prompt(&params.behavior, &catalog);
        self.logger.debug(&format!(
            "Prompt {} built from {} candidates",
            prompt.fingerprint(),
            catalog.len()
        ));

        let generated = tokio::time::timeout(
            self.timeout,
            self.recommender.recommend_with_prompt(&prompt, &catalog),
        )
        .await
        .unwrap_or(Err(RecommendationError::GenerationTimeout));

        match generated {
            Ok(recommendation) => {
                self.logger.info(&format!(
                    "Generated outfits: {} basic, {} layered, {} recommendations",
                    recommendation.basic_outfit.len(),
                    recommendation.layered_outfit.len(),
                    recommendation.recommendations.len()
                ));
                Ok(OutfitRecommendation::new(
                    recommendation,
                    RecommendationSource::Generated,
                ))
            }
            Err(e) => {
                self.logger
                    .warn(&format!("Using fallback outfits: {}", e));
                Ok(OutfitRecommendation::new(
                    self.recommender.fallback(&catalog),
                    RecommendationSource::Fallback,
                ))
            }
        }
    }
}
