use std::sync::Arc;

use crate::domain::catalog::builder::build_typed_catalog;
use crate::domain::catalog::classifier::GarmentClassifier;
use crate::domain::catalog::model::{CatalogProduct, TypedProduct};

use super::errors::RecommendationError;
use super::extractor::extract_recommendation;
use super::model::{
    BehaviorSignal, OutfitPolicy, PromptPayload, RawRecommendation, Recommendation,
};
use super::prompt::compile_prompt;
use super::sanitizer::sanitize_with_policy;
use super::services::OutfitGeneratorService;

/// Composes catalog typing, prompt compilation, one generator call,
/// extraction and sanitization.
pub struct OutfitRecommender {
    pub classifier: Arc<dyn GarmentClassifier>,
    pub generator: Arc<dyn OutfitGeneratorService>,
    pub policy: OutfitPolicy,
}

impl OutfitRecommender {
    pub fn typed_catalog(&self, candidates: &[CatalogProduct]) -> Vec<TypedProduct> {
        build_typed_catalog(candidates, self.classifier.as_ref())
    }

    pub async fn recommend(
        &self,
        behavior: &BehaviorSignal,
        candidates: &[CatalogProduct],
    ) -> Result<Recommendation, RecommendationError> {
        let catalog = self.typed_catalog(candidates);
        let prompt = compile_prompt(behavior, &catalog);
        self.recommend_with_prompt(&prompt, &catalog).await
    }

    /// Same as `recommend` for a prompt already compiled from `catalog`.
    pub async fn recommend_with_prompt(
        &self,
        prompt: &PromptPayload,
        catalog: &[TypedProduct],
    ) -> Result<Recommendation, RecommendationError> {
        let raw_text = self.generator.generate(prompt).await?;
        let raw = extract_recommendation(&raw_text)?;
        Ok(sanitize_with_policy(&raw, catalog, self.policy))
    }

    /// Non-generative result: the sanitizer applied to an empty answer.
    pub fn fallback(&self, catalog: &[TypedProduct]) -> Recommendation {
        sanitize_with_policy(&RawRecommendation::default(), catalog, self.policy)
    }
}
