use std::sync::Arc;

use logger::TracingLogger;
use openai::client::OpenAIClient;
use openai::outfit_generator::OutfitGeneratorOpenAI;
use persistence::catalog::repository::CatalogRepositoryPostgres;

use business::application::outfit::recommend::RecommendOutfitsUseCaseImpl;
use business::domain::catalog::classifier::KeywordGarmentClassifier;
use business::domain::outfit::recommender::OutfitRecommender;

use crate::config::openai_config::OpenAIConfig;
use crate::config::recommendation_config::RecommendationConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub outfit_api: crate::api::outfit::routes::OutfitApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, recommendation: &RecommendationConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let catalog_repository = Arc::new(CatalogRepositoryPostgres::new(pool));

        let openai_config = OpenAIConfig::from_env()?;
        let openai_client = OpenAIClient::with_base_url(openai_config.api_key, openai_config.base_url);
        let outfit_generator = Arc::new(OutfitGeneratorOpenAI::new(openai_client, openai_config.model));

        // Core
        let recommender = Arc::new(OutfitRecommender {
            classifier: Arc::new(KeywordGarmentClassifier),
            generator: outfit_generator,
            policy: recommendation.policy,
        });

        // Outfit use cases
        let recommend_use_case = Arc::new(RecommendOutfitsUseCaseImpl {
            repository: catalog_repository,
            recommender,
            logger,
            timeout: recommendation.timeout,
            candidate_limit: recommendation.candidate_limit,
        });

        let outfit_api = crate::api::outfit::routes::OutfitApi::new(recommend_use_case);

        Ok(Self {
            health_api,
            outfit_api,
        })
    }
}
