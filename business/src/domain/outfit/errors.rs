#[derive(Debug, thiserror::Error)]
pub enum RecommendationError {
    /// Generator text held no well-formed recommendation object.
    #[error("recommendation.generation_parse")]
    GenerationParse,
    #[error("recommendation.generation_failed")]
    GenerationFailed,
    #[error("recommendation.generation_timeout")]
    GenerationTimeout,
    #[error("recommendation.catalog_unavailable")]
    CatalogUnavailable,
}
