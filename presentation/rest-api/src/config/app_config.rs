use super::{
    cors_config, recommendation_config::RecommendationConfig, server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            recommendation: RecommendationConfig::from_env(),
        }
    }
}
