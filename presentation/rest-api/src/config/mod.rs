pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod env;
pub mod openai_config;
pub mod recommendation_config;
pub mod server_config;
