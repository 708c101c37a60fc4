use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::CatalogProduct;

/// Read-only port to the catalog source.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Returns up to `limit` candidate products in a stable order.
    async fn get_candidates(&self, limit: usize) -> Result<Vec<CatalogProduct>, RepositoryError>;
}
