use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::catalog::model::CatalogProduct;
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::CatalogProductEntity;

pub struct CatalogRepositoryPostgres {
    pool: PgPool,
}

impl CatalogRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryPostgres {
    async fn get_candidates(&self, limit: usize) -> Result<Vec<CatalogProduct>, RepositoryError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        // `id` breaks ties so the candidate order, and with it the
        // sanitizer's repair order, is stable between requests.
        let entities = sqlx::query_as::<_, CatalogProductEntity>(
            "SELECT id, name, category FROM products WHERE is_active ORDER BY created_at DESC, id LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
