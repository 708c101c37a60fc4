use sqlx::FromRow;

use business::domain::catalog::model::CatalogProduct;

#[derive(Debug, FromRow)]
pub struct CatalogProductEntity {
    pub id: String,
    pub name: String,
    pub category: Option<String>,
}

impl CatalogProductEntity {
    pub fn into_domain(self) -> CatalogProduct {
        CatalogProduct::new(self.id, self.name, self.category.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_category_to_empty_string() {
        let entity = CatalogProductEntity {
            id: "65f1a2b3c4d5e6f708192a3b".to_string(),
            name: "Wool Coat".to_string(),
            category: None,
        };

        let product = entity.into_domain();

        assert_eq!(product.id.as_str(), "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(product.name, "Wool Coat");
        assert_eq!(product.category, "");
    }
}
