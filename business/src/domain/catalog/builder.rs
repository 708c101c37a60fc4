use super::classifier::GarmentClassifier;
use super::model::{CatalogProduct, TypedProduct};

/// Annotates each candidate with its garment type and group.
///
/// Output order matches input order; the sanitizer relies on it as the
/// tie-break when it repairs outfits.
pub fn build_typed_catalog(
    products: &[CatalogProduct],
    classifier: &dyn GarmentClassifier,
) -> Vec<TypedProduct> {
    products
        .iter()
        .map(|p| {
            let raw_type = classifier.classify_name(&p.name);
            TypedProduct {
                id: p.id.clone(),
                name: p.name.clone(),
                category: p.category.clone(),
                raw_type,
                group: classifier.classify_group(raw_type),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::classifier::KeywordGarmentClassifier;
    use crate::domain::catalog::model::{GarmentGroup, GarmentType};

    struct FixedClassifier(GarmentType);

    impl GarmentClassifier for FixedClassifier {
        fn classify_name(&self, _name: &str) -> GarmentType {
            self.0
        }
    }

    #[test]
    fn should_return_empty_catalog_for_no_products() {
        let catalog = build_typed_catalog(&[], &KeywordGarmentClassifier);
        assert!(catalog.is_empty());
    }

    #[test]
    fn should_keep_input_order_and_attach_types() {
        let products = vec![
            CatalogProduct::new("p1", "Slim Jeans", "men"),
            CatalogProduct::new("p2", "Linen Shirt", "men"),
            CatalogProduct::new("p3", "Wool Coat", "women"),
        ];

        let catalog = build_typed_catalog(&products, &KeywordGarmentClassifier);

        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2", "p3"]);
        assert_eq!(catalog[0].raw_type, GarmentType::Jeans);
        assert_eq!(catalog[0].group, GarmentGroup::Bottom);
        assert_eq!(catalog[1].group, GarmentGroup::Top);
        assert_eq!(catalog[2].group, GarmentGroup::Outer);
        assert_eq!(catalog[2].category, "women");
    }

    #[test]
    fn should_use_injected_classifier() {
        let products = vec![CatalogProduct::new("x", "Anything", "misc")];

        let catalog = build_typed_catalog(&products, &FixedClassifier(GarmentType::Blazer));

        assert_eq!(catalog[0].raw_type, GarmentType::Blazer);
        assert_eq!(catalog[0].group, GarmentGroup::Outer);
    }
}
