use super::model::{GarmentGroup, GarmentType};

/// Port for garment classification.
///
/// Implementations must be pure and total: names that cannot be classified
/// map to `GarmentType::Unknown`, which belongs to `GarmentGroup::Other`.
pub trait GarmentClassifier: Send + Sync {
    fn classify_name(&self, name: &str) -> GarmentType;

    fn classify_group(&self, garment_type: GarmentType) -> GarmentGroup {
        garment_type.group()
    }
}

/// Keyword table checked in order; the first entry found among the tokens of
/// the lowercased product name wins. Tokens are split on non-alphanumerics, a
/// space in an entry spans consecutive tokens and a trailing `*` matches a
/// token prefix. Dresses come first so "Shirt Dress" stays out of outfits,
/// and material words (denim, knit) come last so the garment noun decides.
const KEYWORDS: &[(&str, GarmentType)] = &[
    ("dress shirt", GarmentType::Shirt),
    ("dress", GarmentType::Dress),
    ("vestido", GarmentType::Dress),
    ("blazer", GarmentType::Blazer),
    ("americana", GarmentType::Blazer),
    ("cardigan", GarmentType::Cardigan),
    ("coat", GarmentType::Coat),
    ("abrigo", GarmentType::Coat),
    ("parka", GarmentType::Coat),
    ("jacket", GarmentType::Jacket),
    ("chaqueta", GarmentType::Jacket),
    ("cazadora", GarmentType::Jacket),
    ("t shirt", GarmentType::TShirt),
    ("tshirt", GarmentType::TShirt),
    ("tee", GarmentType::TShirt),
    ("camiseta", GarmentType::TShirt),
    ("sweatshirt", GarmentType::Hoodie),
    ("hoodie", GarmentType::Hoodie),
    ("sudadera", GarmentType::Hoodie),
    ("tank top", GarmentType::TankTop),
    ("tirantes", GarmentType::TankTop),
    ("shirt", GarmentType::Shirt),
    ("camisa", GarmentType::Shirt),
    ("blouse", GarmentType::Blouse),
    ("blusa", GarmentType::Blouse),
    ("polo", GarmentType::Polo),
    ("sweater", GarmentType::Sweater),
    ("jumper", GarmentType::Sweater),
    ("jersey", GarmentType::Sweater),
    ("shorts", GarmentType::Shorts),
    ("bermuda", GarmentType::Shorts),
    ("skirt", GarmentType::Skirt),
    ("falda", GarmentType::Skirt),
    ("leggings", GarmentType::Leggings),
    ("jeans", GarmentType::Jeans),
    ("vaquero", GarmentType::Jeans),
    ("trousers", GarmentType::Trousers),
    ("pants", GarmentType::Trousers),
    ("chino", GarmentType::Trousers),
    ("pantal*", GarmentType::Trousers),
    ("sneakers", GarmentType::Shoes),
    ("shoes", GarmentType::Shoes),
    ("boots", GarmentType::Shoes),
    ("zapat*", GarmentType::Shoes),
    ("belt", GarmentType::Accessory),
    ("cap", GarmentType::Accessory),
    ("scarf", GarmentType::Accessory),
    ("bag", GarmentType::Accessory),
    ("denim", GarmentType::Jeans),
    ("knit", GarmentType::Sweater),
];

/// Default classifier matching product names against a keyword table.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeywordGarmentClassifier;

impl GarmentClassifier for KeywordGarmentClassifier {
    fn classify_name(&self, name: &str) -> GarmentType {
        let name = name.to_lowercase();
        let tokens: Vec<&str> = name
            .split(|c: char| !c.is_alphanumeric())
            .filter(|token| !token.is_empty())
            .collect();

        KEYWORDS
            .iter()
            .find(|(keyword, _)| contains_phrase(&tokens, keyword))
            .map(|(_, garment_type)| *garment_type)
            .unwrap_or(GarmentType::Unknown)
    }
}

fn contains_phrase(tokens: &[&str], phrase: &str) -> bool {
    let parts: Vec<&str> = phrase.split(' ').collect();
    tokens.windows(parts.len()).any(|window| {
        window
            .iter()
            .zip(&parts)
            .all(|(token, part)| token_matches(token, part))
    })
}

/// Exact match, or the keyword plus a plural `s`/`es`.
fn token_matches(token: &str, keyword: &str) -> bool {
    if let Some(stem) = keyword.strip_suffix('*') {
        return token.starts_with(stem);
    }
    token == keyword
        || token
            .strip_suffix('s')
            .is_some_and(|singular| singular == keyword || singular.strip_suffix('e') == Some(keyword))
}
