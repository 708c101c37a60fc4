use serde::{Deserialize, Serialize};

use crate::domain::shared::value_objects::ProductId;

/// Coarse slot category a garment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GarmentGroup {
    Top,
    Bottom,
    Outer,
    Other,
}

impl std::fmt::Display for GarmentGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GarmentGroup::Top => write!(f, "top"),
            GarmentGroup::Bottom => write!(f, "bottom"),
            GarmentGroup::Outer => write!(f, "outer"),
            GarmentGroup::Other => write!(f, "other"),
        }
    }
}

/// Fine-grained garment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GarmentType {
    TShirt,
    Shirt,
    Blouse,
    Polo,
    Sweater,
    Hoodie,
    TankTop,
    Jeans,
    Trousers,
    Shorts,
    Skirt,
    Leggings,
    Jacket,
    Coat,
    Blazer,
    Cardigan,
    Dress,
    Shoes,
    Accessory,
    Unknown,
}

impl GarmentType {
    pub fn group(self) -> GarmentGroup {
        match self {
            GarmentType::TShirt
            | GarmentType::Shirt
            | GarmentType::Blouse
            | GarmentType::Polo
            | GarmentType::Sweater
            | GarmentType::Hoodie
            | GarmentType::TankTop => GarmentGroup::Top,
            GarmentType::Jeans
            | GarmentType::Trousers
            | GarmentType::Shorts
            | GarmentType::Skirt
            | GarmentType::Leggings => GarmentGroup::Bottom,
            GarmentType::Jacket
            | GarmentType::Coat
            | GarmentType::Blazer
            | GarmentType::Cardigan => GarmentGroup::Outer,
            GarmentType::Dress
            | GarmentType::Shoes
            | GarmentType::Accessory
            | GarmentType::Unknown => GarmentGroup::Other,
        }
    }
}

impl std::fmt::Display for GarmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GarmentType::TShirt => "t-shirt",
            GarmentType::Shirt => "shirt",
            GarmentType::Blouse => "blouse",
            GarmentType::Polo => "polo",
            GarmentType::Sweater => "sweater",
            GarmentType::Hoodie => "hoodie",
            GarmentType::TankTop => "tank-top",
            GarmentType::Jeans => "jeans",
            GarmentType::Trousers => "trousers",
            GarmentType::Shorts => "shorts",
            GarmentType::Skirt => "skirt",
            GarmentType::Leggings => "leggings",
            GarmentType::Jacket => "jacket",
            GarmentType::Coat => "coat",
            GarmentType::Blazer => "blazer",
            GarmentType::Cardigan => "cardigan",
            GarmentType::Dress => "dress",
            GarmentType::Shoes => "shoes",
            GarmentType::Accessory => "accessory",
            GarmentType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Candidate product as supplied by the catalog source.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
}

impl CatalogProduct {
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category: category.into(),
        }
    }
}

/// Catalog product annotated with its garment classification.
/// Derived once per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedProduct {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub raw_type: GarmentType,
    pub group: GarmentGroup,
}
