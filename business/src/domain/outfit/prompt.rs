use serde_json::json;

use crate::domain::catalog::model::TypedProduct;
use crate::domain::shared::value_objects::ProductId;

use super::model::{
    BASIC_OUTFIT_SIZE, BehaviorSignal, LAYERED_OUTFIT_SIZE, PromptPayload,
};

const MIN_GENERATED_RECOMMENDATIONS: usize = 3;

const SYSTEM_PROMPT: &str = r#"You are a fashion stylist for an online clothing store.
Your goal: put together outfits from the store catalog that fit what the shopper has been looking at.

Core principles:
- Only use products from the catalog you are given
- Respect the garment type of every product
- Prefer combinations that match the shopper's recent activity

Return ONLY a valid JSON object, no additional text."#;

/// Serializes the behavior signal and the catalog projection into the
/// instruction payload. Pure: equal inputs give byte-identical payloads.
///
/// The rules stated here are requests to the generator, not guarantees;
/// `sanitizer::sanitize` enforces what actually reaches the shopper.
pub fn compile_prompt(behavior: &BehaviorSignal, catalog: &[TypedProduct]) -> PromptPayload {
    let product_list = catalog
        .iter()
        .map(|p| {
            json!({
                "id": p.id.as_str(),
                "name": p.name,
                "type": p.raw_type.to_string(),
            })
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");

    let user = format!(
        r#"SHOPPER ACTIVITY:
- Recently viewed (most recent first): {}
- In cart: {}

CATALOG (one product per line):
{}

Rules:
1. "basicOutfit" must contain exactly {} ids: one top and one bottom
2. "layeredOutfit" must contain exactly {} ids: one top, one bottom and one outer layer
3. "recommendations" must contain at least {} ids of other products the shopper may like
4. Products whose type is not a top, bottom or outer layer (dresses, shoes, accessories, unknown) must not appear in outfits
5. Every id must be copied exactly from the catalog above; never invent ids

Return JSON with this EXACT structure:
{{
  "basicOutfit": ["id-from-catalog", "id-from-catalog"],
  "layeredOutfit": ["id-from-catalog", "id-from-catalog", "id-from-catalog"],
  "recommendations": ["id-from-catalog", "id-from-catalog", "id-from-catalog"]
}}"#,
        join_ids(&behavior.viewed),
        join_ids(&behavior.cart),
        if product_list.is_empty() {
            "(empty)".to_string()
        } else {
            product_list
        },
        BASIC_OUTFIT_SIZE,
        LAYERED_OUTFIT_SIZE,
        MIN_GENERATED_RECOMMENDATIONS,
    );

    PromptPayload {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

fn join_ids(ids: &[ProductId]) -> String {
    if ids.is_empty() {
        return "(none)".to_string();
    }
    ids.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
