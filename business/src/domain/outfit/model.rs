use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::shared::value_objects::ProductId;

/// Shopper activity used as generation context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BehaviorSignal {
    /// Most recent first.
    pub viewed: Vec<ProductId>,
    /// Set semantics; first-seen order is kept so prompts stay deterministic.
    pub cart: Vec<ProductId>,
}

impl BehaviorSignal {
    pub fn new(viewed: Vec<ProductId>, cart: Vec<ProductId>) -> Self {
        let mut unique_cart: Vec<ProductId> = Vec::with_capacity(cart.len());
        for id in cart {
            if !unique_cart.contains(&id) {
                unique_cart.push(id);
            }
        }
        Self {
            viewed,
            cart: unique_cart,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.viewed.is_empty() && self.cart.is_empty()
    }
}

/// Untrusted generator output after syntactic extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecommendation {
    pub basic_outfit: Vec<String>,
    pub layered_outfit: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Sanitized result. Every id exists in the catalog it was sanitized
/// against, no slot holds duplicates, and slot sizes are bounded by
/// `BASIC_OUTFIT_SIZE`, `LAYERED_OUTFIT_SIZE` and `RECOMMENDATIONS_SIZE`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub basic_outfit: Vec<ProductId>,
    pub layered_outfit: Vec<ProductId>,
    pub recommendations: Vec<ProductId>,
}

pub const BASIC_OUTFIT_SIZE: usize = 2;
pub const LAYERED_OUTFIT_SIZE: usize = 3;
pub const RECOMMENDATIONS_SIZE: usize = 5;

/// How outfit slots treat generator ids of the wrong group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutfitPolicy {
    /// Keep every valid catalog id the generator supplied, even of the wrong
    /// group. A surplus of such ids can push repaired ids past the bound.
    #[default]
    PreserveGenerated,
    /// Drop ids outside the slot's required groups, and repeats of a group,
    /// before repair, so a sufficient catalog always yields exact outfits.
    StrictGroups,
}

/// Instruction text handed to the external generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPayload {
    pub system: String,
    pub user: String,
}

impl PromptPayload {
    /// Stable digest of the payload, for correlating log lines and cache keys.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.system.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.user.as_bytes());
        URL_SAFE_NO_PAD.encode(hasher.finalize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    Generated,
    Fallback,
}

impl std::fmt::Display for RecommendationSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationSource::Generated => write!(f, "generated"),
            RecommendationSource::Fallback => write!(f, "fallback"),
        }
    }
}

/// Result handed back to the storefront.
#[derive(Debug, Clone)]
pub struct OutfitRecommendation {
    pub recommendation: Recommendation,
    pub source: RecommendationSource,
    pub generated_at: DateTime<Utc>,
}

impl OutfitRecommendation {
    pub fn new(recommendation: Recommendation, source: RecommendationSource) -> Self {
        Self {
            recommendation,
            source,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_deduplicate_cart_keeping_first_seen_order() {
        let behavior = BehaviorSignal::new(
            vec![],
            vec!["b".into(), "a".into(), "b".into()],
        );
        assert_eq!(behavior.cart, vec![ProductId::new("b"), ProductId::new("a")]);
    }

    #[test]
    fn should_keep_viewed_order_and_duplicates() {
        let behavior = BehaviorSignal::new(vec!["x".into(), "y".into(), "x".into()], vec![]);
        assert_eq!(behavior.viewed.len(), 3);
        assert!(!behavior.is_empty());
        assert!(BehaviorSignal::default().is_empty());
    }

    #[test]
    fn should_produce_stable_fingerprint() {
        let payload = PromptPayload {
            system: "rules".to_string(),
            user: "catalog".to_string(),
        };
        let other = PromptPayload {
            system: "rulesc".to_string(),
            user: "atalog".to_string(),
        };

        assert_eq!(payload.fingerprint(), payload.clone().fingerprint());
        assert_ne!(payload.fingerprint(), other.fingerprint());
        assert_eq!(payload.fingerprint().len(), 43);
    }

    #[test]
    fn should_serialize_recommendation_with_camel_case_keys() {
        let recommendation = Recommendation {
            basic_outfit: vec!["a".into()],
            layered_outfit: vec![],
            recommendations: vec![],
        };
        let json = serde_json::to_value(&recommendation).unwrap();
        assert_eq!(json["basicOutfit"][0], "a");
        assert!(json.get("layeredOutfit").is_some());
    }
}
