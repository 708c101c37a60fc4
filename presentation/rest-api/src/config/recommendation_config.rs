use std::time::Duration;

use business::domain::outfit::model::OutfitPolicy;

use super::env::parse_or;

/// Tuning for the recommend use case.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    pub timeout: Duration,
    pub candidate_limit: usize,
    pub policy: OutfitPolicy,
}

impl RecommendationConfig {
    /// Environment variables:
    /// - RECOMMENDATION_TIMEOUT_MS: generator budget before falling back (default: 8000)
    /// - RECOMMENDATION_CANDIDATE_LIMIT: catalog products offered to the generator (default: 60)
    /// - RECOMMENDATION_STRICT_GROUPS: drop wrong-group ids from outfits (default: false)
    pub fn from_env() -> Self {
        Self {
            timeout: Duration::from_millis(parse_or("RECOMMENDATION_TIMEOUT_MS", 8000)),
            candidate_limit: parse_or("RECOMMENDATION_CANDIDATE_LIMIT", 60),
            policy: policy_from_flag(parse_or("RECOMMENDATION_STRICT_GROUPS", false)),
        }
    }
}

fn policy_from_flag(strict: bool) -> OutfitPolicy {
    if strict {
        OutfitPolicy::StrictGroups
    } else {
        OutfitPolicy::PreserveGenerated
    }
}
