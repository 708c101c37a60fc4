use std::collections::{HashMap, HashSet};

use crate::domain::catalog::model::{GarmentGroup, TypedProduct};
use crate::domain::shared::value_objects::ProductId;

use super::model::{
    BASIC_OUTFIT_SIZE, LAYERED_OUTFIT_SIZE, OutfitPolicy, RECOMMENDATIONS_SIZE, RawRecommendation,
    Recommendation,
};

const BASIC_GROUPS: &[GarmentGroup] = &[GarmentGroup::Top, GarmentGroup::Bottom];
const LAYERED_GROUPS: &[GarmentGroup] =
    &[GarmentGroup::Top, GarmentGroup::Bottom, GarmentGroup::Outer];

/// Sanitizes generator output with the default `OutfitPolicy::PreserveGenerated`.
pub fn sanitize(raw: &RawRecommendation, catalog: &[TypedProduct]) -> Recommendation {
    sanitize_with_policy(raw, catalog, OutfitPolicy::default())
}

/// Turns untrusted generator output into a `Recommendation`.
///
/// Total and deterministic. Steps, in order:
/// 1. drop ids that are malformed or not in `catalog`, and repeated ids;
/// 2. for every required group missing from an outfit, append the first
///    catalog entry of that group (catalog order breaks ties);
/// 3. truncate outfits to their bound, generator ids first;
/// 4. backfill `recommendations` from the catalog with ids unused by any
///    slot, up to the bound.
///
/// A catalog without some group leaves the outfit short; that is not an error.
/// Under `PreserveGenerated`, step 3 may cut a repaired id when the generator
/// filled the leading positions with ids of the wrong group.
pub fn sanitize_with_policy(
    raw: &RawRecommendation,
    catalog: &[TypedProduct],
    policy: OutfitPolicy,
) -> Recommendation {
    let groups: HashMap<&str, GarmentGroup> =
        catalog.iter().map(|p| (p.id.as_str(), p.group)).collect();

    let basic_outfit = build_outfit(
        &raw.basic_outfit,
        BASIC_GROUPS,
        BASIC_OUTFIT_SIZE,
        catalog,
        &groups,
        policy,
    );
    let layered_outfit = build_outfit(
        &raw.layered_outfit,
        LAYERED_GROUPS,
        LAYERED_OUTFIT_SIZE,
        catalog,
        &groups,
        policy,
    );

    let mut recommendations = catalog_ids(&raw.recommendations, &groups);
    if recommendations.len() < RECOMMENDATIONS_SIZE {
        let used: HashSet<&ProductId> = recommendations
            .iter()
            .chain(&basic_outfit)
            .chain(&layered_outfit)
            .collect();
        let fill: Vec<ProductId> = catalog
            .iter()
            .filter(|p| !used.contains(&p.id))
            .take(RECOMMENDATIONS_SIZE - recommendations.len())
            .map(|p| p.id.clone())
            .collect();
        recommendations.extend(fill);
    }
    recommendations.truncate(RECOMMENDATIONS_SIZE);

    Recommendation {
        basic_outfit,
        layered_outfit,
        recommendations,
    }
}

fn build_outfit(
    raw_ids: &[String],
    required: &[GarmentGroup],
    bound: usize,
    catalog: &[TypedProduct],
    groups: &HashMap<&str, GarmentGroup>,
    policy: OutfitPolicy,
) -> Vec<ProductId> {
    let mut slot = catalog_ids(raw_ids, groups);

    if policy == OutfitPolicy::StrictGroups {
        let mut seen: HashSet<GarmentGroup> = HashSet::new();
        slot.retain(|id| match groups.get(id.as_str()) {
            Some(group) => required.contains(group) && seen.insert(*group),
            None => false,
        });
    }

    for group in required {
        let present = slot
            .iter()
            .any(|id| groups.get(id.as_str()) == Some(group));
        if present {
            continue;
        }
        if let Some(product) = catalog
            .iter()
            .find(|p| p.group == *group && !slot.contains(&p.id))
        {
            slot.push(product.id.clone());
        }
    }

    slot.truncate(bound);
    slot
}

/// Well-formed ids that exist in the catalog, first occurrence only.
fn catalog_ids(raw_ids: &[String], groups: &HashMap<&str, GarmentGroup>) -> Vec<ProductId> {
    let mut ids: Vec<ProductId> = Vec::with_capacity(raw_ids.len());
    for raw in raw_ids {
        if !groups.contains_key(raw.as_str()) {
            continue;
        }
        let Some(id) = ProductId::parse(raw) else {
            continue;
        };
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    ids
}
