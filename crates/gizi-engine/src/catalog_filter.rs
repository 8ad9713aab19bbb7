// ABOUTME: Global catalog filtering against hard dietary exclusions
// ABOUTME: Exclusion-flag rule table expanded into a forbidden tag set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Catalog Filter
//!
//! Hard dietary constraints. Known exclusion flags in the profile's diet
//! tags expand to a forbidden tag set via an explicit rule table; any item
//! whose tags intersect the set (case-insensitive exact match) is dropped.
//! Applied once, globally, before any per-slot selection; catalog order is
//! preserved so downstream tie-breaking stays stable.

use gizi_core::models::food::FoodItem;
use tracing::debug;

/// Exclusion flags and the item tags they forbid
const EXCLUSION_RULES: &[(&str, &[&str])] = &[("no_pork", &["pork", "babi", "non-halal"])];

/// Expand the profile's diet tags into the forbidden item-tag set
#[must_use]
pub fn forbidden_tags(diet_tags: &[String]) -> Vec<&'static str> {
    let mut forbidden = Vec::new();
    for (flag, tags) in EXCLUSION_RULES {
        if diet_tags.iter().any(|t| t == flag) {
            forbidden.extend_from_slice(tags);
        }
    }
    forbidden
}

/// Drop catalog items violating the profile's hard dietary exclusions
///
/// Returns borrowed items in their original catalog order.
#[must_use]
pub fn filter_catalog<'a>(catalog: &'a [FoodItem], diet_tags: &[String]) -> Vec<&'a FoodItem> {
    let forbidden = forbidden_tags(diet_tags);
    if forbidden.is_empty() {
        return catalog.iter().collect();
    }

    let filtered: Vec<&FoodItem> = catalog
        .iter()
        .filter(|item| {
            !item
                .tags
                .iter()
                .any(|tag| forbidden.contains(&tag.to_lowercase().as_str()))
        })
        .collect();

    debug!(
        total = catalog.len(),
        kept = filtered.len(),
        "filtered catalog against dietary exclusions"
    );
    filtered
}
