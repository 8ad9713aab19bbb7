// ABOUTME: Per-slot greedy item selection under a multi-factor weighted score
// ABOUTME: Normalized macro deviations plus budget/repetition/prep penalties and context bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Greedy Item Selector
//!
//! Fills one meal slot at a time: while the remaining calorie target stays
//! above the cutoff and the slot holds fewer than the item cap, every
//! candidate is scored and the strictly lowest score wins. The first
//! encountered candidate keeps ties, so stable catalog iteration order is
//! the tie-break and identical inputs always select identical items.
//!
//! The base score is a weighted sum of the candidate's absolute deviations
//! from the *remaining* slot target, each normalized by the original slot
//! target (floored at 1 to avoid division by zero). Penalties are added
//! (budget mismatch, same-day repetition, work-day prep-time realism) and
//! bonuses subtracted (preferred protein source; under a catered lunch:
//! catering tags and a deficit stabilizer).
//!
//! A catered lunch is a rule-override mode: protein weight rises, budget
//! penalties halve, and prep-time realism does not apply (the prep table
//! has no lunch row, so catered lunches are structurally exempt).

use crate::config::{ScoreWeights, SelectorConfig};
use gizi_core::models::food::{FoodItem, MealType, NutrientTotals, PriceTier};
use gizi_core::models::plan::{PlannedItem, PlannedMeal};
use gizi_core::models::profile::BudgetTier;
use std::collections::HashSet;
use tracing::debug;

/// Item tags marking office-catering fare
const CATERING_TAGS: &[&str] = &["office_catering", "canteen", "warteg", "mealbox"];

/// Immutable per-slot selection context
#[derive(Debug)]
pub struct SlotContext<'a> {
    /// The slot being filled
    pub meal_type: MealType,
    /// The slot's nutrient target
    pub target: NutrientTotals,
    /// The user's budget tier
    pub budget_tier: BudgetTier,
    /// Preferred protein-source tags, pre-lowercased by the caller
    pub preferred_sources: &'a [String],
    /// Whether the profile describes a structured work day
    pub work_day: bool,
    /// Whether this slot is a catered lunch
    pub catering_lunch: bool,
}

/// Which macro dominates the remaining relative deficit of a catered lunch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DominantDeficit {
    Protein,
    Carbs,
}

/// Classify the dominant relative deficit for the stabilizer bonus
///
/// Ratios are taken against the raw slot target. A zero target yields a
/// non-finite ratio whose comparisons are all false, degrading the
/// classification to none, which matches the reference behavior.
fn dominant_deficit(
    remaining: &NutrientTotals,
    target: &NutrientTotals,
    dominance_ratio: f64,
) -> Option<DominantDeficit> {
    let def_protein = remaining.protein_g / target.protein_g;
    let def_carbs = remaining.carbs_g / target.carbs_g;
    if def_protein > def_carbs && def_protein > dominance_ratio {
        Some(DominantDeficit::Protein)
    } else if def_carbs > def_protein && def_carbs > dominance_ratio {
        Some(DominantDeficit::Carbs)
    } else {
        None
    }
}

/// Score one candidate against the remaining slot target; lower is better
fn score_candidate(
    item: &FoodItem,
    remaining: &NutrientTotals,
    ctx: &SlotContext<'_>,
    dominant: Option<DominantDeficit>,
    used_ids: &HashSet<String>,
    weights: &ScoreWeights,
    cfg: &SelectorConfig,
) -> f64 {
    // Normalized absolute deviations; targets floored at 1 to avoid div0
    let d_cal = (remaining.cal - item.cal).abs() / ctx.target.cal.max(1.0);
    let d_protein = (remaining.protein_g - item.protein_g).abs() / ctx.target.protein_g.max(1.0);
    let d_carbs = (remaining.carbs_g - item.carbs_g).abs() / ctx.target.carbs_g.max(1.0);
    let d_fat = (remaining.fat_g - item.fat_g).abs() / ctx.target.fat_g.max(1.0);

    let mut score = weights.cal * d_cal
        + weights.protein * d_protein
        + weights.carbs * d_carbs
        + weights.fat * d_fat;

    // Budget mismatch penalty, halved under a catered lunch
    let mut budget_penalty = match (ctx.budget_tier, item.price_tier) {
        (BudgetTier::Medium, PriceTier::Premium) => cfg.budget_penalty_medium,
        (BudgetTier::Low, PriceTier::Premium) => cfg.budget_penalty_low,
        _ => 0.0,
    };
    if ctx.catering_lunch {
        budget_penalty *= cfg.catering_budget_relief;
    }
    score += budget_penalty;

    // Same-day repetition penalty
    if used_ids.contains(&item.id) {
        score += cfg.repetition_penalty;
    }

    // Work-day prep-time realism; the table has no lunch row
    if ctx.work_day {
        let prep = item.prep_minutes();
        score += match ctx.meal_type {
            MealType::Breakfast if prep > cfg.breakfast_prep_ceiling_min => {
                cfg.breakfast_prep_penalty
            }
            MealType::Dinner if prep > cfg.dinner_prep_ceiling_min => cfg.dinner_prep_penalty,
            MealType::Snack if prep > cfg.snack_prep_ceiling_min => cfg.snack_prep_penalty,
            _ => 0.0,
        };
    }

    // Preferred protein source bonus
    if ctx
        .preferred_sources
        .iter()
        .any(|source| item.tags.iter().any(|tag| tag == source))
    {
        score -= cfg.preferred_source_bonus;
    }

    // Catered-lunch bonuses: catering tags and the deficit stabilizer
    if ctx.catering_lunch {
        if item
            .tags
            .iter()
            .any(|tag| CATERING_TAGS.contains(&tag.as_str()))
        {
            score -= cfg.catering_tag_bonus;
        }
        match dominant {
            Some(DominantDeficit::Protein) if item.protein_g > cfg.protein_stabilizer_floor_g => {
                score -= cfg.protein_stabilizer_bonus;
            }
            Some(DominantDeficit::Carbs) if item.carbs_g > cfg.carbs_stabilizer_floor_g => {
                score -= cfg.carbs_stabilizer_bonus;
            }
            _ => {}
        }
    }

    score
}

/// Fill one meal slot by iterative greedy selection
///
/// `candidates` must already be filtered to items allowing this slot and
/// must preserve catalog order. Chosen item ids are added to `used_ids` so
/// later slots can apply the repetition penalty. A slot with no candidates
/// ends early and may hold fewer than the cap, or zero items; this is a
/// normal outcome, not an error.
#[must_use]
pub fn select_meal_items(
    candidates: &[&FoodItem],
    ctx: &SlotContext<'_>,
    used_ids: &mut HashSet<String>,
    cfg: &SelectorConfig,
) -> PlannedMeal {
    let weights = if ctx.catering_lunch {
        &cfg.catering_weights
    } else {
        &cfg.base_weights
    };

    let mut remaining = ctx.target;
    let mut meal_totals = NutrientTotals::ZERO;
    let mut items: Vec<PlannedItem> = Vec::new();

    while remaining.cal > cfg.calorie_cutoff && items.len() < cfg.max_items_per_meal {
        let dominant = if ctx.catering_lunch {
            dominant_deficit(&remaining, &ctx.target, cfg.deficit_dominance_ratio)
        } else {
            None
        };

        let mut best: Option<(&FoodItem, f64)> = None;
        for item in candidates {
            let score = score_candidate(item, &remaining, ctx, dominant, used_ids, weights, cfg);
            // Strictly lower wins; the first-encountered candidate keeps ties
            if best.is_none_or(|(_, s)| score < s) {
                best = Some((item, score));
            }
        }

        let Some((chosen, score)) = best else {
            break;
        };

        debug!(
            meal = %ctx.meal_type,
            item = %chosen.id,
            score,
            remaining_cal = remaining.cal,
            "selected item"
        );

        used_ids.insert(chosen.id.clone());
        remaining = remaining.minus(&chosen.nutrients());
        meal_totals = meal_totals.plus(&chosen.nutrients());
        items.push(PlannedItem::selection(chosen.clone()));
    }

    PlannedMeal {
        meal_type: ctx.meal_type,
        items,
        meal_totals,
    }
}
