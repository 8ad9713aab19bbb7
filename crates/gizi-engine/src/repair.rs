// ABOUTME: Bounded post-allocation repair pass over the assembled day plan
// ABOUTME: Deficit adjuster rule and fat-excess swap rule, at most one action each
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Repair Engine
//!
//! Two independent, order-sensitive correction rules run once after all
//! four slots are filled:
//!
//! 1. **Deficit repair** - when the day is materially short on calories or
//!    protein, the first snack-eligible catalog item matching the dominant
//!    deficit's threshold is appended to the snack meal as an adjuster.
//!    No scoring: first qualifying candidate wins.
//! 2. **Fat-excess repair** - when day fat overshoots the target, the
//!    single highest-fat plan item is swapped for the first same-slot
//!    catalog alternative with strictly lower fat and similar protein.
//!
//! Each rule fires at most once per invocation; there is no iteration to
//! convergence. A rule with no qualifying candidate silently no-ops,
//! recorded only by the absence of a repair action.

use crate::config::RepairConfig;
use gizi_core::models::food::{FoodItem, MealType, NutrientTotals};
use gizi_core::models::plan::{PlannedItem, PlannedMeal, RepairAction, RepairActionKind};
use std::fmt;
use tracing::debug;

/// Dominant deficit classification for adjuster selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeficitKind {
    Protein,
    Carbs,
    Fat,
    General,
}

impl fmt::Display for DeficitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Protein => "protein",
            Self::Carbs => "carbs",
            Self::Fat => "fat",
            Self::General => "general",
        };
        f.write_str(label)
    }
}

/// Classify the dominant deficit by fixed priority: protein, carbs, fat
fn classify_deficit(diff: &NutrientTotals, cfg: &RepairConfig) -> DeficitKind {
    if diff.protein_g > cfg.protein_gap_threshold_g {
        DeficitKind::Protein
    } else if diff.carbs_g > cfg.carbs_gap_threshold_g {
        DeficitKind::Carbs
    } else if diff.fat_g > cfg.fat_gap_threshold_g {
        DeficitKind::Fat
    } else {
        DeficitKind::General
    }
}

/// Whether an item qualifies as an adjuster for the given deficit kind
fn qualifies_as_adjuster(item: &FoodItem, kind: DeficitKind, cfg: &RepairConfig) -> bool {
    if !item.allows_meal(MealType::Snack) {
        return false;
    }
    match kind {
        DeficitKind::Protein => item.protein_g > cfg.adjuster_protein_floor_g,
        DeficitKind::Carbs => item.carbs_g > cfg.adjuster_carbs_floor_g,
        DeficitKind::Fat => item.fat_g > cfg.adjuster_fat_floor_g,
        DeficitKind::General => item.cal < cfg.adjuster_general_cal_ceiling,
    }
}

/// Deficit repair: append a snack adjuster when the day is short
fn repair_deficit(
    plan: &mut [PlannedMeal],
    day_totals: &mut NutrientTotals,
    day_targets: &NutrientTotals,
    catalog: &[&FoodItem],
    cfg: &RepairConfig,
) -> Option<RepairAction> {
    let diff = day_targets.minus(day_totals);
    if diff.cal.abs() <= cfg.calorie_gap_threshold && diff.protein_g <= cfg.protein_gap_threshold_g
    {
        return None;
    }

    let kind = classify_deficit(&diff, cfg);
    // First qualifying candidate wins; no scoring in the repair pass
    let adjuster = catalog
        .iter()
        .find(|item| qualifies_as_adjuster(item, kind, cfg))?;
    let snack = plan
        .iter_mut()
        .find(|meal| meal.meal_type == MealType::Snack)?;

    let nutrients = adjuster.nutrients();
    snack.items.push(PlannedItem::adjuster((*adjuster).clone()));
    snack.meal_totals = snack.meal_totals.plus(&nutrients);
    *day_totals = day_totals.plus(&nutrients);

    debug!(item = %adjuster.id, deficit = %kind, "appended snack adjuster");
    Some(RepairAction {
        kind: RepairActionKind::AddAdjuster,
        details: format!("Added {} to snack for {kind} deficit", adjuster.name),
    })
}

/// Locate the single highest-fat plan item above the high-fat floor
///
/// Scan order is meal order then item order; only a strictly greater fat
/// value displaces the current candidate, so the earliest maximum wins.
fn find_fattiest_item(plan: &[PlannedMeal], floor_g: f64) -> Option<(usize, usize)> {
    let mut worst: Option<(usize, usize, f64)> = None;
    for (meal_idx, meal) in plan.iter().enumerate() {
        for (item_idx, item) in meal.items.iter().enumerate() {
            if item.food.fat_g > floor_g
                && worst.is_none_or(|(_, _, fat)| item.food.fat_g > fat)
            {
                worst = Some((meal_idx, item_idx, item.food.fat_g));
            }
        }
    }
    worst.map(|(meal_idx, item_idx, _)| (meal_idx, item_idx))
}

/// Fat-excess repair: swap the fattiest item for a leaner alternative
fn repair_fat_excess(
    plan: &mut [PlannedMeal],
    day_totals: &mut NutrientTotals,
    day_targets: &NutrientTotals,
    catalog: &[&FoodItem],
    cfg: &RepairConfig,
) -> Option<RepairAction> {
    if day_totals.fat_g <= day_targets.fat_g + cfg.fat_excess_threshold_g {
        return None;
    }

    let (meal_idx, item_idx) = find_fattiest_item(plan, cfg.high_fat_floor_g)?;
    let meal_type = plan[meal_idx].meal_type;
    let worst = plan[meal_idx].items[item_idx].food.clone();

    let alternative = catalog.iter().find(|item| {
        item.allows_meal(meal_type)
            && item.fat_g < worst.fat_g
            && (item.protein_g - worst.protein_g).abs() < cfg.swap_protein_window_g
            && item.id != worst.id
    })?;

    let delta = alternative.nutrients().minus(&worst.nutrients());
    plan[meal_idx].items[item_idx] = PlannedItem::selection((*alternative).clone());
    plan[meal_idx].meal_totals = plan[meal_idx].meal_totals.plus(&delta);
    *day_totals = day_totals.plus(&delta);

    debug!(
        meal = %meal_type,
        removed = %worst.id,
        added = %alternative.id,
        "swapped high-fat item"
    );
    Some(RepairAction {
        kind: RepairActionKind::Swap,
        details: format!(
            "Swapped {} for {} to reduce fat",
            worst.name, alternative.name
        ),
    })
}

/// Run the repair pass over the assembled plan
///
/// Mutates the plan and day totals in place and returns the actions
/// applied, in order. Both rules share the same day totals, so the
/// deficit adjuster's contribution is visible to the fat-excess check.
pub fn repair_plan(
    plan: &mut [PlannedMeal],
    day_totals: &mut NutrientTotals,
    day_targets: &NutrientTotals,
    catalog: &[&FoodItem],
    cfg: &RepairConfig,
) -> Vec<RepairAction> {
    let mut actions = Vec::new();
    if let Some(action) = repair_deficit(plan, day_totals, day_targets, catalog, cfg) {
        actions.push(action);
    }
    if let Some(action) = repair_fat_excess(plan, day_totals, day_targets, catalog, cfg) {
        actions.push(action);
    }
    actions
}
