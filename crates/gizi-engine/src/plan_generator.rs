// ABOUTME: Day plan generation orchestration
// ABOUTME: Targets, distribution, filtering, per-slot selection, repair, and assembly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Plan Generator
//!
//! The engine's main entry point. Runs the pipeline in fixed order:
//! target calculation, meal distribution, global catalog filtering, greedy
//! selection per slot (breakfast, lunch, dinner, snack), then the bounded
//! repair pass against the full-day totals.
//!
//! Slots are evaluated sequentially: the repetition penalty makes later
//! slots depend on ids chosen earlier, so candidate iteration order and
//! tie-breaking stay exactly stable and identical inputs yield
//! byte-identical plans.

use crate::catalog_filter::filter_catalog;
use crate::config::PlannerConfig;
use crate::macro_calculator::compute_targets;
use crate::meal_distribution::distribute_meals;
use crate::meal_selector::{select_meal_items, SlotContext};
use crate::repair::repair_plan;
use gizi_core::errors::{AppError, AppResult};
use gizi_core::models::food::{FoodItem, MealType, NutrientTotals};
use gizi_core::models::plan::{DayPlan, MacroEngineReport, PlannedMeal};
use gizi_core::models::profile::Profile;
use std::collections::HashSet;
use tracing::{debug, info};

/// Generate a complete day plan for a profile against a food catalog
///
/// Fails with an invalid-input error when the profile lacks the biometrics
/// needed for target computation; the caller must supply a complete
/// profile, there is nothing to retry. Everything else degrades softly:
/// slots may end under-filled and repair rules may no-op.
///
/// The catalog's order matters: it is the selector's tie-break and the
/// repair pass's first-qualifying-candidate order.
///
/// # Errors
///
/// Returns [`AppError`] with `INVALID_INPUT` when weight, height, age, or
/// gender is missing from the profile.
pub fn generate_plan(
    profile: &Profile,
    catalog: &[FoodItem],
    config: &PlannerConfig,
) -> AppResult<DayPlan> {
    let targets = compute_targets(profile, config).ok_or_else(|| {
        AppError::invalid_input("profile is missing weight, height, age, or gender")
    })?;

    let meal_targets = distribute_meals(&targets.day_targets, &config.meal_ratios);
    let valid_catalog = filter_catalog(catalog, &profile.preferences.diet_tags);

    // Preferences are lowercased once; item tags match them exactly
    let preferred_sources: Vec<String> = profile
        .preferences
        .protein_sources
        .iter()
        .map(|s| s.to_lowercase())
        .collect();
    let work_day = profile.has_structured_work_day();

    let mut used_ids: HashSet<String> = HashSet::new();
    let mut plan: Vec<PlannedMeal> = Vec::with_capacity(MealType::DAY_SLOTS.len());
    let mut day_totals = NutrientTotals::ZERO;

    for slot in MealType::DAY_SLOTS {
        let candidates: Vec<&FoodItem> = valid_catalog
            .iter()
            .copied()
            .filter(|item| item.allows_meal(slot))
            .collect();

        let ctx = SlotContext {
            meal_type: slot,
            target: *meal_targets.slot(slot),
            budget_tier: profile.preferences.budget_tier,
            preferred_sources: &preferred_sources,
            work_day,
            catering_lunch: profile.has_office_catering && slot == MealType::Lunch,
        };

        let meal = select_meal_items(&candidates, &ctx, &mut used_ids, &config.selector);
        debug!(
            meal = %slot,
            items = meal.items.len(),
            cal = meal.meal_totals.cal,
            "filled meal slot"
        );
        day_totals = day_totals.plus(&meal.meal_totals);
        plan.push(meal);
    }

    let repair_actions = repair_plan(
        &mut plan,
        &mut day_totals,
        &targets.day_targets,
        &valid_catalog,
        &config.repair,
    );
    let diff = targets.day_targets.minus(&day_totals);

    info!(
        target_calories = targets.target_calories,
        planned_cal = day_totals.cal,
        repairs = repair_actions.len(),
        "generated day plan"
    );

    Ok(DayPlan {
        input_echo: profile.clone(),
        macro_engine: MacroEngineReport {
            targets,
            meal_targets,
        },
        plan,
        day_totals,
        diff,
        repair_actions,
    })
}
