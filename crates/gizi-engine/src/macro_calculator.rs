// ABOUTME: Daily calorie and macro target calculation from a biometric profile
// ABOUTME: Mifflin-St Jeor BMR, activity/goal rule tables, safety clamps, macro split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Nutrient Target Calculator
//!
//! Pure function from a profile to daily calorie/macro targets:
//! Mifflin-St Jeor BMR, an activity multiplier, a goal offset, safety
//! clamps, and a fixed 25/50/25 macro split with a minimum-protein floor
//! for bulk/cut goals.
//!
//! Free-form `activity_level` and `goal` strings are resolved by explicit
//! ordered rule tables: each table is a list of (keyword set, category)
//! pairs evaluated top to bottom, first keyword-substring match wins. The
//! order is load-bearing ("low" is a substring of "`very_low`") and is pinned
//! by tests.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.

use crate::config::{ActivityFactorsConfig, GoalAdjustmentConfig, PlannerConfig};
use gizi_core::models::food::NutrientTotals;
use gizi_core::models::plan::{
    Estimation, MacroAmount, MacroBreakdown, MacroTargets, Tip,
};
use gizi_core::models::profile::{Gender, Profile};
use tracing::debug;

/// Activity category resolved from the free-form activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityCategory {
    /// Little or no exercise
    VeryLow,
    /// Light exercise, 1-3 days per week
    Low,
    /// Moderate exercise, 3-5 days per week
    Medium,
    /// Hard exercise, 6-7 days per week
    High,
}

/// Goal category resolved from the free-form goal string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalCategory {
    /// Caloric surplus for muscle gain
    Bulk,
    /// Caloric deficit for weight loss
    Cut,
    /// Caloric balance
    Maintain,
}

/// Ordered activity rules; first keyword-substring match wins.
/// `very_low` must precede `low`, which is one of its substrings.
const ACTIVITY_RULES: &[(&[&str], ActivityCategory)] = &[
    (&["very_low", "sedentary"], ActivityCategory::VeryLow),
    (&["low", "light"], ActivityCategory::Low),
    (&["medium", "moderate"], ActivityCategory::Medium),
    (&["high", "active"], ActivityCategory::High),
];

/// Ordered goal rules; first keyword-substring match wins.
const GOAL_RULES: &[(&[&str], GoalCategory)] = &[
    (&["bulking", "gain"], GoalCategory::Bulk),
    (&["cutting", "lose"], GoalCategory::Cut),
];

/// Resolve the activity category from a free-form activity level
///
/// Input is lower-cased and tested against [`ACTIVITY_RULES`] in order;
/// an absent or unmatched value falls back to [`ActivityCategory::VeryLow`].
#[must_use]
pub fn resolve_activity(activity_level: Option<&str>) -> ActivityCategory {
    let needle = activity_level.unwrap_or_default().to_lowercase();
    for (keywords, category) in ACTIVITY_RULES {
        if keywords.iter().any(|k| needle.contains(k)) {
            return *category;
        }
    }
    ActivityCategory::VeryLow
}

/// Resolve the goal category from a free-form goal string
///
/// An absent or unmatched value falls back to [`GoalCategory::Maintain`].
#[must_use]
pub fn resolve_goal(goal: Option<&str>) -> GoalCategory {
    let needle = goal.unwrap_or_default().to_lowercase();
    for (keywords, category) in GOAL_RULES {
        if keywords.iter().any(|k| needle.contains(k)) {
            return *category;
        }
    }
    GoalCategory::Maintain
}

impl ActivityCategory {
    /// Multiplier applied to BMR for this category
    #[must_use]
    pub const fn multiplier(self, factors: &ActivityFactorsConfig) -> f64 {
        match self {
            Self::VeryLow => factors.very_low,
            Self::Low => factors.low,
            Self::Medium => factors.medium,
            Self::High => factors.high,
        }
    }
}

impl GoalCategory {
    /// Signed calorie offset for this goal
    #[must_use]
    pub const fn offset_kcal(self, adjustments: &GoalAdjustmentConfig) -> f64 {
        match self {
            Self::Bulk => adjustments.bulk_surplus_kcal,
            Self::Cut => -adjustments.cut_deficit_kcal,
            Self::Maintain => 0.0,
        }
    }

    /// Display label for this goal
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Bulk => "Surplus +350 kkal".to_owned(),
            Self::Cut => "Defisit -500 kkal".to_owned(),
            Self::Maintain => "Maintain Weight".to_owned(),
        }
    }
}

fn round_to_step(value: f64, step: f64) -> f64 {
    (value / step).round() * step
}

fn select_tip(activity_level: Option<&str>) -> Tip {
    let needle = activity_level.unwrap_or_default().to_lowercase();
    if needle.contains("kantor") || needle.contains("office") {
        Tip {
            title: "Tips Kantor".to_owned(),
            description: "Siapkan camilan tinggi protein (seperti kacang atau yogurt) di meja \
                          kerja Anda untuk mencapai target protein dengan mudah."
                .to_owned(),
        }
    } else {
        Tip {
            title: "Tips Umum".to_owned(),
            description: "Minum air 8 gelas sehari untuk metabolisme yang baik.".to_owned(),
        }
    }
}

/// Calculate daily calorie and macro targets for a profile
///
/// Returns `None` when any of weight, height, age, or gender is absent.
/// This is the recoverable "insufficient data" condition: the caller is
/// expected to collect the missing biometrics, not to retry.
///
/// Deterministic and side-effect free; the profile is never mutated.
/// Rounding points are explicit: target calories round to the nearest 10,
/// macro grams to the nearest integer.
#[must_use]
pub fn compute_targets(profile: &Profile, config: &PlannerConfig) -> Option<MacroTargets> {
    let weight_kg = profile.weight_kg?;
    let height_cm = profile.height_cm?;
    let age = profile.age?;
    let gender = profile.gender?;

    // 1. BMR via Mifflin-St Jeor
    let bmr_cfg = &config.bmr;
    let gender_constant = match gender {
        Gender::Male => bmr_cfg.msj_male_constant,
        Gender::Female => bmr_cfg.msj_female_constant,
    };
    let bmr = bmr_cfg.msj_weight_coef * weight_kg
        + bmr_cfg.msj_height_coef * height_cm
        + bmr_cfg.msj_age_coef * f64::from(age)
        + gender_constant;

    // 2. TDEE
    let activity = resolve_activity(profile.activity_level.as_deref());
    let activity_multiplier = activity.multiplier(&config.activity_factors);
    let tdee = bmr * activity_multiplier;

    // 3. Goal offset and safety clamps: never below the absolute floor,
    //    never more than the allowed deficit below TDEE
    let goal = resolve_goal(profile.goal.as_deref());
    let adjustments = &config.goal_adjustments;
    let goal_offset = goal.offset_kcal(adjustments);
    let lower_bound = adjustments
        .min_target_kcal
        .max(tdee - adjustments.max_deficit_below_tdee_kcal);
    let target_kcal = round_to_step((tdee + goal_offset).max(lower_bound), adjustments.round_step_kcal);

    // 4. Macro split, protein floor for bulk/cut
    let split = &config.macro_split;
    let mut protein_g = target_kcal * split.protein_percent / 100.0 / split.protein_kcal_per_g;
    let carbs_g = target_kcal * split.carbs_percent / 100.0 / split.carbs_kcal_per_g;
    let fat_g = target_kcal * split.fat_percent / 100.0 / split.fat_kcal_per_g;

    if matches!(goal, GoalCategory::Bulk | GoalCategory::Cut) {
        // Floor overrides only the protein grams; carbs/fat are not
        // rebalanced, so the calorie sum may exceed the target
        protein_g = protein_g.max(split.min_protein_g_per_kg * weight_kg);
    }

    let protein_grams = protein_g.round() as i64;
    let carb_grams = carbs_g.round() as i64;
    let fat_grams = fat_g.round() as i64;

    let target_calories = target_kcal as i32;
    let goal_offset_kcal = goal_offset as i32;

    debug!(
        bmr,
        tdee, target_calories, ?activity, ?goal, "computed daily targets"
    );

    Some(MacroTargets {
        bmr,
        activity_multiplier,
        tdee,
        goal_offset: goal_offset_kcal,
        target_calories,
        goal_label: goal.label(),
        surplus_or_deficit: if goal_offset_kcal > 0 {
            format!("+{goal_offset_kcal}")
        } else {
            goal_offset_kcal.to_string()
        },
        macros: MacroBreakdown {
            protein: MacroAmount {
                grams: protein_grams,
                percentage: split.protein_percent as u8,
            },
            carbs: MacroAmount {
                grams: carb_grams,
                percentage: split.carbs_percent as u8,
            },
            fats: MacroAmount {
                grams: fat_grams,
                percentage: split.fat_percent as u8,
            },
        },
        day_targets: NutrientTotals {
            cal: target_kcal,
            protein_g: protein_grams as f64,
            carbs_g: carb_grams as f64,
            fat_g: fat_grams as f64,
        },
        estimation: Estimation {
            weeks: 12,
            message: "Mencapai target dalam 12 Minggu".to_owned(),
        },
        tip: select_tip(profile.activity_level.as_deref()),
    })
}
