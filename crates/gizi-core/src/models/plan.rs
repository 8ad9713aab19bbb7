// ABOUTME: Plan output models for nutrition planning
// ABOUTME: MacroTargets, MealTargets, PlannedMeal, RepairAction, and DayPlan definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

use super::food::{FoodItem, MealType, NutrientTotals};
use super::profile::Profile;
use serde::{Deserialize, Serialize};

/// Gram amount and calorie percentage for one macronutrient
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroAmount {
    /// Grams per day, rounded to the nearest integer
    pub grams: i64,
    /// Share of target calories, in percent
    pub percentage: u8,
}

/// Macronutrient gram/percentage breakdown
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroBreakdown {
    /// Protein allocation
    pub protein: MacroAmount,
    /// Carbohydrate allocation
    pub carbs: MacroAmount,
    /// Fat allocation
    pub fats: MacroAmount,
}

/// Rough goal-attainment estimate (fixed horizon, cosmetic output)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Estimation {
    /// Estimate horizon in weeks
    pub weeks: u8,
    /// Display message
    pub message: String,
}

/// Profile-dependent nutrition tip (cosmetic output, preserved for
/// API compatibility)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tip {
    /// Tip title
    pub title: String,
    /// Tip body
    pub description: String,
}

/// Daily calorie and macro targets derived from a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTargets {
    /// Basal Metabolic Rate (kcal/day), Mifflin-St Jeor
    pub bmr: f64,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Total Daily Energy Expenditure (kcal/day)
    pub tdee: f64,
    /// Goal calorie offset (+surplus / -deficit)
    pub goal_offset: i32,
    /// Clamped target calories, rounded to the nearest 10
    pub target_calories: i32,
    /// Display label for the resolved goal
    pub goal_label: String,
    /// Signed offset as a display string ("+350", "-500", "0")
    pub surplus_or_deficit: String,
    /// Gram/percentage breakdown per macronutrient
    pub macros: MacroBreakdown,
    /// The day's targets as a nutrient vector (consumed by the distributor)
    pub day_targets: NutrientTotals,
    /// Goal-attainment estimate
    pub estimation: Estimation,
    /// Profile-dependent tip
    pub tip: Tip,
}

/// Per-slot nutrient targets produced by the meal distributor
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MealTargets {
    /// Breakfast target (25% of day)
    pub breakfast: NutrientTotals,
    /// Lunch target (35% of day)
    pub lunch: NutrientTotals,
    /// Dinner target (30% of day)
    pub dinner: NutrientTotals,
    /// Snack target (10% of day)
    pub snack: NutrientTotals,
}

impl MealTargets {
    /// Target for the given slot
    #[must_use]
    pub const fn slot(&self, meal_type: MealType) -> &NutrientTotals {
        match meal_type {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snack,
        }
    }
}

/// Macro engine section of the day plan: daily targets plus the per-slot
/// distribution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroEngineReport {
    /// Daily targets
    #[serde(flatten)]
    pub targets: MacroTargets,
    /// Per-slot targets
    #[serde(rename = "mealTargets")]
    pub meal_targets: MealTargets,
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A selected catalog item within a planned meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedItem {
    /// The selected catalog item
    #[serde(flatten)]
    pub food: FoodItem,
    /// Serving count (always 1 in the current allocator)
    pub servings: u32,
    /// Set when the item was added by the deficit repair pass
    #[serde(rename = "isAdjuster", default, skip_serializing_if = "is_false")]
    pub is_adjuster: bool,
}

impl PlannedItem {
    /// Wrap a catalog item as a regular (non-adjuster) selection
    #[must_use]
    pub fn selection(food: FoodItem) -> Self {
        Self {
            food,
            servings: 1,
            is_adjuster: false,
        }
    }

    /// Wrap a catalog item as a repair-pass adjuster
    #[must_use]
    pub fn adjuster(food: FoodItem) -> Self {
        Self {
            food,
            servings: 1,
            is_adjuster: true,
        }
    }
}

/// One meal slot of the day plan, items in selection order
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    /// The slot this meal fills
    pub meal_type: MealType,
    /// Selected items, ordered by selection time
    pub items: Vec<PlannedItem>,
    /// Sum of the items' nutrients
    pub meal_totals: NutrientTotals,
}

/// Kind of post-allocation repair applied
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RepairActionKind {
    /// A snack adjuster was appended to correct a deficit
    AddAdjuster,
    /// A high-fat item was swapped for a leaner alternative
    Swap,
}

/// Record of one repair-pass action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairAction {
    /// Action kind
    #[serde(rename = "type")]
    pub kind: RepairActionKind,
    /// Human-readable description of the change
    pub details: String,
}

/// Complete day plan: targets, per-slot meals, totals, and repair log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// The profile the plan was generated for, echoed verbatim
    pub input_echo: Profile,
    /// Daily targets and per-slot distribution
    pub macro_engine: MacroEngineReport,
    /// The four planned meals in slot order
    pub plan: Vec<PlannedMeal>,
    /// Cumulative nutrients across all meals (post-repair)
    pub day_totals: NutrientTotals,
    /// Remaining gap: day targets minus day totals (post-repair)
    pub diff: NutrientTotals,
    /// Repair actions applied, in order
    pub repair_actions: Vec<RepairAction>,
}
