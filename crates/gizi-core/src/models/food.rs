// ABOUTME: Food catalog models for meal planning
// ABOUTME: FoodItem, MealType, PriceTier, and the shared NutrientTotals vector
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// The four daily meal slots in planning order
    pub const DAY_SLOTS: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Parse meal type from string, defaulting to snack for unknown values
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }

    /// Canonical lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price tier of a catalog item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    /// Budget-friendly item
    Low,
    /// Mid-range item
    Medium,
    /// Premium-priced item
    Premium,
}

/// Calorie and macronutrient vector
///
/// Shared shape for day targets, per-meal targets, running totals, and
/// diffs. All combinators are pure and return new values; running totals in
/// the engine are rebound rather than mutated in place.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Calories (kcal)
    pub cal: f64,
    /// Protein (grams)
    pub protein_g: f64,
    /// Carbohydrates (grams)
    pub carbs_g: f64,
    /// Fat (grams)
    pub fat_g: f64,
}

impl NutrientTotals {
    /// The zero vector
    pub const ZERO: Self = Self {
        cal: 0.0,
        protein_g: 0.0,
        carbs_g: 0.0,
        fat_g: 0.0,
    };

    /// Component-wise sum
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            cal: self.cal + other.cal,
            protein_g: self.protein_g + other.protein_g,
            carbs_g: self.carbs_g + other.carbs_g,
            fat_g: self.fat_g + other.fat_g,
        }
    }

    /// Component-wise difference
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            cal: self.cal - other.cal,
            protein_g: self.protein_g - other.protein_g,
            carbs_g: self.carbs_g - other.carbs_g,
            fat_g: self.fat_g - other.fat_g,
        }
    }

    /// Component-wise scaling by a ratio
    #[must_use]
    pub fn scale(&self, ratio: f64) -> Self {
        Self {
            cal: self.cal * ratio,
            protein_g: self.protein_g * ratio,
            carbs_g: self.carbs_g * ratio,
            fat_g: self.fat_g * ratio,
        }
    }
}

/// Individual food item in the catalog
///
/// Read-only reference data supplied per planning call. Numeric fields are
/// non-negative by the catalog source's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique item identifier (caller-supplied)
    pub id: String,
    /// Display name
    pub name: String,
    /// Calories per serving (kcal)
    pub cal: f64,
    /// Protein per serving (grams)
    pub protein_g: f64,
    /// Carbohydrates per serving (grams)
    pub carbs_g: f64,
    /// Fat per serving (grams)
    pub fat_g: f64,
    /// Free-form tags (cuisine, protein source, catering markers, ...)
    #[serde(default)]
    pub tags: Vec<String>,
    /// Meal slots this item may appear in
    #[serde(rename = "mealTypesAllowed")]
    pub meal_types_allowed: Vec<MealType>,
    /// Price tier
    #[serde(rename = "priceTier")]
    pub price_tier: PriceTier,
    /// Preparation time in minutes, if known
    #[serde(rename = "prepTimeMin", skip_serializing_if = "Option::is_none")]
    pub prep_time_min: Option<f64>,
    /// Allergens, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergen: Option<Vec<String>>,
}

impl FoodItem {
    /// Nutrient vector for one serving of this item
    #[must_use]
    pub fn nutrients(&self) -> NutrientTotals {
        NutrientTotals {
            cal: self.cal,
            protein_g: self.protein_g,
            carbs_g: self.carbs_g,
            fat_g: self.fat_g,
        }
    }

    /// Whether this item may be served in the given slot
    #[must_use]
    pub fn allows_meal(&self, meal_type: MealType) -> bool {
        self.meal_types_allowed.contains(&meal_type)
    }

    /// Preparation time, treating an unknown value as zero minutes
    #[must_use]
    pub fn prep_minutes(&self) -> f64 {
        self.prep_time_min.unwrap_or(0.0)
    }
}
