// ABOUTME: Distribution of daily nutrient targets across the four meal slots
// ABOUTME: Fixed per-slot ratios applied identically to every macro
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Meal Distributor
//!
//! Splits the day targets into four per-slot targets using fixed ratios
//! (breakfast 25%, lunch 35%, dinner 30%, snack 10%). Each slot receives
//! the same ratio for every macro; there is no per-slot macro optimization.

use crate::config::MealRatiosConfig;
use gizi_core::models::food::NutrientTotals;
use gizi_core::models::plan::MealTargets;

/// Distribute the day targets across the four meal slots
///
/// The four ratios sum to exactly 1.0, so the slot targets partition the
/// day targets without loss.
#[must_use]
pub fn distribute_meals(day_targets: &NutrientTotals, ratios: &MealRatiosConfig) -> MealTargets {
    MealTargets {
        breakfast: day_targets.scale(ratios.breakfast),
        lunch: day_targets.scale(ratios.lunch),
        dinner: day_targets.scale(ratios.dinner),
        snack: day_targets.scale(ratios.snack),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]

    use super::*;
    use gizi_core::models::food::MealType;

    #[test]
    fn slot_targets_partition_the_day() {
        let day = NutrientTotals {
            cal: 2000.0,
            protein_g: 125.0,
            carbs_g: 250.0,
            fat_g: 56.0,
        };
        let targets = distribute_meals(&day, &MealRatiosConfig::default());

        let sum = MealType::DAY_SLOTS
            .iter()
            .fold(NutrientTotals::ZERO, |acc, slot| {
                acc.plus(targets.slot(*slot))
            });
        assert!((sum.cal - day.cal).abs() < 1e-9);
        assert!((sum.protein_g - day.protein_g).abs() < 1e-9);
        assert!((sum.carbs_g - day.carbs_g).abs() < 1e-9);
        assert!((sum.fat_g - day.fat_g).abs() < 1e-9);
    }

    #[test]
    fn every_macro_gets_the_same_slot_ratio() {
        let day = NutrientTotals {
            cal: 1000.0,
            protein_g: 100.0,
            carbs_g: 100.0,
            fat_g: 100.0,
        };
        let targets = distribute_meals(&day, &MealRatiosConfig::default());
        assert_eq!(targets.lunch.cal, 350.0);
        assert_eq!(targets.lunch.protein_g, 35.0);
        assert_eq!(targets.lunch.carbs_g, 35.0);
        assert_eq!(targets.snack.fat_g, 10.0);
    }
}
