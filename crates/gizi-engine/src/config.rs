// ABOUTME: Planner configuration for target calculation and meal allocation
// ABOUTME: Formula coefficients, activity factors, ratios, scoring weights, and repair thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Planner Configuration
//!
//! Every tunable of the planning algorithm lives here: BMR formula
//! coefficients, activity multipliers, goal offsets and safety clamps, the
//! macro split, meal-slot ratios, selector weights/penalties/bonuses, and
//! repair thresholds. The `Default` implementations reproduce the engine's
//! specified behavior exactly; tests pin them down.
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology
//! - Protein floor: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use serde::{Deserialize, Serialize};

/// Top-level planner configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Basal Metabolic Rate (BMR) calculation settings
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal calorie offsets and safety clamps
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Macronutrient split of target calories
    pub macro_split: MacroSplitConfig,
    /// Meal-slot distribution ratios
    pub meal_ratios: MealRatiosConfig,
    /// Greedy selector weights, penalties, and bonuses
    pub selector: SelectorConfig,
    /// Repair pass thresholds
    pub repair: RepairConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure. American Journal of Clinical Nutrition,
/// 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

/// Activity factor multipliers for TDEE calculation
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise
/// Physiology. The free-form activity level string is resolved to one of
/// these four categories by an ordered keyword table; unmatched input falls
/// back to the sedentary multiplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Very low / sedentary (little or no exercise): 1.2
    pub very_low: f64,
    /// Low / light (1-3 days per week): 1.375
    pub low: f64,
    /// Medium / moderate (3-5 days per week): 1.55
    pub medium: f64,
    /// High / active (6-7 days per week): 1.725
    pub high: f64,
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            very_low: 1.2,
            low: 1.375,
            medium: 1.55,
            high: 1.725,
        }
    }
}

/// Goal calorie offsets and target safety clamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalAdjustmentConfig {
    /// Bulk surplus (kcal/day): +350
    pub bulk_surplus_kcal: f64,
    /// Cut deficit (kcal/day): 500
    pub cut_deficit_kcal: f64,
    /// Absolute target floor (kcal/day): 1200
    pub min_target_kcal: f64,
    /// Maximum allowed deficit below TDEE (kcal/day): 800
    pub max_deficit_below_tdee_kcal: f64,
    /// Target calories round to the nearest multiple of this step: 10
    pub round_step_kcal: f64,
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            bulk_surplus_kcal: 350.0,
            cut_deficit_kcal: 500.0,
            min_target_kcal: 1200.0,
            max_deficit_below_tdee_kcal: 800.0,
            round_step_kcal: 10.0,
        }
    }
}

/// Macronutrient split of target calories
///
/// Fixed 25/50/25 preset; grams derive from the standard energy densities
/// (4 kcal/g protein and carbs, 9 kcal/g fat). The minimum-protein floor
/// (Phillips & Van Loon 2011) applies only to bulk and cut goals and
/// overrides the protein gram value without rebalancing carbs or fat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share of target calories, percent: 25
    pub protein_percent: f64,
    /// Carbohydrate share of target calories, percent: 50
    pub carbs_percent: f64,
    /// Fat share of target calories, percent: 25
    pub fat_percent: f64,
    /// Energy density of protein (kcal/g): 4
    pub protein_kcal_per_g: f64,
    /// Energy density of carbohydrates (kcal/g): 4
    pub carbs_kcal_per_g: f64,
    /// Energy density of fat (kcal/g): 9
    pub fat_kcal_per_g: f64,
    /// Minimum protein for bulk/cut goals (g per kg bodyweight): 1.6
    pub min_protein_g_per_kg: f64,
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_percent: 25.0,
            carbs_percent: 50.0,
            fat_percent: 25.0,
            protein_kcal_per_g: 4.0,
            carbs_kcal_per_g: 4.0,
            fat_kcal_per_g: 9.0,
            min_protein_g_per_kg: 1.6,
        }
    }
}

/// Meal-slot distribution ratios
///
/// Applied identically to every macro of the day targets; the four ratios
/// sum to exactly 1.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealRatiosConfig {
    /// Breakfast share: 0.25
    pub breakfast: f64,
    /// Lunch share: 0.35
    pub lunch: f64,
    /// Dinner share: 0.30
    pub dinner: f64,
    /// Snack share: 0.10
    pub snack: f64,
}

impl Default for MealRatiosConfig {
    fn default() -> Self {
        Self {
            breakfast: 0.25,
            lunch: 0.35,
            dinner: 0.30,
            snack: 0.10,
        }
    }
}

/// Weights of the selector's normalized macro deviations
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Calorie deviation weight
    pub cal: f64,
    /// Protein deviation weight
    pub protein: f64,
    /// Carbohydrate deviation weight
    pub carbs: f64,
    /// Fat deviation weight
    pub fat: f64,
}

/// Greedy selector configuration: loop bounds, weights, penalties, bonuses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Stop filling a slot once the remaining calorie target drops to this
    /// value or below: 80
    pub calorie_cutoff: f64,
    /// Maximum items per meal slot: 3
    pub max_items_per_meal: usize,
    /// Base deviation weights: {0.25, 0.35, 0.25, 0.15}
    pub base_weights: ScoreWeights,
    /// Deviation weights under a catered lunch: {0.20, 0.40, 0.25, 0.15}
    pub catering_weights: ScoreWeights,
    /// Budget penalty, medium-tier user choosing a premium item: 0.15
    pub budget_penalty_medium: f64,
    /// Budget penalty, low-tier user choosing a premium item: 0.30
    pub budget_penalty_low: f64,
    /// Budget penalty multiplier under a catered lunch: 0.5
    pub catering_budget_relief: f64,
    /// Penalty for re-selecting an item already used earlier this day: 0.5
    pub repetition_penalty: f64,
    /// Work-day breakfast prep ceiling (minutes): 15, penalty beyond: 0.5
    pub breakfast_prep_ceiling_min: f64,
    /// Penalty for breakfast prep beyond the ceiling: 0.5
    pub breakfast_prep_penalty: f64,
    /// Work-day dinner prep ceiling (minutes): 35, penalty beyond: 0.25
    pub dinner_prep_ceiling_min: f64,
    /// Penalty for dinner prep beyond the ceiling: 0.25
    pub dinner_prep_penalty: f64,
    /// Work-day snack prep ceiling (minutes): 5, penalty beyond: 0.2
    pub snack_prep_ceiling_min: f64,
    /// Penalty for snack prep beyond the ceiling: 0.2
    pub snack_prep_penalty: f64,
    /// Bonus for items tagged with a preferred protein source: 0.05
    pub preferred_source_bonus: f64,
    /// Bonus for catering-tagged items under a catered lunch: 0.08
    pub catering_tag_bonus: f64,
    /// Stabilizer bonus for protein-rich items under a protein deficit: 0.06
    pub protein_stabilizer_bonus: f64,
    /// Protein grams an item needs to earn the stabilizer bonus: 15
    pub protein_stabilizer_floor_g: f64,
    /// Stabilizer bonus for carb-rich items under a carb deficit: 0.04
    pub carbs_stabilizer_bonus: f64,
    /// Carb grams an item needs to earn the stabilizer bonus: 30
    pub carbs_stabilizer_floor_g: f64,
    /// Relative deficit a macro must exceed to count as dominant: 0.5
    pub deficit_dominance_ratio: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            calorie_cutoff: 80.0,
            max_items_per_meal: 3,
            base_weights: ScoreWeights {
                cal: 0.25,
                protein: 0.35,
                carbs: 0.25,
                fat: 0.15,
            },
            catering_weights: ScoreWeights {
                cal: 0.20,
                protein: 0.40,
                carbs: 0.25,
                fat: 0.15,
            },
            budget_penalty_medium: 0.15,
            budget_penalty_low: 0.30,
            catering_budget_relief: 0.5,
            repetition_penalty: 0.5,
            breakfast_prep_ceiling_min: 15.0,
            breakfast_prep_penalty: 0.5,
            dinner_prep_ceiling_min: 35.0,
            dinner_prep_penalty: 0.25,
            snack_prep_ceiling_min: 5.0,
            snack_prep_penalty: 0.2,
            preferred_source_bonus: 0.05,
            catering_tag_bonus: 0.08,
            protein_stabilizer_bonus: 0.06,
            protein_stabilizer_floor_g: 15.0,
            carbs_stabilizer_bonus: 0.04,
            carbs_stabilizer_floor_g: 30.0,
            deficit_dominance_ratio: 0.5,
        }
    }
}

/// Repair pass configuration: triggers and candidate thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Absolute calorie gap that triggers deficit repair: 150
    pub calorie_gap_threshold: f64,
    /// Protein deficit that triggers deficit repair (g): 10
    pub protein_gap_threshold_g: f64,
    /// Carb deficit that classifies a carb-dominant gap (g): 20
    pub carbs_gap_threshold_g: f64,
    /// Fat deficit that classifies a fat-dominant gap (g): 10
    pub fat_gap_threshold_g: f64,
    /// Minimum protein an adjuster must carry for a protein gap (g): 5
    pub adjuster_protein_floor_g: f64,
    /// Minimum carbs an adjuster must carry for a carb gap (g): 10
    pub adjuster_carbs_floor_g: f64,
    /// Minimum fat an adjuster must carry for a fat gap (g): 5
    pub adjuster_fat_floor_g: f64,
    /// Maximum calories of a general-purpose adjuster (kcal): 200
    pub adjuster_general_cal_ceiling: f64,
    /// Fat overshoot beyond the day target that triggers a swap (g): 10
    pub fat_excess_threshold_g: f64,
    /// Minimum fat an item needs to qualify as the swap victim (g): 10
    pub high_fat_floor_g: f64,
    /// Maximum protein distance between victim and replacement (g): 10
    pub swap_protein_window_g: f64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            calorie_gap_threshold: 150.0,
            protein_gap_threshold_g: 10.0,
            carbs_gap_threshold_g: 20.0,
            fat_gap_threshold_g: 10.0,
            adjuster_protein_floor_g: 5.0,
            adjuster_carbs_floor_g: 10.0,
            adjuster_fat_floor_g: 5.0,
            adjuster_general_cal_ceiling: 200.0,
            fat_excess_threshold_g: 10.0,
            high_fat_floor_g: 10.0,
            swap_protein_window_g: 10.0,
        }
    }
}
