// ABOUTME: Core types for the gizi nutrition planning engine
// ABOUTME: Domain models (profile, food catalog, plan) and the unified error system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! # gizi-core
//!
//! Foundation crate for the gizi nutrition planning engine. Contains the
//! typed domain models consumed and produced by the engine crate, plus the
//! unified error system shared across the workspace.
//!
//! The models here are pure data: they are constructed fresh per planning
//! invocation, never mutated by the engine (the profile is an immutable
//! input), and carry serde attributes reproducing the wire field names of
//! the public API (`mealTypesAllowed`, `targetCalories`, `inputEcho`, ...).

pub mod errors;
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::food::{FoodItem, MealType, NutrientTotals, PriceTier};
pub use models::plan::{
    DayPlan, Estimation, MacroAmount, MacroBreakdown, MacroEngineReport, MacroTargets,
    MealTargets, PlannedItem, PlannedMeal, RepairAction, RepairActionKind, Tip,
};
pub use models::profile::{BudgetTier, Gender, Preferences, Profile};
