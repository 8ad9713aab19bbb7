// ABOUTME: Nutrition target computation and meal-plan allocation engine
// ABOUTME: Target calculator, meal distributor, catalog filter, greedy selector, repair pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! # gizi-engine
//!
//! Deterministic nutrition planning: derives daily calorie/macro targets
//! from a biometric profile, distributes them across four meal slots,
//! greedily allocates catalog items per slot under a multi-factor weighted
//! scoring function, and runs a bounded repair pass over the assembled day.
//!
//! The engine is synchronous and pure: no I/O, no persistent state, no
//! suspension points. Each invocation constructs its working values fresh
//! and is independent of every other invocation. Effort is bounded (at most
//! 3 items per slot, 4 slots, and one action per repair rule), so planning
//! always terminates.
//!
//! Two entry points are consumed by the transport layer:
//!
//! - [`compute_targets`] - profile to daily targets; `None` on an
//!   incomplete profile (a recoverable, expected condition);
//! - [`generate_plan`] - profile + catalog to a full [`gizi_core::DayPlan`];
//!   fails with an invalid-input error when targets cannot be computed.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting
//!   energy expenditure. *American Journal of Clinical Nutrition*, 51(2),
//!   241-247. <https://doi.org/10.1093/ajcn/51.2.241>

/// Engine configuration: formula coefficients, ratios, weights, thresholds
pub mod config;

/// Global catalog filtering against dietary exclusions
pub mod catalog_filter;
/// Daily calorie/macro target calculation
pub mod macro_calculator;
/// Distribution of daily targets across meal slots
pub mod meal_distribution;
/// Per-slot greedy item selection
pub mod meal_selector;
/// Plan generation orchestration
pub mod plan_generator;
/// Post-allocation repair pass
pub mod repair;

pub use catalog_filter::filter_catalog;
pub use config::PlannerConfig;
pub use macro_calculator::compute_targets;
pub use meal_distribution::distribute_meals;
pub use plan_generator::generate_plan;
