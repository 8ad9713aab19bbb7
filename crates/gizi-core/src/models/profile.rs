// ABOUTME: User profile input models for nutrition planning
// ABOUTME: Profile, Gender, BudgetTier, and dietary Preferences definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (higher BMR constant)
    Male,
    /// Female (lower BMR constant)
    Female,
}

/// Budget tier for food selection
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BudgetTier {
    /// Low budget: premium items are heavily penalized
    Low,
    /// Medium budget: premium items are mildly penalized
    #[default]
    Medium,
    /// Premium budget: no price penalties
    Premium,
}

/// Dietary and budget preferences attached to a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Preferred protein source tags (matched case-insensitively against item tags)
    pub protein_sources: Vec<String>,
    /// Budget tier; absent on the wire means medium
    pub budget_tier: BudgetTier,
    /// Dietary exclusion flags (e.g. `no_pork`)
    pub diet_tags: Vec<String>,
}

/// Validated, normalized user profile
///
/// This is the single canonical profile shape consumed by the engine. The
/// alternate field spellings of upstream clients (`weight` vs `weight_kg`,
/// `activityLevel` vs `activity_level`) are resolved here via serde aliases
/// at the deserialization boundary; the engine never branches on spellings.
///
/// The four biometrics required by the target calculator are optional so
/// that an incomplete profile is representable; the calculator reports
/// insufficient data rather than panicking.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Gender, required for target computation
    pub gender: Option<Gender>,
    /// Age in years, required for target computation
    pub age: Option<u32>,
    /// Height in centimeters, required for target computation
    #[serde(rename = "height", alias = "height_cm")]
    pub height_cm: Option<f64>,
    /// Body weight in kilograms, required for target computation
    #[serde(rename = "weight", alias = "weight_kg")]
    pub weight_kg: Option<f64>,
    /// Free-form activity level; category resolved by an ordered rule table
    #[serde(alias = "activity_level")]
    pub activity_level: Option<String>,
    /// Free-form goal (bulk/cut/maintain family)
    pub goal: Option<String>,
    /// Dietary and budget preferences
    #[serde(default)]
    pub preferences: Preferences,
    /// Shift workers get no structured-work-day prep-time rules
    #[serde(default)]
    pub is_shift_worker: bool,
    /// Work start time-of-day (e.g. "09:00"), if any
    #[serde(default)]
    pub work_start_time: Option<String>,
    /// Work end time-of-day, if any
    #[serde(default)]
    pub work_end_time: Option<String>,
    /// Whether the office provides catered lunches
    #[serde(default)]
    pub has_office_catering: bool,
}

impl Profile {
    /// Whether both work times are present and the user is not a shift
    /// worker, i.e. the profile describes a structured work day
    #[must_use]
    pub fn has_structured_work_day(&self) -> bool {
        self.work_start_time.is_some() && self.work_end_time.is_some() && !self.is_shift_worker
    }
}
