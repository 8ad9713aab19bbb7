// ABOUTME: Domain model module for the gizi nutrition planning engine
// ABOUTME: Profile input, food catalog, and plan output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! Domain models shared across the workspace.

/// Food catalog items and the shared nutrient vector
pub mod food;
/// Plan output types: targets, meals, repair actions, day plan
pub mod plan;
/// User profile input types
pub mod profile;
