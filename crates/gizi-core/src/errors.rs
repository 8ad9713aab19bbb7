// ABOUTME: Unified error handling for the gizi workspace
// ABOUTME: Error codes, AppError type, and the AppResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gizi Project

//! # Unified Error Handling System
//!
//! Centralized error types for the planning engine. The engine is a pure
//! computation core, so the surviving error vocabulary is small: invalid
//! input (an incomplete profile reaching `generate_plan`), configuration
//! problems, and internal invariant violations.
//!
//! Recoverable "insufficient data" from the target calculator is *not* an
//! error; it is expressed as an explicit empty result (`Option::None`) at
//! that call site.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed validation (e.g. a profile missing required biometrics)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// A required field was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// Engine configuration is inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::ConfigInvalid => "CONFIG_INVALID",
            Self::InternalError => "INTERNAL_ERROR",
        };
        f.write_str(code)
    }
}

/// Application error with a stable code and a human-readable message
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Stable error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    #[must_use]
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Invalid configuration
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

/// Result type alias used throughout the workspace
pub type AppResult<T> = Result<T, AppError>;
