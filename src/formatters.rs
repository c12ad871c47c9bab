// ABOUTME: Output rendering for workout summaries
// ABOUTME: Fixed-template text line plus JSON for machine consumers
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Output Format Abstraction Layer
//!
//! Renders a [`WorkoutSummary`] either as the fixed human-readable report
//! line or as a `JSON` object for machine consumers. The text template is the
//! canonical output: four numeric fields, each with exactly three fixed-point
//! decimals and a locale-independent decimal point.

use std::fmt;

use crate::errors::TrackerResult;
use crate::models::WorkoutSummary;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-template report line (default)
    #[default]
    Text,
    /// `JSON` object with the raw summary fields
    Json,
}

impl OutputFormat {
    /// Parse format from a string parameter (case-insensitive).
    /// Returns `Text` for unrecognized values.
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a summary into the fixed report template.
#[must_use]
pub fn render(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Mean speed: {:.3} km/h; Calories spent: {:.3}.",
        summary.workout_name,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal
    )
}

/// Serialize a summary in the requested output format.
///
/// # Errors
///
/// Returns [`crate::errors::TrackerError::Serialization`] when `JSON`
/// encoding fails.
pub fn format_summary(summary: &WorkoutSummary, format: OutputFormat) -> TrackerResult<String> {
    match format {
        OutputFormat::Text => Ok(render(summary)),
        OutputFormat::Json => Ok(serde_json::to_string(summary)?),
    }
}
