// ABOUTME: Core data models for sensor packets and workout summaries
// ABOUTME: Defines Session, SensorPacket, and the immutable WorkoutSummary snapshot
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Data models for the workout statistics engine.

use serde::{Deserialize, Serialize};

use crate::errors::{TrackerError, TrackerResult};

/// Shared sensor fields captured for every recorded workout.
///
/// The `duration_hours > 0` invariant is enforced at construction because the
/// mean-speed formulas divide by it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Number of movement units recorded (steps, or strokes for swimming)
    pub action_count: u32,
    /// Total workout duration in hours, strictly positive
    pub duration_hours: f64,
    /// Athlete weight in kilograms, strictly positive
    pub weight_kg: f64,
}

impl Session {
    /// Create a session from validated sensor fields.
    ///
    /// `workout` names the workout type under construction and is carried
    /// into any validation error.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when duration or weight is not
    /// a strictly positive finite number.
    pub fn new(
        workout: &'static str,
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
    ) -> TrackerResult<Self> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(TrackerError::invalid_value(
                workout,
                "duration",
                format!("must be a positive number of hours, got {duration_hours}"),
            ));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(TrackerError::invalid_value(
                workout,
                "weight",
                format!("must be a positive number of kilograms, got {weight_kg}"),
            ));
        }
        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }
}

/// Immutable snapshot of the statistics derived from one workout.
///
/// Produced exactly once per sensor packet and never mutated afterwards;
/// rendering the same snapshot twice yields identical output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Workout type name as reported by the calculator
    pub workout_name: String,
    /// Duration in hours, copied from the session
    pub duration_hours: f64,
    /// Covered distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h over the full duration
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure in kilocalories
    pub calories_kcal: f64,
}

/// One raw reading pair as delivered by a sensor harness.
///
/// The meaning of `values` is positional and depends on the workout code;
/// see `workouts::read_packet` for the per-code layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPacket {
    /// Workout type code (`"RUN"`, `"WLK"`, `"SWM"`)
    pub code: String,
    /// Positional sensor values
    pub values: Vec<f64>,
}
