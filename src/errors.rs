// ABOUTME: Error types for sensor packet dispatch and workout calculations
// ABOUTME: Unified TrackerError enum with constructor helpers and result alias
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Error handling for the workout statistics engine.
//!
//! Two failure kinds are load-bearing for callers:
//! [`TrackerError::UnknownWorkoutType`] (a sensor packet carries an
//! unregistered workout code) and [`TrackerError::Unimplemented`] (the base
//! calorie operation was invoked without a concrete override). Both abort the
//! current packet; neither is ever papered over with a default value.

use thiserror::Error;

/// Unified error type for packet parsing and statistic calculations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    /// Sensor packet carries a workout code with no registered calculator
    #[error("no workout type registered for code '{code}'")]
    UnknownWorkoutType {
        /// The unrecognized workout code from the packet
        code: String,
    },

    /// Sensor packet carried the wrong number of positional values
    #[error("{workout} packet expects {expected} sensor values, got {actual}")]
    PacketArity {
        /// Workout type that rejected the packet
        workout: &'static str,
        /// Number of values the constructor requires
        expected: usize,
        /// Number of values the packet carried
        actual: usize,
    },

    /// A sensor value failed validation during construction
    #[error("invalid {field} for {workout}: {reason}")]
    InvalidValue {
        /// Workout type being constructed
        workout: &'static str,
        /// Field the value was destined for
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },

    /// A default operation was invoked that concrete workout types must supply
    #[error("'{operation}' must be overridden by a concrete workout type")]
    Unimplemented {
        /// Name of the operation that has no override
        operation: &'static str,
    },

    /// Workout summary serialization failed
    #[error("failed to serialize workout summary: {0}")]
    Serialization(String),
}

impl TrackerError {
    /// Create an "unknown workout type" error
    #[must_use]
    pub fn unknown_workout_type(code: impl Into<String>) -> Self {
        Self::UnknownWorkoutType { code: code.into() }
    }

    /// Create a "wrong value count" error
    #[must_use]
    pub fn packet_arity(workout: &'static str, expected: usize, actual: usize) -> Self {
        Self::PacketArity {
            workout,
            expected,
            actual,
        }
    }

    /// Create an "invalid sensor value" error
    #[must_use]
    pub fn invalid_value(
        workout: &'static str,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            workout,
            field,
            reason: reason.into(),
        }
    }

    /// Create an "operation not overridden" error
    #[must_use]
    pub fn unimplemented(operation: &'static str) -> Self {
        Self::Unimplemented { operation }
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

/// Result type alias for convenience
pub type TrackerResult<T> = Result<T, TrackerError>;
