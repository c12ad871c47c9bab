// ABOUTME: Running workout calculator
// ABOUTME: Calorie formula driven by mean speed and athlete weight
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::{running, units};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Session;

use super::{count_value, expect_values, Workout};

/// Running workout: distance from the step count, calories from mean speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    /// Workout type name reported in summaries
    const NAME: &'static str = "Running";

    /// Number of positional sensor values a running packet carries
    pub const VALUE_COUNT: usize = 3;

    /// Create a running workout from validated sensor fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when duration or weight is not
    /// strictly positive.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> TrackerResult<Self> {
        Ok(Self {
            session: Session::new(Self::NAME, action_count, duration_hours, weight_kg)?,
        })
    }
}

impl TryFrom<&[f64]> for Running {
    type Error = TrackerError;

    /// Build from positional packet values: action count, duration, weight
    fn try_from(values: &[f64]) -> TrackerResult<Self> {
        expect_values(Self::NAME, Self::VALUE_COUNT, values)?;
        Self::new(
            count_value(Self::NAME, "action count", values[0])?,
            values[1],
            values[2],
        )
    }
}

impl Workout for Running {
    fn session(&self) -> &Session {
        &self.session
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Formula: `(18 * mean_speed - 20) * weight / 1000 * duration * 60`
    fn calories_kcal(&self) -> TrackerResult<f64> {
        let speed_term =
            running::SPEED_MULTIPLIER * self.mean_speed_kmh() - running::SPEED_OFFSET;
        Ok(speed_term * self.session.weight_kg / units::METERS_PER_KM
            * self.session.duration_hours
            * units::MINUTES_PER_HOUR)
    }
}
