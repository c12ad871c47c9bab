// ABOUTME: Sports walking workout calculator
// ABOUTME: Calorie formula combining metabolic weight and speed-over-height stress terms
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::{units, walking};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Session;

use super::{count_value, expect_values, positive_value, Workout};

/// Sports walking workout: adds the athlete height to the shared fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height_m: f64,
}

impl SportsWalking {
    /// Workout type name reported in summaries
    const NAME: &'static str = "SportsWalking";

    /// Number of positional sensor values a walking packet carries
    pub const VALUE_COUNT: usize = 4;

    /// Create a walking workout from validated sensor fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when duration, weight, or
    /// height is not strictly positive.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_m: f64,
    ) -> TrackerResult<Self> {
        Ok(Self {
            session: Session::new(Self::NAME, action_count, duration_hours, weight_kg)?,
            height_m: positive_value(Self::NAME, "height", height_m)?,
        })
    }

    /// Athlete height in meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        self.height_m
    }
}

impl TryFrom<&[f64]> for SportsWalking {
    type Error = TrackerError;

    /// Build from positional packet values: action count, duration, weight, height
    fn try_from(values: &[f64]) -> TrackerResult<Self> {
        expect_values(Self::NAME, Self::VALUE_COUNT, values)?;
        Self::new(
            count_value(Self::NAME, "action count", values[0])?,
            values[1],
            values[2],
            values[3],
        )
    }
}

impl Workout for SportsWalking {
    fn session(&self) -> &Session {
        &self.session
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Formula: `(0.035 * weight + floor(speed² / height) * 0.029 * weight) * duration * 60`
    ///
    /// The floor lands on the speed-squared-over-height quotient alone,
    /// before the weight product — floor-division semantics inherited from
    /// the reference formula.
    fn calories_kcal(&self) -> TrackerResult<f64> {
        let speed = self.mean_speed_kmh();
        let metabolic_term = walking::WEIGHT_COEFFICIENT * self.session.weight_kg;
        let stress_term = (speed * speed / self.height_m).floor()
            * walking::SPEED_HEIGHT_COEFFICIENT
            * self.session.weight_kg;
        Ok((metabolic_term + stress_term) * self.session.duration_hours * units::MINUTES_PER_HOUR)
    }
}
