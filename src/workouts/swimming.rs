// ABOUTME: Swimming workout calculator
// ABOUTME: Pool-length based mean speed override and swim-specific calorie formula
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::constants::{swimming, units};
use crate::errors::{TrackerError, TrackerResult};
use crate::models::Session;

use super::{count_value, expect_values, positive_value, Workout};

/// Swimming workout: adds pool geometry to the shared fields.
///
/// Mean speed comes from the pool length covered, not from the stroke count;
/// the stroke count still feeds `distance_km` through the stroke length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swimming {
    session: Session,
    pool_length_m: f64,
    pool_length_count: u32,
}

impl Swimming {
    /// Workout type name reported in summaries
    const NAME: &'static str = "Swimming";

    /// Number of positional sensor values a swimming packet carries
    pub const VALUE_COUNT: usize = 5;

    /// Create a swimming workout from validated sensor fields.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::InvalidValue`] when duration, weight, or the
    /// pool length is not strictly positive, or when the pool length count
    /// is zero.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_length_count: u32,
    ) -> TrackerResult<Self> {
        if pool_length_count == 0 {
            return Err(TrackerError::invalid_value(
                Self::NAME,
                "pool length count",
                "must be a positive number, got 0",
            ));
        }
        Ok(Self {
            session: Session::new(Self::NAME, action_count, duration_hours, weight_kg)?,
            pool_length_m: positive_value(Self::NAME, "pool length", pool_length_m)?,
            pool_length_count,
        })
    }

    /// Pool length in meters
    #[must_use]
    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Number of pool lengths covered
    #[must_use]
    pub fn pool_length_count(&self) -> u32 {
        self.pool_length_count
    }
}

impl TryFrom<&[f64]> for Swimming {
    type Error = TrackerError;

    /// Build from positional packet values: action count, duration, weight,
    /// pool length, pool length count
    fn try_from(values: &[f64]) -> TrackerResult<Self> {
        expect_values(Self::NAME, Self::VALUE_COUNT, values)?;
        Self::new(
            count_value(Self::NAME, "action count", values[0])?,
            values[1],
            values[2],
            values[3],
            count_value(Self::NAME, "pool length count", values[4])?,
        )
    }
}

impl Workout for Swimming {
    fn session(&self) -> &Session {
        &self.session
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn step_length_m(&self) -> f64 {
        swimming::STROKE_LENGTH_M
    }

    /// Formula: `pool_length * pool_length_count / 1000 / duration`
    ///
    /// The stroke count plays no part here.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_length_count)
            / units::METERS_PER_KM
            / self.session.duration_hours
    }

    /// Formula: `(mean_speed + 1.1) * 2 * weight`
    fn calories_kcal(&self) -> TrackerResult<f64> {
        Ok((self.mean_speed_kmh() + swimming::SPEED_OFFSET)
            * swimming::WEIGHT_MULTIPLIER
            * self.session.weight_kg)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scenario() {
        // 720 strokes over 1 h at 80 kg in a 25 m pool, 40 lengths:
        // speed 1.0 km/h, calories 336.0, distance 0.9936 km
        let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((workout.mean_speed_kmh() - 1.0).abs() < 1e-9);
        assert!((workout.calories_kcal().unwrap() - 336.0).abs() < 1e-9);
        assert!((workout.distance_km() - 0.9936).abs() < 1e-9);
    }

    #[test]
    fn test_mean_speed_ignores_stroke_count() {
        let few_strokes = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        let many_strokes = Swimming::new(9_999, 1.0, 80.0, 25.0, 40).unwrap();
        assert!(
            (few_strokes.mean_speed_kmh() - many_strokes.mean_speed_kmh()).abs() < 1e-9,
            "mean speed must depend on pool geometry only"
        );
    }

    #[test]
    fn test_distance_uses_stroke_length() {
        let workout = Swimming::new(720, 1.0, 80.0, 25.0, 40).unwrap();
        assert!((workout.distance_km() - 720.0 * 1.38 / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_pool_length_count_is_rejected() {
        let result = Swimming::new(720, 1.0, 80.0, 25.0, 0);
        assert!(matches!(
            result,
            Err(TrackerError::InvalidValue {
                field: "pool length count",
                ..
            })
        ));
    }

    #[test]
    fn test_packet_with_wrong_value_count_is_rejected() {
        let result = Swimming::try_from([720.0, 1.0, 80.0, 25.0].as_slice());
        assert_eq!(
            result.unwrap_err(),
            TrackerError::packet_arity("Swimming", 5, 4)
        );
    }
}
