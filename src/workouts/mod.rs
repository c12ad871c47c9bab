// ABOUTME: Workout capability trait and sensor packet dispatch
// ABOUTME: Maps workout codes to concrete calculators and hosts the shared formulas
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Workout calculators.
//!
//! The [`Workout`] trait carries the formulas shared by every workout type;
//! the concrete types override only what differs for them. [`read_packet`]
//! turns one raw sensor packet into the calculator its code addresses.

/// Running workout calculator
pub mod running;

/// Sports walking workout calculator
pub mod walking;

/// Swimming workout calculator
pub mod swimming;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use tracing::debug;

use crate::constants::units;
use crate::errors::{TrackerError, TrackerResult};
use crate::models::{Session, WorkoutSummary};

/// Capability surface shared by all workout calculators.
///
/// `distance_km` and `mean_speed_kmh` come with default implementations
/// driven by the shared [`Session`] fields and the per-type step length.
/// `calories_kcal` has no meaningful default: the base implementation
/// reports [`TrackerError::Unimplemented`] instead of inventing a value.
pub trait Workout {
    /// Shared sensor fields for this workout
    #[must_use]
    fn session(&self) -> &Session;

    /// Workout type name reported in summaries
    #[must_use]
    fn name(&self) -> &'static str;

    /// Length of one movement unit in meters
    #[must_use]
    fn step_length_m(&self) -> f64 {
        units::STEP_LENGTH_M
    }

    /// Covered distance in kilometers
    #[must_use]
    fn distance_km(&self) -> f64 {
        f64::from(self.session().action_count) * self.step_length_m() / units::METERS_PER_KM
    }

    /// Mean speed in km/h over the full session duration
    #[must_use]
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    /// Estimated energy expenditure in kilocalories.
    ///
    /// # Errors
    ///
    /// The default implementation always returns
    /// [`TrackerError::Unimplemented`]; every concrete workout type supplies
    /// its own formula.
    fn calories_kcal(&self) -> TrackerResult<f64> {
        Err(TrackerError::unimplemented("calories_kcal"))
    }

    /// Build the immutable statistics snapshot for this workout.
    ///
    /// # Errors
    ///
    /// Propagates [`TrackerError::Unimplemented`] when the calorie formula
    /// is missing.
    fn summary(&self) -> TrackerResult<WorkoutSummary> {
        Ok(WorkoutSummary {
            workout_name: self.name().to_owned(),
            duration_hours: self.session().duration_hours,
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal()?,
        })
    }
}

/// Parse one sensor packet into the workout calculator its code addresses.
///
/// Recognized codes and their positional value layouts:
///
/// - `"RUN"` → [`Running`]: action count, duration (h), weight (kg)
/// - `"WLK"` → [`SportsWalking`]: action count, duration, weight, height (m)
/// - `"SWM"` → [`Swimming`]: action count, duration, weight, pool length (m),
///   pool length count
///
/// # Errors
///
/// Returns [`TrackerError::UnknownWorkoutType`] for an unregistered code,
/// [`TrackerError::PacketArity`] when `values` has the wrong length, and
/// [`TrackerError::InvalidValue`] when a sensor value fails validation.
pub fn read_packet(code: &str, values: &[f64]) -> TrackerResult<Box<dyn Workout>> {
    let workout: Box<dyn Workout> = match code {
        "RUN" => Box::new(Running::try_from(values)?),
        "WLK" => Box::new(SportsWalking::try_from(values)?),
        "SWM" => Box::new(Swimming::try_from(values)?),
        other => return Err(TrackerError::unknown_workout_type(other)),
    };
    debug!(code, workout = workout.name(), "sensor packet dispatched");
    Ok(workout)
}

/// Check that a packet carries exactly the expected number of values
pub(crate) fn expect_values(
    workout: &'static str,
    expected: usize,
    values: &[f64],
) -> TrackerResult<()> {
    if values.len() == expected {
        Ok(())
    } else {
        Err(TrackerError::packet_arity(workout, expected, values.len()))
    }
}

/// Validate a strictly positive finite sensor value
pub(crate) fn positive_value(
    workout: &'static str,
    field: &'static str,
    value: f64,
) -> TrackerResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrackerError::invalid_value(
            workout,
            field,
            format!("must be a positive number, got {value}"),
        ))
    }
}

/// Validate a whole non-negative sensor value and narrow it to a count
pub(crate) fn count_value(
    workout: &'static str,
    field: &'static str,
    value: f64,
) -> TrackerResult<u32> {
    if value.is_finite()
        && value >= 0.0
        && value <= f64::from(u32::MAX)
        && value.fract().abs() < f64::EPSILON
    {
        Ok(value as u32)
    } else {
        Err(TrackerError::invalid_value(
            workout,
            field,
            format!("must be a whole non-negative number, got {value}"),
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    /// Minimal workout that overrides nothing beyond the required accessors
    struct BareWorkout {
        session: Session,
    }

    impl Workout for BareWorkout {
        fn session(&self) -> &Session {
            &self.session
        }

        fn name(&self) -> &'static str {
            "BareWorkout"
        }
    }

    fn bare_workout() -> BareWorkout {
        BareWorkout {
            session: Session::new("BareWorkout", 1000, 1.0, 70.0).unwrap(),
        }
    }

    #[test]
    fn test_default_calories_reports_unimplemented() {
        let workout = bare_workout();
        assert_eq!(
            workout.calories_kcal(),
            Err(TrackerError::unimplemented("calories_kcal"))
        );
    }

    #[test]
    fn test_summary_propagates_unimplemented_calories() {
        let workout = bare_workout();
        assert!(matches!(
            workout.summary(),
            Err(TrackerError::Unimplemented {
                operation: "calories_kcal",
            })
        ));
    }

    #[test]
    fn test_default_distance_uses_step_length() {
        let workout = bare_workout();
        assert!((workout.distance_km() - 1000.0 * 0.65 / 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_value_rejects_fractions() {
        let result = count_value("Running", "action count", 10.5);
        assert!(matches!(
            result,
            Err(TrackerError::InvalidValue {
                field: "action count",
                ..
            })
        ));
    }

    #[test]
    fn test_positive_value_rejects_zero() {
        assert!(positive_value("SportsWalking", "height", 0.0).is_err());
    }
}
