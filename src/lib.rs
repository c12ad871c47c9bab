// ABOUTME: Main library entry point for the stride workout statistics engine
// ABOUTME: Computes distance, mean speed, and calories from raw sensor packets
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Stride
//!
//! A workout statistics engine. Raw sensor packets — a workout code plus a
//! fixed list of positional values — are dispatched to one of three workout
//! calculators (running, sports walking, swimming), which derive distance,
//! mean speed, and estimated calorie expenditure. A summary renderer turns
//! the computed snapshot into a fixed-template report line.
//!
//! ## Architecture
//!
//! - **Models**: `Session`, `SensorPacket`, and the immutable `WorkoutSummary`
//! - **Workouts**: the `Workout` capability trait, the three concrete
//!   calculators, and the `read_packet` dispatcher
//! - **Formatters**: fixed-template text and `JSON` summary output
//! - **Errors**: unified `TrackerError` for dispatch and calculation failures
//!
//! ## Example Usage
//!
//! ```
//! use stride::workouts::{read_packet, Workout};
//!
//! # fn demo() -> stride::errors::TrackerResult<()> {
//! let workout = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0])?;
//! let summary = workout.summary()?;
//! assert!((summary.calories_kcal - 336.0).abs() < 1e-9);
//! # Ok(())
//! # }
//! # demo().unwrap();
//! ```

/// Formula constants organized by workout domain
pub mod constants;

/// Unified error handling for packet dispatch and calculations
pub mod errors;

/// Output rendering for workout summaries
pub mod formatters;

/// Structured logging configuration
pub mod logging;

/// Sensor packet and workout summary data models
pub mod models;

/// Workout calculators and sensor packet dispatch
pub mod workouts;
