// ABOUTME: Formula constants for workout statistics calculations
// ABOUTME: Pure data constants organized by workout domain
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants used by the workout calculators.
//!
//! Values are grouped by domain rather than inlined at use sites so the
//! calorie formulas read the same way the reference formulas are written.
//! All coefficients are dimensionless unless the name says otherwise.

/// Unit conversion constants shared by all workout types
pub mod units {
    /// Meters in one kilometer
    pub const METERS_PER_KM: f64 = 1000.0;

    /// Minutes in one hour
    pub const MINUTES_PER_HOUR: f64 = 60.0;

    /// Default length of one movement unit in meters (a running/walking step)
    pub const STEP_LENGTH_M: f64 = 0.65;
}

/// Running calorie formula coefficients
pub mod running {
    /// Multiplier applied to the mean speed term
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Offset subtracted from the weighted speed term
    pub const SPEED_OFFSET: f64 = 20.0;
}

/// Sports walking calorie formula coefficients
pub mod walking {
    /// Coefficient on the base metabolic weight term
    pub const WEIGHT_COEFFICIENT: f64 = 0.035;

    /// Coefficient on the speed-squared-over-height stress term
    pub const SPEED_HEIGHT_COEFFICIENT: f64 = 0.029;
}

/// Swimming calorie formula coefficients
pub mod swimming {
    /// Length of one swim stroke in meters; replaces the default step length
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Offset added to the mean speed before the weight product
    pub const SPEED_OFFSET: f64 = 1.1;

    /// Multiplier applied to the athlete weight
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
