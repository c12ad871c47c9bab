// ABOUTME: Integration tests for sensor packet dispatch
// ABOUTME: Covers code lookup, arity enforcement, and value validation errors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stride::errors::TrackerError;
use stride::models::SensorPacket;
use stride::workouts::read_packet;

#[test]
fn test_each_code_constructs_its_workout() {
    let cases = [
        ("RUN", vec![15_000.0, 1.0, 75.0], "Running"),
        ("WLK", vec![9_000.0, 1.0, 75.0, 180.0], "SportsWalking"),
        ("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0], "Swimming"),
    ];
    for (code, values, expected_name) in cases {
        let workout = read_packet(code, &values).unwrap();
        assert_eq!(workout.name(), expected_name, "wrong workout for {code}");
    }
}

#[test]
fn test_unknown_code_is_rejected_not_defaulted() {
    let error = read_packet("XYZ", &[1.0, 2.0, 3.0]).err().unwrap();
    assert_eq!(
        error.to_string(),
        "no workout type registered for code 'XYZ'"
    );
    assert!(matches!(error, TrackerError::UnknownWorkoutType { .. }));
}

#[test]
fn test_code_lookup_is_case_sensitive() {
    let result = read_packet("run", &[15_000.0, 1.0, 75.0]);
    assert!(matches!(
        result,
        Err(TrackerError::UnknownWorkoutType { .. })
    ));
}

#[test]
fn test_short_running_packet_raises_arity_error() {
    let result = read_packet("RUN", &[15_000.0, 1.0]);
    assert_eq!(
        result.err(),
        Some(TrackerError::packet_arity("Running", 3, 2))
    );
}

#[test]
fn test_oversized_swimming_packet_raises_arity_error() {
    let result = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0, 7.0]);
    assert_eq!(
        result.err(),
        Some(TrackerError::packet_arity("Swimming", 5, 6))
    );
}

#[test]
fn test_non_positive_duration_is_rejected() {
    let result = read_packet("RUN", &[15_000.0, 0.0, 75.0]);
    assert!(matches!(
        result,
        Err(TrackerError::InvalidValue {
            workout: "Running",
            field: "duration",
            ..
        })
    ));
}

#[test]
fn test_zero_pool_count_is_rejected() {
    let result = read_packet("SWM", &[720.0, 1.0, 80.0, 25.0, 0.0]);
    assert!(matches!(
        result,
        Err(TrackerError::InvalidValue {
            workout: "Swimming",
            field: "pool length count",
            ..
        })
    ));
}

#[test]
fn test_packets_parse_from_json_dataset() {
    let raw = r#"[
        {"code": "SWM", "values": [720.0, 1.0, 80.0, 25.0, 40.0]},
        {"code": "RUN", "values": [15000.0, 1.0, 75.0]}
    ]"#;
    let packets: Vec<SensorPacket> = serde_json::from_str(raw).unwrap();
    for packet in &packets {
        assert!(read_packet(&packet.code, &packet.values).is_ok());
    }
}
