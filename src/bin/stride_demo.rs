// ABOUTME: Demo harness for the stride workout statistics engine
// ABOUTME: Replays a recorded sensor packet dataset and prints one summary line per packet
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Demo harness for the workout statistics engine.
//!
//! Replays the built-in sensor packet dataset (or a `JSON` packet file)
//! through the dispatcher and prints one rendered summary line per packet,
//! in input order. A rejected packet aborts the whole run.
//!
//! Usage:
//! ```bash
//! # Built-in demo dataset
//! cargo run --bin stride-demo
//!
//! # Load packets from a JSON file and render JSON summaries
//! cargo run --bin stride-demo -- --packets packets.json --format json
//! ```

use anyhow::{anyhow, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use stride::formatters::{format_summary, OutputFormat};
use stride::logging::LoggingConfig;
use stride::models::SensorPacket;
use stride::workouts::read_packet;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "stride-demo",
    about = "Stride workout statistics demo",
    long_about = "Replay recorded sensor packets through the workout statistics engine"
)]
struct DemoArgs {
    /// JSON file with an array of sensor packets (built-in dataset if omitted)
    #[arg(long)]
    packets: Option<PathBuf>,

    /// Output format for summary lines (text, json)
    #[arg(long, default_value = "text")]
    format: String,
}

/// The recorded demo dataset: one packet per supported workout type
fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket {
            code: "SWM".to_owned(),
            values: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        SensorPacket {
            code: "RUN".to_owned(),
            values: vec![15_000.0, 1.0, 75.0],
        },
        SensorPacket {
            code: "WLK".to_owned(),
            values: vec![9_000.0, 1.0, 75.0, 180.0],
        },
    ]
}

/// Load a packet dataset from a JSON file
fn load_packets(path: &Path) -> Result<Vec<SensorPacket>> {
    let raw = fs::read_to_string(path)
        .map_err(|err| anyhow!("failed to read packet file {}: {err}", path.display()))?;
    serde_json::from_str(&raw)
        .map_err(|err| anyhow!("invalid packet file {}: {err}", path.display()))
}

fn main() -> Result<()> {
    let args = DemoArgs::parse();
    LoggingConfig::from_env().init()?;

    let format = OutputFormat::from_str_param(&args.format);
    let packets = match &args.packets {
        Some(path) => load_packets(path)?,
        None => demo_packets(),
    };
    info!(count = packets.len(), %format, "processing sensor packets");

    for packet in &packets {
        // A rejected packet aborts the whole run; nothing after it is processed.
        let workout = match read_packet(&packet.code, &packet.values) {
            Ok(workout) => workout,
            Err(err) => {
                error!(code = %packet.code, error = %err, "packet rejected, aborting run");
                return Err(err.into());
            }
        };
        let summary = workout.summary()?;
        println!("{}", format_summary(&summary, format)?);
    }
    Ok(())
}
