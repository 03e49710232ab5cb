//! Climb performance between two altitudes.
//!
//! Temperature is given at the starting altitude and lapses at the standard
//! 2 C per 1000 ft on the way up. When the segment cannot be computed the
//! report explains which input is off the data.
//!
//! Usage:
//!   cargo run -p climb-cli --bin climb_segment -- --start-altitude 2000 --end-altitude 8000 --weight 2000 --temperature 25

use anyhow::Result;
use clap::Parser;
use climb_cli::{init_tracing, report, Config, OutputFormat};
use climb_core::ClimbPerformance;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Starting pressure altitude (ft)
    #[arg(long, default_value_t = 7500.0)]
    start_altitude: f64,

    /// Target pressure altitude (ft)
    #[arg(long, default_value_t = 10000.0)]
    end_altitude: f64,

    /// Gross weight (lbs)
    #[arg(long, default_value_t = 2300.0)]
    weight: f64,

    /// Outside air temperature at the starting altitude (C)
    #[arg(long, default_value_t = 0.0)]
    temperature: f64,

    /// Output format (overrides CLIMB_OUTPUT)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().with_output(args.output);
    init_tracing(&config)?;

    let perf = ClimbPerformance::builtin();
    tracing::debug!(?args, "computing climb segment");

    let segment = perf.climb_segment(
        args.start_altitude,
        args.end_altitude,
        args.weight,
        args.temperature,
    );

    let Some(segment) = segment else {
        let bounds = perf.data_bounds();
        let issue = perf.diagnose_segment(
            args.start_altitude,
            args.end_altitude,
            args.weight,
            args.temperature,
        );
        tracing::warn!(issue = ?issue, "segment unavailable");

        match config.output {
            OutputFormat::Text => {
                print!(
                    "{}",
                    report::segment_header(
                        args.start_altitude,
                        args.end_altitude,
                        args.weight,
                        args.temperature
                    )
                );
                print!("{}", report::failure_text(&bounds, issue.as_ref()));
            }
            OutputFormat::Json => {
                let value = report::failure_json(&bounds, issue.as_ref());
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
        }
        std::process::exit(1);
    };

    match config.output {
        OutputFormat::Text => {
            print!(
                "{}",
                report::segment_header(
                    args.start_altitude,
                    args.end_altitude,
                    args.weight,
                    args.temperature
                )
            );
            print!("{}", report::segment_text(&segment));
        }
        OutputFormat::Json => {
            let value = json!({ "ok": true, "segment": segment });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}
