//! Performance at a single altitude and weight.
//!
//! Without `--temperature` the tables are read directly at the given
//! altitude; with it the lookup is corrected through density altitude.

use anyhow::{bail, Result};
use clap::Parser;
use climb_cli::{init_tracing, report, Config, OutputFormat};
use climb_core::ClimbPerformance;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, allow_negative_numbers = true)]
struct Args {
    /// Pressure altitude (ft)
    #[arg(long)]
    altitude: f64,

    /// Gross weight (lbs)
    #[arg(long)]
    weight: f64,

    /// Outside air temperature (C); omit for standard-table values
    #[arg(long)]
    temperature: Option<f64>,

    /// Output format (overrides CLIMB_OUTPUT)
    #[arg(long, value_enum)]
    output: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().with_output(args.output);
    init_tracing(&config)?;

    let perf = ClimbPerformance::builtin();

    let Some(temperature) = args.temperature else {
        let standard = perf.standard_performance(args.altitude, args.weight)?;
        match config.output {
            OutputFormat::Text => {
                print!("{}", report::standard_text(args.altitude, args.weight, &standard))
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&standard)?),
        }
        return Ok(());
    };

    let Some(sample) = perf.performance_with_temperature(args.altitude, args.weight, temperature)
    else {
        let bounds = perf.data_bounds();
        let density_altitude = perf.density_altitude(args.altitude, temperature);
        bail!(
            "no performance data for {} ft, {} lbs, {} C (density altitude {:.0} ft); \
             valid altitude {} - {} ft, weight {} - {} lbs",
            args.altitude,
            args.weight,
            temperature,
            density_altitude,
            bounds.altitude_range_ft.0,
            bounds.altitude_range_ft.1,
            bounds.weight_range_lbs.0,
            bounds.weight_range_lbs.1,
        );
    };

    match config.output {
        OutputFormat::Text => print!("{}", report::sample_text(args.weight, &sample)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sample)?),
    }

    Ok(())
}
