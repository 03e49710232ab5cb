//! Human-readable and JSON reports.

use climb_core::{
    ClimbSegment, ClimbTime, DataBounds, PerformanceSample, SegmentIssue, StandardPerformance,
};
use serde_json::{json, Value};

/// Format a whole number of feet with thousands separators.
pub fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn climb_time_text(time: &ClimbTime) -> String {
    match time {
        ClimbTime::Minutes(minutes) => format!("{minutes:.1} minutes"),
        ClimbTime::Unreachable => "unreachable (no climb capability)".to_string(),
    }
}

pub fn segment_header(start_ft: f64, end_ft: f64, weight_lbs: f64, temperature_c: f64) -> String {
    format!(
        "Aircraft Climb Segment Calculator\n\
         Segment: {start_ft} ft -> {end_ft} ft\n\
         Weight: {weight_lbs} lbs, Temperature: {temperature_c} C at {start_ft} ft\n\
         (Temperature decreases 2 C per 1000 ft with altitude)\n\
         {rule}\n",
        rule = "-".repeat(55),
    )
}

pub fn segment_text(segment: &ClimbSegment) -> String {
    format!(
        "Altitude Gain: {gain} ft\n\
         Average Rate of Climb: {roc:.1} fpm\n\
         Fuel for Segment: {fuel:.2} gal\n\
         Climb Time: {time}\n\
         IAS: {ias0:.1} -> {ias1:.1} mph\n\
         Density Altitude: {da0:.0} -> {da1:.0} ft\n",
        gain = group_thousands(segment.altitude_gain_ft),
        roc = segment.avg_roc_fpm,
        fuel = segment.segment_fuel_gal,
        time = climb_time_text(&segment.climb_time),
        ias0 = segment.start_ias_mph,
        ias1 = segment.end_ias_mph,
        da0 = segment.start_density_alt_ft,
        da1 = segment.end_density_alt_ft,
    )
}

pub fn failure_text(bounds: &DataBounds, issue: Option<&SegmentIssue>) -> String {
    let detail = match issue {
        Some(issue) => format!("Issue: {issue}\nHint: {}", issue.hint()),
        None => "Unable to determine specific issue - check all parameters".to_string(),
    };
    format!(
        "ERROR: Cannot calculate segment\n\
         Valid altitude range: {} - {} ft\n\
         Valid weight range: {} - {} lbs\n\
         \n\
         {detail}\n",
        bounds.altitude_range_ft.0,
        bounds.altitude_range_ft.1,
        bounds.weight_range_lbs.0,
        bounds.weight_range_lbs.1,
    )
}

pub fn standard_text(altitude_ft: f64, weight_lbs: f64, perf: &StandardPerformance) -> String {
    format!(
        "Standard performance at {altitude} ft, {weight_lbs} lbs\n\
         IAS: {ias:.1} mph\n\
         Rate of Climb: {roc:.1} fpm\n\
         Fuel to Altitude: {fuel:.2} gal\n",
        altitude = group_thousands(altitude_ft),
        ias = perf.ias_mph,
        roc = perf.roc_fpm,
        fuel = perf.fuel_gal,
    )
}

pub fn sample_text(weight_lbs: f64, sample: &PerformanceSample) -> String {
    format!(
        "Performance at {altitude} ft, {weight_lbs} lbs, {temp} C\n\
         ISA: {isa:.1} C (deviation {dev:+.1} C)\n\
         Density Altitude: {da} ft\n\
         IAS: {ias:.1} mph\n\
         Rate of Climb: {roc:.1} fpm (loss {loss:.1} fpm, factor {factor:.3})\n\
         Fuel to Altitude: {fuel:.2} gal\n",
        altitude = group_thousands(sample.pressure_altitude_ft),
        temp = sample.temperature_c,
        isa = sample.isa_temp_c,
        dev = sample.isa_deviation_c,
        da = group_thousands(sample.density_altitude_ft),
        ias = sample.ias_mph,
        roc = sample.roc_fpm,
        loss = sample.roc_loss_fpm,
        factor = sample.performance_factor,
        fuel = sample.fuel_gal,
    )
}

pub fn failure_json(bounds: &DataBounds, issue: Option<&SegmentIssue>) -> Value {
    json!({
        "ok": false,
        "issue": issue,
        "hint": issue.map(SegmentIssue::hint),
        "bounds": bounds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DataBounds {
        DataBounds {
            altitude_range_ft: (0.0, 15000.0),
            weight_range_lbs: (1700.0, 2300.0),
        }
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(10000.0), "10,000");
        assert_eq!(group_thousands(1234567.0), "1,234,567");
        assert_eq!(group_thousands(-1800.0), "-1,800");
    }

    #[test]
    fn segment_report_lists_every_metric() {
        let segment = climb_core::ClimbPerformance::builtin()
            .climb_segment(0.0, 10000.0, 2000.0, 15.0)
            .unwrap();
        let text = segment_text(&segment);
        assert!(text.contains("Altitude Gain: 10,000 ft"));
        assert!(text.contains("Average Rate of Climb: 610.0 fpm"));
        assert!(text.contains("Fuel for Segment: 2.60 gal"));
        assert!(text.contains("Climb Time: 16.4 minutes"));
        assert!(text.contains("IAS: 77.0 -> 74.0 mph"));
        assert!(text.contains("Density Altitude: 0 -> 10000 ft"));
    }

    #[test]
    fn reports_render_one_field_per_line() {
        let header = segment_header(7500.0, 10000.0, 2300.0, 0.0);
        assert_eq!(
            header,
            format!(
                "Aircraft Climb Segment Calculator\n\
                 Segment: 7500 ft -> 10000 ft\n\
                 Weight: 2300 lbs, Temperature: 0 C at 7500 ft\n\
                 (Temperature decreases 2 C per 1000 ft with altitude)\n\
                 {}\n",
                "-".repeat(55)
            )
        );

        let text = failure_text(&bounds(), None);
        assert_eq!(
            text,
            "ERROR: Cannot calculate segment\n\
             Valid altitude range: 0 - 15000 ft\n\
             Valid weight range: 1700 - 2300 lbs\n\
             \n\
             Unable to determine specific issue - check all parameters\n"
        );

        let std = StandardPerformance {
            ias_mph: 75.2,
            roc_fpm: 840.0,
            fuel_gal: 1.52,
        };
        assert_eq!(
            standard_text(2500.0, 1850.0, &std),
            "Standard performance at 2,500 ft, 1850 lbs\n\
             IAS: 75.2 mph\n\
             Rate of Climb: 840.0 fpm\n\
             Fuel to Altitude: 1.52 gal\n"
        );
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn unreachable_climb_time_is_spelled_out() {
        assert_eq!(
            climb_time_text(&ClimbTime::Unreachable),
            "unreachable (no climb capability)"
        );
    }

    #[test]
    fn failure_report_includes_issue_and_hint() {
        let issue = SegmentIssue::DensityAltitudeTooLow {
            start_da_ft: -1800.0,
            end_da_ft: 3200.0,
            min_ft: 0.0,
        };
        let text = failure_text(&bounds(), Some(&issue));
        assert!(text.contains("Valid altitude range: 0 - 15000 ft"));
        assert!(text.contains("Valid weight range: 1700 - 2300 lbs"));
        assert!(text.contains("start -1800 ft, end 3200 ft"));
        assert!(text.contains("warmer temperature"));

        let text = failure_text(&bounds(), None);
        assert!(text.contains("Unable to determine specific issue"));
    }

    #[test]
    fn failure_json_carries_bounds() {
        let issue = SegmentIssue::WeightOutOfRange {
            weight_lbs: 2500.0,
            range: (1700.0, 2300.0),
        };
        let value = failure_json(&bounds(), Some(&issue));
        assert_eq!(value["ok"], false);
        assert_eq!(value["issue"]["issue"], "weight_out_of_range");
        assert_eq!(value["bounds"]["weight_range_lbs"][1], 2300.0);
    }
}
