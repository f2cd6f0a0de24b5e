//! Farming schedule generation

use chrono::{Days, NaiveDate};

use crate::models::{PlannedPhase, RecommendedRanges, SchedulePhase, WarningPhase};
use crate::suitability::SuitabilityResult;

/// Generate the phased farming schedule for an evaluated crop
///
/// A two-state decision driven entirely by `overall_ok`: suitable
/// conditions yield exactly three planned phases anchored at
/// `anchor_date`; unsuitable conditions yield exactly one warning phase
/// carrying the resolved profile's recommended ranges. Deterministic for
/// identical inputs — the anchor date is the only time dependency.
pub fn generate(suitability: &SuitabilityResult, anchor_date: NaiveDate) -> Vec<SchedulePhase> {
    if !suitability.overall_ok {
        return vec![warning_phase(suitability)];
    }

    vec![
        planned_phase(
            "Soil Preparation",
            anchor_date,
            0,
            "7 days",
            &["Soil testing", "Field preparation", "Fertilizer application"],
        ),
        planned_phase(
            "Sowing",
            anchor_date,
            7,
            "3-5 days",
            &["Seed preparation", "Sowing process", "Initial irrigation"],
        ),
        planned_phase(
            "Growth Monitoring",
            anchor_date,
            12,
            "Ongoing",
            &["Regular irrigation", "Pest monitoring", "Fertilizer management"],
        ),
    ]
}

fn planned_phase(
    name: &str,
    anchor: NaiveDate,
    offset_days: u64,
    duration: &str,
    tasks: &[&str],
) -> SchedulePhase {
    SchedulePhase::Planned(PlannedPhase {
        phase: name.to_string(),
        start_date: anchor
            .checked_add_days(Days::new(offset_days))
            .unwrap_or(anchor),
        duration: duration.to_string(),
        tasks: tasks.iter().map(|t| t.to_string()).collect(),
    })
}

fn warning_phase(suitability: &SuitabilityResult) -> SchedulePhase {
    let profile = &suitability.profile;

    SchedulePhase::Warning(WarningPhase {
        phase: "Warning".to_string(),
        message: "Current conditions not optimal for sowing".to_string(),
        recommended_ranges: RecommendedRanges {
            temperature: format_range(profile.temperature_range, "°C"),
            humidity: format_range(profile.humidity_range, "%"),
            rainfall: format_range(profile.rainfall_range, "mm"),
        },
    })
}

/// Format a range as "{low}-{high}{unit}", printing integral bounds
/// without a trailing ".0"
fn format_range((low, high): (f64, f64), unit: &str) -> String {
    format!("{}-{}{}", format_bound(low), format_bound(high), unit)
}

fn format_bound(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EnvironmentEstimate;
    use crate::suitability::evaluate;

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_suitable_conditions_yield_three_phases() {
        let estimate = EnvironmentEstimate::new(27.0, 70.0, 150.0);
        let suitability = evaluate("rice", &estimate);
        let schedule = generate(&suitability, anchor());

        assert_eq!(schedule.len(), 3);

        let expected = [
            ("Soil Preparation", "2024-01-01", "7 days"),
            ("Sowing", "2024-01-08", "3-5 days"),
            ("Growth Monitoring", "2024-01-13", "Ongoing"),
        ];
        for (phase, (name, start, duration)) in schedule.iter().zip(expected) {
            match phase {
                SchedulePhase::Planned(p) => {
                    assert_eq!(p.phase, name);
                    assert_eq!(p.start_date.to_string(), start);
                    assert_eq!(p.duration, duration);
                    assert_eq!(p.tasks.len(), 3);
                }
                SchedulePhase::Warning(_) => panic!("unexpected warning phase"),
            }
        }
    }

    #[test]
    fn test_unsuitable_conditions_yield_single_warning() {
        let estimate = EnvironmentEstimate::new(40.0, 70.0, 150.0);
        let suitability = evaluate("wheat", &estimate);
        assert!(!suitability.overall_ok);

        let schedule = generate(&suitability, anchor());
        assert_eq!(schedule.len(), 1);

        match &schedule[0] {
            SchedulePhase::Warning(w) => {
                assert_eq!(w.phase, "Warning");
                assert_eq!(w.recommended_ranges.temperature, "15-25°C");
                assert_eq!(w.recommended_ranges.humidity, "50-70%");
                assert_eq!(w.recommended_ranges.rainfall, "75-150mm");
            }
            SchedulePhase::Planned(_) => panic!("expected warning phase"),
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let estimate = EnvironmentEstimate::new(27.0, 70.0, 150.0);
        let suitability = evaluate("rice", &estimate);

        let first = generate(&suitability, anchor());
        let second = generate(&suitability, anchor());
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_partial_schedules() {
        // Either 3 planned phases or exactly 1 warning, never a mix
        for temp in [10.0, 27.0, 45.0] {
            let estimate = EnvironmentEstimate::new(temp, 70.0, 150.0);
            let suitability = evaluate("rice", &estimate);
            let schedule = generate(&suitability, anchor());

            if suitability.overall_ok {
                assert_eq!(schedule.len(), 3);
                assert!(schedule.iter().all(|p| !p.is_warning()));
            } else {
                assert_eq!(schedule.len(), 1);
                assert!(schedule[0].is_warning());
            }
        }
    }

    #[test]
    fn test_fractional_bounds_keep_decimals() {
        assert_eq!(format_range((12.5, 30.0), "°C"), "12.5-30°C");
    }
}
