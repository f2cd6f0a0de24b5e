//! Farming schedule models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One phase of a generated farming schedule
///
/// Serialized untagged so the wire shape is a plain object keyed by
/// `phase`, matching what clients already consume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SchedulePhase {
    Planned(PlannedPhase),
    Warning(WarningPhase),
}

impl SchedulePhase {
    pub fn phase_name(&self) -> &str {
        match self {
            SchedulePhase::Planned(p) => &p.phase,
            SchedulePhase::Warning(w) => &w.phase,
        }
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, SchedulePhase::Warning(_))
    }
}

/// A time-anchored block of tasks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlannedPhase {
    pub phase: String,
    pub start_date: NaiveDate,
    /// Free-form human label, e.g. "7 days" or "Ongoing"
    pub duration: String,
    pub tasks: Vec<String>,
}

/// Emitted instead of a plan when conditions are unsuitable
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WarningPhase {
    pub phase: String,
    pub message: String,
    pub recommended_ranges: RecommendedRanges,
}

/// Per-dimension acceptable ranges, formatted as "{low}-{high}{unit}"
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendedRanges {
    pub temperature: String,
    pub humidity: String,
    pub rainfall: String,
}
