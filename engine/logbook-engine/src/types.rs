//! Core types for the logbook engine (internal models + JSON output contract).

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::config::AnalysisConfig;

// ---------------------------------------------------------------------------
// Parsed records
// ---------------------------------------------------------------------------

/// One parsed logbook line. Duplicates are legal (repeated alarms carry
/// meaning), so no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
  pub timestamp: NaiveDateTime,
  pub code: String,
  pub details: String,
}

/// An EventRecord plus derived classification flags.
///
/// Flags are independent containment tests; one event may carry several.
#[derive(Debug, Clone)]
pub struct ClassifiedEvent {
  pub record: EventRecord,
  pub is_failure: bool,
  pub is_stoppage: bool,
  pub is_startup: bool,
}

impl ClassifiedEvent {
  /// Failure or stoppage: the event takes the asset down.
  pub fn is_downing(&self) -> bool {
    self.is_failure || self.is_stoppage
  }
}

// ---------------------------------------------------------------------------
// Reconstructed intervals
// ---------------------------------------------------------------------------

/// A reconstructed running interval: a startup to the next failure/stoppage.
/// `start < end` holds by construction (events are time-ordered).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OperationPeriod {
  pub start: NaiveDateTime,
  pub end: NaiveDateTime,
}

impl OperationPeriod {
  pub fn duration_minutes(&self) -> f64 {
    minutes_between(self.start, self.end)
  }
}

/// A reconstructed failure-to-restart interval, bounded to plausible
/// durations (strictly inside `(0, max_repair_minutes)`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairInterval {
  pub failure_code: String,
  pub failure_time: NaiveDateTime,
  pub repair_time: NaiveDateTime,
  pub duration_minutes: f64,
}

/// Signed minutes from `a` to `b`, with second precision.
pub fn minutes_between(a: NaiveDateTime, b: NaiveDateTime) -> f64 {
  (b - a).num_seconds() as f64 / 60.0
}

// ---------------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------------

/// Fixed 8-hour shift buckets over the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Shift {
  A,
  B,
  C,
}

impl Shift {
  /// `[0, a_start)` -> C (night), `[a_start, b_start)` -> A (day),
  /// `[b_start, 24)` -> B (evening).
  pub fn from_hour(hour: u32, config: &AnalysisConfig) -> Self {
    if hour < config.shift_a_start {
      Shift::C
    } else if hour < config.shift_b_start {
      Shift::A
    } else {
      Shift::B
    }
  }
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

/// One classified event with its derived columns, as exported.
#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
  pub timestamp: NaiveDateTime,
  pub code: String,
  pub details: String,
  pub is_failure: bool,
  pub is_stoppage: bool,
  pub is_startup: bool,
  /// Minutes since the previous event; None for the first record.
  pub gap_minutes: Option<f64>,
  pub shift: Shift,
}

/// One row of a frequency table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CodeCount {
  pub code: String,
  pub count: u64,
}

/// Mean / deviation / sample count for a duration metric.
#[derive(Debug, Clone, Serialize)]
pub struct MetricSummary {
  pub mean_minutes: f64,
  /// Sample standard deviation (ddof = 1); None below two samples.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub std_dev_minutes: Option<f64>,
  pub count: usize,
}

/// Repair-duration stats for one failure code.
#[derive(Debug, Clone, Serialize)]
pub struct CodeRepairStats {
  pub failure_code: String,
  pub mean_minutes: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub std_dev_minutes: Option<f64>,
  pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShiftCount {
  pub shift: Shift,
  pub failures: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HourCount {
  pub hour: u32,
  pub failures: u64,
}

/// Descriptive stats over the inter-event gap column.
#[derive(Debug, Clone, Serialize)]
pub struct GapStats {
  pub count: usize,
  pub mean_minutes: f64,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub std_dev_minutes: Option<f64>,
  pub min_minutes: f64,
  pub max_minutes: f64,
}

/// Headline counts over the whole log.
#[derive(Debug, Clone, Serialize)]
pub struct LogSummary {
  pub total_events: usize,
  pub failure_events: usize,
  pub stoppage_events: usize,
  pub startup_events: usize,
  pub distinct_codes: usize,
}

/// The complete result of one analysis run.
///
/// A self-contained value: every table is derived from the run's own
/// immutable event sequence, and a new upload simply produces a new result.
/// Absent metrics are omitted from the JSON rather than reported as zero.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
  pub summary: LogSummary,
  pub events: Vec<EventRow>,
  pub event_frequency: Vec<CodeCount>,
  pub failure_frequency: Vec<CodeCount>,
  pub operation_periods: Vec<OperationPeriod>,
  pub repair_intervals: Vec<RepairInterval>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mtbf: Option<MetricSummary>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mttr: Option<MetricSummary>,
  pub mttr_by_code: Vec<CodeRepairStats>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub availability_percent: Option<f64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub inter_event_gap_stats: Option<GapStats>,
  pub shift_failures: Vec<ShiftCount>,
  pub failures_by_hour: Vec<HourCount>,
}
