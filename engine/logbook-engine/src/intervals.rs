//! Interval reconstruction: operation periods, inter-failure gaps and repair
//! intervals, each recovered with one explicit linear scan over the
//! time-ordered event sequence.

use crate::config::AnalysisConfig;
use crate::types::{minutes_between, ClassifiedEvent, OperationPeriod, RepairInterval};

/// Extract operation periods with a single left-to-right scan.
///
/// State is one pending startup timestamp. A startup opens it (the first
/// open startup wins; later startups do not reset it), the next failure or
/// stoppage closes it. A trailing open startup emits nothing.
pub fn operation_periods(events: &[ClassifiedEvent]) -> Vec<OperationPeriod> {
  let mut periods = Vec::new();
  let mut pending_start = None;

  for event in events {
    if event.is_startup && pending_start.is_none() {
      pending_start = Some(event.record.timestamp);
    } else if event.is_downing() {
      // An event that is both startup and failure closes as a failure here;
      // its startup role only matters when no period is open.
      if let Some(start) = pending_start.take() {
        periods.push(OperationPeriod {
          start,
          end: event.record.timestamp,
        });
      }
    }
  }

  periods
}

/// Minutes between consecutive operation periods (previous end to next
/// start). Non-positive gaps are overlap/out-of-order artifacts, not
/// failures, and are discarded. Fewer than two periods yield no gaps.
pub fn inter_failure_gaps(periods: &[OperationPeriod]) -> Vec<f64> {
  periods
    .windows(2)
    .map(|pair| minutes_between(pair[0].end, pair[1].start))
    .filter(|gap| *gap > 0.0)
    .collect()
}

/// Extract repair intervals with a single forward cursor.
///
/// For each failure/stoppage event, the nearest later startup bounds the
/// repair; only that startup counts. A duration outside
/// `(0, max_repair_minutes)` discards the interval without falling through
/// to a later startup. The cursor never moves backward, so the scan stays
/// linear even when several failures share one restart.
pub fn repair_intervals(
  events: &[ClassifiedEvent],
  config: &AnalysisConfig,
) -> Vec<RepairInterval> {
  let mut intervals = Vec::new();
  let mut cursor = 0;

  for (i, event) in events.iter().enumerate() {
    if !event.is_downing() {
      continue;
    }

    if cursor <= i {
      cursor = i + 1;
    }
    while cursor < events.len() && !events[cursor].is_startup {
      cursor += 1;
    }
    if cursor >= events.len() {
      // No startup remains for this failure, nor for any later one.
      break;
    }

    let restart = &events[cursor];
    let duration = minutes_between(event.record.timestamp, restart.record.timestamp);
    if duration > 0.0 && duration < config.max_repair_minutes {
      intervals.push(RepairInterval {
        failure_code: event.record.code.clone(),
        failure_time: event.record.timestamp,
        repair_time: restart.record.timestamp,
        duration_minutes: duration,
      });
    }
  }

  intervals
}
