//! Aggregate classified events and reconstructed intervals into frequency
//! tables, MTBF/MTTR summaries, availability and descriptive breakdowns.
//!
//! Everything here is a pure, read-only consumer: results are recomputable
//! at any time from the immutable upstream sequences and nothing feeds back
//! into parsing, classification or reconstruction.

use std::collections::HashMap;

use chrono::Timelike;

use crate::config::AnalysisConfig;
use crate::types::{
  minutes_between, ClassifiedEvent, CodeCount, CodeRepairStats, GapStats, HourCount, LogSummary,
  MetricSummary, RepairInterval, Shift, ShiftCount,
};

fn mean(values: &[f64]) -> f64 {
  values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (ddof = 1); None below two samples.
fn sample_std_dev(values: &[f64]) -> Option<f64> {
  if values.len() < 2 {
    return None;
  }
  let m = mean(values);
  let variance =
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (values.len() - 1) as f64;
  Some(variance.sqrt())
}

/// Mean/deviation/count over a duration sample; None for an empty sample,
/// so an absent metric never collapses to zero.
pub fn summarize(values: &[f64]) -> Option<MetricSummary> {
  if values.is_empty() {
    return None;
  }
  Some(MetricSummary {
    mean_minutes: mean(values),
    std_dev_minutes: sample_std_dev(values),
    count: values.len(),
  })
}

/// Count codes, descending by count; ties keep first-seen order.
pub fn code_frequency<'a, I>(codes: I) -> Vec<CodeCount>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut counts: HashMap<&str, u64> = HashMap::new();
  let mut first_seen: Vec<&str> = Vec::new();
  for code in codes {
    let entry = counts.entry(code).or_insert(0);
    if *entry == 0 {
      first_seen.push(code);
    }
    *entry += 1;
  }

  let mut rows: Vec<CodeCount> = first_seen
    .into_iter()
    .map(|code| CodeCount {
      code: code.to_string(),
      count: counts[code],
    })
    .collect();
  // Stable sort: equal counts keep first-seen order.
  rows.sort_by(|a, b| b.count.cmp(&a.count));
  rows
}

/// Minutes since the previous event for every event, classification
/// ignored. The first event has no predecessor, hence None.
pub fn inter_event_gaps(events: &[ClassifiedEvent]) -> Vec<Option<f64>> {
  events
    .iter()
    .enumerate()
    .map(|(i, event)| {
      if i == 0 {
        None
      } else {
        Some(minutes_between(
          events[i - 1].record.timestamp,
          event.record.timestamp,
        ))
      }
    })
    .collect()
}

/// Descriptive stats over the defined inter-event gaps.
pub fn gap_stats(gaps: &[Option<f64>]) -> Option<GapStats> {
  let defined: Vec<f64> = gaps.iter().filter_map(|g| *g).collect();
  if defined.is_empty() {
    return None;
  }
  let min = defined.iter().cloned().fold(f64::INFINITY, f64::min);
  let max = defined.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
  Some(GapStats {
    count: defined.len(),
    mean_minutes: mean(&defined),
    std_dev_minutes: sample_std_dev(&defined),
    min_minutes: min,
    max_minutes: max,
  })
}

/// Percent of tracked time spent in operation vs. repair.
///
/// Needs both sides of the ratio: at least one retained inter-failure gap
/// and at least one repair interval, otherwise None.
pub fn availability_percent(gaps: &[f64], repairs: &[RepairInterval]) -> Option<f64> {
  if gaps.is_empty() || repairs.is_empty() {
    return None;
  }
  let uptime: f64 = gaps.iter().sum();
  let downtime: f64 = repairs.iter().map(|r| r.duration_minutes).sum();
  Some(uptime / (uptime + downtime) * 100.0)
}

/// Per-failure-code repair stats, sorted by count descending; ties keep the
/// order codes first appear in the repair list.
pub fn repair_stats_by_code(repairs: &[RepairInterval]) -> Vec<CodeRepairStats> {
  let mut durations: HashMap<&str, Vec<f64>> = HashMap::new();
  let mut first_seen: Vec<&str> = Vec::new();
  for repair in repairs {
    let entry = durations.entry(repair.failure_code.as_str()).or_default();
    if entry.is_empty() {
      first_seen.push(repair.failure_code.as_str());
    }
    entry.push(repair.duration_minutes);
  }

  let mut rows: Vec<CodeRepairStats> = first_seen
    .into_iter()
    .map(|code| {
      let sample = &durations[code];
      CodeRepairStats {
        failure_code: code.to_string(),
        mean_minutes: mean(sample),
        std_dev_minutes: sample_std_dev(sample),
        count: sample.len(),
      }
    })
    .collect();
  rows.sort_by(|a, b| b.count.cmp(&a.count));
  rows
}

/// Failure counts per 8-hour shift, fixed A/B/C output order. Descriptive
/// only; shifts never enter the MTBF/MTTR math.
pub fn failures_by_shift(events: &[ClassifiedEvent], config: &AnalysisConfig) -> Vec<ShiftCount> {
  let mut a = 0;
  let mut b = 0;
  let mut c = 0;
  for event in events.iter().filter(|e| e.is_failure) {
    match Shift::from_hour(event.record.timestamp.hour(), config) {
      Shift::A => a += 1,
      Shift::B => b += 1,
      Shift::C => c += 1,
    }
  }
  vec![
    ShiftCount {
      shift: Shift::A,
      failures: a,
    },
    ShiftCount {
      shift: Shift::B,
      failures: b,
    },
    ShiftCount {
      shift: Shift::C,
      failures: c,
    },
  ]
}

/// Failure counts per hour of day; hours without failures are omitted.
pub fn failures_by_hour(events: &[ClassifiedEvent]) -> Vec<HourCount> {
  let mut counts = [0u64; 24];
  for event in events.iter().filter(|e| e.is_failure) {
    counts[event.record.timestamp.hour() as usize] += 1;
  }
  counts
    .iter()
    .enumerate()
    .filter(|(_, &failures)| failures > 0)
    .map(|(hour, &failures)| HourCount {
      hour: hour as u32,
      failures,
    })
    .collect()
}

/// Headline counts over the whole classified log.
pub fn log_summary(events: &[ClassifiedEvent]) -> LogSummary {
  let distinct_codes = events
    .iter()
    .map(|e| e.record.code.as_str())
    .collect::<std::collections::HashSet<_>>()
    .len();
  LogSummary {
    total_events: events.len(),
    failure_events: events.iter().filter(|e| e.is_failure).count(),
    stoppage_events: events.iter().filter(|e| e.is_stoppage).count(),
    startup_events: events.iter().filter(|e| e.is_startup).count(),
    distinct_codes,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{NaiveDate, NaiveDateTime};

  fn ts(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
      .unwrap()
      .and_hms_opt(h, m, 0)
      .unwrap()
  }

  fn event(h: u32, m: u32, code: &str, is_failure: bool) -> ClassifiedEvent {
    ClassifiedEvent {
      record: crate::types::EventRecord {
        timestamp: ts(h, m),
        code: code.into(),
        details: String::new(),
      },
      is_failure,
      is_stoppage: false,
      is_startup: false,
    }
  }

  fn repair(code: &str, minutes: f64) -> RepairInterval {
    RepairInterval {
      failure_code: code.into(),
      failure_time: ts(9, 0),
      repair_time: ts(9, 30),
      duration_minutes: minutes,
    }
  }

  #[test]
  fn summarize_empty_sample_is_none() {
    assert!(summarize(&[]).is_none());
  }

  #[test]
  fn summarize_single_sample_has_no_deviation() {
    let s = summarize(&[15.0]).unwrap();
    assert_eq!(s.mean_minutes, 15.0);
    assert_eq!(s.count, 1);
    assert!(s.std_dev_minutes.is_none());
  }

  #[test]
  fn sample_std_dev_uses_ddof_one() {
    // Sample {10, 20}: mean 15, sample variance (25+25)/1 = 50.
    let s = summarize(&[10.0, 20.0]).unwrap();
    assert_eq!(s.mean_minutes, 15.0);
    assert!((s.std_dev_minutes.unwrap() - 50.0_f64.sqrt()).abs() < 1e-9);
  }

  #[test]
  fn frequency_sorts_descending_with_first_seen_ties() {
    let rows = code_frequency(["B", "A", "C", "A", "B"]);
    // A and B both count 2; B was seen first.
    assert_eq!(
      rows,
      vec![
        CodeCount {
          code: "B".into(),
          count: 2
        },
        CodeCount {
          code: "A".into(),
          count: 2
        },
        CodeCount {
          code: "C".into(),
          count: 1
        },
      ]
    );
  }

  #[test]
  fn first_inter_event_gap_is_undefined() {
    let events = vec![event(8, 0, "A", false), event(8, 45, "B", false)];
    let gaps = inter_event_gaps(&events);
    assert_eq!(gaps, vec![None, Some(45.0)]);
  }

  #[test]
  fn gap_stats_cover_min_max() {
    let gaps = vec![None, Some(10.0), Some(30.0), Some(20.0)];
    let stats = gap_stats(&gaps).unwrap();
    assert_eq!(stats.count, 3);
    assert_eq!(stats.mean_minutes, 20.0);
    assert_eq!(stats.min_minutes, 10.0);
    assert_eq!(stats.max_minutes, 30.0);
  }

  #[test]
  fn gap_stats_need_at_least_one_defined_gap() {
    assert!(gap_stats(&[]).is_none());
    assert!(gap_stats(&[None]).is_none());
  }

  #[test]
  fn availability_is_uptime_share() {
    let repairs = vec![repair("E1", 15.0)];
    let availability = availability_percent(&[15.0], &repairs).unwrap();
    assert_eq!(availability, 50.0);
  }

  #[test]
  fn availability_undefined_without_both_sides() {
    assert!(availability_percent(&[], &[repair("E1", 15.0)]).is_none());
    assert!(availability_percent(&[15.0], &[]).is_none());
  }

  #[test]
  fn repair_stats_group_by_code_sorted_by_count() {
    let repairs = vec![
      repair("E2", 30.0),
      repair("E1", 10.0),
      repair("E1", 20.0),
    ];
    let rows = repair_stats_by_code(&repairs);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].failure_code, "E1");
    assert_eq!(rows[0].count, 2);
    assert_eq!(rows[0].mean_minutes, 15.0);
    assert_eq!(rows[1].failure_code, "E2");
    assert!(rows[1].std_dev_minutes.is_none());
  }

  #[test]
  fn shift_counts_only_failures() {
    let config = AnalysisConfig::default();
    let events = vec![
      event(2, 0, "E1", true),  // C
      event(9, 0, "E2", true),  // A
      event(9, 30, "S1", false),
      event(17, 0, "E3", true), // B
      event(18, 0, "E4", true), // B
    ];
    let counts = failures_by_shift(&events, &config);
    assert_eq!(counts[0].failures, 1); // A
    assert_eq!(counts[1].failures, 2); // B
    assert_eq!(counts[2].failures, 1); // C
  }

  #[test]
  fn hourly_breakdown_skips_quiet_hours() {
    let events = vec![
      event(9, 0, "E1", true),
      event(9, 30, "E2", true),
      event(14, 0, "E3", true),
      event(15, 0, "S1", false),
    ];
    let rows = failures_by_hour(&events);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].hour, 9);
    assert_eq!(rows[0].failures, 2);
    assert_eq!(rows[1].hour, 14);
  }

  #[test]
  fn summary_counts_flags_and_codes() {
    let mut stopped = event(10, 0, "X1", false);
    stopped.is_stoppage = true;
    let mut started = event(10, 30, "S1", false);
    started.is_startup = true;
    let events = vec![event(9, 0, "E1", true), stopped, started, event(11, 0, "E1", true)];
    let summary = log_summary(&events);
    assert_eq!(summary.total_events, 4);
    assert_eq!(summary.failure_events, 2);
    assert_eq!(summary.stoppage_events, 1);
    assert_eq!(summary.startup_events, 1);
    assert_eq!(summary.distinct_codes, 3);
  }
}
