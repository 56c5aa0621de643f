//! Pipeline façade: parse → classify → reconstruct → aggregate.

use chrono::Timelike;

use crate::classify;
use crate::config::AnalysisConfig;
use crate::intervals;
use crate::metrics;
use crate::parse;
use crate::types::{AnalysisResult, EventRow, Shift};

/// The logbook analyzer. Holds only configuration; every call to
/// [`Analyzer::analyze_lines`] owns its own data and returns a self-contained
/// [`AnalysisResult`], so concurrent analyses never share mutable state.
pub struct Analyzer {
  config: AnalysisConfig,
}

impl Analyzer {
  pub fn new(config: AnalysisConfig) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(AnalysisConfig::default())
  }

  /// Analyze a whole logbook export passed as one text blob.
  pub fn analyze_text(&self, text: &str) -> AnalysisResult {
    self.analyze_lines(text.lines())
  }

  /// Run the full pipeline over raw logbook lines.
  pub fn analyze_lines<'a, I>(&self, lines: I) -> AnalysisResult
  where
    I: IntoIterator<Item = &'a str>,
  {
    let records = parse::parse_lines(lines);
    let events = classify::classify(records, &self.config);

    let operation_periods = intervals::operation_periods(&events);
    let gaps = intervals::inter_failure_gaps(&operation_periods);
    let repair_intervals = intervals::repair_intervals(&events, &self.config);
    let repair_durations: Vec<f64> =
      repair_intervals.iter().map(|r| r.duration_minutes).collect();

    let gap_column = metrics::inter_event_gaps(&events);
    let event_rows: Vec<EventRow> = events
      .iter()
      .zip(&gap_column)
      .map(|(event, gap)| EventRow {
        timestamp: event.record.timestamp,
        code: event.record.code.clone(),
        details: event.record.details.clone(),
        is_failure: event.is_failure,
        is_stoppage: event.is_stoppage,
        is_startup: event.is_startup,
        gap_minutes: *gap,
        shift: Shift::from_hour(event.record.timestamp.hour(), &self.config),
      })
      .collect();

    AnalysisResult {
      summary: metrics::log_summary(&events),
      event_frequency: metrics::code_frequency(
        events.iter().map(|e| e.record.code.as_str()),
      ),
      failure_frequency: metrics::code_frequency(
        events
          .iter()
          .filter(|e| e.is_failure)
          .map(|e| e.record.code.as_str()),
      ),
      mtbf: metrics::summarize(&gaps),
      mttr: metrics::summarize(&repair_durations),
      mttr_by_code: metrics::repair_stats_by_code(&repair_intervals),
      availability_percent: metrics::availability_percent(&gaps, &repair_intervals),
      inter_event_gap_stats: metrics::gap_stats(&gap_column),
      shift_failures: metrics::failures_by_shift(&events, &self.config),
      failures_by_hour: metrics::failures_by_hour(&events),
      events: event_rows,
      operation_periods,
      repair_intervals,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn pipeline_wires_stages_together() {
    let analyzer = Analyzer::with_defaults();
    let result = analyzer.analyze_lines([
      "01.01.2025\t08:00:00\tS1\tStarting speed",
      "01.01.2025\t09:30:00\tE1\tmachine stopped",
      "01.01.2025\t09:45:00\tS2\tAutomatic mode",
    ]);

    assert_eq!(result.summary.total_events, 3);
    assert_eq!(result.events.len(), 3);
    assert_eq!(result.operation_periods.len(), 1);
    assert_eq!(result.repair_intervals.len(), 1);
    assert!(result.mtbf.is_none(), "one period yields no gap");
    assert_eq!(result.mttr.unwrap().mean_minutes, 15.0);
  }

  #[test]
  fn unsorted_input_is_ordered_before_reconstruction() {
    let analyzer = Analyzer::with_defaults();
    let result = analyzer.analyze_lines([
      "01.01.2025\t09:30:00\tE1\tmachine stopped",
      "01.01.2025\t08:00:00\tS1\tStarting speed",
    ]);
    assert_eq!(result.operation_periods.len(), 1);
    assert_eq!(result.events[0].code, "S1");
  }

  #[test]
  fn custom_config_changes_classification() {
    let config = AnalysisConfig {
      failure_prefixes: vec!["F".into()],
      ..AnalysisConfig::default()
    };
    let analyzer = Analyzer::new(config);
    let result = analyzer.analyze_lines(["01.01.2025\t08:00:00\tE1\talarm"]);
    assert_eq!(result.summary.failure_events, 0);
    assert!(result.failure_frequency.is_empty());
  }
}
