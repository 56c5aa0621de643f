//! Engine configuration with sane defaults.

/// Tunable classification and reconstruction rules.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
  /// Case-sensitive event-code prefixes that mark a failure (alarm classes).
  pub failure_prefixes: Vec<String>,
  /// Case-insensitive phrases that mark a stoppage.
  pub stoppage_phrases: Vec<String>,
  /// Case-insensitive phrases that mark a startup.
  pub startup_phrases: Vec<String>,
  /// Exclusive upper bound on a plausible repair duration, in minutes.
  /// Longer gaps are treated as data artifacts, not repairs.
  pub max_repair_minutes: f64,
  /// Hour of day where shift A begins; shift C runs from midnight to here.
  pub shift_a_start: u32,
  /// Hour of day where shift B begins; shift B runs to midnight.
  pub shift_b_start: u32,
}

impl Default for AnalysisConfig {
  fn default() -> Self {
    Self {
      failure_prefixes: vec!["E".into(), "W".into(), "T".into()],
      stoppage_phrases: vec!["stopped".into(), "machine stopped".into()],
      startup_phrases: vec![
        "starting speed".into(),
        "automatic mode".into(),
        "starting".into(),
      ],
      max_repair_minutes: 1440.0,
      shift_a_start: 8,
      shift_b_start: 16,
    }
  }
}
