//! Tag parsed records with failure / stoppage / startup roles.
//!
//! Matching is deliberately loose: case-sensitive code prefixes for failures,
//! unscoped case-insensitive substring containment over code + details for
//! stoppage/startup phrases. Incidental keyword hits (a details text that
//! happens to contain "starting") are an accepted trade-off; tightening the
//! match would silently shift historical metric values.

use crate::config::AnalysisConfig;
use crate::types::{ClassifiedEvent, EventRecord};

/// Classify records: same count, same order, no drops.
pub fn classify(records: Vec<EventRecord>, config: &AnalysisConfig) -> Vec<ClassifiedEvent> {
  records
    .into_iter()
    .map(|record| {
      let is_failure = config
        .failure_prefixes
        .iter()
        .any(|prefix| record.code.starts_with(prefix.as_str()));

      let haystack = format!("{} {}", record.code, record.details).to_lowercase();
      let is_stoppage = contains_any(&haystack, &config.stoppage_phrases);
      let is_startup = contains_any(&haystack, &config.startup_phrases);

      ClassifiedEvent {
        record,
        is_failure,
        is_stoppage,
        is_startup,
      }
    })
    .collect()
}

fn contains_any(haystack: &str, phrases: &[String]) -> bool {
  phrases
    .iter()
    .any(|phrase| haystack.contains(&phrase.to_lowercase()))
}
