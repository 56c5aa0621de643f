//! Parse raw logbook lines into time-ordered EventRecords.
//!
//! The plant export is tab-separated: `Date<TAB>Time<TAB>Code<TAB>Details`,
//! dates as `DD.MM.YYYY`, times as `HH:MM:SS`. Separator/header lines start
//! with `=`. Malformed lines are dropped, never fatal: the run degrades
//! gracefully instead of aborting on one bad row.

use chrono::NaiveDateTime;

use crate::types::EventRecord;

/// Timestamp layout used by the plant logbook export. A row that does not
/// parse against exactly this format is dropped (no fallback formats).
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Marker for table-header / separator lines in the export.
const HEADER_MARKER: char = '=';

/// Parse raw lines into EventRecords, sorted ascending by timestamp.
///
/// Input order is not assumed chronological. The sort is stable, so records
/// with equal timestamps keep their original relative order.
pub fn parse_lines<'a, I>(lines: I) -> Vec<EventRecord>
where
  I: IntoIterator<Item = &'a str>,
{
  let mut records: Vec<EventRecord> = lines.into_iter().filter_map(parse_line).collect();
  records.sort_by_key(|r| r.timestamp);
  records
}

/// Parse one line; None for blanks, header rows and malformed rows.
fn parse_line(line: &str) -> Option<EventRecord> {
  let line = line.trim_end_matches(['\r', '\n']);
  if line.trim().is_empty() || line.starts_with(HEADER_MARKER) {
    return None;
  }

  // Exactly four positional fields: date, time, code, details. Short rows
  // are padded with empty strings, extra fields are ignored.
  let mut fields: Vec<&str> = line.split('\t').map(str::trim).collect();
  fields.truncate(4);
  while fields.len() < 4 {
    fields.push("");
  }

  let (date, time) = (fields[0], fields[1]);
  if date.is_empty() || time.is_empty() {
    return None;
  }

  let timestamp =
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), TIMESTAMP_FORMAT).ok()?;

  Some(EventRecord {
    timestamp,
    code: fields[2].to_string(),
    details: fields[3].to_string(),
  })
}
