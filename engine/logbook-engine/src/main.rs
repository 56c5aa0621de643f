//! Binary entrypoint: read a logbook export, write one AnalysisResult JSON
//! document to stdout.
//!
//! Usage:
//!   logbook-engine <logbook.txt>   # analyze a file
//!   logbook-engine                 # analyze stdin
//!
//! Decoding bytes to text happens here, at the edge; the engine itself only
//! sees lines. Malformed lines never fail the run — only unreadable input
//! exits non-zero.

use logbook_engine::{Analyzer, EngineError};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "logbook-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), EngineError> {
  let text = match std::env::args().nth(1) {
    Some(path) => std::fs::read_to_string(path)?,
    None => {
      let mut buf = String::new();
      io::stdin().lock().read_to_string(&mut buf)?;
      buf
    }
  };

  let result = Analyzer::with_defaults().analyze_text(&text);

  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  serde_json::to_writer_pretty(&mut out, &result)?;
  writeln!(out)?;
  out.flush()?;
  Ok(())
}
