//! Structured error types for the logbook engine.
//!
//! Nothing inside the analysis pipeline itself is fatal: malformed lines are
//! dropped and thin metrics come back as `None`. These variants cover the
//! crate's fallible surface around the pipeline (reading input, emitting the
//! result).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}
