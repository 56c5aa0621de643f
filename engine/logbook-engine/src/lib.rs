//! Logbook Reliability Engine — deterministic, rule-based.
//!
//! Ingests a chronological plant-logbook export, classifies events as
//! failure / stoppage / startup, reconstructs operation and repair intervals,
//! and derives MTBF, MTTR and availability.
//!
//! No DB, no network; pure computation over an in-memory event sequence.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod intervals;
pub mod metrics;
pub mod parse;
pub mod types;

pub use config::AnalysisConfig;
pub use engine::Analyzer;
pub use error::EngineError;
pub use types::AnalysisResult;
