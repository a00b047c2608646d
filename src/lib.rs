//! Nexmark benchmark results extractor.
//!
//! Parses the results log written by the sequential query runner and exports
//! one metrics row per completed job: query number, job id, the lifecycle
//! phase durations, and a derived records-per-second throughput. Output is a
//! CSV table plus a console statistics summary.

pub mod log;
pub mod model;
pub mod payload;
pub mod report;

pub type Result<T> = anyhow::Result<T>;
