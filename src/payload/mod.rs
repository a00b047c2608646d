//! Schema layer: the job JSON embedded in result lines.
//!
//! This module is intentionally separate from log parsing and export. It
//! owns the serde view of the payload; nothing outside it touches raw
//! `serde_json::Value`.

pub mod job;

pub use job::{CREATED, FINISHED, JobPayload, RUNNING, Vertex};
