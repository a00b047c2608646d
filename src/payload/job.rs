//! Job payload as captured from the cluster's REST endpoint.
//!
//! JSON shape (irrelevant fields omitted):
//! {
//!   "jid": "8e2bc9...",
//!   "state": "FINISHED",
//!   "duration": 63125,
//!   "timestamps": {
//!     "CREATED": 1718000000000,
//!     "RUNNING": 1718000002500,
//!     "FINISHED": 1718000063125
//!   },
//!   "vertices": [
//!     { "metrics": { "write-records": 100000, "read-bytes-complete": true } },
//!     ...
//!   ]
//! }
//!
//! The runner appends the whole response to the result line, so payloads
//! carry plenty of extra fields (jid, name, plan, ...); those are ignored.
//! Only `duration` is required at decode time.

use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Lifecycle states consulted when deriving phase durations.
pub const CREATED: &str = "CREATED";
pub const RUNNING: &str = "RUNNING";
pub const FINISHED: &str = "FINISHED";

#[derive(Debug, Clone, Deserialize)]
pub struct JobPayload {
    /// Total job duration in milliseconds.
    pub duration: i64,

    /// Lifecycle-state name to epoch-millis. States beyond the three we
    /// consult (RESTARTING, CANCELED, ...) may be present.
    #[serde(default)]
    pub timestamps: BTreeMap<String, i64>,

    /// Execution vertices in plan order.
    #[serde(default)]
    pub vertices: Vec<Vertex>,
}

/// One stage of the job's execution graph.
#[derive(Debug, Clone, Deserialize)]
pub struct Vertex {
    /// Metric maps mix counters with flags (e.g. read-bytes-complete), so
    /// values stay untyped and numeric reads go through `write_records`.
    #[serde(default)]
    pub metrics: BTreeMap<String, Value>,
}

impl JobPayload {
    /// Epoch-millis timestamp for a lifecycle state, if the job reported one.
    pub fn timestamp(&self, state: &str) -> Option<i64> {
        self.timestamps.get(state).copied()
    }
}

impl Vertex {
    /// The write-records counter as a number; 0 when absent or non-numeric.
    pub fn write_records(&self) -> f64 {
        self.metrics
            .get("write-records")
            .and_then(Value::as_f64)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(json: &str) -> JobPayload {
        serde_json::from_str(json).expect("payload should decode")
    }

    #[test]
    fn decodes_full_payload() {
        let payload = decode(
            r#"{
                "jid": "8e2bc9",
                "state": "FINISHED",
                "duration": 63125,
                "timestamps": {"CREATED": 100, "RUNNING": 2500, "FINISHED": 63225},
                "vertices": [{"metrics": {"write-records": 100000, "read-bytes-complete": true}}]
            }"#,
        );

        assert_eq!(payload.duration, 63125);
        assert_eq!(payload.timestamp(CREATED), Some(100));
        assert_eq!(payload.timestamp(RUNNING), Some(2500));
        assert_eq!(payload.timestamp(FINISHED), Some(63225));
        assert_eq!(payload.vertices.len(), 1);
        assert_eq!(payload.vertices[0].write_records(), 100000.0);
    }

    #[test]
    fn unknown_lifecycle_states_are_kept_but_harmless() {
        let payload = decode(
            r#"{"duration": 1, "timestamps": {"RESTARTING": 7}, "vertices": []}"#,
        );
        assert_eq!(payload.timestamp("RESTARTING"), Some(7));
        assert_eq!(payload.timestamp(CREATED), None);
    }

    #[test]
    fn missing_timestamps_and_vertices_default_to_empty() {
        let payload = decode(r#"{"duration": 500}"#);
        assert!(payload.timestamps.is_empty());
        assert!(payload.vertices.is_empty());
    }

    #[test]
    fn missing_duration_is_a_decode_error() {
        let err = serde_json::from_str::<JobPayload>(r#"{"timestamps": {}}"#);
        assert!(err.is_err());
    }

    #[test]
    fn write_records_defaults_to_zero_when_absent() {
        let payload = decode(r#"{"duration": 1, "vertices": [{"metrics": {}}]}"#);
        assert_eq!(payload.vertices[0].write_records(), 0.0);
    }

    #[test]
    fn write_records_defaults_to_zero_when_non_numeric() {
        let payload =
            decode(r#"{"duration": 1, "vertices": [{"metrics": {"write-records": "n/a"}}]}"#);
        assert_eq!(payload.vertices[0].write_records(), 0.0);
    }
}
