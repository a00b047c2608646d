/// One benchmark result extracted from a matching log line.
///
/// Duration fields are raw milliseconds as reported by the job; the export
/// layer owns the single ms->s conversion. Phase durations are differences
/// of lifecycle timestamps and go negative if the job reported them out of
/// order; that passes through unvalidated.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRecord {
    /// Query identifier from the marker, e.g. "q5".
    pub query: String,
    /// Job identifier from the marker.
    pub job_id: String,
    /// Total job duration (ms).
    pub total_duration_ms: i64,
    /// RUNNING - CREATED (ms): time spent parsing and optimizing the query.
    pub parsing_optimization_ms: i64,
    /// FINISHED - RUNNING (ms).
    pub execution_ms: i64,
    /// Records per second, unrounded.
    pub throughput: f64,
}
