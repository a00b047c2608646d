//! Derived metrics: per-job throughput and the summary statistics printed
//! after export.

pub mod stats;

pub use stats::Describe;

use crate::payload::JobPayload;

/// Records-per-second throughput for one job.
///
/// Only the first vertex is consulted; multi-stage jobs report vertex 0's
/// write-records. A payload without vertices warns on stderr and yields 0,
/// as does a non-positive duration.
pub fn throughput(job: &JobPayload) -> f64 {
    let Some(vertex) = job.vertices.first() else {
        eprintln!("WARN: job payload has no vertices, throughput defaults to 0");
        return 0.0;
    };

    let records = vertex.write_records();
    if job.duration > 0 {
        (records * 1000.0) / job.duration as f64
    } else {
        0.0
    }
}
