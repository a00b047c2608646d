use crate::log::record::MetricRecord;
use crate::model;
use crate::payload::{self, JobPayload};

use anyhow::Context;
use regex::{Captures, Regex};
use std::fs;
use std::sync::LazyLock;
use thiserror::Error;

/// Matches the marker the sequential runner writes for every completed job:
///
/// [2024-06-10 12:00:00] QUERY: q5 JOB_ID: 8e2bc9... STATUS: SUCCESS OUTPUT: {...}
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"QUERY: (q\d+) JOB_ID: (\w+)").unwrap());

/// Why a marked line produced no record.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON payload after marker")]
    NoPayload,
    #[error("bad JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload missing {0} timestamp")]
    MissingTimestamp(&'static str),
}

/// Scan log text for query result lines.
///
/// Yields `(line_number, outcome)` for every line carrying the marker, in
/// input order; line numbers are 1-based. Lines without the marker yield
/// nothing. Errors are handed to the caller, which decides whether to log,
/// count, or abort.
pub fn scan_lines(
    text: &str,
) -> impl Iterator<Item = (usize, Result<MetricRecord, ParseError>)> + '_ {
    text.lines().enumerate().filter_map(|(lineno, line)| {
        let caps = MARKER.captures(line)?;
        Some((lineno + 1, extract(&caps, line)))
    })
}

/// Decode the payload substring of one marked line into a record.
fn extract(caps: &Captures<'_>, line: &str) -> Result<MetricRecord, ParseError> {
    // The payload is everything from the first '{' to end of line.
    let start = line.find('{').ok_or(ParseError::NoPayload)?;
    let job: JobPayload = serde_json::from_str(line[start..].trim())?;

    let created = timestamp(&job, payload::CREATED)?;
    let running = timestamp(&job, payload::RUNNING)?;
    let finished = timestamp(&job, payload::FINISHED)?;

    Ok(MetricRecord {
        query: caps[1].to_string(),
        job_id: caps[2].to_string(),
        total_duration_ms: job.duration,
        parsing_optimization_ms: running - created,
        execution_ms: finished - running,
        throughput: model::throughput(&job),
    })
}

fn timestamp(job: &JobPayload, state: &'static str) -> Result<i64, ParseError> {
    job.timestamp(state).ok_or(ParseError::MissingTimestamp(state))
}

/// Parse a results log file into the records it carries.
///
/// The only fatal error is an unreadable file. A line that carries the
/// marker but fails to decode is reported on stderr and skipped; line
/// failures never abort the pass.
pub fn parse_log_file(path: &str) -> anyhow::Result<Vec<MetricRecord>> {
    let text = fs::read_to_string(path).with_context(|| format!("read log file {}", path))?;

    let mut records = Vec::new();
    for (lno, outcome) in scan_lines(&text) {
        match outcome {
            Ok(record) => records.push(record),
            Err(err) => eprintln!("Error processing line {}:{}: {}", path, lno, err),
        }
    }
    Ok(records)
}
