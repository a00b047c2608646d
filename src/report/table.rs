use crate::log::MetricRecord;

use anyhow::{Context, bail};
use serde::Serialize;
use std::fs::File;
use std::io;
use std::path::Path;

/// One spreadsheet row. Field order fixes the header order.
///
/// Duration columns are seconds. Records carry raw milliseconds, so the one
/// ms->s conversion for the whole pipeline happens here, when a row is
/// built; throughput is rounded to 2 decimals at the same point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "Query_Number")]
    pub query_number: String,
    #[serde(rename = "Job_ID")]
    pub job_id: String,
    #[serde(rename = "Total_Duration")]
    pub total_duration: f64,
    #[serde(rename = "Parsing_Optimization_Time")]
    pub parsing_optimization_time: f64,
    #[serde(rename = "Execution_Time")]
    pub execution_time: f64,
    #[serde(rename = "Throughput_Records_Per_Sec")]
    pub throughput_records_per_sec: f64,
}

impl From<&MetricRecord> for ReportRow {
    fn from(record: &MetricRecord) -> Self {
        Self {
            query_number: record.query.clone(),
            job_id: record.job_id.clone(),
            total_duration: record.total_duration_ms as f64 / 1000.0,
            parsing_optimization_time: record.parsing_optimization_ms as f64 / 1000.0,
            execution_time: record.execution_ms as f64 / 1000.0,
            throughput_records_per_sec: round2(record.throughput),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Write the header row plus one row per record, input order, no index
/// column.
pub fn write_csv<W: io::Write>(rows: &[ReportRow], writer: W) -> anyhow::Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    for row in rows {
        out.serialize(row)?;
    }
    out.flush()?;
    Ok(())
}

/// Export records to `path` and return the rows as written.
///
/// An empty record set is an export error; no file is created for an empty
/// table.
pub fn write_report(records: &[MetricRecord], path: &Path) -> anyhow::Result<Vec<ReportRow>> {
    if records.is_empty() {
        bail!("no query result records to export");
    }

    let rows: Vec<ReportRow> = records.iter().map(ReportRow::from).collect();
    let file = File::create(path)
        .with_context(|| format!("create output file {}", path.display()))?;
    write_csv(&rows, file)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record() -> MetricRecord {
        MetricRecord {
            query: "q5".into(),
            job_id: "8e2bc9".into(),
            total_duration_ms: 63125,
            parsing_optimization_ms: 2500,
            execution_ms: 60625,
            throughput: 1584.158415841584,
        }
    }

    #[test]
    fn row_converts_milliseconds_to_seconds_once() {
        let row = ReportRow::from(&record());
        assert_eq!(row.total_duration, 63.125);
        assert_eq!(row.parsing_optimization_time, 2.5);
        assert_eq!(row.execution_time, 60.625);
    }

    #[test]
    fn row_rounds_throughput_to_two_decimals() {
        let row = ReportRow::from(&record());
        assert_eq!(row.throughput_records_per_sec, 1584.16);
    }

    #[test]
    fn csv_has_exact_headers_and_no_index_column() {
        let mut buf = Vec::new();
        write_csv(&[ReportRow::from(&record())], &mut buf).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some(
                "Query_Number,Job_ID,Total_Duration,Parsing_Optimization_Time,\
                 Execution_Time,Throughput_Records_Per_Sec"
            )
        );
        assert_eq!(lines.next(), Some("q5,8e2bc9,63.125,2.5,60.625,1584.16"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rows_keep_input_order() {
        let mut second = record();
        second.query = "q7".into();

        let mut buf = Vec::new();
        write_csv(
            &[ReportRow::from(&record()), ReportRow::from(&second)],
            &mut buf,
        )
        .unwrap();

        let text = String::from_utf8(buf).unwrap();
        let queries: Vec<&str> = text
            .lines()
            .skip(1)
            .map(|l| l.split(',').next().unwrap())
            .collect();
        assert_eq!(queries, vec!["q5", "q7"]);
    }

    #[test]
    fn empty_record_set_is_an_export_error() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("empty.csv");

        let err = write_report(&[], &out).unwrap_err();
        assert!(err.to_string().contains("no query result records"));
        assert!(!out.exists());
    }

    #[test]
    fn write_report_creates_the_file_and_returns_rows() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("results.csv");

        let rows = write_report(&[record()], &out).unwrap();
        assert_eq!(rows.len(), 1);
        assert!(out.exists());
    }
}
