use crate::model::Describe;
use crate::report::table::ReportRow;

const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

/// Numeric columns of the export, in header order, with their values.
fn numeric_columns(rows: &[ReportRow]) -> Vec<(&'static str, Vec<f64>)> {
    vec![
        (
            "Total_Duration",
            rows.iter().map(|r| r.total_duration).collect(),
        ),
        (
            "Parsing_Optimization_Time",
            rows.iter().map(|r| r.parsing_optimization_time).collect(),
        ),
        (
            "Execution_Time",
            rows.iter().map(|r| r.execution_time).collect(),
        ),
        (
            "Throughput_Records_Per_Sec",
            rows.iter().map(|r| r.throughput_records_per_sec).collect(),
        ),
    ]
}

fn fmt(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:.2}", v)
    }
}

fn stat_cells(values: &[f64]) -> Vec<String> {
    match Describe::of(values) {
        Some(d) => vec![
            d.count.to_string(),
            fmt(d.mean),
            fmt(d.std),
            fmt(d.min),
            fmt(d.q25),
            fmt(d.median),
            fmt(d.q75),
            fmt(d.max),
        ],
        None => std::iter::once("0".to_string())
            .chain((0..7).map(|_| "NaN".to_string()))
            .collect(),
    }
}

/// Render the statistics table: one column per numeric export column, one
/// row per stat, every cell right-aligned under its header.
pub fn render_summary(rows: &[ReportRow]) -> String {
    let columns = numeric_columns(rows);

    let table: Vec<Vec<String>> = columns
        .iter()
        .map(|(_, values)| stat_cells(values))
        .collect();
    let widths: Vec<usize> = columns
        .iter()
        .zip(&table)
        .map(|((name, _), cells)| {
            cells
                .iter()
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(name.len())
        })
        .collect();

    let label_width = STAT_LABELS.iter().map(|s| s.len()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&" ".repeat(label_width));
    for ((name, _), &width) in columns.iter().zip(&widths) {
        out.push_str(&format!("  {name:>width$}"));
    }
    out.push('\n');

    for (i, label) in STAT_LABELS.iter().enumerate() {
        out.push_str(&format!("{label:<label_width$}"));
        for (cells, &width) in table.iter().zip(&widths) {
            out.push_str(&format!("  {:>width$}", cells[i]));
        }
        out.push('\n');
    }
    out
}

/// Print the summary block shown after a successful export.
pub fn print_summary(rows: &[ReportRow]) {
    println!("\nSummary Statistics:");
    print!("{}", render_summary(rows));
}
