use clap::Parser;
use std::path::{Path, PathBuf};

use nexmark_metrics::{Result, log, report};

#[derive(Parser)]
#[command(name = "nexmark-metrics")]
#[command(about = "Extract query metrics from a benchmark results log", long_about = None)]
struct Cli {
    /// Path to the results log file.
    log_file: String,

    /// Path to the output spreadsheet (default: log path with a .csv extension).
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if !Path::new(&cli.log_file).exists() {
        eprintln!("Error: file not found: {}", cli.log_file);
        return;
    }

    let output = cli
        .output
        .unwrap_or_else(|| Path::new(&cli.log_file).with_extension("csv"));

    // Every failure past this point prints one diagnostic; there is no
    // exit-code taxonomy for the different failure kinds.
    if let Err(err) = run(&cli.log_file, &output) {
        eprintln!("An error occurred: {:#}", err);
    }
}

fn run(log_file: &str, output: &Path) -> Result<()> {
    // 1) One pass over the log; failed lines are reported and skipped.
    let records = log::parse_log_file(log_file)?;

    // 2) Export the table.
    let rows = report::write_report(&records, output)?;
    println!("Wrote {}", output.display());

    // 3) Console summary.
    report::print_summary(&rows);

    Ok(())
}
