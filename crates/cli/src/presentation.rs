// crates/cli/src/presentation.rs
use pwc_engine::aggregate::RunTotals;
use pwc_engine::options::MetricSet;
use pwc_engine::stats::{FileCounts, FileError, RunResult};
use std::io::{self, BufWriter, Write};

/// Label printed after the numbers on the total line.
pub const TOTAL_LABEL: &str = "total";

/// Prefix of every per-input diagnostic line.
pub const ERROR_PREFIX: &str = "wc";

/// Writes the report for `run` to stdout.
pub fn print_report(run: &RunResult, metrics: MetricSet) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, run, metrics)?;
    out.flush()?;
    Ok(())
}

/// One line per result, in the order held by `run`, then a total line when
/// more than one input was processed.
pub fn write_report(out: &mut impl Write, run: &RunResult, metrics: MetricSet) -> anyhow::Result<()> {
    let totals = RunTotals::from_results(&run.results);
    let width = totals.column_width();

    for result in &run.results {
        match result {
            Ok(stats) => {
                let label = stats.input.label().map(|p| p.to_string_lossy());
                writeln!(out, "{}", format_counts(&stats.counts, metrics, width, label.as_deref()))?;
            }
            Err(err) => writeln!(out, "{}", format_error(err))?,
        }
    }

    if totals.has_total_line() {
        writeln!(
            out,
            "{}",
            format_counts(&totals.counts, metrics, width, Some(TOTAL_LABEL))
        )?;
    }
    Ok(())
}

/// Active columns right-aligned to `width`, followed by the label if any.
pub fn format_counts(counts: &FileCounts, metrics: MetricSet, width: usize, label: Option<&str>) -> String {
    let mut line = metrics
        .active()
        .map(|m| format!("{:>width$}", counts.get(m)))
        .collect::<Vec<_>>()
        .join(" ");

    if let Some(label) = label {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(label);
    }
    line
}

pub fn format_error(err: &FileError) -> String {
    format!("{ERROR_PREFIX}: {}: {}", err.input.display_name(), err.cause)
}
