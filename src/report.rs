use crate::config::oneshot_help_text;
use crate::error::CensusError;
use crate::patterns::PatternCounts;
use crate::sequence::Sequence;
use crate::statistics::{Analysis, Statistics, analyze};
use std::io::Write;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    pub format: ReportFormat,
    pub breakdown: bool,
}

pub fn format_statistics(stats: &Statistics) -> String {
    format!(
        "Total number of entries: {}\n\
Total number of alterations: {}\n\
Number of successful alterations: {}\n\
Percentage of successful alterations: {:.2}%\n",
        stats.total_entries,
        stats.total_alterations,
        stats.successful_alterations,
        stats.percentage_successful
    )
}

pub fn format_breakdown(counts: &PatternCounts) -> String {
    counts
        .iter()
        .map(|e| format!("{}: {}\n", e.pattern(), e.count()))
        .collect()
}

pub fn to_json(analysis: &Analysis) -> Result<String, CensusError> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

pub fn write_report<W: Write>(
    out: &mut W,
    analysis: &Analysis,
    options: ReportOptions,
) -> Result<(), CensusError> {
    match options.format {
        ReportFormat::Json => writeln!(out, "{}", to_json(analysis)?)?,
        ReportFormat::Text => {
            if options.breakdown {
                write!(out, "{}", format_breakdown(&analysis.counts))?;
            }
            write!(out, "{}", format_statistics(&analysis.statistics))?;
        }
    }
    Ok(())
}

/// Reports on every raw sequence, one blank line between reports.
/// Rejected sequences go to `err` and make the result false; the rest are still reported.
pub fn run_oneshot<W: Write, E: Write>(
    sequences: &[String],
    options: ReportOptions,
    out: &mut W,
    err: &mut E,
) -> Result<bool, CensusError> {
    if sequences.is_empty() {
        writeln!(err, "{}", oneshot_help_text())?;
        return Ok(false);
    }
    let mut all_valid = true;
    let mut printed = 0usize;
    for raw in sequences {
        match Sequence::parse(raw) {
            Ok(sequence) => {
                if printed > 0 {
                    writeln!(out)?;
                }
                write_report(out, &analyze(sequence), options)?;
                printed += 1;
            }
            Err(e) => {
                log::warn!("rejected '{raw}': {e}");
                writeln!(err, "'{raw}': {e}")?;
                all_valid = false;
            }
        }
    }
    Ok(all_valid)
}
