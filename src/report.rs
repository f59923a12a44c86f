//! Printable forms of a trace for the `trace` subcommand.
//!
//! (StepTrace, ReportFormat, Locale) → String. No I/O.

use crate::trace::{Locale, Phase, Step, StepTrace};
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// One line per step plus a summary
    #[default]
    Human,
    /// Array of step records
    Json,
}

/// A step as exported to JSON, with its position and rendered narrative
#[derive(Debug, Serialize)]
pub struct StepRecord<'a> {
    pub index: usize,
    #[serde(flatten)]
    pub step: &'a Step,
    pub narrative: String,
}

pub fn records(trace: &StepTrace, locale: Locale) -> Vec<StepRecord<'_>> {
    trace
        .iter()
        .enumerate()
        .map(|(index, step)| StepRecord {
            index,
            step,
            narrative: step.narrative(locale),
        })
        .collect()
}

pub fn format_trace(
    trace: &StepTrace,
    format: ReportFormat,
    locale: Locale,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Human => Ok(format_human(trace, locale)),
        ReportFormat::Json => serde_json::to_string_pretty(&records(trace, locale)),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(trace: &StepTrace, locale: Locale) -> String {
    let mut out = String::new();
    let width = trace.len().to_string().len();

    // Writing to a String cannot fail
    for (i, step) in trace.iter().enumerate() {
        let line = step
            .highlight
            .map(|l| l.index().to_string())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>width$}  {:<12} L{:<2} {:<32} {}",
            i,
            format!("{:?}", step.phase),
            line,
            format!("{:?}", step.array),
            step.narrative(locale),
            width = width
        );
    }

    let counts = trace.phase_counts();
    out.push('\n');
    let _ = writeln!(out, "input:  {:?}", trace.input());
    let _ = writeln!(out, "sorted: {:?}", trace.sorted());
    let _ = write!(out, "steps:  {}", trace.len());
    for phase in Phase::ALL {
        if let Some(count) = counts.get(&phase) {
            let _ = write!(out, "  {:?}={}", phase, count);
        }
    }
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================
