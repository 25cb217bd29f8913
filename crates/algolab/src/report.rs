//! Trial reports and the summary table.
//!
//! ## Purpose
//!
//! This module defines the output of a trial: a per-run [`TrialReport`] with
//! the algorithm name, input size, and elapsed wall-clock time, and a
//! [`TrialSet`] collecting reports into a printable table from which the
//! fastest algorithm can be read off.
//!
//! ## Design notes
//!
//! * **Ergonomics**: Both types implement `Display` for human-readable
//!   console output; a report prints as `name: seconds(s)`.
//! * **Ordering**: A set preserves insertion order; `fastest()` breaks ties
//!   in favor of the earliest report.
//!
//! ## Non-goals
//!
//! * This module does not run or time anything; it only stores results.

// External dependencies
use std::fmt::{Display, Formatter, Result};
use std::time::Duration;

// ============================================================================
// Trial Report
// ============================================================================

/// Outcome of a single passed trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialReport {
    /// Name of the algorithm under trial.
    pub name: String,

    /// Number of elements (or cases) the trial ran against.
    pub elements: usize,

    /// Wall-clock time of the algorithm run, excluding generation and
    /// cross-checking.
    pub elapsed: Duration,
}

impl Display for TrialReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}: {:.4}(s)", self.name, self.elapsed.as_secs_f64())
    }
}

// ============================================================================
// Trial Set
// ============================================================================

/// An ordered collection of trial reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialSet {
    reports: Vec<TrialReport>,
}

impl TrialSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a report.
    pub fn push(&mut self, report: TrialReport) {
        self.reports.push(report);
    }

    /// Number of reports in the set.
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterate over the reports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &TrialReport> {
        self.reports.iter()
    }

    /// The report with the smallest elapsed time; earliest wins ties.
    pub fn fastest(&self) -> Option<&TrialReport> {
        self.reports
            .iter()
            .min_by(|a, b| a.elapsed.cmp(&b.elapsed))
    }
}

impl FromIterator<TrialReport> for TrialSet {
    fn from_iter<I: IntoIterator<Item = TrialReport>>(iter: I) -> Self {
        Self {
            reports: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for TrialSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "{:<28} {:>10} {:>14}", "Algorithm", "Elements", "Time (s)")?;
        writeln!(f, "{:-<54}", "")?;
        for report in &self.reports {
            writeln!(
                f,
                "{:<28} {:>10} {:>14.6}",
                report.name,
                report.elements,
                report.elapsed.as_secs_f64()
            )?;
        }
        Ok(())
    }
}
