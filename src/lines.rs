//! Highlight line specifications
//!
//! Parses strings like `"1"`, `"1-4"` and `"1-3,5,7-8"` into the set of
//! 1-indexed line numbers they name.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{HighlightError, Result};

/// A set of 1-indexed line numbers to emphasize
///
/// Stored as sorted, disjoint, non-adjacent runs, so a wide range such as
/// `1-1000000000` costs no more than a single line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineSet {
    runs: Vec<RangeInclusive<usize>>,
}

impl LineSet {
    /// Create an empty set (nothing highlighted)
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a line range specification
    ///
    /// Each comma-separated term is either a line number or two line
    /// numbers joined by a single hyphen. A range whose start is past its
    /// end contributes no lines. Any malformed term rejects the whole
    /// specification.
    pub fn parse(spec: &str) -> Result<Self> {
        let mut runs = Vec::new();

        for term in spec.split(',') {
            let term = term.trim();
            if let Some(line) = parse_number(term) {
                runs.push(line..=line);
                continue;
            }

            let bounds: Vec<&str> = term.split('-').collect();
            if bounds.len() != 2 {
                return Err(HighlightError::InvalidLineSpec(term.to_string()));
            }
            let (start, end) = match (parse_number(bounds[0].trim()), parse_number(bounds[1].trim())) {
                (Some(start), Some(end)) => (start, end),
                _ => return Err(HighlightError::InvalidLineSpec(term.to_string())),
            };
            if start <= end {
                runs.push(start..=end);
            }
        }

        let set = Self::from_runs(runs);
        tracing::debug!(spec, runs = set.runs.len(), "parsed highlight lines");
        Ok(set)
    }

    /// Parse an optional specification; absent means nothing is highlighted
    pub fn parse_optional(spec: Option<&str>) -> Result<Self> {
        spec.map_or_else(|| Ok(Self::new()), Self::parse)
    }

    /// Sort runs and merge any that overlap or touch
    fn from_runs(mut runs: Vec<RangeInclusive<usize>>) -> Self {
        runs.sort_by_key(|run| *run.start());

        let mut merged: Vec<RangeInclusive<usize>> = Vec::with_capacity(runs.len());
        for run in runs {
            match merged.last_mut() {
                Some(last) if *run.start() <= last.end().saturating_add(1) => {
                    if run.end() > last.end() {
                        *last = *last.start()..=*run.end();
                    }
                }
                _ => merged.push(run),
            }
        }

        Self { runs: merged }
    }

    /// Check whether a line is highlighted
    pub fn contains(&self, line: usize) -> bool {
        let idx = self.runs.partition_point(|run| *run.end() < line);
        self.runs.get(idx).is_some_and(|run| run.contains(&line))
    }

    /// Number of highlighted lines, saturating at `usize::MAX`
    pub fn len(&self) -> usize {
        self.runs
            .iter()
            .fold(0usize, |total, run| total.saturating_add((run.end() - run.start()).saturating_add(1)))
    }

    /// Check if no line is highlighted
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Iterate highlighted lines in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.runs.iter().flat_map(|run| run.clone())
    }

    /// Iterate the maximal runs of consecutive lines
    pub fn runs(&self) -> impl Iterator<Item = RangeInclusive<usize>> + '_ {
        self.runs.iter().cloned()
    }
}

/// Line numbers are unsigned, so "-3" or "+3" are rejected.
fn parse_number(s: &str) -> Option<usize> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<usize>().ok()
}

impl FromStr for LineSet {
    type Err = HighlightError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromIterator<usize> for LineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_runs(iter.into_iter().map(|line| line..=line).collect())
    }
}

/// Canonical form: consecutive runs collapse to `a-b`
impl fmt::Display for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, run) in self.runs.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if run.start() == run.end() {
                write!(f, "{}", run.start())?;
            } else {
                write!(f, "{}-{}", run.start(), run.end())?;
            }
        }

        Ok(())
    }
}
