//! Results-file aggregation.
//!
//! Reads a results file this tool wrote earlier (or any file in the same
//! shape), recomputes letter grades from the final-score column, and rolls
//! the rows up into class-level statistics.

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

use crate::grade::{Grade, letter_grade};

/// Count of records per letter grade.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct GradeCounts {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub f: usize,
}

impl GradeCounts {
    fn bump(&mut self, grade: Grade) {
        match grade {
            Grade::A => self.a += 1,
            Grade::B => self.b += 1,
            Grade::C => self.c += 1,
            Grade::D => self.d += 1,
            Grade::F => self.f += 1,
        }
    }
}

/// Class-level statistics over one results file.
#[derive(Debug, Serialize)]
pub struct ClassSummary {
    pub records: usize,
    pub students: usize,
    pub skipped_rows: usize,
    pub mean_final: f64,
    pub stddev_final: f64,
    pub min_final: Option<i64>,
    pub max_final: Option<i64>,
    pub grades: GradeCounts,
}

impl fmt::Display for ClassSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "records: {} ({} skipped)", self.records, self.skipped_rows)?;
        writeln!(f, "students: {}", self.students)?;
        match (self.min_final, self.max_final) {
            (Some(min), Some(max)) => writeln!(
                f,
                "final scores: mean {:.1}, stddev {:.1}, min {}, max {}",
                self.mean_final, self.stddev_final, min, max
            )?,
            _ => writeln!(f, "final scores: none")?,
        }
        write!(
            f,
            "grades: A={} B={} C={} D={} F={}",
            self.grades.a, self.grades.b, self.grades.c, self.grades.d, self.grades.f
        )
    }
}

/// Reads a results file and aggregates it into a [`ClassSummary`].
///
/// The file is headerless and rows may differ in width, since records
/// written with more than four attempts carry extra score columns. Each row
/// is read as `name, score..., final`. Rows that do not fit are skipped
/// with a warning rather than failing the whole report.
pub fn summarize(path: &str, delimiter: u8) -> Result<ClassSummary> {
    debug!(path, "Summarizing results file");

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        // The tab log is written bare, with no quoting discipline.
        .quoting(delimiter == b',')
        .from_path(path)
        .with_context(|| format!("could not open results file {path}"))?;

    let mut finals = Vec::new();
    let mut names = BTreeSet::new();
    let mut grades = GradeCounts::default();
    let mut skipped = 0usize;

    for (line, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                warn!(row = line + 1, error = %e, "Skipping unreadable results row");
                skipped += 1;
                continue;
            }
        };

        let Some((name, final_score)) = parse_row(&row) else {
            warn!(row = line + 1, "Skipping malformed results row");
            skipped += 1;
            continue;
        };

        names.insert(name.to_string());
        grades.bump(letter_grade(final_score));
        finals.push(final_score);
    }

    let values: Vec<f64> = finals.iter().map(|&s| s as f64).collect();
    let mean_final = mean(&values);

    Ok(ClassSummary {
        records: finals.len(),
        students: names.len(),
        skipped_rows: skipped,
        mean_final,
        stddev_final: stddev(&values, mean_final),
        min_final: finals.iter().copied().min(),
        max_final: finals.iter().copied().max(),
        grades,
    })
}

/// Splits one results row into `(name, final_score)`.
///
/// A valid row has at least a name, one score column, and the trailing
/// final score.
fn parse_row(row: &csv::StringRecord) -> Option<(&str, i64)> {
    if row.len() < 3 {
        return None;
    }
    let name = row.get(0)?;
    let final_score = row.get(row.len() - 1)?.trim().parse().ok()?;
    Some((name, final_score))
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}
