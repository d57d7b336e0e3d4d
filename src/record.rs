use serde::Serialize;

use crate::grade::{Grade, letter_grade};

/// Minimum number of score columns a written record carries.
pub const SCORE_COLUMNS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradeRecord {
    pub name: String,
    pub scores: Vec<i64>,
    pub final_score: i64,
    pub grade: Grade,
}

impl GradeRecord {
    /// Renders the result line shown to the user after a submission.
    pub fn message(&self) -> String {
        format!("{}'s grade: {}", self.name, self.grade)
    }
}

/// Assembles the record for one submission.
///
/// The final score is the maximum entered score, or 0 when no attempts were
/// supplied, and the grade follows from it. The stored sequence is padded
/// with trailing zeros up to [`SCORE_COLUMNS`]; longer sequences are kept
/// whole, so a record can carry more than four score columns. The name is
/// recorded as given, empty included.
pub fn build_record(name: &str, mut scores: Vec<i64>) -> GradeRecord {
    let final_score = scores.iter().copied().max().unwrap_or(0);

    let width = scores.len().max(SCORE_COLUMNS);
    scores.resize(width, 0);

    GradeRecord {
        name: name.to_string(),
        scores,
        final_score,
        grade: letter_grade(final_score),
    }
}
