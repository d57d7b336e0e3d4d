//! Parsing and validation of raw score entries.
//!
//! Two parse rules coexist. The strict rule backs regular submissions and
//! rejects bad input with a [`ValidationError`]. The lenient rule backs the
//! CSV export path and silently coerces anything it cannot read to 0. The
//! two are deliberately not unified; callers depend on the difference.

use std::num::IntErrorKind;
use thiserror::Error;

/// Lowest score a non-blank entry may carry.
pub const MIN_SCORE: i64 = 1;
/// Highest score a non-blank entry may carry.
pub const MAX_SCORE: i64 = 100;

/// Why a score entry failed strict validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Reason {
    #[error("not a number")]
    NotANumber,
    #[error("out of range")]
    OutOfRange,
}

/// Rejection of a single score entry.
///
/// `index` is the 1-based position of the attempt that failed, which is
/// how the entry is named back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid input for score {index}: {reason} (enter a number between 1 and 100)")]
pub struct ValidationError {
    pub index: usize,
    pub reason: Reason,
}

/// Parses one raw entry per attempt slot under the strict submission rule.
///
/// An empty entry stands for a skipped attempt and contributes 0. Anything
/// else must parse, after trimming, as an integer in
/// [`MIN_SCORE`]`..=`[`MAX_SCORE`]. On success the output holds one integer
/// per input entry, in input order.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the 1-based index of the first bad
/// entry; later entries are not evaluated. Numerals too large for `i64`
/// count as out of range, not as non-numbers.
pub fn parse_entries(entries: &[String]) -> Result<Vec<i64>, ValidationError> {
    let mut scores = Vec::with_capacity(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        if entry.is_empty() {
            scores.push(0);
            continue;
        }

        let score = match entry.trim().parse::<i64>() {
            Ok(n) => n,
            Err(e)
                if matches!(
                    e.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                return Err(ValidationError {
                    index: i + 1,
                    reason: Reason::OutOfRange,
                });
            }
            Err(_) => {
                return Err(ValidationError {
                    index: i + 1,
                    reason: Reason::NotANumber,
                });
            }
        };

        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ValidationError {
                index: i + 1,
                reason: Reason::OutOfRange,
            });
        }

        scores.push(score);
    }

    Ok(scores)
}

/// Parses entries under the lenient export rule.
///
/// An entry made entirely of ASCII digits parses to its value with no range
/// check; every other entry (empty, signed, whitespace-padded, non-numeric,
/// or a numeral too large for `i64`) silently becomes 0. Never fails.
pub fn lenient_scores(entries: &[String]) -> Vec<i64> {
    entries
        .iter()
        .map(|entry| {
            if !entry.is_empty() && entry.bytes().all(|b| b.is_ascii_digit()) {
                entry.parse().unwrap_or(0)
            } else {
                0
            }
        })
        .collect()
}
