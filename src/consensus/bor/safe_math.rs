//! Overflow-safe voting power aggregation.
//!
//! Voting power comes from persisted data and must be treated as untrusted, so
//! sums saturate instead of wrapping and are checked against a ceiling after
//! every step.

use super::{BorError, Validator};

/// Checked `a + b`, `None` on overflow.
#[inline]
pub fn safe_add(a: i64, b: i64) -> Option<i64> {
    a.checked_add(b)
}

/// `a + b` clipped to `i64::MIN`/`i64::MAX` depending on the sign of `b`.
#[inline]
pub fn safe_add_clip(a: i64, b: i64) -> i64 {
    match safe_add(a, b) {
        Some(sum) => sum,
        None if b < 0 => i64::MIN,
        None => i64::MAX,
    }
}

/// Sum the voting power of `validators` left to right.
///
/// Fails with [`BorError::TotalVotingPowerExceeded`] at the first running sum
/// above `ceiling`. An empty list sums to zero.
pub fn compute_total_voting_power(
    validators: &[Validator],
    ceiling: i64,
) -> Result<i64, BorError> {
    let mut sum = 0i64;
    for val in validators {
        sum = safe_add_clip(sum, val.voting_power);
        if sum > ceiling {
            return Err(BorError::TotalVotingPowerExceeded {
                sum,
                validators: validators.to_vec(),
            });
        }
    }
    Ok(sum)
}
