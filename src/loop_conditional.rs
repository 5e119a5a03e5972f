//! Nested-loop conditional elimination on plain integers.
//!
//! The integer precursor of the matrix example: sum `i + j` over every pair
//! `i < j < limit`. [`original`] tests the condition per iteration;
//! [`optimized`] folds it into the inner loop bound and runs about twice as
//! fast. With no memory access involved the loop order does not matter here,
//! which is exactly what stops being true in [`crate::triangle`].

/// Full `limit x limit` sweep with a per-iteration `i < j` check.
#[must_use]
pub fn original(limit: u32) -> u64 {
    let mut sum = 0u64;
    for i in 0..u64::from(limit) {
        for j in 0..u64::from(limit) {
            if i < j {
                sum += i + j;
            }
        }
    }
    sum
}

/// Outer `j`, inner `i` in `0..j`. Same pairs, no branch.
#[must_use]
pub fn optimized(limit: u32) -> u64 {
    let mut sum = 0u64;
    for j in 0..u64::from(limit) {
        for i in 0..j {
            sum += i + j;
        }
    }
    sum
}

/// `limit * (limit - 1)^2 / 2`, the value both loops must produce.
#[must_use]
pub fn closed_form(limit: u32) -> u64 {
    let n = u64::from(limit);
    if n == 0 {
        return 0;
    }
    n * (n - 1) * (n - 1) / 2
}
