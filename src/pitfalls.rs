//! Benchmark bodies that do and do not survive the optimizer.
//!
//! Each function is the body of one benchmark in `benches/pitfalls.rs`. The
//! `bad_*` variants measure close to nothing: their work is either dead code
//! (result never observed) or constant-folded (input known at compile time).
//! The good variants read their input through [`std::hint::black_box`] or
//! hand the result back to the harness.
//!
//! ```
//! use triangle_sum::pitfalls;
//!
//! assert_eq!(pitfalls::use_return(std::f64::consts::PI), std::f64::consts::PI.ln());
//! ```

use std::f64::consts::PI;

/// Baseline: the cost of calling an empty function.
#[inline(never)]
pub fn nop() {}

/// Baseline: the cost of returning a hard-coded constant.
#[inline(never)]
#[must_use]
pub fn constant() -> f64 {
    0.0
}

/// Bad: the result is neither stored nor returned. Once `ln` is inlined the
/// call is dead code and the benchmark collapses to [`nop`].
#[inline(never)]
pub fn bad_ignored_const() {
    let _ = PI.ln();
}

/// Bad: constant input. The compiler evaluates `ln(PI)` once and the body
/// becomes a constant return, same as [`constant`].
#[inline(never)]
#[must_use]
pub fn bad_const_input() -> f64 {
    PI.ln()
}

/// Bad: input comes from the caller so it cannot be folded, but the result
/// is dropped, so the computation is dead code again.
#[inline(never)]
pub fn bad_ignored_computation(x: f64) {
    let _ = x.ln();
}

/// Good: non-constant input and the result is handed back to the caller.
#[inline(never)]
#[must_use]
pub fn use_return(x: f64) -> f64 {
    x.ln()
}
