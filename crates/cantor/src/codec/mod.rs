//! Cantor pairing and its inverse.
//!
//! Codes are `u64`. Operands are `i64` at the boundary and must be
//! non-negative.

pub mod depair;
pub mod pair;

pub use depair::depair;
pub use pair::{PairOptions, pair, pair_with_options};

/// Exact triangular number `n * (n + 1) / 2`.
///
/// Any `n` reachable from two non-negative `i64` operands fits without
/// overflow in 128 bits.
#[inline]
pub(crate) fn triangular(n: u64) -> u128 {
    let n = n as u128;
    n * (n + 1) / 2
}
