//! Encoding: `(a, b) -> code`.

use crate::codec::depair::depair;
use crate::codec::triangular;
use crate::error::PairError;

/// Options for pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairOptions {
    /// Verify the fresh code before returning it.
    ///
    /// When enabled, the code is depaired and compared against the operands;
    /// a mismatch is reported as [`PairError::Unpairable`] and the code is
    /// discarded.
    ///
    /// Disable only when the operand range is known to stay within
    /// [`MAX_SAFE_SUM`](crate::limits::MAX_SAFE_SUM). Unchecked codes for
    /// larger operands are truncated modulo 2^64.
    pub safe: bool,
}

impl Default for PairOptions {
    fn default() -> Self {
        Self { safe: true }
    }
}

impl PairOptions {
    /// Creates default (verified) pairing options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that skip round-trip verification.
    pub fn unchecked() -> Self {
        Self { safe: false }
    }
}

/// Pairs two non-negative integers into a single code, verifying the result.
///
/// ```rust
/// assert_eq!(cantor::pair(22, 33), Ok(1573));
/// assert_eq!(cantor::depair(1573), (22, 33));
/// ```
pub fn pair(a: i64, b: i64) -> Result<u64, PairError> {
    pair_with_options(a, b, PairOptions::default())
}

/// Pairs two non-negative integers with the given options.
pub fn pair_with_options(a: i64, b: i64, options: PairOptions) -> Result<u64, PairError> {
    if a < 0 || b < 0 {
        tracing::debug!(a, b, "rejecting negative operand");
        return Err(PairError::InvalidInput { a, b });
    }

    let code = pair_raw(a as u64, b as u64);

    if options.safe && depair(code) != (a, b) {
        tracing::debug!(a, b, code, "code does not depair to its operands");
        return Err(PairError::Unpairable { a, b });
    }

    Ok(code)
}

/// `(a + b)(a + b + 1) / 2 + b`, truncated to 64 bits.
#[inline]
fn pair_raw(a: u64, b: u64) -> u64 {
    // Both operands are below 2^63, so the sum fits.
    let sum = a + b;
    (triangular(sum) + b as u128) as u64
}
