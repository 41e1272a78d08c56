//! Representable range of the `u64` code space.
//!
//! Pairing is exact up to the point where a code no longer fits in 64 bits.
//! Past that, an unchecked code is truncated and decodes to a different pair.

use crate::codec::triangular;

/// Largest diagonal `a + b` on which every pair fits in a `u64` code.
///
/// The last code on diagonal `n` is `n * (n + 3) / 2`. Diagonal
/// `MAX_SAFE_SUM + 1` is only partially representable: its codes run past
/// `u64::MAX` from `(3327948884, 2746052115)` onwards.
pub const MAX_SAFE_SUM: u64 = 6_074_000_998;

/// Returns true if `pair(a, b)` succeeds in safe mode.
pub fn is_pairable(a: i64, b: i64) -> bool {
    if a < 0 || b < 0 {
        return false;
    }
    let sum = a as u64 + b as u64;
    triangular(sum) + b as u128 <= u64::MAX as u128
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pair;
    use proptest::prelude::*;

    #[test]
    fn test_max_safe_sum_is_tight() {
        let last = |n: u64| triangular(n) + n as u128;
        assert!(last(MAX_SAFE_SUM) <= u64::MAX as u128);
        assert!(last(MAX_SAFE_SUM + 1) > u64::MAX as u128);
    }

    #[test]
    fn test_is_pairable() {
        let max = MAX_SAFE_SUM as i64;
        assert!(is_pairable(0, 0));
        assert!(is_pairable(0, max));
        assert!(is_pairable(max + 1, 0));
        assert!(!is_pairable(0, max + 1));
        assert!(!is_pairable(1 << 52, 1 << 52));
        assert!(!is_pairable(-1, 0));
        assert!(!is_pairable(0, -1));
    }

    proptest! {
        #[test]
        fn test_is_pairable_agrees_with_pair(
            a in 0i64..7_000_000_000,
            b in 0i64..7_000_000_000,
        ) {
            prop_assert_eq!(is_pairable(a, b), pair(a, b).is_ok());
        }

        #[test]
        fn test_whole_safe_diagonal_pairs(b in 0..=MAX_SAFE_SUM) {
            let a = (MAX_SAFE_SUM - b) as i64;
            prop_assert!(is_pairable(a, b as i64));
            prop_assert!(pair(a, b as i64).is_ok());
        }
    }
}
