//! Decoding: `code -> (a, b)`.

use crate::codec::triangular;

/// Recovers the ordered pair that [`pair`](crate::pair) maps to `code`.
///
/// Total over `u64`: every code belongs to exactly one pair, and
/// `pair(a, b)` of the result gives `code` back.
///
/// ```text
/// w = floor((sqrt(8 * code + 1) - 1) / 2)   // diagonal, i.e. a + b
/// t = w * (w + 1) / 2                       // first code on that diagonal
/// b = code - t
/// a = w - b
/// ```
///
/// The square root is an exact integer square root, so `w` is never off by
/// one regardless of magnitude.
pub fn depair(code: u64) -> (i64, i64) {
    let w = ((8 * code as u128 + 1).isqrt() - 1) / 2;
    // w <= 6_074_000_999 for any u64 code, so it fits in 64 bits.
    let w = w as u64;
    let b = code as u128 - triangular(w);
    let a = w as u128 - b;
    // Both are bounded by w.
    (a as i64, b as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(depair(0), (0, 0));
    }

    #[test]
    fn test_known_pairs() {
        assert_eq!(depair(1573), (22, 33));
        assert_eq!(depair(1562), (33, 22));
        assert_eq!(depair(594), (0, 33));
        assert_eq!(depair(2147549184), (1 << 15, 1 << 15));
    }

    #[test]
    fn test_diagonal_boundaries() {
        // Triangular numbers start a diagonal at (w, 0).
        assert_eq!(depair(1), (1, 0));
        assert_eq!(depair(3), (2, 0));
        assert_eq!(depair(6), (3, 0));
        // One before a triangular number ends the previous diagonal at (0, w).
        assert_eq!(depair(2), (0, 1));
        assert_eq!(depair(5), (0, 2));
        assert_eq!(depair(9), (0, 3));
    }

    #[test]
    fn test_largest_code() {
        assert_eq!(depair(u64::MAX), (3327948884, 2746052115));
    }

    #[test]
    fn test_perfect_square_discriminant() {
        // 8 * code + 1 is a perfect square exactly at triangular numbers.
        let w: u64 = 6_074_000_998;
        let code = triangular(w) as u64;
        assert_eq!(depair(code), (w as i64, 0));
        assert_eq!(depair(code - 1), (0, w as i64 - 1));
    }
}
