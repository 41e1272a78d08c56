//! Cantor pairing: encode an ordered pair of non-negative integers as a single
//! integer, and decode it back.
//!
//! # Overview
//!
//! The Cantor pairing function enumerates the integer lattice diagonal by
//! diagonal, where diagonal `w` holds every `(a, b)` with `a + b = w`:
//!
//! ```text
//! pair(a, b) = (a + b)(a + b + 1) / 2 + b
//! ```
//!
//! It is a bijection between `ℕ × ℕ` and `ℕ`, so a pair can travel through
//! anything that only holds a scalar (a JSON number, a numeric column, a map
//! key) and be recovered exactly on the other side.
//!
//! # Quick Start
//!
//! ```rust
//! use cantor::{PairError, depair, pair};
//!
//! let code = pair(22, 33).unwrap();
//! assert_eq!(code, 1573);
//! assert_eq!(depair(code), (22, 33));
//!
//! // Order matters.
//! assert_eq!(pair(33, 22), Ok(1562));
//!
//! // Negative operands are rejected.
//! assert_eq!(pair(-1, 5), Err(PairError::InvalidInput { a: -1, b: 5 }));
//! ```
//!
//! # Modules
//!
//! - [`codec`]: `pair`, `depair` and [`PairOptions`]
//! - [`limits`]: the representable range of the `u64` code space
//! - [`error`]: Error types
//! - `paired`: serde adapter (feature `serde`)
//!
//! # Safety check
//!
//! Codes are `u64`. Pairs whose code would not fit are detected by decoding
//! the fresh code and comparing it with the operands; a mismatch is reported
//! as [`PairError::Unpairable`] instead of returning a code that decodes to a
//! different pair. [`PairOptions::unchecked`] skips the check.
//!
//! ```rust
//! use cantor::{PairError, PairOptions, pair, pair_with_options};
//!
//! let big = 1i64 << 52;
//! assert_eq!(pair(big, big), Err(PairError::Unpairable { a: big, b: big }));
//! assert!(pair_with_options(big, big, PairOptions::unchecked()).is_ok());
//! ```

pub mod codec;
pub mod error;
pub mod limits;
#[cfg(feature = "serde")]
pub mod paired;

// Re-export commonly used items at crate root
pub use codec::{PairOptions, depair, pair, pair_with_options};
pub use error::{ErrorCode, PairError};
pub use limits::{MAX_SAFE_SUM, is_pairable};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
