//! Serde helper that stores an ordered pair as its Cantor code.
//!
//! For scalar-only sinks: JSON fields, numeric columns, APIs that accept a
//! single integer where a pair is meant.
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Cell {
//!     #[serde(with = "cantor::paired")]
//!     xy: (i64, i64),
//! }
//!
//! let json = serde_json::to_string(&Cell { xy: (22, 33) }).unwrap();
//! assert_eq!(json, r#"{"xy":1573}"#);
//! ```

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Serializes `(a, b)` as `pair(a, b)`. Fails if the pair cannot be encoded.
pub fn serialize<S: Serializer>(value: &(i64, i64), s: S) -> Result<S::Ok, S::Error> {
    let code = crate::pair(value.0, value.1).map_err(S::Error::custom)?;
    s.serialize_u64(code)
}

/// Deserializes a code and depairs it.
pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<(i64, i64), D::Error> {
    let code = u64::deserialize(d)?;
    Ok(crate::depair(code))
}
