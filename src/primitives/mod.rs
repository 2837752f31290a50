//! # Layer 0: Primitives
//!
//! Basic building blocks for tag identities:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Hash streams, Peano depths and stream equality.
//! - `hash.rs`: Const FNV-1a hashing.

pub mod bool;
pub mod hash;
pub mod nibble;
pub mod stream;

// Re-export key types at this level
pub use bool::{Absent, Bool, Present};
pub use hash::{fnv1a_64_str, hash_nibble};
pub use nibble::{Nibble, NibbleEq, SelectNibble, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{DefaultMaxDepth, HashStream, HashStream16, Peano, StreamEq, S, Z};
