//! Signed type references
//!
//! A `TypeRef` stands in for a type that has not been inlined yet. The
//! magnitude selects an entry of a [`TypeLookup`](crate::lookup::TypeLookup);
//! a negative sign asks for an array of that entry:
//!
//! ```text
//!  5  ->  lookup[5]
//! -5  ->  lookup[5][]
//! ```
//!
//! Never compare raw magnitudes without looking at the sign.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder reference to a type in a lookup table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRef(i32);

impl TypeRef {
    /// Create a reference from its signed value
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Reference to `magnitude` wrapped as an array.
    ///
    /// `None` for `0`, which has no negative form, and for magnitudes above
    /// `2^31`, which do not fit.
    pub fn array_of(magnitude: u32) -> Option<Self> {
        if magnitude == 0 {
            return None;
        }
        i32::try_from(-i64::from(magnitude)).ok().map(Self)
    }

    /// The signed value, as written by the caller
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The lookup key this reference points at
    pub const fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Whether the resolved type gets wrapped as an array
    pub const fn is_array(self) -> bool {
        self.0 < 0
    }

    /// Diagnostic name, also used as the full rendering
    pub fn type_name(&self) -> String {
        format!("<Type reference to {}>", self.0)
    }
}

impl From<i32> for TypeRef {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Type reference to {}>", self.0)
    }
}
