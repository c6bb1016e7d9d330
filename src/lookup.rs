//! Lookup table and reference resolver
//!
//! The caller builds a [`TypeLookup`] (for example with
//! [`Schema::type_lookup`](crate::schema::Schema::type_lookup)) and hands it
//! read-only to the resolution pass.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{Result, SchemaError};
use crate::typeref::TypeRef;
use crate::types::{Array, Type};

/// Mapping from reference magnitude to concrete type
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeLookup {
    entries: BTreeMap<u32, Type>,
}

impl TypeLookup {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `ty` under `magnitude`, returning the type it replaced
    pub fn insert(&mut self, magnitude: u32, ty: impl Into<Type>) -> Option<Type> {
        self.entries.insert(magnitude, ty.into())
    }

    /// The type registered under `magnitude`
    pub fn get(&self, magnitude: u32) -> Option<&Type> {
        self.entries.get(&magnitude)
    }

    /// Whether `magnitude` has an entry
    pub fn contains(&self, magnitude: u32) -> bool {
        self.entries.contains_key(&magnitude)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending magnitude order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Type)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    /// Shorthand for [`resolve`]
    pub fn resolve(&self, reference: TypeRef) -> Result<Type> {
        resolve(self, reference)
    }
}

impl FromIterator<(u32, Type)> for TypeLookup {
    fn from_iter<I: IntoIterator<Item = (u32, Type)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

/// Turn a reference into a concrete type.
///
/// A negative reference yields a fresh [`Array`] around the target. The
/// returned value is a copy: resolving the same reference twice gives equal,
/// independent results.
pub fn resolve(lookup: &TypeLookup, reference: TypeRef) -> Result<Type> {
    let Some(found) = lookup.get(reference.magnitude()) else {
        tracing::warn!(reference = reference.value(), "type reference not found");
        return Err(SchemaError::TypeNotFound { reference });
    };

    tracing::debug!(
        reference = reference.value(),
        resolved = %found.type_name(),
        "resolved type reference"
    );

    if reference.is_array() {
        Ok(Type::Array(Array::new(found.clone())))
    } else {
        Ok(found.clone())
    }
}
