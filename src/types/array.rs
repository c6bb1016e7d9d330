use serde::{Deserialize, Serialize};
use std::fmt;

use super::{resolve_placeholder, Resolve, Type};
use crate::error::Result;
use crate::lookup::TypeLookup;

/// Homogeneous sequence of one underlying type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Array {
    pub underlying: Box<Type>,
}

impl Array {
    /// Wrap a type as an array
    pub fn new(underlying: impl Into<Type>) -> Self {
        Self { underlying: Box::new(underlying.into()) }
    }

    /// `<underlying>[]`, computed even while the underlying type is a placeholder
    pub fn type_name(&self) -> String {
        format!("{}[]", self.underlying.type_name())
    }
}

impl Resolve for Array {
    /// Replaces a placeholder underlying type. Any other underlying type is
    /// left alone, including nested arrays that still hold placeholders.
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()> {
        if let Some(resolved) = resolve_placeholder(&self.underlying, lookup)? {
            tracing::trace!(array = %self.type_name(), "resolved array element type");
            self.underlying = Box::new(resolved);
        }
        Ok(())
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name())
    }
}
