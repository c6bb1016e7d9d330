use serde::{Deserialize, Serialize};
use std::fmt;

use super::Resolve;
use crate::error::Result;
use crate::lookup::TypeLookup;
use crate::name::Name;

/// Named, ordered set of values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enum {
    pub name: Name,
    pub values: Vec<Name>,
}

impl Enum {
    /// Create an enum from a name and its values, in order
    pub fn new<N, I, V>(name: N, values: I) -> Self
    where
        N: Into<Name>,
        I: IntoIterator<Item = V>,
        V: Into<Name>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// The enum name
    pub fn type_name(&self) -> String {
        self.name.to_string()
    }
}

impl Resolve for Enum {
    fn resolve(&mut self, _lookup: &TypeLookup) -> Result<()> {
        Ok(())
    }
}

impl fmt::Display for Enum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "enum {} {{", self.name)?;
        for value in &self.values {
            writeln!(f, "  {},", value)?;
        }
        f.write_str("}")
    }
}
