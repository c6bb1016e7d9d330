use serde::{Deserialize, Serialize};
use std::fmt;

use super::{resolve_placeholder, Resolve, Type};
use crate::error::Result;
use crate::lookup::TypeLookup;
use crate::name::Name;

/// A named, typed slot: a record field or a method argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: Name,
    #[serde(rename = "type")]
    pub ty: Type,
}

impl Field {
    /// Create a field from a name and a type
    pub fn new(name: impl Into<Name>, ty: impl Into<Type>) -> Self {
        Self { name: name.into(), ty: ty.into() }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty.type_name(), self.name)
    }
}

/// Named, ordered list of fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: Name,
    pub fields: Vec<Field>,
}

impl Record {
    /// Create a record from a name and its fields, in order
    pub fn new(name: impl Into<Name>, fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            name: name.into(),
            fields: fields.into_iter().collect(),
        }
    }

    /// The record name
    pub fn type_name(&self) -> String {
        self.name.to_string()
    }

    /// Append a field after the existing ones
    pub fn push_field(&mut self, name: impl Into<Name>, ty: impl Into<Type>) {
        self.fields.push(Field::new(name, ty));
    }

    /// Find a field by name
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Resolve for Record {
    /// Replaces placeholder field types in declaration order.
    ///
    /// Stops at the first failure. Fields before it stay resolved, the failing
    /// field and everything after it keep their placeholders.
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()> {
        tracing::trace!(record = %self.name, fields = self.fields.len(), "resolving record");
        for idx in 0..self.fields.len() {
            if let Some(resolved) = resolve_placeholder(&self.fields[idx].ty, lookup)? {
                let name = self.fields[idx].name.clone();
                self.fields[idx] = Field::new(name, resolved);
            }
        }
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "record {} {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "  {},", field)?;
        }
        f.write_str("}")
    }
}
