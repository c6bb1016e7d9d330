use serde::{Deserialize, Serialize};
use std::fmt;

use super::{resolve_placeholder, Field, Resolve, Type};
use crate::error::Result;
use crate::lookup::TypeLookup;
use crate::name::Name;
use crate::schema::NameKind;

/// Remote-callable interface. Only the name is modelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interface {
    pub name: Name,
}

impl Interface {
    /// Create an interface with the given name
    pub fn new(name: impl Into<Name>) -> Self {
        Self { name: name.into() }
    }

    /// The interface name
    pub fn type_name(&self) -> String {
        self.name.to_string()
    }
}

impl Resolve for Interface {
    fn resolve(&mut self, _lookup: &TypeLookup) -> Result<()> {
        Ok(())
    }
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interface {} {{\n}}", self.name)
    }
}

/// Method descriptor: name, arguments and return type.
///
/// Not attached to an [`Interface`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: Name,
    pub arguments: Vec<Field>,
    pub return_type: Type,
}

impl Method {
    /// Create a method from its name, arguments and return type
    pub fn new(
        name: impl Into<Name>,
        arguments: impl IntoIterator<Item = Field>,
        return_type: impl Into<Type>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into_iter().collect(),
            return_type: return_type.into(),
        }
    }

    /// The method name followed by its argument names, tagged by role
    pub fn names(&self) -> Vec<(NameKind, &Name)> {
        std::iter::once((NameKind::Method, &self.name))
            .chain(self.arguments.iter().map(|arg| (NameKind::Parameter, &arg.name)))
            .collect()
    }
}

impl Resolve for Method {
    /// Arguments first, then the return type; stops at the first failure
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()> {
        for idx in 0..self.arguments.len() {
            if let Some(resolved) = resolve_placeholder(&self.arguments[idx].ty, lookup)? {
                let name = self.arguments[idx].name.clone();
                self.arguments[idx] = Field::new(name, resolved);
            }
        }
        if let Some(resolved) = resolve_placeholder(&self.return_type, lookup)? {
            self.return_type = resolved;
        }
        Ok(())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type.type_name(), self.name)?;
        for (idx, arg) in self.arguments.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", arg)?;
        }
        f.write_str(");")
    }
}
