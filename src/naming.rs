//! Name conversion for downstream generators
//!
//! Schema names are written in PascalCase. Target languages want other
//! conventions for some roles (Python methods in snake_case, C# parameters in
//! camelCase), so each role gets its own hook.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::schema::NameKind;

/// Per-role name conversion. Every hook defaults to the identity.
pub trait NameConverter {
    fn interface_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn method_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn parameter_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn enum_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn enum_value_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn record_name(&self, name: &str) -> String {
        name.to_string()
    }

    fn record_field_name(&self, name: &str) -> String {
        name.to_string()
    }

    /// Dispatch on the role
    fn convert(&self, kind: NameKind, name: &str) -> String {
        match kind {
            NameKind::Interface => self.interface_name(name),
            NameKind::Method => self.method_name(name),
            NameKind::Parameter => self.parameter_name(name),
            NameKind::Enum => self.enum_name(name),
            NameKind::EnumValue => self.enum_value_name(name),
            NameKind::Record => self.record_name(name),
            NameKind::RecordField => self.record_field_name(name),
        }
    }
}

/// Leaves every name as declared
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityNameConverter;

impl NameConverter for IdentityNameConverter {}

/// snake_case for methods, parameters and record fields
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeCaseNameConverter;

impl NameConverter for SnakeCaseNameConverter {
    fn method_name(&self, name: &str) -> String {
        to_snake_case(name)
    }

    fn parameter_name(&self, name: &str) -> String {
        to_snake_case(name)
    }

    fn record_field_name(&self, name: &str) -> String {
        to_snake_case(name)
    }
}

/// camelCase parameters, everything else unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseParameterConverter;

impl NameConverter for CamelCaseParameterConverter {
    fn parameter_name(&self, name: &str) -> String {
        lower_first(name)
    }
}

/// Underscore before every uppercase letter except the first, then lowercase.
///
/// Runs of capitals are split letter by letter: `HTTPCode` -> `h_t_t_p_code`.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    for (idx, c) in s.chars().enumerate() {
        if c.is_uppercase() && idx > 0 {
            result.push('_');
        }
        result.extend(c.to_lowercase());
    }
    result
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Selects a [`NameConverter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingConvention {
    #[default]
    Identity,
    Snake,
    Camel,
}

impl NamingConvention {
    pub fn converter(&self) -> Box<dyn NameConverter> {
        match self {
            NamingConvention::Identity => Box::new(IdentityNameConverter),
            NamingConvention::Snake => Box::new(SnakeCaseNameConverter),
            NamingConvention::Camel => Box::new(CamelCaseParameterConverter),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NamingConvention::Identity => "identity",
            NamingConvention::Snake => "snake",
            NamingConvention::Camel => "camel",
        };
        f.write_str(s)
    }
}
