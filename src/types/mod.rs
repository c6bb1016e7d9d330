//! Schema Type Model
//!
//! The closed set of schema node kinds. Every kind exposes a display name
//! (`type_name`) and, except for bare references, a one-hop resolution pass
//! through the [`Resolve`] trait.
//!
//! Resolution happens at the container: an [`Array`] or [`Record`] holding a
//! [`TypeRef`] asks the resolver for the target and swaps it in. Nothing is
//! resolved recursively, so cyclic structures always terminate.
//!
//! Self-reference goes through a [`TypeArena`](crate::arena::TypeArena): a
//! record field holds a [`DeclRef`] handle to its own node instead of an
//! inline copy of itself.

mod array;
mod enumeration;
mod interface;
mod record;

pub use array::Array;
pub use enumeration::Enum;
pub use interface::{Interface, Method};
pub use record::{Field, Record};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arena::TypeId;
use crate::error::Result;
use crate::lookup::TypeLookup;
use crate::name::Name;
use crate::typeref::TypeRef;

/// One-hop reference resolution for container types.
///
/// Deliberately not implemented for [`TypeRef`]: a bare reference is
/// replaced by its container, never resolved in place.
pub trait Resolve {
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()>;
}

/// Built-in scalar types, in type-table order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Void,
    Boolean,
    Int8,
    Uint8,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Int64,
    Uint64,
    Float32,
    Float64,
    String,
    Date,
    Time,
    Datetime,
}

impl Primitive {
    /// All primitives; the position is the reference magnitude in a schema type table
    pub const ALL: [Primitive; 16] = [
        Primitive::Void,
        Primitive::Boolean,
        Primitive::Int8,
        Primitive::Uint8,
        Primitive::Int16,
        Primitive::Uint16,
        Primitive::Int32,
        Primitive::Uint32,
        Primitive::Int64,
        Primitive::Uint64,
        Primitive::Float32,
        Primitive::Float64,
        Primitive::String,
        Primitive::Date,
        Primitive::Time,
        Primitive::Datetime,
    ];

    /// Lowercase name used in renderings
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Int8 => "int8",
            Primitive::Uint8 => "uint8",
            Primitive::Int16 => "int16",
            Primitive::Uint16 => "uint16",
            Primitive::Int32 => "int32",
            Primitive::Uint32 => "uint32",
            Primitive::Int64 => "int64",
            Primitive::Uint64 => "uint64",
            Primitive::Float32 => "float32",
            Primitive::Float64 => "float64",
            Primitive::String => "string",
            Primitive::Date => "date",
            Primitive::Time => "time",
            Primitive::Datetime => "datetime",
        }
    }

    /// Position in [`Primitive::ALL`]
    pub fn index(&self) -> u32 {
        *self as u32
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handle to a node declared in a [`TypeArena`](crate::arena::TypeArena).
///
/// Carries the declared name so it can be displayed without the arena.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeclRef {
    pub id: TypeId,
    pub name: Name,
}

impl DeclRef {
    /// Create a handle for node `id`
    pub fn new(id: TypeId, name: impl Into<Name>) -> Self {
        Self { id, name: name.into() }
    }
}

/// A schema type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Type {
    Primitive { primitive: Primitive },
    Enum(Enum),
    Record(Record),
    Array(Array),
    Interface(Interface),
    /// Node owned by an arena
    Declared(DeclRef),
    /// Placeholder awaiting resolution
    Ref { reference: TypeRef },
}

impl Type {
    /// A built-in scalar type
    pub fn primitive(primitive: Primitive) -> Self {
        Type::Primitive { primitive }
    }

    /// A placeholder reference
    pub fn reference(reference: impl Into<TypeRef>) -> Self {
        Type::Ref { reference: reference.into() }
    }

    /// An array of `underlying`
    pub fn array_of(underlying: impl Into<Type>) -> Self {
        Type::Array(Array::new(underlying))
    }

    /// Display name; never resolves anything
    pub fn type_name(&self) -> String {
        match self {
            Type::Primitive { primitive } => primitive.name().to_string(),
            Type::Enum(e) => e.type_name(),
            Type::Record(r) => r.type_name(),
            Type::Array(a) => a.type_name(),
            Type::Interface(i) => i.type_name(),
            Type::Declared(d) => d.name.to_string(),
            Type::Ref { reference } => reference.type_name(),
        }
    }

    /// The placeholder held by this type, if it is still unresolved
    pub fn as_type_ref(&self) -> Option<TypeRef> {
        match self {
            Type::Ref { reference } => Some(*reference),
            _ => None,
        }
    }

    /// Whether this is still a placeholder
    pub fn is_type_ref(&self) -> bool {
        matches!(self, Type::Ref { .. })
    }

    /// Whether this is the `void` primitive
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Primitive { primitive: Primitive::Void })
    }
}

impl Resolve for Type {
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()> {
        match self {
            Type::Enum(e) => e.resolve(lookup),
            Type::Record(r) => r.resolve(lookup),
            Type::Array(a) => a.resolve(lookup),
            Type::Interface(i) => i.resolve(lookup),
            Type::Primitive { .. } | Type::Declared(_) => Ok(()),
            Type::Ref { reference } => panic!(
                "cannot resolve {} in place; resolve the array or record holding it",
                reference
            ),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Enum(e) => fmt::Display::fmt(e, f),
            Type::Record(r) => fmt::Display::fmt(r, f),
            Type::Interface(i) => fmt::Display::fmt(i, f),
            other => f.write_str(&other.type_name()),
        }
    }
}

impl From<Primitive> for Type {
    fn from(primitive: Primitive) -> Self {
        Type::primitive(primitive)
    }
}

impl From<TypeRef> for Type {
    fn from(reference: TypeRef) -> Self {
        Type::Ref { reference }
    }
}

impl From<DeclRef> for Type {
    fn from(handle: DeclRef) -> Self {
        Type::Declared(handle)
    }
}

impl From<Enum> for Type {
    fn from(e: Enum) -> Self {
        Type::Enum(e)
    }
}

impl From<Record> for Type {
    fn from(r: Record) -> Self {
        Type::Record(r)
    }
}

impl From<Array> for Type {
    fn from(a: Array) -> Self {
        Type::Array(a)
    }
}

impl From<Interface> for Type {
    fn from(i: Interface) -> Self {
        Type::Interface(i)
    }
}

/// Resolve `ty` if it is a placeholder; `None` means leave it as it is.
pub(crate) fn resolve_placeholder(ty: &Type, lookup: &TypeLookup) -> Result<Option<Type>> {
    match ty {
        Type::Ref { reference } => crate::lookup::resolve(lookup, *reference).map(Some),
        _ => Ok(None),
    }
}
