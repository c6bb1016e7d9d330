//! Type Arena
//!
//! Declared types (enums, records, interfaces) live here and are addressed by
//! stable [`TypeId`] indices. A record that mentions itself, or two records
//! that mention each other, hold [`DeclRef`] handles instead of inline copies,
//! so cycles never become ownership cycles.
//!
//! ```text
//! TypeArena
//! ├── #0 enum Hello
//! └── #1 record MyRecord
//!        ├── Hello MyField
//!        └── MyRecord Self   -> DeclRef(#1)
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SchemaError};
use crate::lookup::TypeLookup;
use crate::name::Name;
use crate::types::{DeclRef, Enum, Interface, Record, Resolve};

/// Stable index of a node in a [`TypeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(u32);

impl TypeId {
    /// Create an id from a raw index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// The raw index
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node that can be declared by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Enum(Enum),
    Record(Record),
    Interface(Interface),
}

impl Declaration {
    /// The declared name
    pub fn name(&self) -> &Name {
        match self {
            Declaration::Enum(e) => &e.name,
            Declaration::Record(r) => &r.name,
            Declaration::Interface(i) => &i.name,
        }
    }

    /// Sort rank: enums, then records, then interfaces
    pub fn type_order(&self) -> u8 {
        match self {
            Declaration::Enum(_) => 0,
            Declaration::Record(_) => 1,
            Declaration::Interface(_) => 2,
        }
    }

    /// The record, if this node is one
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Declaration::Record(r) => Some(r),
            _ => None,
        }
    }
}

impl Resolve for Declaration {
    fn resolve(&mut self, lookup: &TypeLookup) -> Result<()> {
        match self {
            Declaration::Enum(e) => e.resolve(lookup),
            Declaration::Record(r) => r.resolve(lookup),
            Declaration::Interface(i) => i.resolve(lookup),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Declaration::Enum(e) => fmt::Display::fmt(e, f),
            Declaration::Record(r) => fmt::Display::fmt(r, f),
            Declaration::Interface(i) => fmt::Display::fmt(i, f),
        }
    }
}

impl From<Enum> for Declaration {
    fn from(e: Enum) -> Self {
        Declaration::Enum(e)
    }
}

impl From<Record> for Declaration {
    fn from(r: Record) -> Self {
        Declaration::Record(r)
    }
}

impl From<Interface> for Declaration {
    fn from(i: Interface) -> Self {
        Declaration::Interface(i)
    }
}

/// Owner of declared type nodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeArena {
    nodes: Vec<Declaration>,
}

impl TypeArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a node and return its handle
    pub fn declare(&mut self, decl: impl Into<Declaration>) -> DeclRef {
        let decl = decl.into();
        let id = TypeId(self.nodes.len() as u32);
        let handle = DeclRef::new(id, decl.name().clone());
        self.nodes.push(decl);
        handle
    }

    /// Look up a node by id
    pub fn get(&self, id: TypeId) -> Result<&Declaration> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(SchemaError::UnknownTypeId(id))
    }

    /// Look up a node by id for mutation
    pub fn get_mut(&mut self, id: TypeId) -> Result<&mut Declaration> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or(SchemaError::UnknownTypeId(id))
    }

    /// Mutable access to a record node, `None` if the node is another kind
    pub fn record_mut(&mut self, id: TypeId) -> Result<Option<&mut Record>> {
        match self.get_mut(id)? {
            Declaration::Record(r) => Ok(Some(r)),
            _ => Ok(None),
        }
    }

    /// Number of declared nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (TypeId, &Declaration)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, decl)| (TypeId(idx as u32), decl))
    }

    /// One-hop resolution of a single node
    pub fn resolve(&mut self, id: TypeId, lookup: &TypeLookup) -> Result<()> {
        self.get_mut(id)?.resolve(lookup)
    }

    /// Resolve every node in declaration order, stopping at the first error.
    ///
    /// Each node is visited exactly once, so self-referential and mutually
    /// recursive records terminate.
    pub fn resolve_all(&mut self, lookup: &TypeLookup) -> Result<()> {
        tracing::debug!(nodes = self.nodes.len(), entries = lookup.len(), "resolving arena");
        for decl in &mut self.nodes {
            decl.resolve(lookup)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Field, Primitive, Type};
    use crate::typeref::TypeRef;

    #[test]
    fn test_declare_assigns_sequential_ids() {
        let mut arena = TypeArena::new();
        let a = arena.declare(Enum::new("A", ["X"]));
        let b = arena.declare(Interface::new("B"));
        assert_eq!(a.id, TypeId::new(0));
        assert_eq!(b.id, TypeId::new(1));
        assert_eq!(b.name, "B");
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_unknown_id() {
        let arena = TypeArena::new();
        assert!(matches!(arena.get(TypeId::new(4)), Err(SchemaError::UnknownTypeId(id)) if id.index() == 4));
    }

    #[test]
    fn test_self_reference_resolves_once() {
        let mut arena = TypeArena::new();
        let hello = arena.declare(Enum::new("Hello", ["Opt1", "Opt2"]));
        let rec = arena.declare(Record::new("MyRecord", [Field::new("MyField", hello.clone())]));
        {
            let record = arena.record_mut(rec.id).unwrap().unwrap();
            record.push_field("Self", rec.clone());
            record.push_field("ToResolve", TypeRef::new(2));
        }

        let mut lookup = TypeLookup::new();
        lookup.insert(2, hello.clone());
        arena.resolve_all(&lookup).unwrap();

        let record = arena.get(rec.id).unwrap().as_record().unwrap();
        assert_eq!(record.fields[1].ty, Type::Declared(rec.clone()));
        assert_eq!(record.fields[2].ty, Type::Declared(hello));
        assert_eq!(
            record.to_string(),
            "record MyRecord {\n  Hello MyField,\n  MyRecord Self,\n  Hello ToResolve,\n}"
        );
    }

    #[test]
    fn test_mutual_recursion() {
        let mut arena = TypeArena::new();
        let left = arena.declare(Record::new("Left", []));
        let right = arena.declare(Record::new("Right", [Field::new("Other", left.clone())]));
        arena.record_mut(left.id).unwrap().unwrap().push_field("Other", TypeRef::new(7));

        let mut lookup = TypeLookup::new();
        lookup.insert(7, right.clone());
        arena.resolve_all(&lookup).unwrap();
        arena.resolve_all(&lookup).unwrap();

        let l = arena.get(left.id).unwrap().as_record().unwrap();
        assert_eq!(l.fields[0].ty, Type::Declared(right));
    }

    #[test]
    fn test_resolve_all_stops_at_first_error() {
        let mut arena = TypeArena::new();
        let first = arena.declare(Record::new("First", [Field::new("Bad", TypeRef::new(-30))]));
        let second = arena.declare(Record::new("Second", [Field::new("Good", TypeRef::new(1))]));

        let mut lookup = TypeLookup::new();
        lookup.insert(1, Primitive::Boolean);
        let err = arena.resolve_all(&lookup).unwrap_err();
        assert_eq!(err.reference(), Some(TypeRef::new(-30)));

        let untouched = arena.get(second.id).unwrap().as_record().unwrap();
        assert!(untouched.fields[0].ty.is_type_ref());
        assert!(arena.get(first.id).is_ok());
    }

    #[test]
    fn test_record_mut_on_enum() {
        let mut arena = TypeArena::new();
        let e = arena.declare(Enum::new("E", ["A"]));
        assert!(arena.record_mut(e.id).unwrap().is_none());
    }
}
