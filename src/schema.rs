//! Schemas: labelled collections of declared types
//!
//! A schema owns a [`TypeArena`] and derives the type table from it:
//!
//! ```text
//! magnitude  0..=15   primitives (void, boolean, int8, ... datetime)
//! magnitude 16..      declared types sorted by (enum < record < interface, name)
//! negative            array of the type at the magnitude
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::arena::{Declaration, TypeArena, TypeId};
use crate::checksum::Checksum;
use crate::error::Result;
use crate::lookup::TypeLookup;
use crate::name::Name;
use crate::typeref::TypeRef;
use crate::types::{DeclRef, Primitive, Type};

/// Magnitude of the first declared type in a schema type table
pub const FIRST_DECLARED: u32 = Primitive::ALL.len() as u32;

/// A labelled set of declared types
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    pub label: String,
    arena: TypeArena,
}

impl Schema {
    /// Create an empty schema
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            arena: TypeArena::new(),
        }
    }

    /// Declare a type and return its handle
    pub fn declare(&mut self, decl: impl Into<Declaration>) -> DeclRef {
        self.arena.declare(decl)
    }

    /// The declared nodes
    pub fn arena(&self) -> &TypeArena {
        &self.arena
    }

    /// The declared nodes, for mutation
    pub fn arena_mut(&mut self) -> &mut TypeArena {
        &mut self.arena
    }

    /// Declared types sorted by type order, then name
    pub fn declared(&self) -> Vec<(TypeId, &Declaration)> {
        let mut decls: Vec<_> = self.arena.iter().collect();
        decls.sort_by(|(a_id, a), (b_id, b)| {
            (a.type_order(), a.name(), a_id).cmp(&(b.type_order(), b.name(), b_id))
        });
        decls
    }

    /// Find a declared type by name
    pub fn find(&self, name: &str) -> Option<DeclRef> {
        self.arena
            .iter()
            .find(|(_, decl)| decl.name() == name)
            .map(|(id, decl)| DeclRef::new(id, decl.name().clone()))
    }

    /// The type table in declaration order: primitives first, then the sorted
    /// declared types as arena handles.
    pub fn type_lookup(&self) -> TypeLookup {
        let primitives = Primitive::ALL
            .iter()
            .map(|p| (p.index(), Type::primitive(*p)));
        let declared = self
            .declared()
            .into_iter()
            .enumerate()
            .map(|(pos, (id, decl))| {
                (FIRST_DECLARED + pos as u32, Type::Declared(DeclRef::new(id, decl.name().clone())))
            });
        primitives.chain(declared).collect()
    }

    /// Encode a type as a reference into [`Schema::type_lookup`].
    ///
    /// Only primitives, declared handles and arrays of those are encodable.
    /// An array of `void` has no encoding because `-0` is `0`.
    pub fn reference_for(&self, ty: &Type) -> Option<TypeRef> {
        match ty {
            Type::Primitive { primitive } => Some(TypeRef::new(primitive.index() as i32)),
            Type::Declared(handle) => self
                .magnitude_of(handle.id)
                .map(|m| TypeRef::new(m as i32)),
            Type::Array(array) => match self.reference_for(&array.underlying)? {
                inner if !inner.is_array() => TypeRef::array_of(inner.magnitude()),
                _ => None,
            },
            _ => None,
        }
    }

    fn magnitude_of(&self, id: TypeId) -> Option<u32> {
        self.declared()
            .iter()
            .position(|(decl_id, _)| *decl_id == id)
            .map(|pos| FIRST_DECLARED + pos as u32)
    }

    /// Resolve every declared type against this schema's own type table
    pub fn resolve(&mut self) -> Result<()> {
        let lookup = self.type_lookup();
        tracing::debug!(label = %self.label, "resolving schema");
        self.arena.resolve_all(&lookup)
    }

    /// Declared types in sorted order, separated by blank lines
    pub fn pretty_print(&self) -> String {
        self.declared()
            .iter()
            .map(|(_, decl)| decl.to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Fingerprint of the current rendering
    pub fn checksum(&self) -> Checksum {
        Checksum::from_str(&self.pretty_print())
    }

    /// All names reachable from the declarations, as (kind, owner, name)
    pub fn names(&self) -> Vec<(NameKind, Option<&Name>, &Name)> {
        let mut names = Vec::new();
        for (_, decl) in self.declared() {
            match decl {
                Declaration::Enum(e) => {
                    names.push((NameKind::Enum, None, &e.name));
                    for value in &e.values {
                        names.push((NameKind::EnumValue, Some(&e.name), value));
                    }
                }
                Declaration::Record(r) => {
                    names.push((NameKind::Record, None, &r.name));
                    for field in &r.fields {
                        names.push((NameKind::RecordField, Some(&r.name), &field.name));
                    }
                }
                Declaration::Interface(i) => names.push((NameKind::Interface, None, &i.name)),
            }
        }
        names
    }
}

/// Role a name plays in a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameKind {
    Interface,
    /// Produced by [`Method::names`](crate::types::Method::names), not by schemas
    Method,
    /// Produced by [`Method::names`](crate::types::Method::names), not by schemas
    Parameter,
    Enum,
    EnumValue,
    Record,
    RecordField,
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pretty_print())
    }
}
