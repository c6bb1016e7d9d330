//! Remcall Schema
//!
//! Type model for remote-call interface schemas: enums, records, arrays,
//! interfaces and primitives, plus resolution of deferred type references.
//!
//! ## Type References
//!
//! A schema can mention a type before it is declared, or mention itself, by
//! using a [`TypeRef`] placeholder. The magnitude picks an entry of a
//! [`TypeLookup`]; a negative sign wraps the entry in an array.
//!
//! ```text
//! record Order {                      record Order {
//!   <Type reference to 16> State,  ->   Status State,
//!   <Type reference to -3> Lines,       uint8[] Lines,
//! }                                   }
//! ```
//!
//! Resolution is one hop per container: an array or record swaps its direct
//! placeholders and does not descend further.
//!
//! ## Example
//!
//! ```
//! use remcall_schema::{Enum, Field, Record, Resolve, Type, TypeLookup, TypeRef};
//!
//! let hello = Enum::new("Hello", ["Opt1", "Opt2"]);
//! let mut lookup = TypeLookup::new();
//! lookup.insert(2, hello.clone());
//!
//! let mut rec = Record::new("MyRecord", [Field::new("ToResolve", TypeRef::new(-2))]);
//! rec.resolve(&lookup).unwrap();
//! assert_eq!(rec.fields[0].ty, Type::array_of(hello));
//! ```

pub mod arena;
pub mod checksum;
pub mod config;
pub mod error;
pub mod lookup;
pub mod name;
pub mod naming;
pub mod schema;
pub mod typeref;
pub mod types;

pub use arena::{Declaration, TypeArena, TypeId};
pub use checksum::Checksum;
pub use config::SchemaConfig;
pub use error::{Result, SchemaError};
pub use lookup::{resolve, TypeLookup};
pub use name::Name;
pub use naming::{NameConverter, NamingConvention};
pub use schema::{NameKind, Schema};
pub use typeref::TypeRef;
pub use types::{Array, DeclRef, Enum, Field, Interface, Method, Primitive, Record, Resolve, Type};
