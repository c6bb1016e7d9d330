//! Error types for schema resolution and configuration

use thiserror::Error;

use crate::arena::TypeId;
use crate::typeref::TypeRef;

/// Result type for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Schema errors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The magnitude of a type reference has no entry in the lookup table.
    /// Carries the original, signed reference.
    #[error("Could not resolve type reference {}", .reference.value())]
    TypeNotFound { reference: TypeRef },

    #[error("Unknown type id: {0}")]
    UnknownTypeId(TypeId),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

impl SchemaError {
    /// The unresolvable reference, if this is a not-found error
    pub fn reference(&self) -> Option<TypeRef> {
        match self {
            SchemaError::TypeNotFound { reference } => Some(*reference),
            _ => None,
        }
    }
}
