// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Widget class catalogue and document validation for nkgen.
//!
//! The registry is a closed catalogue of known classes and their typed
//! properties, built once at startup and immutable afterwards. Each
//! class may reference a single direct superclass; property lookup
//! tables are flattened at construction time so resolution is always
//! one flat lookup.

mod catalogue;
mod error;
mod registry;
mod validator;

pub use error::{SchemaError, ValidationError};
pub use registry::{ClassDef, ClassEntry, FlatProperty, PropertyEntry, SchemaRegistry, ValueType};
pub use validator::validate;
