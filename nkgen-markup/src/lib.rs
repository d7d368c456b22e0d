// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Markup tree building for nkgen.
//!
//! Consumes the generic XML DOM (via `roxmltree`) and produces the
//! domain [`Node`] tree: class names from tags, properties from
//! attributes in document order, instance names either explicit (the
//! reserved `Name` attribute) or synthesized (`super` for the root,
//! `child1`, `child2`, ... for unnamed nodes in pre-order).

mod builder;
mod error;
mod file;
mod node;

pub use builder::TreeBuilder;
pub use error::{Error, Result, SourceContext};
pub use file::MarkupFile;
pub use node::{CONTENT_KEY, NAME_ATTR, Node, PreOrder, Property, ROOT_INSTANCE_NAME};
