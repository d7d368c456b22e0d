//! C code emission for nkgen.
//!
//! Two read-only traversals of a validated tree produce the generated
//! artifacts: [`HeaderFile`] renders the module struct, the
//! create/destroy declarations, and the callback forward declarations;
//! [`SourceFile`] renders the constructor and destructor bodies. The
//! [`Translator`] resolves markup names against the schema registry
//! and encodes raw attribute text into C literals.
//!
//! All per-invocation mutable state (module-name casings, output
//! buffers, encoding warnings) lives in a [`GenContext`] owned by that
//! invocation; nothing is shared between generation runs.

mod code_builder;
mod context;
mod error;
mod files;
mod generator;
mod translator;
mod value;

pub use code_builder::CodeBuilder;
pub use context::{GenContext, ModuleName, ValueEncodingWarning};
pub use error::{Error, Result};
pub use files::{HeaderFile, SourceFile};
pub use generator::{GenerateResult, Generator, Rendered};
pub use translator::Translator;
pub use value::{Encoded, color_constant, dock_constant, encode_value, orientation_constant};
