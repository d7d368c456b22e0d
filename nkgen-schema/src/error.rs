use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Registry construction defects. These are configuration errors in
/// the compiled-in catalogue, not document errors.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("class '{0}' is registered twice")]
    DuplicateClass(String),

    #[error("class '{class}' declares property '{property}' more than once")]
    DuplicateProperty { class: String, property: String },

    #[error("class '{class}' references unknown superclass '{superclass}'")]
    UnknownSuperclass { class: String, superclass: String },

    #[error("class '{class}' lists constructor parameter '{property}' that is not one of its own properties")]
    UnknownConstructorParam { class: String, property: String },
}

/// A document defect found by the validator.
///
/// Validation never stops early; the caller receives every error in
/// one report and aborts before emission if any exist.
#[derive(Debug, Error, Diagnostic)]
pub enum ValidationError {
    #[error("unknown class '{class_name}' at {path}")]
    #[diagnostic(
        code(nkgen::unknown_class),
        help("run 'nkgen classes' to list the registered classes")
    )]
    UnknownClass {
        class_name: String,
        path: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not a registered class")]
        span: SourceSpan,
    },

    #[error("unknown property '{property}' for class '{class_name}' at {path}")]
    #[diagnostic(
        code(nkgen::unknown_property),
        help("properties are checked against the class and its direct superclass")
    )]
    UnknownProperty {
        class_name: String,
        property: String,
        path: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("element declaring '{property}'")]
        span: SourceSpan,
    },
}

impl ValidationError {
    /// Path of the offending node, e.g. `Window[super]/Button[Btn1]`.
    pub fn path(&self) -> &str {
        match self {
            ValidationError::UnknownClass { path, .. } => path,
            ValidationError::UnknownProperty { path, .. } => path,
        }
    }
}
