use thiserror::Error;

/// Result type for code emission.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A class reached the emitters without passing validation.
    #[error("internal: unknown class '{0}' reached code generation")]
    UnknownClass(String),

    /// A property reached the emitters without passing validation.
    #[error("internal: unknown property '{property}' for class '{class}' reached code generation")]
    UnknownProperty { class: String, property: String },

    #[error("'{0}' is not a valid C identifier")]
    InvalidModuleName(String),
}
