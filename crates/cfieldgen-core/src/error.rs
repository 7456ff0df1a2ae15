//! Error types for field code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for generation operations
///
/// Every variant is fatal for the run: the driver stops rather than emit a
/// partial or inconsistent set of artifacts for a field.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A template referenced a variable that was not supplied
    #[error("undefined template variable `{variable}` in template: {template}")]
    UnknownTemplateVariable { variable: String, template: String },

    /// A template opened a `$` delimiter without closing it
    #[error("unterminated variable in template: {0}")]
    UnterminatedVariable(String),

    /// A field's default value cannot be embedded as a C string literal
    #[error("default value of field `{field}` cannot be encoded: {reason}")]
    UnencodableDefault { field: String, reason: String },

    /// A default value definition was requested for a field without one
    #[error("field `{0}` has no explicit default value")]
    MissingDefault(String),

    /// No generator exists for the field's wire type
    #[error("no generator for field `{field}` of kind {kind}")]
    UnsupportedFieldKind { field: String, kind: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CodegenError {
    /// Whether the error points at a bug in this crate rather than its input
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            CodegenError::UnknownTemplateVariable { .. } | CodegenError::UnterminatedVariable(_)
        )
    }
}

impl From<serde_json::Error> for CodegenError {
    fn from(err: serde_json::Error) -> Self {
        CodegenError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for CodegenError {
    fn from(err: toml::de::Error) -> Self {
        CodegenError::Config(err.to_string())
    }
}
