//! Error types for code generation

use thiserror::Error;

/// Result type alias for generation operations
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Error type for code generation
///
/// Any failure aborts the whole generation run; a type never contributes a
/// partial fragment pair.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A template placeholder had no substitution value, or a scalar that
    /// claims a byte-order transform names no transform function
    #[error("missing substitution for `{placeholder}` while rendering {context}")]
    MissingSubstitution { context: String, placeholder: String },

    /// Enum value field is not a scalar wire type
    #[error("enum `{0}` value field is not a scalar wire type")]
    NonScalarEnumValue(String),
}
