//! Error types for model loading

use thiserror::Error;

/// Error type for model document loading
#[derive(Error, Debug)]
pub enum ModelError {
    /// Model document could not be read
    #[error("failed to read model document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Model document is not valid JSON
    #[error("invalid model document: {0}")]
    Json(#[from] serde_json::Error),

    /// A field references a type name the document does not declare
    #[error("unknown field type `{type_name}` in `{context}`")]
    UnknownType { type_name: String, context: String },

    /// Fixed-size arrays of composite types have no wire marshalling
    #[error("array field `{context}` of composite type `{type_name}` is not supported")]
    CompositeArray { type_name: String, context: String },

    /// Two types in the document share a name
    #[error("duplicate type name `{0}`")]
    DuplicateType(String),

    /// A type declaration is missing a required key
    #[error("type `{type_name}` is missing required key `{key}`")]
    MissingKey { type_name: String, key: String },
}
