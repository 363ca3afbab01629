//! jnigen-model - Type model and document loading for jnigen
//!
//! This crate provides the read-only inputs to the code generators:
//! - [`TypeModel`] and its [`ApiType`] variants, loaded from a JSON
//!   type-definition document
//! - [`ScalarType`] carrying the JNI tokens for scalar wire types
//! - [`ModelError`] for loading failures
//!
//! The model is constructed once by the loading stage and is immutable for
//! the duration of generation; the generators only read it.

mod error;
mod loader;
mod model;
mod scalars;

pub use error::ModelError;
pub use loader::{load_model, parse_model};
pub use model::{
    ApiType, ClassType, CustomRef, EnumType, Field, FieldType, TypeModel, UnsupportedType,
};
pub use scalars::{ScalarType, lookup_scalar};
