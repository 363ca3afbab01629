//! jnigen-codegen - JNI type handler generation for wire-format API messages
//!
//! For every custom type in a [`TypeModel`](jnigen_model::TypeModel) this
//! crate emits the pair of C conversion functions copying between the
//! fixed-layout wire struct and the managed JNI object:
//!
//! ```text
//! TypeModel
//!     ↓
//! [Type dispatcher]
//!     ├─→ [Composite generator] → _host_to_net_<t> / _net_to_host_<t>
//!     ├─→ [Enum generator]      → _host_to_net_<t> / _net_to_host_<t>
//!     └─→ (unsupported)         → skipped with a debug diagnostic
//!     ↓
//! newline-joined fragment blob
//! ```
//!
//! Per-field marshalling for composite types is delegated to a
//! [`FieldCodegen`] backend; the default [`JniFieldCodegen`] targets the JNI
//! object model. The caller owns output file writing — this crate only
//! produces text.

mod error;
mod field_codegen;
pub mod naming;
mod swap;
mod template;
mod type_handlers;

pub use error::{CodegenError, CodegenResult};
pub use field_codegen::{FieldCodegen, JniFieldCodegen};
pub use template::Template;
pub use type_handlers::generate_type_handlers;
