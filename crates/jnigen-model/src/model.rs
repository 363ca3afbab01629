//! Read-only type model consumed by the code generators

use crate::ScalarType;

/// The full set of custom types to generate conversion code for.
///
/// Constructed once by the loading stage; the generators only read it.
/// Iteration order of `types` is the document order and determines the
/// order of emitted fragments.
#[derive(Debug, Clone)]
pub struct TypeModel {
    /// Source definition filenames, used only for emitted doc headers.
    pub source_files: Vec<String>,

    /// Custom types, in document order. Names are unique within the model.
    pub types: Vec<ApiType>,
}

impl TypeModel {
    /// Source filenames joined for emitted doc headers.
    pub fn source_files_label(&self) -> String {
        self.source_files.join(", ")
    }
}

/// A single custom type in the model.
#[derive(Debug, Clone)]
pub enum ApiType {
    /// Composite message type with named fields.
    Class(ClassType),

    /// Enumeration with a single scalar value field.
    Enum(EnumType),

    /// Anything else the document declares (unions, aliases, services).
    /// Carried so the dispatcher can name what it skips.
    Unsupported(UnsupportedType),
}

impl ApiType {
    /// Wire-level type name.
    pub fn name(&self) -> &str {
        match self {
            ApiType::Class(t) => &t.name,
            ApiType::Enum(t) => &t.name,
            ApiType::Unsupported(t) => &t.name,
        }
    }
}

/// A composite message type.
#[derive(Debug, Clone)]
pub struct ClassType {
    /// Wire-level name, e.g. `ip4_address`.
    pub name: String,

    /// Documentation block from the source definition, emitted verbatim.
    pub doc: String,

    /// Fully-qualified managed class name, dot-separated.
    pub java_class: String,

    /// Fields in wire order.
    pub fields: Vec<Field>,
}

impl ClassType {
    /// Simple class name, lowercased. Seeds generated local identifiers;
    /// unique per fragment because each fragment is its own function scope.
    pub fn ref_name(&self) -> String {
        simple_name(&self.java_class).to_lowercase()
    }

    /// JNI class lookup name (`/`-separated FQN).
    pub fn jni_name(&self) -> String {
        self.java_class.replace('.', "/")
    }
}

/// An enumeration type.
///
/// The value field's type is scalar by convention; the model does not guard
/// against a document violating it.
#[derive(Debug, Clone)]
pub struct EnumType {
    /// Wire-level name.
    pub name: String,

    /// Documentation block from the source definition, emitted verbatim.
    pub doc: String,

    /// Fully-qualified managed class name, dot-separated.
    pub java_class: String,

    /// The single underlying value field.
    pub value: Field,
}

impl EnumType {
    /// JNI class lookup name (`/`-separated FQN).
    pub fn jni_name(&self) -> String {
        self.java_class.replace('.', "/")
    }
}

/// A type variant the generators have no conversion code for.
#[derive(Debug, Clone)]
pub struct UnsupportedType {
    /// Wire-level name.
    pub name: String,

    /// Document kind tag, e.g. `union`.
    pub kind: String,
}

/// A named field of a composite or enum type.
#[derive(Debug, Clone)]
pub struct Field {
    /// Wire-level field name (snake_case).
    pub name: String,

    /// Field type.
    pub ty: FieldType,
}

/// Field type, polymorphic over scalar wire types, nested composites, and
/// fixed-size arrays of scalars.
#[derive(Debug, Clone)]
pub enum FieldType {
    /// Scalar wire type.
    Scalar(ScalarType),

    /// Nested composite, marshalled by the generated conversion pair of the
    /// referenced type.
    Custom(CustomRef),

    /// Fixed-size wire array of a scalar element.
    Array { element: ScalarType, length: u32 },
}

impl FieldType {
    /// The scalar tokens, if this is a scalar field.
    pub fn scalar(&self) -> Option<&ScalarType> {
        match self {
            FieldType::Scalar(s) => Some(s),
            _ => None,
        }
    }
}

/// Reference to another composite type in the model.
#[derive(Debug, Clone)]
pub struct CustomRef {
    /// Wire-level name of the referenced type.
    pub name: String,

    /// Fully-qualified managed class name of the referenced type.
    pub java_class: String,
}

impl CustomRef {
    /// JNI class lookup name (`/`-separated FQN).
    pub fn jni_name(&self) -> String {
        self.java_class.replace('.', "/")
    }

    /// JNI field signature for an object of this type.
    pub fn jni_signature(&self) -> String {
        format!("L{};", self.jni_name())
    }
}

fn simple_name(java_class: &str) -> &str {
    java_class.rsplit('.').next().unwrap_or(java_class)
}

#[cfg(test)]
#[path = "model/model_tests.rs"]
mod model_tests;
