//! Model loading from JSON type-definition documents
//!
//! The document is the already-distilled output of an interface-definition
//! toolchain: a flat list of type declarations with a `kind` tag. Parsing
//! happens in two passes so fields can reference types regardless of
//! declaration order.

use crate::model::{
    ApiType, ClassType, CustomRef, EnumType, Field, FieldType, TypeModel, UnsupportedType,
};
use crate::scalars::{ScalarType, lookup_scalar};
use crate::ModelError;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawModel {
    #[serde(default)]
    files: Vec<String>,

    #[serde(default)]
    types: Vec<RawType>,
}

#[derive(Debug, Deserialize)]
struct RawType {
    kind: String,
    name: String,

    #[serde(default)]
    doc: Option<String>,

    #[serde(default, rename = "class")]
    java_class: Option<String>,

    #[serde(default)]
    fields: Vec<RawField>,

    #[serde(default)]
    value: Option<RawField>,
}

#[derive(Debug, Deserialize)]
struct RawField {
    name: String,

    #[serde(rename = "type")]
    ty: String,

    #[serde(default)]
    length: Option<u32>,
}

/// Load a model document from disk.
pub fn load_model(path: &Path) -> Result<TypeModel, ModelError> {
    let content = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_model(&content)
}

/// Parse a model document from its JSON text.
pub fn parse_model(content: &str) -> Result<TypeModel, ModelError> {
    let raw: RawModel = serde_json::from_str(content)?;

    // First pass: declared names. Classes resolve to Custom references,
    // enums resolve to their underlying scalar (wire-compatible).
    let mut seen = HashSet::new();
    let mut classes: HashMap<String, String> = HashMap::new();
    let mut enum_scalars: HashMap<String, ScalarType> = HashMap::new();

    for t in &raw.types {
        if !seen.insert(t.name.clone()) {
            return Err(ModelError::DuplicateType(t.name.clone()));
        }
        match t.kind.as_str() {
            "class" => {
                classes.insert(t.name.clone(), require_java_class(t)?.to_string());
            }
            "enum" => {
                let value = require_value(t)?;
                let scalar =
                    lookup_scalar(&value.ty).ok_or_else(|| ModelError::UnknownType {
                        type_name: value.ty.clone(),
                        context: format!("{}.{}", t.name, value.name),
                    })?;
                enum_scalars.insert(t.name.clone(), scalar);
            }
            _ => {}
        }
    }

    // Second pass: build the model in document order.
    let mut types = Vec::with_capacity(raw.types.len());
    for t in &raw.types {
        match t.kind.as_str() {
            "class" => {
                let fields = t
                    .fields
                    .iter()
                    .map(|f| build_field(f, &t.name, &classes, &enum_scalars))
                    .collect::<Result<Vec<_>, _>>()?;
                types.push(ApiType::Class(ClassType {
                    name: t.name.clone(),
                    doc: t.doc.clone().unwrap_or_default(),
                    java_class: require_java_class(t)?.to_string(),
                    fields,
                }));
            }
            "enum" => {
                let value = require_value(t)?;
                let scalar = lookup_scalar(&value.ty).ok_or_else(|| ModelError::UnknownType {
                    type_name: value.ty.clone(),
                    context: format!("{}.{}", t.name, value.name),
                })?;
                types.push(ApiType::Enum(EnumType {
                    name: t.name.clone(),
                    doc: t.doc.clone().unwrap_or_default(),
                    java_class: require_java_class(t)?.to_string(),
                    value: Field {
                        name: value.name.clone(),
                        ty: FieldType::Scalar(scalar),
                    },
                }));
            }
            kind => {
                types.push(ApiType::Unsupported(UnsupportedType {
                    name: t.name.clone(),
                    kind: kind.to_string(),
                }));
            }
        }
    }

    Ok(TypeModel {
        source_files: raw.files,
        types,
    })
}

fn require_java_class(t: &RawType) -> Result<&str, ModelError> {
    t.java_class
        .as_deref()
        .ok_or_else(|| ModelError::MissingKey {
            type_name: t.name.clone(),
            key: "class".to_string(),
        })
}

fn require_value(t: &RawType) -> Result<&RawField, ModelError> {
    t.value.as_ref().ok_or_else(|| ModelError::MissingKey {
        type_name: t.name.clone(),
        key: "value".to_string(),
    })
}

fn build_field(
    raw: &RawField,
    owner: &str,
    classes: &HashMap<String, String>,
    enum_scalars: &HashMap<String, ScalarType>,
) -> Result<Field, ModelError> {
    let context = format!("{}.{}", owner, raw.name);

    let ty = if let Some(scalar) = lookup_scalar(&raw.ty) {
        match raw.length {
            Some(length) => FieldType::Array {
                element: scalar,
                length,
            },
            None => FieldType::Scalar(scalar),
        }
    } else if let Some(java_class) = classes.get(&raw.ty) {
        if raw.length.is_some() {
            return Err(ModelError::CompositeArray {
                type_name: raw.ty.clone(),
                context,
            });
        }
        FieldType::Custom(CustomRef {
            name: raw.ty.clone(),
            java_class: java_class.clone(),
        })
    } else if let Some(scalar) = enum_scalars.get(&raw.ty) {
        FieldType::Scalar(scalar.clone())
    } else {
        return Err(ModelError::UnknownType {
            type_name: raw.ty.clone(),
            context,
        });
    };

    Ok(Field {
        name: raw.name.clone(),
        ty,
    })
}
