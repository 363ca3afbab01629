//! Per-field JNI marshalling code, behind a narrow backend trait.

use crate::CodegenResult;
use crate::naming::to_camel_case;
use crate::swap::{host_to_net_fn, net_to_host_fn};
use jnigen_model::{ClassType, Field, FieldType, ScalarType};

/// Backend producing per-field marshalling code for composite types.
///
/// The type-handler generators treat implementations as opaque text
/// producers, so a backend targeting a different host object model can be
/// substituted without touching the generators.
pub trait FieldCodegen {
    /// Declarations and extractions of per-field accessor identifiers,
    /// relative to a named class-lookup reference and managed-object
    /// reference.
    fn identifiers(
        &self,
        class: &ClassType,
        class_ref: &str,
        object_ref: &str,
    ) -> CodegenResult<String>;

    /// Field-by-field managed-to-wire copy body. Reads the locals declared
    /// by [`FieldCodegen::identifiers`].
    fn host_to_net_body(&self, class: &ClassType, struct_ref: &str) -> CodegenResult<String>;

    /// Field-by-field wire-to-managed copy body. Recomputes field
    /// identifiers internally; nothing from
    /// [`FieldCodegen::identifiers`] is assumed to be in scope.
    fn net_to_host_body(
        &self,
        class: &ClassType,
        class_ref: &str,
        object_ref: &str,
        struct_ref: &str,
    ) -> CodegenResult<String>;
}

/// Default backend targeting the JNI object model.
///
/// Supports scalar fields, nested composites (delegating to the generated
/// conversion pair of the referenced type), and fixed-size scalar arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct JniFieldCodegen;

impl FieldCodegen for JniFieldCodegen {
    fn identifiers(
        &self,
        class: &ClassType,
        class_ref: &str,
        object_ref: &str,
    ) -> CodegenResult<String> {
        let mut lines = Vec::new();

        for field in &class.fields {
            push_field_id(&mut lines, field, class_ref);
            match &field.ty {
                FieldType::Scalar(s) => lines.push(format!(
                    "    {} {name} = (*env)->Get{}Field(env, {object_ref}, {name}FieldId);",
                    s.jni_type,
                    s.jni_accessor,
                    name = field.name,
                )),
                FieldType::Custom(_) => lines.push(format!(
                    "    jobject {name} = (*env)->GetObjectField(env, {object_ref}, {name}FieldId);",
                    name = field.name,
                )),
                FieldType::Array { element, .. } => lines.push(format!(
                    "    {arr} {name} = ({arr}) (*env)->GetObjectField(env, {object_ref}, {name}FieldId);",
                    arr = array_type(element),
                    name = field.name,
                )),
            }
        }

        Ok(lines.join("\n"))
    }

    fn host_to_net_body(&self, class: &ClassType, struct_ref: &str) -> CodegenResult<String> {
        let mut lines = Vec::new();

        for field in &class.fields {
            match &field.ty {
                FieldType::Scalar(s) => {
                    if s.swap_needed {
                        let f = host_to_net_fn(s, &field_context(class, field))?;
                        lines.push(format!(
                            "    {struct_ref}->{name} = {f}({name});",
                            name = field.name,
                        ));
                    } else {
                        lines.push(format!(
                            "    {struct_ref}->{name} = {name};",
                            name = field.name,
                        ));
                    }
                }
                FieldType::Custom(r) => lines.push(format!(
                    "    _host_to_net_{}(env, {name}, &({struct_ref}->{name}));",
                    r.name,
                    name = field.name,
                )),
                FieldType::Array { element, length } => {
                    if element.swap_needed {
                        let f = host_to_net_fn(element, &field_context(class, field))?;
                        lines.push("    {".to_string());
                        lines.push(format!(
                            "        {} {name}ArrayElements[{length}];",
                            element.jni_type,
                            name = field.name,
                        ));
                        lines.push(format!(
                            "        (*env)->Get{}ArrayRegion(env, {name}, 0, {length}, {name}ArrayElements);",
                            element.jni_accessor,
                            name = field.name,
                        ));
                        lines.push(format!("        for (int _i = 0; _i < {length}; _i++) {{"));
                        lines.push(format!(
                            "            {struct_ref}->{name}[_i] = {f}({name}ArrayElements[_i]);",
                            name = field.name,
                        ));
                        lines.push("        }".to_string());
                        lines.push("    }".to_string());
                    } else {
                        lines.push(format!(
                            "    (*env)->Get{}ArrayRegion(env, {name}, 0, {length}, ({} *) {struct_ref}->{name});",
                            element.jni_accessor,
                            element.jni_type,
                            name = field.name,
                        ));
                    }
                }
            }
        }

        Ok(lines.join("\n"))
    }

    fn net_to_host_body(
        &self,
        class: &ClassType,
        class_ref: &str,
        object_ref: &str,
        struct_ref: &str,
    ) -> CodegenResult<String> {
        let mut lines = Vec::new();

        for field in &class.fields {
            push_field_id(&mut lines, field, class_ref);
            match &field.ty {
                FieldType::Scalar(s) => {
                    let value = if s.swap_needed {
                        let f = net_to_host_fn(s, &field_context(class, field))?;
                        format!("{f}({struct_ref}->{})", field.name)
                    } else {
                        format!("{struct_ref}->{}", field.name)
                    };
                    lines.push(format!(
                        "    (*env)->Set{}Field(env, {object_ref}, {name}FieldId, {value});",
                        s.jni_accessor,
                        name = field.name,
                    ));
                }
                FieldType::Custom(r) => {
                    lines.push(format!(
                        "    jobject {name} = (*env)->GetObjectField(env, {object_ref}, {name}FieldId);",
                        name = field.name,
                    ));
                    lines.push(format!(
                        "    _net_to_host_{}(env, &({struct_ref}->{name}), {name});",
                        r.name,
                        name = field.name,
                    ));
                }
                FieldType::Array { element, length } => {
                    lines.push(format!(
                        "    {arr} {name} = ({arr}) (*env)->GetObjectField(env, {object_ref}, {name}FieldId);",
                        arr = array_type(element),
                        name = field.name,
                    ));
                    if element.swap_needed {
                        let f = net_to_host_fn(element, &field_context(class, field))?;
                        lines.push("    {".to_string());
                        lines.push(format!(
                            "        {} {name}ArrayElements[{length}];",
                            element.jni_type,
                            name = field.name,
                        ));
                        lines.push(format!("        for (int _i = 0; _i < {length}; _i++) {{"));
                        lines.push(format!(
                            "            {name}ArrayElements[_i] = {f}({struct_ref}->{name}[_i]);",
                            name = field.name,
                        ));
                        lines.push("        }".to_string());
                        lines.push(format!(
                            "        (*env)->Set{}ArrayRegion(env, {name}, 0, {length}, {name}ArrayElements);",
                            element.jni_accessor,
                            name = field.name,
                        ));
                        lines.push("    }".to_string());
                    } else {
                        lines.push(format!(
                            "    (*env)->Set{}ArrayRegion(env, {name}, 0, {length}, (const {} *) {struct_ref}->{name});",
                            element.jni_accessor,
                            element.jni_type,
                            name = field.name,
                        ));
                    }
                }
            }
        }

        Ok(lines.join("\n"))
    }
}

fn push_field_id(lines: &mut Vec<String>, field: &Field, class_ref: &str) {
    lines.push(format!(
        "    jfieldID {name}FieldId = (*env)->GetFieldID(env, {class_ref}, \"{java}\", \"{sig}\");",
        name = field.name,
        java = to_camel_case(&field.name),
        sig = field_signature(&field.ty),
    ));
}

fn field_signature(ty: &FieldType) -> String {
    match ty {
        FieldType::Scalar(s) => s.jni_signature.clone(),
        FieldType::Custom(r) => r.jni_signature(),
        FieldType::Array { element, .. } => format!("[{}", element.jni_signature),
    }
}

fn array_type(element: &ScalarType) -> String {
    format!("{}Array", element.jni_type)
}

fn field_context(class: &ClassType, field: &Field) -> String {
    format!("scalar swap for `{}.{}`", class.name, field.name)
}
