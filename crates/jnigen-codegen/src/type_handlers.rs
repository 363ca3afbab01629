//! JNI type handler generation: one host/net conversion pair per custom type.

use crate::CodegenResult;
use crate::field_codegen::FieldCodegen;
use crate::swap::{scalar_host_to_net_swap, scalar_net_to_host_swap};
use crate::template::Template;
use jnigen_model::{ApiType, ClassType, EnumType, TypeModel};
use once_cell::sync::Lazy;

static CLASS_HOST_TO_NET_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new(
        "class host-to-net template",
        r#"
/**
 * Host to network byte order conversion for ${c_name} type.
 * Generated from ${source_files}:
${doc}
 */
static inline void _host_to_net_${c_name}(JNIEnv * env, jobject _host, wire_${c_name}_t * _net)
{
    jclass ${ref_name}Class = (*env)->FindClass(env, "${class_fqn}");
${jni_identifiers}
${type_swap}
}"#,
    )
});

static CLASS_NET_TO_HOST_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new(
        "class net-to-host template",
        r#"
/**
 * Network to host byte order conversion for ${c_name} type.
 * Generated from ${source_files}:
${doc}
 */
static inline void _net_to_host_${c_name}(JNIEnv * env, wire_${c_name}_t * _net, jobject _host)
{
    jclass ${ref_name}Class = (*env)->FindClass(env, "${class_fqn}");
${type_swap}
}"#,
    )
});

static ENUM_HOST_TO_NET_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new(
        "enum host-to-net template",
        r#"
/**
 * Host to network byte order conversion for ${c_name} enum.
 * Generated from ${source_files}:
${doc}
 */
static inline void _host_to_net_${c_name}(JNIEnv * env, jobject _host, wire_${c_name}_t * _net)
{
    jclass enumClass = (*env)->FindClass(env, "${class_fqn}");
    jfieldID valueFieldId = (*env)->GetStaticFieldID(env, enumClass, "value", "${jni_signature}");
    ${jni_type} value = (*env)->GetStatic${jni_accessor}Field(env, enumClass, valueFieldId);
    ${swap};
}"#,
    )
});

static ENUM_NET_TO_HOST_TEMPLATE: Lazy<Template> = Lazy::new(|| {
    Template::new(
        "enum net-to-host template",
        r#"
/**
 * Network to host byte order conversion for ${c_name} enum.
 * Generated from ${source_files}:
${doc}
 */
static inline ${jni_type} _net_to_host_${c_name}(wire_${c_name}_t _net)
{
    return (${jni_type}) ${type_swap};
}"#,
    )
});

/// Generate the host/net conversion pair for every custom type in the model.
///
/// Fragments are emitted in model order and joined with newlines. Type
/// variants the generators have no conversion code for contribute nothing
/// and are reported at debug severity; any other failure aborts the whole
/// run.
pub fn generate_type_handlers(
    model: &TypeModel,
    codegen: &dyn FieldCodegen,
) -> CodegenResult<String> {
    let mut handlers: Vec<String> = Vec::new();

    for t in &model.types {
        match t {
            ApiType::Class(class) => generate_class(model, class, codegen, &mut handlers)?,
            ApiType::Enum(e) => generate_enum(model, e, &mut handlers)?,
            ApiType::Unsupported(u) => {
                tracing::debug!(
                    "skipping type handler generation for {} ({})",
                    u.name,
                    u.kind
                );
            }
        }
    }

    Ok(handlers.join("\n"))
}

/// Emit the conversion pair for a composite type, in the order
/// [managed-to-wire, wire-to-managed]. Both fragments are rendered before
/// either is appended, so a failing type contributes nothing.
fn generate_class(
    model: &TypeModel,
    t: &ClassType,
    codegen: &dyn FieldCodegen,
    handlers: &mut Vec<String>,
) -> CodegenResult<()> {
    let ref_name = t.ref_name();
    let class_ref = format!("{ref_name}Class");
    let source_files = model.source_files_label();
    let class_fqn = t.jni_name();
    let jni_identifiers = codegen.identifiers(t, &class_ref, "_host")?;
    let host_to_net_swap = codegen.host_to_net_body(t, "_net")?;
    let net_to_host_swap = codegen.net_to_host_body(t, &class_ref, "_host", "_net")?;

    let host_to_net = CLASS_HOST_TO_NET_TEMPLATE.substitute(&[
        ("c_name", t.name.as_str()),
        ("source_files", source_files.as_str()),
        ("doc", t.doc.as_str()),
        ("ref_name", ref_name.as_str()),
        ("class_fqn", class_fqn.as_str()),
        ("jni_identifiers", jni_identifiers.as_str()),
        ("type_swap", host_to_net_swap.as_str()),
    ])?;

    let net_to_host = CLASS_NET_TO_HOST_TEMPLATE.substitute(&[
        ("c_name", t.name.as_str()),
        ("source_files", source_files.as_str()),
        ("doc", t.doc.as_str()),
        ("ref_name", ref_name.as_str()),
        ("class_fqn", class_fqn.as_str()),
        ("type_swap", net_to_host_swap.as_str()),
    ])?;

    handlers.push(host_to_net);
    handlers.push(net_to_host);
    Ok(())
}

/// Emit the conversion pair for an enum type. All JNI tokens come from the
/// single value field, read once.
fn generate_enum(
    model: &TypeModel,
    t: &EnumType,
    handlers: &mut Vec<String>,
) -> CodegenResult<()> {
    let value_type = scalar_tokens(t)?;
    let source_files = model.source_files_label();
    let class_fqn = t.jni_name();
    let host_to_net_swap = scalar_host_to_net_swap(&t.value, &t.name)?;
    let net_to_host_swap = scalar_net_to_host_swap(&t.value, &t.name)?;

    let host_to_net = ENUM_HOST_TO_NET_TEMPLATE.substitute(&[
        ("c_name", t.name.as_str()),
        ("source_files", source_files.as_str()),
        ("doc", t.doc.as_str()),
        ("class_fqn", class_fqn.as_str()),
        ("jni_signature", value_type.jni_signature.as_str()),
        ("jni_type", value_type.jni_type.as_str()),
        ("jni_accessor", value_type.jni_accessor.as_str()),
        ("swap", host_to_net_swap.as_str()),
    ])?;

    let net_to_host = ENUM_NET_TO_HOST_TEMPLATE.substitute(&[
        ("c_name", t.name.as_str()),
        ("source_files", source_files.as_str()),
        ("doc", t.doc.as_str()),
        ("jni_type", value_type.jni_type.as_str()),
        ("type_swap", net_to_host_swap.as_str()),
    ])?;

    handlers.push(host_to_net);
    handlers.push(net_to_host);
    Ok(())
}

fn scalar_tokens(t: &EnumType) -> CodegenResult<&jnigen_model::ScalarType> {
    t.value
        .ty
        .scalar()
        .ok_or_else(|| crate::CodegenError::NonScalarEnumValue(t.name.clone()))
}
