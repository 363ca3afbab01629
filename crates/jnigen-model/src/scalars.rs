//! Scalar wire types and their JNI tokens

/// JNI-facing description of a scalar wire type.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarType {
    /// Wire-level type name, used for casts in emitted code.
    pub name: String,

    /// JNI field signature token, e.g. `I`.
    pub jni_signature: String,

    /// JNI scalar type name, e.g. `jint`.
    pub jni_type: String,

    /// Accessor token selecting the typed JNI get/set call, e.g. `Int`.
    pub jni_accessor: String,

    /// Whether the wire representation differs from the host representation.
    pub swap_needed: bool,

    /// Host-to-net transform function name, when a transform is needed.
    pub host_to_net_fn: Option<String>,

    /// Net-to-host transform function name, when a transform is needed.
    pub net_to_host_fn: Option<String>,
}

/// Built-in mapping from a wire scalar name to its JNI tokens.
struct ScalarMapping {
    api_type: &'static str,
    jni_signature: &'static str,
    jni_type: &'static str,
    jni_accessor: &'static str,
    /// (host-to-net, net-to-host) transform pair for multi-byte integers.
    swap_fns: Option<(&'static str, &'static str)>,
}

const SCALAR_MAPPINGS: &[ScalarMapping] = &[
    ScalarMapping {
        api_type: "u8",
        jni_signature: "B",
        jni_type: "jbyte",
        jni_accessor: "Byte",
        swap_fns: None,
    },
    ScalarMapping {
        api_type: "i8",
        jni_signature: "B",
        jni_type: "jbyte",
        jni_accessor: "Byte",
        swap_fns: None,
    },
    ScalarMapping {
        api_type: "u16",
        jni_signature: "S",
        jni_type: "jshort",
        jni_accessor: "Short",
        swap_fns: Some(("htobe16", "be16toh")),
    },
    ScalarMapping {
        api_type: "i16",
        jni_signature: "S",
        jni_type: "jshort",
        jni_accessor: "Short",
        swap_fns: Some(("htobe16", "be16toh")),
    },
    ScalarMapping {
        api_type: "u32",
        jni_signature: "I",
        jni_type: "jint",
        jni_accessor: "Int",
        swap_fns: Some(("htobe32", "be32toh")),
    },
    ScalarMapping {
        api_type: "i32",
        jni_signature: "I",
        jni_type: "jint",
        jni_accessor: "Int",
        swap_fns: Some(("htobe32", "be32toh")),
    },
    ScalarMapping {
        api_type: "u64",
        jni_signature: "J",
        jni_type: "jlong",
        jni_accessor: "Long",
        swap_fns: Some(("htobe64", "be64toh")),
    },
    ScalarMapping {
        api_type: "i64",
        jni_signature: "J",
        jni_type: "jlong",
        jni_accessor: "Long",
        swap_fns: Some(("htobe64", "be64toh")),
    },
    // f64 travels as an IEEE bit pattern; no byte-order transform on the
    // protocols this generator targets.
    ScalarMapping {
        api_type: "f64",
        jni_signature: "D",
        jni_type: "jdouble",
        jni_accessor: "Double",
        swap_fns: None,
    },
    ScalarMapping {
        api_type: "bool",
        jni_signature: "Z",
        jni_type: "jboolean",
        jni_accessor: "Boolean",
        swap_fns: None,
    },
];

/// Look up the JNI tokens for a scalar wire type name.
///
/// Returns `None` for names that are not built-in scalars (the loader then
/// tries custom type resolution).
pub fn lookup_scalar(api_type: &str) -> Option<ScalarType> {
    SCALAR_MAPPINGS
        .iter()
        .find(|m| m.api_type == api_type)
        .map(|m| ScalarType {
            name: m.api_type.to_string(),
            jni_signature: m.jni_signature.to_string(),
            jni_type: m.jni_type.to_string(),
            jni_accessor: m.jni_accessor.to_string(),
            swap_needed: m.swap_fns.is_some(),
            host_to_net_fn: m.swap_fns.map(|(h, _)| h.to_string()),
            net_to_host_fn: m.swap_fns.map(|(_, n)| n.to_string()),
        })
}

#[cfg(test)]
#[path = "scalars/scalars_tests.rs"]
mod scalars_tests;
