#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("u16", "htobe16", "be16toh")]
#[test_case("i16", "htobe16", "be16toh")]
#[test_case("u32", "htobe32", "be32toh")]
#[test_case("i32", "htobe32", "be32toh")]
#[test_case("u64", "htobe64", "be64toh")]
#[test_case("i64", "htobe64", "be64toh")]
fn lookup_scalar___multi_byte_integers___carry_swap_pair(
    api_type: &str,
    host_to_net: &str,
    net_to_host: &str,
) {
    let scalar = lookup_scalar(api_type).unwrap();

    assert!(scalar.swap_needed);
    assert_eq!(scalar.host_to_net_fn.as_deref(), Some(host_to_net));
    assert_eq!(scalar.net_to_host_fn.as_deref(), Some(net_to_host));
}

#[test_case("u8")]
#[test_case("i8")]
#[test_case("f64")]
#[test_case("bool")]
fn lookup_scalar___single_byte_and_ieee_types___need_no_swap(api_type: &str) {
    let scalar = lookup_scalar(api_type).unwrap();

    assert!(!scalar.swap_needed);
    assert!(scalar.host_to_net_fn.is_none());
    assert!(scalar.net_to_host_fn.is_none());
}

#[test_case("u8", "B", "jbyte", "Byte")]
#[test_case("u16", "S", "jshort", "Short")]
#[test_case("u32", "I", "jint", "Int")]
#[test_case("u64", "J", "jlong", "Long")]
#[test_case("f64", "D", "jdouble", "Double")]
#[test_case("bool", "Z", "jboolean", "Boolean")]
fn lookup_scalar___jni_tokens___match_signature_type_accessor(
    api_type: &str,
    signature: &str,
    jni_type: &str,
    accessor: &str,
) {
    let scalar = lookup_scalar(api_type).unwrap();

    assert_eq!(scalar.jni_signature, signature);
    assert_eq!(scalar.jni_type, jni_type);
    assert_eq!(scalar.jni_accessor, accessor);
}

#[test]
fn lookup_scalar___keeps_wire_name_for_casts() {
    let scalar = lookup_scalar("u32").unwrap();

    assert_eq!(scalar.name, "u32");
}

#[test]
fn lookup_scalar___unknown_name___returns_none() {
    assert!(lookup_scalar("ip4_address").is_none());
    assert!(lookup_scalar("").is_none());
}
