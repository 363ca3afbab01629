#![allow(non_snake_case)]

use super::*;
use crate::lookup_scalar;

fn class(java_class: &str) -> ClassType {
    ClassType {
        name: "ip4_address".to_string(),
        doc: String::new(),
        java_class: java_class.to_string(),
        fields: Vec::new(),
    }
}

#[test]
fn ClassType___ref_name___lowercases_simple_name() {
    let t = class("io.example.types.Ip4Address");

    assert_eq!(t.ref_name(), "ip4address");
}

#[test]
fn ClassType___ref_name___handles_unqualified_name() {
    let t = class("Ip4Address");

    assert_eq!(t.ref_name(), "ip4address");
}

#[test]
fn ClassType___jni_name___uses_slash_separators() {
    let t = class("io.example.types.Ip4Address");

    assert_eq!(t.jni_name(), "io/example/types/Ip4Address");
}

#[test]
fn EnumType___jni_name___uses_slash_separators() {
    let t = EnumType {
        name: "if_status".to_string(),
        doc: String::new(),
        java_class: "io.example.types.IfStatus".to_string(),
        value: Field {
            name: "value".to_string(),
            ty: FieldType::Scalar(lookup_scalar("u32").unwrap()),
        },
    };

    assert_eq!(t.jni_name(), "io/example/types/IfStatus");
}

#[test]
fn CustomRef___jni_signature___wraps_slash_name() {
    let r = CustomRef {
        name: "ip4_address".to_string(),
        java_class: "io.example.types.Ip4Address".to_string(),
    };

    assert_eq!(r.jni_signature(), "Lio/example/types/Ip4Address;");
}

#[test]
fn ApiType___name___returns_wire_name_for_all_variants() {
    let c = ApiType::Class(class("io.example.types.Ip4Address"));
    let u = ApiType::Unsupported(UnsupportedType {
        name: "address_union".to_string(),
        kind: "union".to_string(),
    });

    assert_eq!(c.name(), "ip4_address");
    assert_eq!(u.name(), "address_union");
}

#[test]
fn FieldType___scalar___returns_tokens_only_for_scalars() {
    let scalar = FieldType::Scalar(lookup_scalar("u32").unwrap());
    let custom = FieldType::Custom(CustomRef {
        name: "ip4_address".to_string(),
        java_class: "io.example.types.Ip4Address".to_string(),
    });

    assert_eq!(scalar.scalar().map(|s| s.name.as_str()), Some("u32"));
    assert!(custom.scalar().is_none());
}

#[test]
fn TypeModel___source_files_label___joins_with_comma() {
    let model = TypeModel {
        source_files: vec!["a.api.json".to_string(), "b.api.json".to_string()],
        types: Vec::new(),
    };

    assert_eq!(model.source_files_label(), "a.api.json, b.api.json");
}
