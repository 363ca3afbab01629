#![allow(non_snake_case)]

use super::*;

#[test]
fn Manifest___from_toml___parses_model_and_output() {
    let toml = r#"
        model = "api/interface.json"
        output = "generated/type_handlers.h"
    "#;

    let manifest = Manifest::from_toml(toml).unwrap();

    assert_eq!(manifest.model.as_deref(), Some("api/interface.json"));
    assert_eq!(manifest.output.as_deref(), Some("generated/type_handlers.h"));
}

#[test]
fn Manifest___from_toml___empty_document_has_no_entries() {
    let manifest = Manifest::from_toml("").unwrap();

    assert!(manifest.model.is_none());
    assert!(manifest.output.is_none());
}

#[test]
fn Manifest___from_toml___rejects_invalid_toml() {
    let result = Manifest::from_toml("model = ");

    assert!(result.is_err());
}

#[test]
fn Manifest___from_file___missing_file_is_error() {
    let result = Manifest::from_file("/nonexistent/jnigen.toml");

    assert!(result.is_err());
}
