#![allow(non_snake_case)]

use super::*;

#[test]
fn run___without_model_anywhere___reports_missing_model() {
    let err = run(None, Some("-".to_string()), None).unwrap_err();

    assert!(err.to_string().contains("no model document given"));
}

#[test]
fn run___with_model_but_no_output___reports_missing_output() {
    let err = run(Some("model.json".to_string()), None, None).unwrap_err();

    assert!(err.to_string().contains("no output path given"));
}

#[test]
fn check___missing_document___propagates_loader_error() {
    let err = check(Some("/nonexistent/model.json".to_string()), None).unwrap_err();

    assert!(err.to_string().contains("failed to load model document"));
}
