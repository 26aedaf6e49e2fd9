//! Configurations read from JSON documents.
#![cfg(feature = "json")]

use rollcall::{
    ConfigurationChecker, ErrorKind,
    json::{JsonConfigError, configuration_from_json, configuration_from_str},
};
use serde_json::json;

mod common;
use common::container;

#[test]
fn test_json_configuration_is_checked() {
    let configuration = configuration_from_json(json!({
        "Created": ["HandlerInvokable", ["Event", "register"]],
        "Rendered": [["Handler", "handle_static"], "handler.alias"],
    }))
    .unwrap();

    assert_eq!(configuration.len(), 2);
    assert!(ConfigurationChecker::new(container()).check(&configuration).is_ok());
}

#[test]
fn test_json_key_order_decides_first_failure() {
    let configuration = configuration_from_str(
        r#"{ "Updated": ["TestClass"], "Created": [["Event", "nonExistentMethod"]] }"#,
    )
    .unwrap();

    let err = ConfigurationChecker::new(container())
        .check(&configuration)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingInvokeMethod);
}

#[test]
fn test_json_array_is_positional() {
    let configuration = configuration_from_json(json!([["HandlerInvokable"]])).unwrap();

    let err = ConfigurationChecker::new(container())
        .check(&configuration)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incorrect event listener format. Format with event name must be used. Got 0."
    );
}

#[test]
fn test_json_scalar_listeners() {
    let configuration = configuration_from_json(json!({ "Created": 42 })).unwrap();

    let err = ConfigurationChecker::new(container())
        .check(&configuration)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Event listeners for Created must be an iterable, int given."
    );
}

#[test]
fn test_json_document_errors() {
    assert!(matches!(
        configuration_from_str("{ not json"),
        Err(JsonConfigError::Parse(_))
    ));
    assert!(matches!(
        configuration_from_str("\"Created\""),
        Err(JsonConfigError::Format(_))
    ));
}

#[test]
fn test_json_integer_key_is_positional() {
    let configuration = configuration_from_str(r#"{ "Created": [], "1": ["HandlerInvokable"] }"#)
        .unwrap();

    let err = ConfigurationChecker::new(container())
        .check(&configuration)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Incorrect event listener format. Format with event name must be used. Got 1."
    );
}
