use core::error::Error;
use errtree::{has_text, BoxError, MessageError, WrappedError};

fn leaf(text: &str) -> Option<BoxError> {
    Some(Box::new(MessageError::new(text)))
}

#[test]
fn wrap_joins_outer_and_inner() {
    let err = WrappedError::wrap(leaf("outer"), leaf("inner")).unwrap();
    assert_eq!(err.to_string(), "outer: inner");
}

#[test]
fn wrap_chains_recursively() {
    let outer = WrappedError::wrap(leaf("first"), leaf("second")).unwrap();
    let inner = WrappedError::wrap(leaf("third"), leaf("fourth")).unwrap();

    let err = WrappedError::wrap(Some(Box::new(outer)), Some(Box::new(inner))).unwrap();

    assert_eq!(err.to_string(), "first: second: third: fourth");
}

#[test]
fn wrap_rejects_blank_sides() {
    let cases = [
        ("   ", "inner"),
        ("", "inner"),
        ("outer", "       "),
        ("outer", ""),
    ];

    for (outer, inner) in cases {
        assert!(WrappedError::wrap(leaf(outer), leaf(inner)).is_none());
    }
}

#[test]
fn wrap_rejects_blank_composite_leaves() {
    let result = WrappedError::wrap(
        Some(Box::new(WrappedError::new("   "))),
        Some(Box::new(WrappedError::new("inner"))),
    );
    assert!(result.is_none());
}

#[test]
fn wrap_rejects_absent_sides() {
    assert!(WrappedError::wrap(None, leaf("err")).is_none());
    assert!(WrappedError::wrap(leaf("err"), None).is_none());
    assert!(WrappedError::wrap(None, None).is_none());
}

#[test]
fn wrap_prefix_delegates_to_wrap() {
    let err = WrappedError::wrap_prefix("reading config", leaf("not found")).unwrap();
    assert_eq!(err.to_string(), "reading config: not found");

    assert!(WrappedError::wrap_prefix("   ", leaf("not found")).is_none());
    assert!(WrappedError::wrap_prefix("reading config", None).is_none());
}

#[test]
fn new_renders_only_its_message() {
    assert_eq!(WrappedError::new("boom").to_string(), "boom");
}

#[test]
fn display_is_idempotent() {
    let err = WrappedError::wrap(leaf("outer"), leaf("inner")).unwrap();
    assert_eq!(err.to_string(), err.to_string());
}

#[test]
fn source_prefers_inner() {
    let err = WrappedError::wrap(leaf("outer"), leaf("inner")).unwrap();
    assert_eq!(err.source().unwrap().to_string(), "inner");
}

#[test]
fn leaf_source_is_its_message() {
    let err = WrappedError::new("boom");
    assert_eq!(err.source().unwrap().to_string(), "boom");
}

#[test]
fn outer_and_inner_expose_the_halves() {
    let err = WrappedError::wrap(leaf("outer"), leaf("inner")).unwrap();
    assert_eq!(err.outer().unwrap().to_string(), "outer");
    assert_eq!(err.inner().unwrap().to_string(), "inner");

    let leaf_err = WrappedError::new("boom");
    assert!(leaf_err.outer().is_none());
    assert_eq!(leaf_err.inner().unwrap().to_string(), "boom");
}

#[test]
fn has_text_rejects_absent_and_blank() {
    assert!(!has_text(None));
    assert!(!has_text(Some(&MessageError::new(""))));
    assert!(!has_text(Some(&MessageError::new("   "))));
}

#[test]
fn has_text_accepts_non_blank() {
    assert!(has_text(Some(&MessageError::new("ERROR"))));
}

#[test]
fn trees_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<WrappedError>();
    assert_send_sync::<MessageError>();
}
