use errtree::{ResultExt, WrappedError};
use std::io;

#[test]
fn wrap_prefix_wraps_the_error() {
    let result: Result<(), _> = Err(io::Error::other("disk offline"));

    let err = result.wrap_prefix("flushing cache").unwrap_err();

    assert_eq!(err.to_string(), "flushing cache: disk offline");
    assert!(err.downcast_ref::<WrappedError>().is_some());
}

#[test]
fn wrap_prefix_keeps_ok_values() {
    let result: Result<i32, io::Error> = Ok(7);
    assert_eq!(result.wrap_prefix("flushing cache").unwrap(), 7);
}

#[test]
fn blank_prefix_passes_the_error_through() {
    let result: Result<(), _> = Err(io::Error::other("disk offline"));

    let err = result.wrap_prefix("   ").unwrap_err();

    assert_eq!(err.to_string(), "disk offline");
    assert!(err.downcast_ref::<WrappedError>().is_none());
}

#[test]
fn blank_error_text_passes_the_error_through() {
    let result: Result<(), _> = Err(io::Error::other(""));

    let err = result.wrap_prefix("flushing cache").unwrap_err();

    assert!(err.downcast_ref::<WrappedError>().is_none());
}
