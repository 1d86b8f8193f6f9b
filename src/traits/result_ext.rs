//! Extension trait for wrapping `Result` errors under a descriptive prefix.

use alloc::boxed::Box;
use core::error::Error;

use crate::types::wrapped_error::has_text;
use crate::types::{BoxError, DynError, MessageError, WrappedError};

/// Adds prefix-wrapping to `Result` without verbose `.map_err()` chains.
///
/// # Examples
///
/// ```
/// use errtree::traits::ResultExt;
///
/// fn flush() -> Result<(), std::io::Error> {
///     Err(std::io::Error::other("disk offline"))
/// }
///
/// let err = flush().wrap_prefix("flushing cache").unwrap_err();
/// assert_eq!(err.to_string(), "flushing cache: disk offline");
/// ```
pub trait ResultExt<T> {
    /// Wraps the error under `prefix` as a [`WrappedError`].
    ///
    /// When the wrap would be a no-op (blank prefix, or an error with blank
    /// text) the original error passes through unchanged; an `Err` must stay
    /// an `Err`.
    fn wrap_prefix(self, prefix: &str) -> Result<T, BoxError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Error + Send + Sync + 'static,
{
    fn wrap_prefix(self, prefix: &str) -> Result<T, BoxError> {
        self.map_err(|err| {
            let inner: BoxError = Box::new(err);

            if prefix.trim().is_empty() || !has_text(Some(inner.as_ref() as &DynError)) {
                return inner;
            }

            let wrapped: BoxError = Box::new(WrappedError::from_parts(
                Box::new(MessageError::new(prefix)),
                inner,
            ));
            wrapped
        })
    }
}
