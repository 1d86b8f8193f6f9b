use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::error::Error;
use core::fmt::{self, Display};

use crate::types::message_error::MessageError;
use crate::types::{BoxError, DynError};

/// Composite error holding an `outer` descriptive error around an `inner`
/// causal error.
///
/// The value is immutable after construction. Rendering joins both sides
/// with `": "`; the cause exposed through [`Error::source`] is `inner` when
/// present, else `outer`, so generic chain-following tooling always reaches
/// the deeper cause first.
///
/// # Examples
///
/// ```
/// use errtree::{MessageError, WrappedError};
///
/// let err = WrappedError::wrap(
///     Some(Box::new(MessageError::new("load config"))),
///     Some(Box::new(MessageError::new("file missing"))),
/// )
/// .unwrap();
///
/// assert_eq!(err.to_string(), "load config: file missing");
/// assert_eq!(err.source().map(|s| s.to_string()), Some("file missing".into()));
/// # use core::error::Error;
/// ```
#[derive(Debug)]
pub struct WrappedError {
    outer: Option<BoxError>,
    inner: Option<BoxError>,
}

impl WrappedError {
    /// Builds a leaf holding only a [`MessageError`] with the given text.
    ///
    /// # Examples
    ///
    /// ```
    /// use errtree::WrappedError;
    ///
    /// assert_eq!(WrappedError::new("boom").to_string(), "boom");
    /// ```
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            outer: None,
            inner: Some(Box::new(MessageError::new(message))),
        }
    }

    /// Wraps `inner` with `outer`, yielding `None` unless BOTH sides are
    /// present with non-blank text.
    ///
    /// The `None` result signals "nothing to wrap" and is a deliberate
    /// no-op, not a failure condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use errtree::{MessageError, WrappedError};
    ///
    /// let blank = WrappedError::wrap(
    ///     Some(Box::new(MessageError::new("   "))),
    ///     Some(Box::new(MessageError::new("inner"))),
    /// );
    /// assert!(blank.is_none());
    /// assert!(WrappedError::wrap(None, None).is_none());
    /// ```
    pub fn wrap(outer: Option<BoxError>, inner: Option<BoxError>) -> Option<Self> {
        if !has_text(erased(outer.as_deref())) || !has_text(erased(inner.as_deref())) {
            #[cfg(feature = "tracing")]
            tracing::debug!("skipping wrap: one side is absent or blank");
            return None;
        }

        Some(Self { outer, inner })
    }

    /// Builds a plain error from `prefix` and delegates to [`wrap`](Self::wrap).
    ///
    /// # Examples
    ///
    /// ```
    /// use errtree::{MessageError, WrappedError};
    ///
    /// let err = WrappedError::wrap_prefix(
    ///     "reading config",
    ///     Some(Box::new(MessageError::new("not found"))),
    /// )
    /// .unwrap();
    /// assert_eq!(err.to_string(), "reading config: not found");
    /// ```
    pub fn wrap_prefix(prefix: &str, err: Option<BoxError>) -> Option<Self> {
        Self::wrap(Some(Box::new(MessageError::new(prefix))), err)
    }

    // Callers must have validated both sides with `has_text`.
    pub(crate) fn from_parts(outer: BoxError, inner: BoxError) -> Self {
        Self {
            outer: Some(outer),
            inner: Some(inner),
        }
    }

    /// The descriptive half, visited as one unit by the walker.
    #[inline]
    pub fn outer(&self) -> Option<&DynError> {
        erased(self.outer.as_deref())
    }

    /// The causal half, recursed into by the walker.
    #[inline]
    pub fn inner(&self) -> Option<&DynError> {
        erased(self.inner.as_deref())
    }
}

impl Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.outer, &self.inner) {
            (Some(outer), Some(inner)) => write!(f, "{outer}: {inner}"),
            (Some(outer), None) => write!(f, "{outer}"),
            (None, Some(inner)) => write!(f, "{inner}"),
            (None, None) => Ok(()),
        }
    }
}

impl Error for WrappedError {
    /// Prefers the deeper cause: `inner` when present, else `outer`.
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        erased(self.inner.as_deref().or(self.outer.as_deref()))
    }
}

/// Returns true when `err` is present and its trimmed text is non-empty.
///
/// This is the precondition [`WrappedError::wrap`] checks on each operand
/// independently.
///
/// # Examples
///
/// ```
/// use errtree::{has_text, MessageError};
///
/// assert!(has_text(Some(&MessageError::new("ERROR"))));
/// assert!(!has_text(Some(&MessageError::new("   "))));
/// assert!(!has_text(None));
/// ```
pub fn has_text(err: Option<&DynError>) -> bool {
    match err {
        Some(err) => !err.to_string().trim().is_empty(),
        None => false,
    }
}

#[inline]
fn erased<'a>(err: Option<&'a (dyn Error + Send + Sync + 'static)>) -> Option<&'a DynError> {
    err.map(|e| e as &DynError)
}
