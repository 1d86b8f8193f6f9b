use alloc::string::String;
use core::error::Error;
use core::fmt::{self, Display};

use crate::types::{BoxError, DynError, ErrorVec};

/// Error aggregating an ordered sequence of child errors under one message.
///
/// This is the crate's "multiple nested causes" shape: the walker visits the
/// aggregate itself, then each child in insertion order.
///
/// # Examples
///
/// ```
/// use errtree::{AggregateError, MessageError};
///
/// let mut errs = AggregateError::new("several checks failed");
/// errs.push(Box::new(MessageError::new("name is blank")));
/// errs.push(Box::new(MessageError::new("email is invalid")));
///
/// assert_eq!(errs.to_string(), "several checks failed");
/// assert_eq!(errs.causes().count(), 2);
/// ```
#[derive(Debug)]
pub struct AggregateError {
    message: String,
    causes: ErrorVec<BoxError>,
}

impl AggregateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            causes: ErrorVec::new(),
        }
    }

    pub fn with_causes(
        message: impl Into<String>,
        causes: impl IntoIterator<Item = BoxError>,
    ) -> Self {
        Self {
            message: message.into(),
            causes: causes.into_iter().collect(),
        }
    }

    /// Appends a child; building happens before the tree is handed to the
    /// walker, never after.
    #[inline]
    pub fn push(&mut self, cause: BoxError) {
        self.causes.push(cause);
    }

    /// Children in insertion order.
    #[inline]
    pub fn causes(&self) -> impl Iterator<Item = &DynError> {
        self.causes.iter().map(|c| c.as_ref() as &DynError)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.causes.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.causes.len()
    }
}

impl Display for AggregateError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for AggregateError {}
