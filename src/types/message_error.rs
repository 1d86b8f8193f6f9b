use alloc::string::String;
use core::error::Error;
use core::fmt::{self, Display};

/// Plain leaf error carrying a single message.
///
/// This is the normalized leaf representation used by
/// [`WrappedError::new`](crate::WrappedError::new) and
/// [`WrappedError::wrap_prefix`](crate::WrappedError::wrap_prefix), so plain
/// messages and wrapped messages share one underlying shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageError {
    message: String,
}

impl MessageError {
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for MessageError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for MessageError {}
