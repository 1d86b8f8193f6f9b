//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use errtree::prelude::*;
//! ```
//!
//! # Examples
//!
//! ```
//! use errtree::prelude::*;
//!
//! let err = WrappedError::wrap_prefix(
//!     "loading configuration",
//!     Some(Box::new(MessageError::new("config.toml not found"))),
//! )
//! .unwrap();
//!
//! assert!(contains(Some(&err), "config.toml not found"));
//! ```

pub use crate::query::{
    contains, contains_target_err, contains_type, get_all, get_all_target_errs, get_all_types,
};
pub use crate::traits::ResultExt;
pub use crate::types::{has_text, AggregateError, BoxError, DynError, MessageError, WrappedError};
pub use crate::walk::walk;
