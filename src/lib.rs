//! Compose hierarchical errors and walk them to find messages, sentinels,
//! or types.
//!
//! An error tree is built by wrapping an outer descriptive error around an
//! inner causal error; a single node may also aggregate several children.
//! The [`walk`] traversal visits every node in pre-order, and the query
//! functions in [`query`] are thin predicate filters over it.
//!
//! # Examples
//!
//! ## Wrapping and rendering
//!
//! ```
//! use errtree::{MessageError, WrappedError};
//!
//! let err = WrappedError::wrap(
//!     Some(Box::new(MessageError::new("load config"))),
//!     Some(Box::new(MessageError::new("file missing"))),
//! )
//! .unwrap();
//!
//! assert_eq!(err.to_string(), "load config: file missing");
//! ```
//!
//! ## Searching a tree
//!
//! ```
//! use errtree::{contains, contains_type, MessageError, WrappedError};
//!
//! let inner = WrappedError::wrap_prefix(
//!     "query users",
//!     Some(Box::new(MessageError::new("connection reset"))),
//! )
//! .unwrap();
//! let err = WrappedError::wrap_prefix("handle request", Some(Box::new(inner))).unwrap();
//!
//! assert!(contains(Some(&err), "connection reset"));
//! assert!(contains_type::<MessageError>(Some(&err)));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Convenience re-exports for quick starts
pub mod prelude;
/// Predicate-driven searches over error trees
pub mod query;
/// Extension traits layered over the core types
pub mod traits;
/// Concrete error shapes and shared aliases
pub mod types;
/// Pre-order traversal over error trees
pub mod walk;

pub use query::{
    contains, contains_target_err, contains_type, get_all, get_all_target_errs, get_all_types,
};
pub use traits::ResultExt;
pub use types::{
    has_text, AggregateError, BoxError, DynError, ErrorVec, MessageError, WrappedError,
};
pub use walk::walk;
