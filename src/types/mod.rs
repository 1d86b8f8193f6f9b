//! Concrete error shapes and the aliases shared across the crate.
//!
//! Three shapes participate in traversal:
//!
//! - [`WrappedError`] — the outer/inner composite built by wrapping
//! - [`MessageError`] — a plain leaf carrying one message
//! - [`AggregateError`] — an ordered collection of child errors
//!
//! # Examples
//!
//! ```
//! use errtree::{MessageError, WrappedError};
//!
//! let err = WrappedError::wrap(
//!     Some(Box::new(MessageError::new("outer"))),
//!     Some(Box::new(MessageError::new("inner"))),
//! )
//! .unwrap();
//!
//! assert_eq!(err.to_string(), "outer: inner");
//! ```
use alloc::boxed::Box;
use core::error::Error;
use smallvec::SmallVec;

pub mod aggregate_error;
pub mod message_error;
pub mod wrapped_error;

pub use aggregate_error::AggregateError;
pub use message_error::MessageError;
pub use wrapped_error::{has_text, WrappedError};

/// Borrowed, type-erased error node as seen by the walker and the queries.
pub type DynError = dyn Error + 'static;

/// Owned child slot inside an error tree.
///
/// A tree exclusively owns its children, so the constructors in this crate
/// cannot build cycles.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// SmallVec-backed collection used for child storage and query matches.
///
/// Inline storage for up to 4 elements keeps shallow trees and small result
/// sets off the heap.
pub type ErrorVec<E> = SmallVec<[E; 4]>;
