//! Predicate-driven searches over error trees.
//!
//! Every query is a thin composition over [`walk`]: traverse, filter, and
//! accumulate matching nodes. None of them can fail; an absent or empty tree
//! yields an empty result.

use alloc::string::ToString;
use core::error::Error;

use crate::types::{DynError, ErrorVec, MessageError};
use crate::walk::walk;

/// Collects every node whose rendered text equals `message`.
///
/// # Examples
///
/// ```
/// use errtree::{get_all, MessageError, WrappedError};
///
/// let err = WrappedError::wrap(
///     Some(Box::new(MessageError::new("needle"))),
///     Some(Box::new(MessageError::new("haystack"))),
/// )
/// .unwrap();
///
/// assert_eq!(get_all(Some(&err), "needle").len(), 1);
/// assert!(get_all(Some(&err), "thimble").is_empty());
/// ```
pub fn get_all<'a>(root: Option<&'a DynError>, message: &str) -> ErrorVec<&'a DynError> {
    get_all_target_errs(root, &MessageError::new(message))
}

/// Collects every node matching `target`, either because the target's own
/// source chain reaches the node by identity, or because their rendered
/// texts are exactly equal.
///
/// The text fallback exists because message-built errors are not
/// identity-comparable across construction sites.
pub fn get_all_target_errs<'a>(
    root: Option<&'a DynError>,
    target: &DynError,
) -> ErrorVec<&'a DynError> {
    let mut matches = ErrorVec::new();

    walk(root, &mut |node| {
        if chains_to(target, node) || target.to_string() == node.to_string() {
            matches.push(node);
        }
    });

    matches
}

/// Collects every node whose concrete runtime type is exactly `T`.
///
/// Matching is by `TypeId`, never at the trait level: a node matches only
/// when it was constructed as a `T`.
///
/// # Examples
///
/// ```
/// use errtree::{get_all_types, MessageError, WrappedError};
///
/// let err = WrappedError::wrap_prefix(
///     "outer",
///     Some(Box::new(MessageError::new("inner"))),
/// )
/// .unwrap();
///
/// assert_eq!(get_all_types::<MessageError>(Some(&err)).len(), 2);
/// assert!(get_all_types::<std::io::Error>(Some(&err)).is_empty());
/// ```
pub fn get_all_types<'a, T>(root: Option<&'a DynError>) -> ErrorVec<&'a DynError>
where
    T: Error + 'static,
{
    let mut matches = ErrorVec::new();

    walk(root, &mut |node| {
        if node.is::<T>() {
            matches.push(node);
        }
    });

    matches
}

/// True when some node's rendered text equals `message`.
pub fn contains(root: Option<&DynError>, message: &str) -> bool {
    !get_all(root, message).is_empty()
}

/// True when some node matches `target` per [`get_all_target_errs`].
pub fn contains_target_err(root: Option<&DynError>, target: &DynError) -> bool {
    !get_all_target_errs(root, target).is_empty()
}

/// True when some node's concrete type is exactly `T`.
pub fn contains_type<T>(root: Option<&DynError>) -> bool
where
    T: Error + 'static,
{
    !get_all_types::<T>(root).is_empty()
}

// Reflexive, then transitive through `source()`: does the target's own
// cause chain reach `node` by address identity?
fn chains_to(target: &DynError, node: &DynError) -> bool {
    let mut cursor = Some(target);

    while let Some(err) = cursor {
        if core::ptr::addr_eq(err, node) {
            return true;
        }
        cursor = err.source();
    }

    false
}
