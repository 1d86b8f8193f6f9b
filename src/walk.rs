//! Pre-order traversal over error trees.

use crate::types::{AggregateError, DynError, WrappedError};

/// Visits every node reachable from `root` in pre-order, invoking `visit`
/// once per node.
///
/// Dispatch is evaluated in priority order for the current node:
///
/// 1. `root` is `None` — return immediately, zero visits.
/// 2. `root` is a [`WrappedError`] — visit its outer half (the half itself,
///    as one unit, not the whole node), then recurse into its inner half.
/// 3. `root` is an [`AggregateError`] — visit the node itself, then recurse
///    into each child in order.
/// 4. `root` exposes a single cause through [`Error::source`] — visit the
///    node itself, then recurse into that cause. This covers arbitrary
///    foreign error types.
/// 5. Otherwise the node is a leaf — visit it and stop.
///
/// [`WrappedError`] is checked before the generic cases on purpose: it also
/// exposes a `source()`, and falling through to rule 4 would visit the whole
/// composite instead of splitting it into its outer and inner halves.
///
/// The crate's own constructors cannot produce cycles, but this function
/// performs no cycle detection: a foreign `source()` chain that loops back
/// to an ancestor recurses without bound.
///
/// [`Error::source`]: core::error::Error::source
///
/// # Examples
///
/// ```
/// use errtree::{walk, MessageError, WrappedError};
///
/// let inner = WrappedError::wrap(
///     Some(Box::new(MessageError::new("inner"))),
///     Some(Box::new(MessageError::new("chained error"))),
/// )
/// .unwrap();
/// let err = WrappedError::wrap(
///     Some(Box::new(MessageError::new("outer"))),
///     Some(Box::new(inner)),
/// )
/// .unwrap();
///
/// let mut texts = Vec::new();
/// walk(Some(&err), &mut |node| texts.push(node.to_string()));
/// assert_eq!(texts, ["outer", "inner", "chained error"]);
/// ```
pub fn walk<'a, F>(root: Option<&'a DynError>, visit: &mut F)
where
    F: FnMut(&'a DynError),
{
    let Some(err) = root else { return };

    #[cfg(feature = "tracing")]
    tracing::trace!(node = %err, "walking error node");

    if let Some(wrapped) = err.downcast_ref::<WrappedError>() {
        if let Some(outer) = wrapped.outer() {
            visit(outer);
        }
        walk(wrapped.inner(), visit);
    } else if let Some(aggregate) = err.downcast_ref::<AggregateError>() {
        visit(err);
        for cause in aggregate.causes() {
            walk(Some(cause), visit);
        }
    } else if let Some(source) = err.source() {
        visit(err);
        walk(Some(source), visit);
    } else {
        visit(err);
    }
}
