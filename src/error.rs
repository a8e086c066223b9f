use thiserror::Error;

/// Errors reported by [`List`](crate::List) and its cursors.
///
/// Both variants are raised before any link is touched, so the list is
/// unchanged when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("index {index} is out of range for a list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("cannot insert at index {index} into a list of length {len}")]
    InvalidInsertionIndex { index: usize, len: usize },
}

/// A broken link invariant found by [`List::validate`](crate::List::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LinkError {
    /// The stored length disagrees with the number of reachable nodes.
    #[error("list reports {expected} elements but {actual} nodes are reachable")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("the front node has a previous link")]
    FrontHasPrev,
    #[error("the back node has a next link")]
    BackHasNext,
    /// `node.next.prev != node` for the node at `index`.
    #[error("node {index} is not linked back from its successor")]
    BrokenBackLink { index: usize },
    #[error("the back reference is not the last reachable node")]
    BackMismatch,
}
