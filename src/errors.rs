/// Errors that can occur when operating on a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ListError {
    /// The position belongs to another list or its node has been removed.
    #[error("invalid position")]
    InvalidPosition,

    /// A sentinel node was passed where a live node is required.
    #[error("cannot remove sentinel node")]
    InvalidOperation,

    #[error("list has less than {requested} items ({available} available)")]
    InsufficientItems { requested: usize, available: usize },
}
