use core::sync::atomic::{AtomicU64, Ordering};

static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one sequence instance, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    pub(crate) fn fresh() -> Self {
        ListId(NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A handle to one place in a [`PositionalList`](crate::PositionalList).
///
/// Positions carry no lifetime and may be stored freely. A position stays
/// valid until the element it refers to is removed (or the list is cleared);
/// after that every operation given the position fails with
/// [`ListError::InvalidPosition`](crate::ListError::InvalidPosition), even if
/// the list has since reused the underlying storage slot.
///
/// Two positions compare equal iff they refer to the same node of the same
/// list, regardless of the stored values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) list: ListId,
    pub(crate) key: usize,
    pub(crate) stamp: u64,
}

impl Position {
    /// Returns the raw slot index for debugging or external maps.
    pub fn as_raw(&self) -> usize {
        self.key
    }
}
