#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) stamp: u64,
    pub(crate) prev: usize,
    pub(crate) next: usize,
    /// `None` only for the header and trailer sentinels.
    pub(crate) value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn sentinel(stamp: u64) -> Self {
        Node {
            stamp,
            prev: usize::MAX,
            next: usize::MAX,
            value: None,
        }
    }

    /// Is this node live (not a sentinel)?
    pub(crate) fn is_live(&self) -> bool {
        self.value.is_some()
    }
}
