use crate::sequence::{Iter, LinkedSequence};
use core::fmt;

/// First-in first-out queue over the same sentinel-bounded linked sequence
/// that backs [`PositionalList`](crate::PositionalList).
pub struct LinkedQueue<T> {
    seq: LinkedSequence<T>,
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        Self {
            seq: LinkedSequence::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Add a value at the back of the queue.
    pub fn enqueue(&mut self, value: T) {
        let trailer = self.seq.trailer();
        let last = self.seq.prev_of(trailer);
        self.seq.insert_between(value, last, trailer);
    }

    /// Remove and return the value at the front, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.seq.is_empty() {
            return None;
        }
        let front = self.seq.next_of(self.seq.header());
        self.seq.remove_node(front).ok()
    }

    /// The value at the front, without removing it.
    pub fn peek(&self) -> Option<&T> {
        let front = self.seq.next_of(self.seq.header());
        self.seq.node(front).and_then(|n| n.value.as_ref())
    }

    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Iterate values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.enqueue(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("LinkedQueue(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <- ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
