use crate::{errors::ListError, position::Position, sequence::LinkedSequence};
use core::fmt;
use core::iter::FusedIterator;

pub use crate::sequence::Iter;

/// A doubly linked list addressed by [`Position`] handles.
///
/// All insertions and removals are O(1). Positions handed out by the list
/// remain valid until the element they refer to is removed; every operation
/// taking a position validates it first and fails with
/// [`ListError::InvalidPosition`] before touching the list if the position is
/// foreign or stale.
pub struct PositionalList<T> {
    seq: LinkedSequence<T>,
}

/// Iterator over the positions of a list, front to back.
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    cursor: usize,
    remaining: usize,
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PositionalList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self {
            seq: LinkedSequence::new(),
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Insert a value at the front and return its position.
    pub fn insert_first(&mut self, value: T) -> Position {
        let header = self.seq.header();
        let next = self.seq.next_of(header);
        self.insert_between(value, header, next)
    }

    /// Insert a value at the back and return its position.
    pub fn insert_last(&mut self, value: T) -> Position {
        let trailer = self.seq.trailer();
        let prev = self.seq.prev_of(trailer);
        self.insert_between(value, prev, trailer)
    }

    /// Insert a value **before** `pos`. Returns the new element's position.
    pub fn insert_before(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        let key = self.validate(pos)?;
        let prev = self.seq.prev_of(key);
        Ok(self.insert_between(value, prev, key))
    }

    /// Insert a value **after** `pos`. Returns the new element's position.
    pub fn insert_after(&mut self, pos: Position, value: T) -> Result<Position, ListError> {
        let key = self.validate(pos)?;
        let next = self.seq.next_of(key);
        Ok(self.insert_between(value, key, next))
    }

    /// Remove the element at `pos`, returning its value.
    ///
    /// `pos` and every copy of it become invalid.
    pub fn remove(&mut self, pos: Position) -> Result<T, ListError> {
        let key = self.validate(pos)?;
        self.seq.remove_node(key)
    }

    /// Replace the element at `pos` in place, returning the old value.
    pub fn replace(&mut self, pos: Position, value: T) -> Result<T, ListError> {
        let slot = self.get_mut(pos)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Get a reference to the element at `pos`.
    pub fn get(&self, pos: Position) -> Result<&T, ListError> {
        let key = self.validate(pos)?;
        self.seq
            .node(key)
            .and_then(|n| n.value.as_ref())
            .ok_or(ListError::InvalidPosition)
    }

    /// Get a mutable reference to the element at `pos`.
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut T, ListError> {
        let key = self.validate(pos)?;
        self.seq
            .node_mut(key)
            .and_then(|n| n.value.as_mut())
            .ok_or(ListError::InvalidPosition)
    }

    /// Does `pos` refer to a live element of this list?
    pub fn contains(&self, pos: Position) -> bool {
        self.validate(pos).is_ok()
    }

    /// Position of the first element, or `None` if the list is empty.
    pub fn first(&self) -> Option<Position> {
        self.make_position(self.seq.next_of(self.seq.header()))
    }

    /// Position of the last element, or `None` if the list is empty.
    pub fn last(&self) -> Option<Position> {
        self.make_position(self.seq.prev_of(self.seq.trailer()))
    }

    /// Position just before `pos`, or `None` if `pos` is first.
    pub fn before(&self, pos: Position) -> Result<Option<Position>, ListError> {
        let key = self.validate(pos)?;
        Ok(self.make_position(self.seq.prev_of(key)))
    }

    /// Position just after `pos`, or `None` if `pos` is last.
    pub fn after(&self, pos: Position) -> Result<Option<Position>, ListError> {
        let key = self.validate(pos)?;
        Ok(self.make_position(self.seq.next_of(key)))
    }

    /// Remove every element. All outstanding positions become invalid.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Iterate values front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.seq.iter()
    }

    /// Iterate positions front to back.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            list: self,
            cursor: self.seq.next_of(self.seq.header()),
            remaining: self.seq.len(),
        }
    }

    fn insert_between(&mut self, value: T, prev: usize, next: usize) -> Position {
        let key = self.seq.insert_between(value, prev, next);
        self.position_at(key)
    }

    fn validate(&self, pos: Position) -> Result<usize, ListError> {
        if pos.list != self.seq.id() {
            return Err(ListError::InvalidPosition);
        }
        match self.seq.node(pos.key) {
            Some(n) if n.stamp == pos.stamp && n.is_live() => Ok(pos.key),
            _ => Err(ListError::InvalidPosition),
        }
    }

    fn make_position(&self, key: usize) -> Option<Position> {
        if self.seq.is_sentinel(key) {
            return None;
        }
        Some(self.position_at(key))
    }

    fn position_at(&self, key: usize) -> Position {
        Position {
            list: self.seq.id(),
            key,
            stamp: self.seq.node(key).map_or(u64::MAX, |n| n.stamp),
        }
    }
}

impl<'a, T> Iterator for Positions<'a, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.list.make_position(self.cursor)?;
        self.cursor = self.list.seq.next_of(self.cursor);
        self.remaining = self.remaining.saturating_sub(1);
        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Positions<'_, T> {}

impl<T> FusedIterator for Positions<'_, T> {}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_last(value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PositionalList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PositionalList(")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" <-> ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str(")")
    }
}
