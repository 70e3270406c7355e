use crate::{errors::ListError, node::Node, position::ListId};
use core::iter::FusedIterator;
use slab::Slab;

/// Doubly linked sequence bounded by a permanent header and trailer.
///
/// Nodes live in a slab arena and link to each other by slot key. Every node
/// carries a stamp drawn from a per-sequence counter that never repeats, so a
/// slot released by a removal and later reused is told apart from the node
/// that used to live there.
#[derive(Debug)]
pub(crate) struct LinkedSequence<T> {
    id: ListId,
    nodes: Slab<Node<T>>,
    header: usize,
    trailer: usize,
    len: usize,
    next_stamp: u64,
}

impl<T> LinkedSequence<T> {
    pub(crate) fn new() -> Self {
        let mut nodes = Slab::with_capacity(2);
        let header = nodes.insert(Node::sentinel(0));
        let trailer = nodes.insert(Node::sentinel(1));
        nodes[header].next = trailer;
        nodes[trailer].prev = header;

        Self {
            id: ListId::fresh(),
            nodes,
            header,
            trailer,
            len: 0,
            next_stamp: 2,
        }
    }

    pub(crate) fn id(&self) -> ListId {
        self.id
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn header(&self) -> usize {
        self.header
    }

    pub(crate) fn trailer(&self) -> usize {
        self.trailer
    }

    pub(crate) fn is_sentinel(&self, key: usize) -> bool {
        key == self.header || key == self.trailer
    }

    pub(crate) fn node(&self, key: usize) -> Option<&Node<T>> {
        self.nodes.get(key)
    }

    pub(crate) fn node_mut(&mut self, key: usize) -> Option<&mut Node<T>> {
        self.nodes.get_mut(key)
    }

    /// Key of the node following `key`. `key` must be occupied.
    pub(crate) fn next_of(&self, key: usize) -> usize {
        self.nodes[key].next
    }

    /// Key of the node preceding `key`. `key` must be occupied.
    pub(crate) fn prev_of(&self, key: usize) -> usize {
        self.nodes[key].prev
    }

    /// Splice a new node holding `value` between the adjacent nodes `prev`
    /// and `next`, returning the new node's key.
    pub(crate) fn insert_between(&mut self, value: T, prev: usize, next: usize) -> usize {
        debug_assert_eq!(self.nodes[prev].next, next, "splice endpoints must be adjacent");
        debug_assert_eq!(self.nodes[next].prev, prev, "splice endpoints must be adjacent");

        let stamp = self.next_stamp;
        self.next_stamp += 1;

        let key = self.nodes.insert(Node {
            stamp,
            prev,
            next,
            value: Some(value),
        });
        self.nodes[prev].next = key;
        self.nodes[next].prev = key;
        self.len += 1;
        key
    }

    /// Unlink and retire the node at `key`, returning its value.
    pub(crate) fn remove_node(&mut self, key: usize) -> Result<T, ListError> {
        if self.is_sentinel(key) {
            return Err(ListError::InvalidOperation);
        }
        let node = self.nodes.try_remove(key).ok_or(ListError::InvalidPosition)?;
        debug_assert_eq!(self.nodes[node.prev].next, key);
        debug_assert_eq!(self.nodes[node.next].prev, key);

        self.nodes[node.prev].next = node.next;
        self.nodes[node.next].prev = node.prev;
        self.len -= 1;
        node.value.ok_or(ListError::InvalidOperation)
    }

    /// Retire every live node and relink the sentinels to each other.
    pub(crate) fn clear(&mut self) {
        let (header, trailer) = (self.header, self.trailer);
        self.nodes.retain(|key, _| key == header || key == trailer);
        self.nodes[header].next = trailer;
        self.nodes[trailer].prev = header;
        self.len = 0;
    }

    /// Iterate values from the header's successor up to the trailer.
    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            seq: self,
            cursor: self.next_of(self.header),
            remaining: self.len,
        }
    }
}

/// Iterator over the values of a list, front to back.
pub struct Iter<'a, T> {
    seq: &'a LinkedSequence<T>,
    cursor: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == self.seq.trailer {
            return None;
        }
        let node = &self.seq.nodes[self.cursor];
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
