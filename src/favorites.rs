//! Self-organizing lists that keep frequently accessed values near the front.
//!
//! A [`FavoritesList`] stores each distinct value once, together with the
//! number of times it has been accessed. How the list reorders itself after an
//! access is decided by its [`AccessPolicy`]:
//!
//! - [`FrequencyRanked`] keeps the list in non-increasing access-count order.
//!   An access moves the entry forward past neighbors with a lower count, so
//!   it costs O(distance moved), and `top(k)` simply reads the first `k`
//!   entries.
//! - [`MoveToFront`] moves the accessed entry to the front unconditionally.
//!   Accesses cost O(1) after the lookup, but the list is in recency order,
//!   so `top(k)` has to select the `k` highest counts by repeated scans,
//!   O(k·n).
//!
//! Finding a value is a linear scan in both cases.
//!
//! ```
//! use poslist::{FrequencyFavorites, MoveToFrontFavorites};
//!
//! let mut ranked = FrequencyFavorites::new();
//! let mut recent = MoveToFrontFavorites::new();
//! for lang in ["Python", "Rust", "Python", "Python"] {
//!     ranked.access(lang);
//!     recent.access(lang);
//! }
//! ranked.access("Rust");
//! recent.access("Rust");
//!
//! assert_eq!(ranked.to_string(), "[(Python, 3), (Rust, 2)]");
//! assert_eq!(recent.to_string(), "[(Rust, 2), (Python, 3)]");
//! assert_eq!(recent.top(1).unwrap().collect::<Vec<_>>(), vec![&"Python"]);
//! ```

use crate::{errors::ListError, position::Position, positional::PositionalList};
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// A value together with its access count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<T> {
    value: T,
    count: u64,
}

impl<T> Entry<T> {
    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

/// How a [`FavoritesList`] reorders itself after an access.
pub trait AccessPolicy {
    /// Move the entry at `pos`, whose count has just been incremented, to its
    /// new place in `list`.
    ///
    /// Implementations must validate `pos` before unlinking anything.
    fn reposition<T>(list: &mut PositionalList<Entry<T>>, pos: Position) -> Result<(), ListError>;

    /// Yield the values of the `k` entries with the highest counts, highest
    /// first. `k` never exceeds `list.len()`.
    fn top<T>(list: &PositionalList<Entry<T>>, k: usize) -> Top<'_, T>;
}

/// Keeps entries in non-increasing count order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyRanked;

/// Moves every accessed entry to the front.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToFront;

impl AccessPolicy for FrequencyRanked {
    fn reposition<T>(list: &mut PositionalList<Entry<T>>, pos: Position) -> Result<(), ListError> {
        let count = list.get(pos)?.count;
        let mut walker = pos;
        while let Some(prev) = list.before(walker)? {
            if list.get(prev)?.count >= count {
                break;
            }
            walker = prev;
        }
        if walker == pos {
            return Ok(());
        }
        // walker is a live node other than pos, so it survives the removal
        let entry = list.remove(pos)?;
        list.insert_before(walker, entry)?;
        Ok(())
    }

    fn top<T>(list: &PositionalList<Entry<T>>, k: usize) -> Top<'_, T> {
        Top::in_list_order(list, k)
    }
}

impl AccessPolicy for MoveToFront {
    fn reposition<T>(list: &mut PositionalList<Entry<T>>, pos: Position) -> Result<(), ListError> {
        if list.before(pos)?.is_none() {
            return Ok(());
        }
        let entry = list.remove(pos)?;
        list.insert_first(entry);
        Ok(())
    }

    fn top<T>(list: &PositionalList<Entry<T>>, k: usize) -> Top<'_, T> {
        Top::by_count(list, k)
    }
}

/// A list of favorite values ranked by access count under policy `P`.
pub struct FavoritesList<T, P: AccessPolicy = FrequencyRanked> {
    list: PositionalList<Entry<T>>,
    _policy: PhantomData<P>,
}

/// Favorites kept in non-increasing access-count order.
pub type FrequencyFavorites<T> = FavoritesList<T, FrequencyRanked>;

/// Favorites kept in most-recently-accessed order.
pub type MoveToFrontFavorites<T> = FavoritesList<T, MoveToFront>;

impl<T, P: AccessPolicy> Default for FavoritesList<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: AccessPolicy> FavoritesList<T, P> {
    /// Create an empty list of favorites.
    pub fn new() -> Self {
        Self {
            list: PositionalList::new(),
            _policy: PhantomData,
        }
    }

    /// Number of distinct values in the list.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterate `(value, count)` pairs in list order.
    pub fn iter(&self) -> Entries<'_, T> {
        Entries {
            inner: self.list.iter(),
        }
    }

    /// Remove every entry, forgetting all counts.
    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Yield the `k` most accessed values, most accessed first.
    ///
    /// Fails with [`ListError::InsufficientItems`] if the list holds fewer
    /// than `k` values; nothing is yielded in that case.
    pub fn top(&self, k: usize) -> Result<Top<'_, T>, ListError> {
        if k > self.len() {
            return Err(ListError::InsufficientItems {
                requested: k,
                available: self.len(),
            });
        }
        Ok(P::top(&self.list, k))
    }
}

impl<T: PartialEq, P: AccessPolicy> FavoritesList<T, P> {
    /// Record an access to `value`, adding it with a zero count if absent.
    /// Returns the value's new access count.
    pub fn access(&mut self, value: T) -> u64 {
        let pos = match self.find_position(&value) {
            Some(pos) => pos,
            None => self.list.insert_last(Entry { value, count: 0 }),
        };
        let entry = self.list.get_mut(pos).expect("entry position is live");
        entry.count += 1;
        let count = entry.count;
        P::reposition(&mut self.list, pos).expect("entry position is live");
        count
    }

    /// Remove `value` from the list, returning it if it was present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let pos = self.find_position(value)?;
        self.list.remove(pos).ok().map(|entry| entry.value)
    }

    /// Access count of `value`, or `None` if it is not in the list.
    pub fn count(&self, value: &T) -> Option<u64> {
        self.list.iter().find(|e| e.value == *value).map(|e| e.count)
    }

    fn find_position(&self, value: &T) -> Option<Position> {
        self.list
            .positions()
            .zip(self.list.iter())
            .find(|(_, e)| e.value == *value)
            .map(|(pos, _)| pos)
    }
}

impl<T: fmt::Debug, P: AccessPolicy> fmt::Debug for FavoritesList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display, P: AccessPolicy> fmt::Display for FavoritesList<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, (value, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "({value}, {count})")?;
        }
        f.write_str("]")
    }
}

/// Iterator over `(value, count)` pairs of a favorites list.
pub struct Entries<'a, T> {
    inner: crate::positional::Iter<'a, Entry<T>>,
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (&'a T, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|e| (&e.value, e.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

/// Lazy iterator over the most accessed values of a favorites list.
pub struct Top<'a, T> {
    remaining: usize,
    state: TopState<'a, T>,
}

enum TopState<'a, T> {
    /// The list is already ranked; walk it from the front.
    Walk {
        list: &'a PositionalList<Entry<T>>,
        cursor: Option<Position>,
    },
    /// Selection over a copy of the entry references, taken on first use.
    Select {
        source: &'a PositionalList<Entry<T>>,
        pool: Option<PositionalList<&'a Entry<T>>>,
    },
}

impl<'a, T> Top<'a, T> {
    /// The first `k` values of `list`, which must already be ranked.
    pub fn in_list_order(list: &'a PositionalList<Entry<T>>, k: usize) -> Self {
        Top {
            remaining: k.min(list.len()),
            state: TopState::Walk {
                list,
                cursor: list.first(),
            },
        }
    }

    /// The `k` highest-count values of `list` in any order, found by scanning
    /// a copy of the list once per value yielded. Ties go to the entry nearer
    /// the front.
    pub fn by_count(list: &'a PositionalList<Entry<T>>, k: usize) -> Self {
        Top {
            remaining: k.min(list.len()),
            state: TopState::Select {
                source: list,
                pool: None,
            },
        }
    }
}

impl<'a, T> Iterator for Top<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = match &mut self.state {
            TopState::Walk { list, cursor } => {
                let list: &'a PositionalList<Entry<T>> = *list;
                let pos = (*cursor)?;
                *cursor = list.after(pos).ok().flatten();
                list.get(pos).ok()?
            }
            TopState::Select { source, pool } => {
                let source: &'a PositionalList<Entry<T>> = *source;
                let pool = pool.get_or_insert_with(|| source.iter().collect());
                let mut highest = pool.first()?;
                let mut best = pool.get(highest).ok()?.count;
                for (pos, e) in pool.positions().zip(pool.iter()).skip(1) {
                    if e.count > best {
                        highest = pos;
                        best = e.count;
                    }
                }
                pool.remove(highest).ok()?
            }
        };
        self.remaining -= 1;
        Some(&entry.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Top<'_, T> {}

impl<T> FusedIterator for Top<'_, T> {}
