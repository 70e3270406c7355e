//! Positional doubly linked list with stable, checked handles, plus the
//! self-organizing favorites lists and the insertion sort built on it.

mod errors;
mod favorites;
mod node;
mod position;
mod positional;
mod queue;
mod sequence;
mod sort;

pub use errors::ListError;
pub use favorites::{
    AccessPolicy, Entries, Entry, FavoritesList, FrequencyFavorites, FrequencyRanked, MoveToFront,
    MoveToFrontFavorites, Top,
};
pub use position::Position;
pub use positional::{Iter, PositionalList, Positions};
pub use queue::LinkedQueue;
pub use sort::insertion_sort;
