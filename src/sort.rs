use crate::{errors::ListError, positional::PositionalList};

/// Sort `list` in place into non-decreasing order, using only position
/// operations. Returns the number of elements that had to be moved.
///
/// The sort is stable: an element is only ever moved in front of elements
/// strictly greater than itself. It runs in O(n) on sorted input (no element
/// is moved, so every outstanding position stays valid) and O(n²) in the
/// worst case. Moved elements get new positions.
///
/// ```
/// use poslist::{insertion_sort, PositionalList};
///
/// let mut list: PositionalList<i32> = [2, 6, 1, 8, -10].into_iter().collect();
/// insertion_sort(&mut list);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![-10, 1, 2, 6, 8]);
/// ```
pub fn insertion_sort<T: Ord>(list: &mut PositionalList<T>) -> usize {
    sort_positions(list).expect("sort only follows live positions")
}

fn sort_positions<T: Ord>(list: &mut PositionalList<T>) -> Result<usize, ListError> {
    let Some(mut marker) = list.first() else {
        return Ok(0);
    };
    let mut moves = 0;

    // marker is the last element of the sorted prefix
    while let Some(pivot) = list.after(marker)? {
        if list.get(marker)? <= list.get(pivot)? {
            marker = pivot;
            continue;
        }
        let mut walker = marker;
        while let Some(prev) = list.before(walker)? {
            if list.get(prev)? <= list.get(pivot)? {
                break;
            }
            walker = prev;
        }
        let value = list.remove(pivot)?;
        list.insert_before(walker, value)?;
        moves += 1;
    }
    Ok(moves)
}
