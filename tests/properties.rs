use poslist::{
    insertion_sort, FrequencyFavorites, ListError, MoveToFrontFavorites, Position, PositionalList,
};
use proptest::prelude::*;
use proptest::sample::Index;
use std::collections::HashMap;

#[derive(Debug, Clone)]
enum Op {
    InsertFirst(i32),
    InsertLast(i32),
    InsertBefore(Index, i32),
    InsertAfter(Index, i32),
    Remove(Index),
    Replace(Index, i32),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::InsertFirst),
        4 => any::<i32>().prop_map(Op::InsertLast),
        3 => (any::<Index>(), any::<i32>()).prop_map(|(i, v)| Op::InsertBefore(i, v)),
        3 => (any::<Index>(), any::<i32>()).prop_map(|(i, v)| Op::InsertAfter(i, v)),
        4 => any::<Index>().prop_map(Op::Remove),
        2 => (any::<Index>(), any::<i32>()).prop_map(|(i, v)| Op::Replace(i, v)),
        1 => Just(Op::Clear),
    ]
}

fn assert_matches_model(list: &PositionalList<i32>, model: &[(Position, i32)]) {
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    let values: Vec<i32> = list.iter().copied().collect();
    let expected: Vec<i32> = model.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, expected);
    let positions: Vec<Position> = list.positions().collect();
    let expected: Vec<Position> = model.iter().map(|(p, _)| *p).collect();
    assert_eq!(positions, expected);

    // neighbor links agree in both directions
    for (i, (pos, _)) in model.iter().enumerate() {
        let before = if i == 0 { None } else { Some(model[i - 1].0) };
        let after = model.get(i + 1).map(|(p, _)| *p);
        assert_eq!(list.before(*pos), Ok(before));
        assert_eq!(list.after(*pos), Ok(after));
    }
    assert_eq!(list.first(), model.first().map(|(p, _)| *p));
    assert_eq!(list.last(), model.last().map(|(p, _)| *p));
}

proptest! {
    #[test]
    fn positional_list_tracks_model(ops in prop::collection::vec(op(), 0..80)) {
        let mut list = PositionalList::new();
        let mut model: Vec<(Position, i32)> = Vec::new();
        let mut retired: Vec<Position> = Vec::new();

        for op in ops {
            match op {
                Op::InsertFirst(v) => {
                    let p = list.insert_first(v);
                    model.insert(0, (p, v));
                }
                Op::InsertLast(v) => {
                    let p = list.insert_last(v);
                    model.push((p, v));
                }
                Op::InsertBefore(i, v) if !model.is_empty() => {
                    let at = i.index(model.len());
                    let p = list.insert_before(model[at].0, v).unwrap();
                    model.insert(at, (p, v));
                }
                Op::InsertAfter(i, v) if !model.is_empty() => {
                    let at = i.index(model.len());
                    let p = list.insert_after(model[at].0, v).unwrap();
                    model.insert(at + 1, (p, v));
                }
                Op::Remove(i) if !model.is_empty() => {
                    let at = i.index(model.len());
                    let (p, v) = model.remove(at);
                    prop_assert_eq!(list.remove(p), Ok(v));
                    retired.push(p);
                }
                Op::Replace(i, v) if !model.is_empty() => {
                    let at = i.index(model.len());
                    let old = std::mem::replace(&mut model[at].1, v);
                    prop_assert_eq!(list.replace(model[at].0, v), Ok(old));
                }
                Op::Clear => {
                    list.clear();
                    retired.extend(model.drain(..).map(|(p, _)| p));
                }
                _ => {}
            }
            assert_matches_model(&list, &model);
        }

        for p in retired {
            prop_assert_eq!(list.get(p), Err(ListError::InvalidPosition));
            prop_assert_eq!(list.insert_after(p, 0), Err(ListError::InvalidPosition));
        }
    }

    #[test]
    fn frequency_ranked_counts_never_increase(
        script in prop::collection::vec((0u8..8, prop::bool::weighted(0.1)), 0..120)
    ) {
        let mut fav = FrequencyFavorites::new();
        let mut counts: HashMap<u8, u64> = HashMap::new();

        for (value, remove) in script {
            if remove {
                prop_assert_eq!(fav.remove(&value).is_some(), counts.remove(&value).is_some());
            } else {
                let c = counts.entry(value).or_insert(0);
                *c += 1;
                prop_assert_eq!(fav.access(value), *c);
            }

            let entries: Vec<(u8, u64)> = fav.iter().map(|(v, c)| (*v, c)).collect();
            for pair in entries.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1);
            }
            prop_assert_eq!(entries.len(), counts.len());
            for (v, c) in &entries {
                prop_assert_eq!(counts.get(v), Some(c));
            }
            let top: Vec<u8> = fav.top(fav.len()).unwrap().copied().collect();
            let listed: Vec<u8> = entries.iter().map(|(v, _)| *v).collect();
            prop_assert_eq!(top, listed);
        }
    }

    #[test]
    fn move_to_front_puts_last_access_first(
        script in prop::collection::vec(0u8..8, 1..120),
        k in 0usize..8,
    ) {
        let mut fav = MoveToFrontFavorites::new();
        let mut counts: HashMap<u8, u64> = HashMap::new();

        for value in script {
            fav.access(value);
            *counts.entry(value).or_insert(0) += 1;
            prop_assert_eq!(fav.iter().next().map(|(v, _)| *v), Some(value));
        }

        let k = k.min(fav.len());
        let top: Vec<u64> = fav
            .top(k)
            .unwrap()
            .map(|v| counts[v])
            .collect();
        let mut expected: Vec<u64> = counts.values().copied().collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(k);
        prop_assert_eq!(top, expected);
    }

    #[test]
    fn insertion_sort_sorts_and_permutes(values in prop::collection::vec(-50i32..50, 0..60)) {
        let mut list: PositionalList<i32> = values.iter().copied().collect();
        insertion_sort(&mut list);

        let mut expected = values.clone();
        expected.sort();
        prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected.clone());

        let before: Vec<Position> = list.positions().collect();
        prop_assert_eq!(insertion_sort(&mut list), 0);
        prop_assert_eq!(list.positions().collect::<Vec<_>>(), before);
        prop_assert_eq!(list.len(), expected.len());
    }
}
