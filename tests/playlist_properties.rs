//! Property-based tests for the ordered playlist.
//!
//! Every mutation sequence is mirrored on a `Vec`, and the playlist's
//! order, ends and wrap links are checked against it.

use proptest::prelude::*;
use tapedeck::OrderedPlaylist;

#[derive(Debug, Clone)]
enum Op {
    Prepend(u16),
    Append(u16),
    InsertAt(usize, u16),
    RemoveFirst,
    RemoveLast,
    RemoveAt(usize),
    Remove(u16),
    RemoveAll,
    MakeCircular,
    MakeLinear,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u16>().prop_map(Op::Prepend),
        4 => any::<u16>().prop_map(Op::Append),
        4 => (0usize..12, any::<u16>()).prop_map(|(i, v)| Op::InsertAt(i, v)),
        2 => Just(Op::RemoveFirst),
        2 => Just(Op::RemoveLast),
        2 => (0usize..12).prop_map(Op::RemoveAt),
        2 => (0u16..8).prop_map(Op::Remove),
        1 => Just(Op::RemoveAll),
        2 => Just(Op::MakeCircular),
        2 => Just(Op::MakeLinear),
    ]
}

/// Applies `op` to both and returns whether the results agreed.
fn apply(list: &mut OrderedPlaylist<u16>, model: &mut Vec<u16>, op: &Op) -> bool {
    match *op {
        Op::Prepend(v) => {
            list.prepend(v);
            model.insert(0, v);
            true
        }
        Op::Append(v) => {
            list.append(v);
            model.push(v);
            true
        }
        Op::InsertAt(i, v) => {
            let in_range = i <= model.len();
            if in_range {
                model.insert(i, v);
            }
            list.insert_at(i, v).is_some() == in_range
        }
        Op::RemoveFirst => {
            let expected = (!model.is_empty()).then(|| model.remove(0));
            list.remove_first() == expected
        }
        Op::RemoveLast => list.remove_last() == model.pop(),
        Op::RemoveAt(i) => {
            let expected = (i < model.len()).then(|| model.remove(i));
            list.remove_at(i) == expected
        }
        Op::Remove(v) => {
            let position = model.iter().position(|&x| x == v);
            let expected = position.map(|pos| model.remove(pos));
            list.remove(&v) == expected
        }
        Op::RemoveAll => {
            list.remove_all();
            model.clear();
            true
        }
        Op::MakeCircular => {
            list.make_circular();
            true
        }
        Op::MakeLinear => {
            list.make_linear();
            true
        }
    }
}

fn check_links(list: &OrderedPlaylist<u16>) -> Result<(), TestCaseError> {
    match (list.first(), list.last()) {
        (None, None) => prop_assert_eq!(list.len(), 0),
        (Some(first), Some(last)) => {
            prop_assert!(!list.is_empty());
            if list.is_circular() {
                prop_assert_eq!(last.next().map(|e| e.id()), Some(first.id()));
                prop_assert_eq!(first.previous().map(|e| e.id()), Some(last.id()));
            } else {
                prop_assert!(last.next().is_none());
                prop_assert!(first.previous().is_none());
            }

            // Walking backwards from the tail visits the same entries.
            let forward: Vec<u16> = list.iter().copied().collect();
            let mut backward = Vec::with_capacity(list.len());
            let mut cursor = Some(last);
            for _ in 0..list.len() {
                let entry = cursor.ok_or_else(|| TestCaseError::fail("chain ended early"))?;
                backward.push(*entry.value());
                cursor = entry.previous();
            }
            backward.reverse();
            prop_assert_eq!(forward, backward);
        }
        _ => prop_assert!(false, "head and tail disagree about emptiness"),
    }
    Ok(())
}

proptest! {
    /// Property: appended values come back in order at their indices
    #[test]
    fn append_then_index(values in prop::collection::vec(any::<u16>(), 0..64)) {
        let mut list = OrderedPlaylist::new();
        for &v in &values {
            list.append(v);
        }

        prop_assert_eq!(list.len(), values.len());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(list.get(i).map(|e| *e.value()), Some(*v));
        }
        prop_assert!(list.get(values.len()).is_none());
    }

    /// Property: insert_at places the value at its index and shifts the rest
    #[test]
    fn insert_shifts_following(
        values in prop::collection::vec(any::<u16>(), 0..32),
        index in 0usize..40,
        value in any::<u16>(),
    ) {
        let mut list: OrderedPlaylist<u16> = values.iter().copied().collect();
        let inserted = list.insert_at(index, value);

        if index <= values.len() {
            prop_assert!(inserted.is_some());
            prop_assert_eq!(list.get(index).map(|e| *e.value()), Some(value));
            for (i, v) in values.iter().enumerate().skip(index) {
                prop_assert_eq!(list.get(i + 1).map(|e| *e.value()), Some(*v));
            }
        } else {
            prop_assert!(inserted.is_none());
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), values);
        }
    }

    /// Property: any mutation sequence matches a Vec model and keeps the
    /// mode invariants, linear or circular
    #[test]
    fn mutations_match_model(ops in prop::collection::vec(arbitrary_op(), 1..80)) {
        let mut list = OrderedPlaylist::new();
        let mut model = Vec::new();

        for op in &ops {
            let agreed = apply(&mut list, &mut model, op);
            prop_assert!(agreed, "result mismatch on {:?}", op);
            prop_assert_eq!(list.iter().copied().collect::<Vec<_>>(), model.clone());
            check_links(&list)?;
        }
    }

    /// Property: index_of finds the first occurrence, like Vec::position
    #[test]
    fn index_of_matches_position(
        values in prop::collection::vec(0u16..10, 0..32),
        needle in 0u16..10,
    ) {
        let list: OrderedPlaylist<u16> = values.iter().copied().collect();
        prop_assert_eq!(list.index_of(&needle), values.iter().position(|&v| v == needle));
    }
}
