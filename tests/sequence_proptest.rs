use proptest::prelude::*;
use seqkit::{Error, LinkedList, Sequence, Vector};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    Append(i16),
    Prepend(i16),
    PopFirst,
    PopLast,
    Insert(usize, i16),
    Erase(usize),
    EraseRange(usize, usize),
    Clear,
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<i16>().prop_map(Operation::Append),
        3 => any::<i16>().prop_map(Operation::Prepend),
        2 => Just(Operation::PopFirst),
        2 => Just(Operation::PopLast),
        3 => (any::<usize>(), any::<i16>()).prop_map(|(i, v)| Operation::Insert(i, v)),
        2 => any::<usize>().prop_map(Operation::Erase),
        1 => (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Operation::EraseRange(a, b)),
        1 => Just(Operation::Clear),
    ]
}

/// Replays `ops` against `seq` and a `VecDeque`, comparing after every step.
fn replay<S>(seq: &mut S, ops: &[Operation])
where
    S: Sequence<i16>,
    for<'a> &'a S: IntoIterator<Item = &'a i16>,
{
    let mut model: VecDeque<i16> = VecDeque::new();
    for op in ops {
        match *op {
            Operation::Append(v) => {
                seq.append(v);
                model.push_back(v);
            }
            Operation::Prepend(v) => {
                seq.prepend(v);
                model.push_front(v);
            }
            Operation::PopFirst => {
                let expected = model.pop_front().ok_or(Error::EmptyContainer);
                assert_eq!(seq.pop_first(), expected, "pop_first");
            }
            Operation::PopLast => {
                let expected = model.pop_back().ok_or(Error::EmptyContainer);
                assert_eq!(seq.pop_last(), expected, "pop_last");
            }
            Operation::Insert(i, v) => {
                let index = i % (model.len() + 1);
                let pos = seq.position(index).unwrap();
                seq.insert(pos, v).unwrap();
                model.insert(index, v);
            }
            Operation::Erase(i) => {
                if model.is_empty() {
                    let end = seq.end_position();
                    assert_eq!(seq.erase(end), Err(Error::EmptyContainer));
                } else {
                    let index = i % model.len();
                    let pos = seq.position(index).unwrap();
                    assert_eq!(seq.erase(pos).ok(), model.remove(index), "erase");
                }
            }
            Operation::EraseRange(a, b) => {
                let first = a % (model.len() + 1);
                let last = first + b % (model.len() - first + 1);
                let first_pos = seq.position(first).unwrap();
                let last_pos = seq.position(last).unwrap();
                seq.erase_range(first_pos, last_pos).unwrap();
                model.drain(first..last);
            }
            Operation::Clear => {
                seq.clear();
                model.clear();
            }
        }
        assert_eq!(seq.len(), model.len(), "length after {op:?}");
        assert!((&*seq).into_iter().eq(model.iter()), "contents after {op:?}");
    }
}

proptest! {
    #[test]
    fn test_vector_matches_vec_deque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut vec = Vector::new();
        replay(&mut vec, &ops);
        prop_assert!(vec.capacity() >= vec.len());
        prop_assert!(vec.capacity() >= 4);
    }

    #[test]
    fn test_linked_list_matches_vec_deque(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut list = LinkedList::new();
        replay(&mut list, &ops);
        let forward: Vec<i16> = list.iter().copied().collect();
        let mut backward: Vec<i16> = list.iter().rev().copied().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn test_vector_cursor_walk_visits_every_index(items in proptest::collection::vec(any::<u8>(), 0..64)) {
        let vec: Vector<u8> = items.iter().copied().collect();
        let mut it = vec.cbegin();
        let mut walked = Vec::new();
        while it != vec.cend() {
            walked.push(*it.get().unwrap());
            it.inc().unwrap();
        }
        prop_assert_eq!(&walked, &items);
        let len = isize::try_from(items.len()).unwrap();
        prop_assert_eq!((vec.cend() - len).unwrap(), vec.cbegin());
    }

    #[test]
    fn test_list_cursor_walk_visits_every_node(items in proptest::collection::vec(any::<u8>(), 0..64)) {
        let list: LinkedList<u8> = items.iter().copied().collect();
        let mut it = list.cend();
        let mut walked = Vec::new();
        while it != list.cbegin() {
            it.dec().unwrap();
            walked.push(*it.get().unwrap());
        }
        walked.reverse();
        prop_assert_eq!(&walked, &items);
        prop_assert!(it.dec().is_err());
    }
}
