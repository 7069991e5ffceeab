use seqkit::collections::vec::{GROWTH_FACTOR, MIN_CAPACITY};
use seqkit::{vector, Error, Vector};

#[test]
fn test_vector_growth_doubles_from_four() {
    let mut v = Vector::new();
    assert_eq!(v.capacity(), MIN_CAPACITY);
    for i in 0..MIN_CAPACITY {
        v.append(i);
    }
    assert_eq!(v.capacity(), MIN_CAPACITY);
    v.append(MIN_CAPACITY);
    assert_eq!(v.capacity(), MIN_CAPACITY * GROWTH_FACTOR);
    for i in v.len()..17 {
        v.append(i);
    }
    assert_eq!(v.capacity(), 32);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), (0..17).collect::<Vec<_>>());
}

#[test]
fn test_vector_prepend_through_growth() {
    let mut v = Vector::new();
    for i in 0..10 {
        v.prepend(i);
    }
    assert_eq!(v.len(), 10);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), (0..10).rev().collect::<Vec<_>>());
}

#[test]
fn test_vector_insert_at_full_capacity_shifts_once() {
    let mut v = vector![1, 2, 4, 5];
    assert_eq!(v.capacity(), 4);
    let pos = v.position(2).unwrap();
    v.insert(pos, 3).unwrap();
    assert_eq!(v.capacity(), 8);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_const_cursor_walk() {
    let v = vector![10, 20, 30];
    let mut it = v.cbegin();
    let mut seen = Vec::new();
    while it != v.cend() {
        seen.push(*it.get().unwrap());
        it.inc().unwrap();
    }
    assert_eq!(seen, vec![10, 20, 30]);
    assert_eq!(it.get(), Err(Error::InvalidIterator));
    assert_eq!(it.inc().map(|_| ()), Err(Error::InvalidIterator));
}

#[test]
fn test_const_cursor_postfix_returns_prior_state() {
    let v = vector![1, 2, 3];
    let mut it = v.cbegin();
    let before = it.post_inc().unwrap();
    assert_eq!(*before.get().unwrap(), 1);
    assert_eq!(*it.get().unwrap(), 2);
    let before = it.post_dec().unwrap();
    assert_eq!(*before.get().unwrap(), 2);
    assert_eq!(it, v.cbegin());
    assert_eq!(it.post_dec().map(|_| ()), Err(Error::InvalidIterator));
}

#[test]
fn test_const_cursor_arithmetic_bounds() {
    let v = vector![1, 2, 3, 4];
    let begin = v.cbegin();
    assert_eq!(*(begin + 2).unwrap().get().unwrap(), 3);
    assert_eq!((begin + 4).unwrap(), v.cend());
    assert!((begin + 5).is_err());
    assert!((begin - 1).is_err());
    assert_eq!(*(v.cend() - 1).unwrap().get().unwrap(), 4);
    assert_eq!((v.cend() - 4).unwrap(), begin);
    assert!((begin - isize::MIN).is_err());
}

#[test]
fn test_empty_vector_cursors() {
    let mut v: Vector<i32> = Vector::new();
    assert_eq!(v.cbegin(), v.cend());
    assert_eq!(v.cbegin().get(), Err(Error::InvalidIterator));
    assert!(v.begin().get().is_err());
    assert_eq!(v.begin().inc().map(|_| ()), Err(Error::InvalidIterator));
    assert_eq!(v.end().dec().map(|_| ()), Err(Error::InvalidIterator));
}

#[test]
fn test_cursor_mut_writes_through() {
    let mut v = vector![1, 2, 3];
    let mut it = v.begin();
    while it.get().is_ok() {
        *it.get_mut().unwrap() *= 100;
        it.inc().unwrap();
    }
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![100, 200, 300]);
}

#[test]
fn test_cursor_mut_edit_in_place() {
    let mut v = vector![1, 2, 3, 4, 5, 6];
    let mut it = v.begin();
    while it.get().is_ok() {
        if *it.get().unwrap() % 2 == 0 {
            it.remove_current().unwrap();
        } else {
            it.inc().unwrap();
        }
    }
    let mut it = v.begin();
    it.inc().unwrap();
    it.insert_before(2).unwrap();
    assert_eq!(*it.get().unwrap(), 3);
    assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 5]);
}

#[test]
fn test_mut_cursor_arithmetic_consumes() {
    let mut v = vector!['a', 'b', 'c'];
    let it = (v.begin() + 2).unwrap();
    assert_eq!(it.get(), Ok(&'c'));
    let it = (it - 2).unwrap();
    assert_eq!(it.index(), 0);
    assert!((v.end() + 1).is_err());
}

#[test]
fn test_positions_survive_moves_not_clones() {
    let v = vector![1, 2, 3];
    let pos = v.position(1).unwrap();
    let mut moved = v;
    assert_eq!(moved.erase(pos), Ok(2));

    let copy = moved.clone();
    let pos = moved.position(0).unwrap();
    let mut copy = copy;
    assert_eq!(copy.erase(pos), Err(Error::InvalidIterator));
    assert!(copy.cursor(pos).is_err());
}

#[test]
fn test_take_leaves_empty_vector() {
    let mut v = vector![1, 2, 3, 4, 5];
    let taken = std::mem::take(&mut v);
    assert_eq!(taken.len(), 5);
    assert!(v.is_empty());
    assert_eq!(v.capacity(), MIN_CAPACITY);
    assert_eq!(v.pop_last(), Err(Error::EmptyContainer));
}

#[test]
fn test_clone_is_independent() {
    let mut a = vector![1, 2, 3, 4, 5];
    let b = a.clone();
    a.append(6);
    a[0] = 0;
    assert_eq!(b.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(b.capacity(), 8);
    assert_ne!(a, b);
}

#[test]
fn test_erase_range_full_and_empty() {
    let mut v = vector![1, 2, 3];
    let first = v.position(0).unwrap();
    let last = v.position(3).unwrap();
    v.erase_range(first, last).unwrap();
    assert!(v.is_empty());

    let end = v.position(0).unwrap();
    assert_eq!(v.erase_range(end, end), Ok(()));
    assert!(v.position(1).is_err());
}

#[test]
fn test_std_interop() {
    let v: Vector<u32> = (1..=4).collect();
    assert_eq!(v.iter().sum::<u32>(), 10);
    assert_eq!(v.first(), Some(&1));
    assert_eq!(v.last(), Some(&4));
    assert_eq!(v[2], 3);
    assert_eq!(v.get(4), None);
    assert_eq!(format!("{v:?}"), "[1, 2, 3, 4]");

    let mut w = Vector::from(vec![9u32]);
    w.extend(v.clone());
    assert_eq!(w.len(), 5);
    assert_eq!(w.into_iter().rev().collect::<Vec<_>>(), vec![4, 3, 2, 1, 9]);
}

#[test]
fn test_shrink_to_fit_keeps_floor() {
    let mut v: Vector<i32> = Vector::with_capacity(64);
    assert_eq!(v.capacity(), 64);
    v.append(1);
    v.shrink_to_fit();
    assert_eq!(v.capacity(), MIN_CAPACITY);
    assert_eq!(v.first(), Some(&1));
}
