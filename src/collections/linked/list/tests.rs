#![cfg(test)]

use std::cmp::Ordering;
use std::hash::{BuildHasher, RandomState};
use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

#[test]
fn test_push_pop() {
    let mut list = LinkedList::new();
    assert_eq!(list.pop_front(), None);
    assert_eq!(list.pop_back(), None);

    list.push_back(2);
    list.push_back(3);
    list.push_front(1);
    list.verify_double_links();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), None);
    assert!(list.is_empty());
}

#[test]
fn test_accessor_mutation() {
    let mut list: LinkedList<_> = [1, 2, 3].into_iter().collect();

    *list.front_mut().unwrap() = 10;
    *list.back_mut().unwrap() = 30;
    *list.get_mut(1) = 20;

    assert_eq!(list, [10, 20, 30].into_iter().collect());
}

#[test]
fn test_get_and_index() {
    let list: LinkedList<_> = (0..10).collect();

    assert_eq!(list.get(0), &0);
    assert_eq!(list.get(9), &9, "Back-half indices should seek from the tail.");
    assert_eq!(list[5], 5);

    assert!(list.try_get(10).is_err());
    assert_panics!(
        {
            let list: LinkedList<u8> = LinkedList::new();
            let _ = list[0];
        },
        "Indexing an empty list should panic."
    );
}

#[test]
fn test_insert_remove() {
    let mut list: LinkedList<_> = [1, 3].into_iter().collect();

    list.insert(0, 0);
    list.verify_double_links();
    list.insert(2, 2);
    list.verify_double_links();
    list.insert(4, 4);
    list.verify_double_links();
    assert_eq!(list, [0, 1, 2, 3, 4].into_iter().collect());

    assert_eq!(list.remove(2), 2, "Interior removal should relink neighbours.");
    list.verify_double_links();
    assert_eq!(list.remove(0), 0);
    assert_eq!(list.remove(2), 4, "The last index should be removed via the tail.");
    list.verify_double_links();
    assert_eq!(list, [1, 3].into_iter().collect());

    assert!(list.try_insert(3, 9).is_err());
    assert!(list.try_remove(2).is_err());
    assert_eq!(list.try_replace(1, 30).unwrap(), 3);
    assert_eq!(list.back(), Some(&30));
}

#[test]
fn test_find_contains_remove_item() {
    let mut list: LinkedList<_> = [10, 20, 30, 20].into_iter().collect();

    assert_eq!(list.find(&20), Some(1), "Find should return the first match.");
    assert_eq!(list.find(&40), None);
    assert!(list.contains(&30));
    assert!(!list.contains(&40));

    assert_eq!(list.remove_item(&20), Some(20));
    assert_eq!(list, [10, 30, 20].into_iter().collect());
    assert_eq!(list.remove_item(&40), None);
}

#[test]
fn test_splice() {
    let mut list1: LinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();
    let mut list2: LinkedList<_> = [10, 20, 30, 40, 50].into_iter().collect();

    list1.splice(2, &mut list2);
    list1.verify_double_links();
    assert_eq!(
        list1,
        [1, 2, 10, 20, 30, 40, 50, 3, 4, 5].into_iter().collect(),
        "Spliced nodes should sit before the named position."
    );
    assert!(list2.is_empty(), "Splicing should leave the source empty.");

    // Splices at the ends and of empty lists.
    let mut front: LinkedList<_> = [-2, -1].into_iter().collect();
    list1.splice(0, &mut front);
    assert_eq!(list1.front(), Some(&-2));

    let len = list1.len();
    let mut back: LinkedList<_> = [99].into_iter().collect();
    list1.splice(len, &mut back);
    assert_eq!(list1.back(), Some(&99));
    list1.verify_double_links();

    let mut empty = LinkedList::new();
    list1.splice(3, &mut empty);
    assert_eq!(list1.len(), 13, "Splicing an empty list should do nothing.");

    assert_panics!(
        {
            let mut list: LinkedList<u8> = LinkedList::new();
            let mut other: LinkedList<u8> = [1].into_iter().collect();
            list.splice(1, &mut other);
        },
        "A splice position past the length should panic."
    );
}

#[test]
fn test_splice_range() {
    let mut list1: LinkedList<_> = (1..=5).collect();
    let mut list2: LinkedList<_> = [10, 20, 30, 40, 50].into_iter().collect();

    list1.splice_range(2, &mut list2, 1..4);
    list1.verify_double_links();
    list2.verify_double_links();
    assert_eq!(list1, [1, 2, 20, 30, 40, 3, 4, 5].into_iter().collect());
    assert_eq!(
        list2,
        [10, 50].into_iter().collect(),
        "The source should retain the nodes outside the range."
    );

    list1.splice_range(0, &mut list2, 0..2);
    assert_eq!(list1.front(), Some(&10));
    assert!(list2.is_empty());

    let mut other: LinkedList<_> = [7, 8].into_iter().collect();
    list1.splice_range(1, &mut other, 1..1);
    assert_eq!(other.len(), 2, "An empty range should move nothing.");

    assert_panics!(
        {
            let mut list: LinkedList<u8> = [1].into_iter().collect();
            let mut other: LinkedList<u8> = [2].into_iter().collect();
            list.splice_range(0, &mut other, 1..0);
        },
        "A decreasing range should panic."
    );
}

#[test]
fn test_append() {
    let mut list: LinkedList<_> = [1, 2].into_iter().collect();
    list.append([3, 4].into_iter().collect());
    assert_eq!(list, [1, 2, 3, 4].into_iter().collect());

    list.append(LinkedList::new());
    assert_eq!(list.len(), 4);

    let mut empty = LinkedList::new();
    empty.append([9].into_iter().collect());
    assert_eq!(empty.len(), 1);
}

#[test]
fn test_erase_range() {
    let counter = CountedDrop::new(0);
    let mut list: LinkedList<_> =
        iter::repeat_with(|| counter.clone()).take(10).collect();

    list.erase_range(3..7);
    list.verify_double_links();
    assert_eq!(list.len(), 6);
    assert_eq!(
        counter.take(),
        4,
        "Exactly the erased elements should be dropped."
    );

    list.erase_range(2..2);
    assert_eq!(list.len(), 6, "An empty range should erase nothing.");

    list.erase_range(0..6);
    assert!(list.is_empty(), "Erasing the full range should empty the list.");
    assert_eq!(counter.take(), 6);

    assert_panics!(
        {
            let mut list: LinkedList<u8> = [1, 2].into_iter().collect();
            list.erase_range(1..3);
        },
        "A range ending past the length should panic."
    );
}

#[test]
fn test_split_off() {
    let mut list: LinkedList<_> = (0..6).collect();

    let back = list.split_off(4);
    list.verify_double_links();
    back.verify_double_links();
    assert_eq!(list, (0..4).collect());
    assert_eq!(back, (4..6).collect());

    let all = list.split_off(0);
    assert!(list.is_empty());
    assert_eq!(all.len(), 4);

    let mut list: LinkedList<_> = (0..3).collect();
    let none = list.split_off(3);
    assert!(none.is_empty(), "Splitting at the length should return an empty list.");
}

#[derive(Debug, PartialEq, Eq)]
struct KeyOrder(u32, u32);

impl PartialOrd for KeyOrder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for KeyOrder {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

#[test]
fn test_sort() {
    let mut list: LinkedList<_> = [9, 3, 1, 7, 5, 3, 8].into_iter().collect();
    list.sort();
    list.verify_double_links();
    assert_eq!(list, [1, 3, 3, 5, 7, 8, 9].into_iter().collect());

    let mut empty: LinkedList<u8> = LinkedList::new();
    empty.sort();
    assert!(empty.is_empty());

    // Equal keys keep their original relative order.
    let mut list: LinkedList<_> = [
        KeyOrder(2, 0),
        KeyOrder(1, 0),
        KeyOrder(2, 1),
        KeyOrder(1, 1),
        KeyOrder(2, 2),
    ].into_iter().collect();
    list.sort();
    assert_eq!(
        list,
        [
            KeyOrder(1, 0),
            KeyOrder(1, 1),
            KeyOrder(2, 0),
            KeyOrder(2, 1),
            KeyOrder(2, 2),
        ].into_iter().collect(),
        "Sorting should be stable."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);
    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");

    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = list.into_iter();
    let _ = iter.next();
    let _ = iter.next_back();
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Consumed and remaining elements should all be dropped exactly once."
    );
}

#[test]
fn test_clone() {
    let counter = CountedDrop::new(0);
    let list: LinkedList<_> = iter::repeat_with(|| counter.clone()).take(4).collect();
    let cloned = list.clone();

    assert_eq!(cloned.len(), 4);
    drop(list);
    drop(cloned);
    assert_eq!(
        counter.take(),
        8,
        "Each copy should own and drop its own elements."
    );
}

#[test]
fn test_iterators() {
    let mut list: LinkedList<_> = (0_usize..5).collect();

    assert_eq!(list.iter().sum::<usize>(), 10);

    for i in list.iter_mut() {
        *i *= 2;
    }
    assert_eq!(list, [0, 2, 4, 6, 8].into_iter().collect());

    let mut iter = list.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(4));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_equality_and_hash() {
    let a: LinkedList<_> = (0..5).collect();
    let b: LinkedList<_> = (0..5).collect();
    let c: LinkedList<_> = (0..4).collect();

    assert_eq!(a, b);
    assert_ne!(a, c, "Lists of different lengths shouldn't be equal.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&a),
        state.hash_one(&b),
        "Equal lists should produce the same hash."
    );
}

#[test]
fn test_format() {
    let list: LinkedList<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{list}"), "(1) -> (2) -> (3)");
}
