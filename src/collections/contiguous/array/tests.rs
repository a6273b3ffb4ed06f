#![cfg(test)]

use std::borrow::Borrow;
use std::hash::{BuildHasher, RandomState};
use std::{iter, mem};

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_zst_support() {
    let mut arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(
        arr[0], ZeroSizedType,
        "Indexing with no offset should work."
    );
    assert_eq!(
        arr[4], ZeroSizedType,
        "Indexing with an in-bounds offset should work."
    );
    assert_eq!(
        arr.iter().as_slice().len(),
        5,
        "Should iterate over the right number of ZST instances."
    );

    let old_ptr = arr.ptr;

    let mut uninit = mem::take(&mut arr).forget_init();
    uninit.realloc(30);
    assert_eq!(
        uninit.ptr.cast::<ZeroSizedType>(),
        old_ptr,
        "Pointer shouldn't change when reallocated for a ZST."
    );
}

#[test]
fn test_from_iter_sized() {
    let arr = Array::from_iter_sized(0_usize..5);
    assert_eq!(arr.size(), 5);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    let empty: Array<usize> = Array::from_iter_sized(iter::empty());
    assert_eq!(empty.size(), 0, "An empty iterator should produce size 0.");

    struct LyingIter(usize);

    impl Iterator for LyingIter {
        type Item = usize;

        fn next(&mut self) -> Option<usize> {
            if self.0 == 0 { return None; }
            self.0 -= 1;
            Some(self.0)
        }

        fn size_hint(&self) -> (usize, Option<usize>) {
            (self.0 + 2, Some(self.0 + 2))
        }
    }

    impl ExactSizeIterator for LyingIter {}

    assert_panics!(
        {
            let _ = Array::from_iter_sized(LyingIter(3));
        },
        "An iterator which under-delivers should be caught."
    );
}

#[test]
fn test_repeat_constructors() {
    let arr = Array::repeat_item(7_u8, 4);
    assert_eq!(&*arr, &[7, 7, 7, 7]);

    let arr = Array::<usize>::repeat_default(3);
    assert_eq!(&*arr, &[0, 0, 0]);

    let arr = Array::<usize>::repeat_default(0);
    assert_eq!(arr.size(), 0, "Zero-count repetition should allocate nothing.");
}

#[test]
fn test_realloc() {
    let mut arr = Array::from_iter_sized(0_usize..5).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(
        arr.ptr, old_ptr,
        "When reallocating to the same size, the pointer shouldn't change."
    );

    arr.realloc(0);
    assert_ne!(
        arr.ptr, old_ptr,
        "Pointer should be replaced with a dangling one for 0 size."
    );

    let old_ptr = arr.ptr;
    arr.realloc(10);
    assert_ne!(
        arr.ptr, old_ptr,
        "Pointer should be replaced with an allocated one."
    );

    for i in 0..10 {
        arr[i].write(i);
    }

    // SAFETY: All 10 slots were just written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);

    assert_panics!({
        let mut arr = Array::<u8>::new_uninit(5);
        arr.realloc(isize::MAX as usize + 1)
    });
    assert_panics!(
        {
            let mut arr = Array::<u64>::new_uninit(2);
            arr.realloc(usize::MAX / 2);
        },
        "A byte size whose multiply wraps should still be caught."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::from_iter_sized(iter::repeat_with(|| counter.clone()).take(10));

    drop(arr);

    assert_eq!(counter.take(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_clone() {
    let counter = CountedDrop::new(0);
    let arr = Array::from_iter_sized(iter::repeat_with(|| counter.clone()).take(4));
    let cloned = arr.clone();

    assert_eq!(counter.take(), 0, "Cloning shouldn't drop anything.");

    drop(arr);
    drop(cloned);
    assert_eq!(
        counter.take(),
        8,
        "Each copy should own and drop its own elements."
    );
}

#[test]
fn test_equality_and_hash() {
    let arr = Array::from_iter_sized(0_usize..5);

    assert_eq!(
        arr,
        Array::from_iter_sized([0, 1, 2, 3, 4].into_iter()),
        "Different construction methods should produce equal results."
    );
    assert_ne!(
        Array::from_iter_sized([0, 1, 2, 5, 4].into_iter()),
        Array::from_iter_sized(0..5)
    );

    assert_eq!(
        &arr.borrow(),
        &[0, 1, 2, 3, 4],
        "Borrow equality should be upheld."
    );
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");

    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one(Array::from_iter_sized(0_usize..5)),
        "Equal arrays should produce the same hash."
    );
    assert_eq!(
        state.hash_one(&arr),
        state.hash_one([0_usize, 1, 2, 3, 4]),
        "Borrow hash equality should be upheld."
    );
}

#[test]
fn test_iterators() {
    let mut arr = Array::from_iter_sized(0_usize..5);
    let collected = Array::from_iter_sized(arr.iter().cloned());
    assert_eq!(arr, collected, "Collected iter should be equal.");

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(
        *arr,
        [0_usize, 2, 4, 6, 8],
        "Array mutated by iterator should equal this slice."
    );

    assert_eq!(
        arr,
        Array::from_iter_sized(arr.clone().into_iter()),
        "Cloned and collected array should be equal."
    );

    let mut iter = arr.into_iter();
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.len(), 1, "Two items taken from each end leaves one.");
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = Array::from_iter_sized(iter::repeat_with(|| counter.clone()).take(10));

    let mut iter = arr.into_iter();
    let _ = iter.next();
    let _ = iter.next();
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Consumed and remaining elements should all be dropped exactly once."
    );
}

#[test]
fn test_format() {
    let arr = Array::from_iter_sized(1_u8..=3);
    assert_eq!(format!("{arr}"), "![1, 2, 3]");
}
