use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut, Range};

use derive_more::IsVariant;

use super::{Iter, IterMut, Length, Link, Node, NodePtr, ONE};
use crate::collections::contiguous::Vector;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidRange};
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

/// A list with links in both directions, owning one heap node per element.
///
/// Node identity is stable: [`splice`](LinkedList::splice) and [`sort`](LinkedList::sort) relink
/// nodes without moving or copying the elements inside them, and erasing one node never touches
/// the others. That per-node independence is the property that distinguishes this type from
/// [`Vector`], where any removal shifts every following element.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
/// - `k`: The number of items in the range in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front/back` | `O(1)` |
/// | `push_front/back` | `O(1)` |
/// | `pop_front/back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `erase_range` | `O(i + k)` |
/// | `splice` | `O(min(i, n-i))`* |
/// | `splice_range` | `O(min(i, n-i) + k)`* |
/// | `append` | `O(1)` |
/// | `sort` | `O(n log n)` |
/// | `find` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// \* The relinking itself is `O(1)` and never copies, clones or reallocates an element; the cost
/// is purely the seek to the named position.
///
/// As a general note, modern computer architecture isn't kind to linked lists, (or more
/// importantly, favours contiguous collections) because all `O(i)` or `O(n)` operations will
/// consist primarily of cache misses. For this reason, [`Vector`] should be preferred for most
/// applications unless the `O(1)` relinking methods are being heavily utilized.
#[derive(PartialEq, Eq, Hash)]
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default, PartialEq, Eq, Hash, IsVariant)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

/// A detached run of linked nodes, produced by unlinking a range from one list and consumed by
/// relinking it into another (or by dropping every node).
pub(crate) struct Chain<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

impl<T> LinkedList<T> {
    /// Creates a new LinkedList with no elements.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the LinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the LinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn front(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a mutable reference to the first element in the list, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value_mut()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn back(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Returns a mutable reference to the last element in the list, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value_mut()),
        }
    }

    /// Add the provided element to the front of the LinkedList.
    pub fn push_front(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_front(value),
        }
    }

    /// Add the provided element to the back of the LinkedList.
    pub fn push_back(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let node = self.unlink_front()?;
        // SAFETY: The node has just been unlinked, so this handle is its only owner.
        let node = unsafe { node.take_node() };
        Some(node.value)
    }

    /// Removes the last element from the list and returns it, if the list isn't empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let node = self.unlink_back()?;
        // SAFETY: The node has just been unlinked, so this handle is its only owner.
        let node = unsafe { node.take_node() };
        Some(node.value)
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at the provided `index`, returning an [`Err`] on
    /// a failure rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts the provided value before the element at `index`. Inserting at `len` is equivalent
    /// to [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the LinkedList.
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// The non-panicking version of [`insert`](LinkedList::insert).
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == self.len() {
            self.push_back(value);
            return Ok(());
        }

        // Past the front and back cases, index must name an existing node.
        let contents = self.checked_contents_for_index_mut(index)?;
        let next_node = contents.seek(index);
        // SAFETY: index > 0, so the node at index has a predecessor.
        let prev_node = unsafe { (*next_node.prev()).unreachable() };

        contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(prev_node),
            next: Some(next_node),
        });

        *prev_node.next_mut() = Some(node);
        *next_node.prev_mut() = Some(node);

        Ok(())
    }

    /// Removes and returns the element at `index`, relinking its neighbours.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// The non-panicking version of [`remove`](LinkedList::remove).
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;

        if index == 0 {
            // SAFETY: contents is already checked to be valid for the provided index.
            return Ok(unsafe { self.pop_front().unreachable() });
        }
        if index == contents.last_index() {
            // SAFETY: contents is already checked to be valid for the provided index.
            return Ok(unsafe { self.pop_back().unreachable() });
        }

        // SAFETY: The node at index is about to be unlinked below, making this its only owner.
        let node = unsafe { contents.seek(index).take_node() };

        // SAFETY: For this branch the node is interior, so both prev and next are defined. Head
        // and tail versions are handled by the pop front / back branches.
        unsafe {
            *node.prev.unwrap_unchecked().next_mut() = node.next;
            *node.next.unwrap_unchecked().prev_mut() = node.prev;
        }
        // SAFETY: If the length was 1, index would have matched one of the previous branches.
        contents.len = unsafe { contents.len.checked_sub(1).unreachable() };

        Ok(node.value)
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value. The
    /// node itself is reused.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the LinkedList.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    /// The non-panicking version of [`replace`](LinkedList::replace).
    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(
            self.checked_seek(index)?.value_mut(),
            new_value,
        ))
    }

    /// Removes the half-open range `range` of elements, dropping each one. Nodes outside the range
    /// are never touched, so positions below `range.start` keep their meaning.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends beyond the length of the LinkedList.
    pub fn erase_range(&mut self, range: Range<usize>) {
        self.check_range(&range);

        if let Some(chain) = self.unlink_range(range) {
            chain.drop_nodes();
        }
    }

    /// Splits the list in two, returning a new list containing every element from `at` onwards.
    /// `O(min(at, n-at))`; no element is copied or moved.
    ///
    /// # Panics
    /// Panics if `at` is greater than the length of the LinkedList.
    pub fn split_off(&mut self, at: usize) -> LinkedList<T> {
        let len = self.len();
        self.check_range(&(at..len));

        match self.unlink_range(at..len) {
            Some(chain) => chain.into_list(),
            None => LinkedList::new(),
        }
    }

    /// Moves every node of `other` into self before position `index`, preserving their relative
    /// order and leaving `other` empty. The relink is `O(1)` after the seek — no element is
    /// copied, cloned or reallocated, so references into `other`'s elements remain valid and now
    /// point into self.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of self.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::LinkedList;
    /// let mut list1: LinkedList<_> = [1, 2, 3, 4, 5].into_iter().collect();
    /// let mut list2: LinkedList<_> = [10, 20, 30, 40, 50].into_iter().collect();
    /// list1.splice(2, &mut list2);
    /// assert_eq!(list1, [1, 2, 10, 20, 30, 40, 50, 3, 4, 5].into_iter().collect());
    /// assert!(list2.is_empty());
    /// ```
    pub fn splice(&mut self, index: usize, other: &mut LinkedList<T>) {
        self.check_splice_index(index);

        match mem::take(&mut other.state) {
            Empty => {},
            Full(contents) => self.link_chain_at(index, Chain {
                len: contents.len,
                head: contents.head,
                tail: contents.tail,
            }),
        }
    }

    /// Moves only the half-open `range` of `other`'s nodes into self before position `index`.
    /// `other` retains its remaining nodes in their original relative order.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of self, or if the range is decreasing or ends
    /// beyond the length of `other`.
    pub fn splice_range(
        &mut self,
        index: usize,
        other: &mut LinkedList<T>,
        range: Range<usize>,
    ) {
        self.check_splice_index(index);
        other.check_range(&range);

        if let Some(chain) = other.unlink_range(range) {
            self.link_chain_at(index, chain);
        }
    }

    /// Appends all elements from `other` to the back of self in `O(1)`, consuming `other`.
    ///
    /// # Panics
    /// Panics if the combined length overflows [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let len = self.len();
        self.splice(len, &mut other);
    }

    /// Returns an iterator over the elements of the list, as mutable references.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements of the list, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: Ord> LinkedList<T> {
    /// Sorts the list with a stable merge sort that relinks nodes rather than moving elements.
    /// Equal elements keep their relative order, and no element is copied or reallocated.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = [3, 1, 2, 1].into_iter().collect();
    /// list.sort();
    /// assert_eq!(list, [1, 1, 2, 3].into_iter().collect());
    /// ```
    pub fn sort(&mut self) {
        let len = self.len();
        if len < 2 { return; }

        let mut back = self.split_off(len / 2);
        self.sort();
        back.sort();

        let mut merged = LinkedList::new();
        loop {
            // Ties take from the front half, which is what makes the sort stable.
            let take_back = match (self.front(), back.front()) {
                (Some(a), Some(b)) => b < a,
                (Some(_), None) => false,
                (None, Some(_)) => true,
                (None, None) => break,
            };

            let node = if take_back {
                back.unlink_front()
            } else {
                self.unlink_front()
            };
            // SAFETY: The side chosen has just reported a front element.
            merged.link_back(unsafe { node.unreachable() });
        }

        *self = merged;
    }
}

impl<T: Eq> LinkedList<T> {
    /// Returns the position of the first element equal to `item`, scanning from the front, or
    /// [`None`] if no element matches.
    pub fn find(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    /// Erases the first element equal to `item`, returning it if one was found. Other nodes are
    /// untouched.
    pub fn remove_item(&mut self, item: &T) -> Option<T> {
        let index = self.find(item)?;
        Some(self.remove(index))
    }

    /// Returns true if any element of the list is equal to `item`.
    pub fn contains(&self, item: &T) -> bool {
        self.find(item).is_some()
    }
}

impl<T> LinkedList<T> {
    /// Unlinks the head node and returns it without freeing it, or [`None`] if the list is empty.
    /// The returned node's links are cleared.
    pub(crate) fn unlink_front(&mut self) -> Option<NodePtr<T>> {
        match mem::take(&mut self.state) {
            Empty => None,
            Full(contents) => {
                let node = contents.head;

                if let Some(new_len) = contents.len.checked_sub(1) {
                    // SAFETY: Previous length is greater than 1, so the head is followed by at
                    // least one more node.
                    let new_head = unsafe { (*node.next()).unreachable() };
                    *new_head.prev_mut() = None;
                    self.state = Full(ListContents {
                        len: new_len,
                        head: new_head,
                        tail: contents.tail,
                    });
                }

                *node.next_mut() = None;
                Some(node)
            },
        }
    }

    /// Unlinks the tail node and returns it without freeing it, or [`None`] if the list is empty.
    /// The returned node's links are cleared.
    pub(crate) fn unlink_back(&mut self) -> Option<NodePtr<T>> {
        match mem::take(&mut self.state) {
            Empty => None,
            Full(contents) => {
                let node = contents.tail;

                if let Some(new_len) = contents.len.checked_sub(1) {
                    // SAFETY: Previous length is greater than 1, so the tail is preceded by at
                    // least one more node.
                    let new_tail = unsafe { (*node.prev()).unreachable() };
                    *new_tail.next_mut() = None;
                    self.state = Full(ListContents {
                        len: new_len,
                        head: contents.head,
                        tail: new_tail,
                    });
                }

                *node.prev_mut() = None;
                Some(node)
            },
        }
    }

    /// Links an already-detached node (links cleared) to the back of the list.
    ///
    /// # Panics
    /// Panics if the length overflows [`usize`].
    pub(crate) fn link_back(&mut self, node: NodePtr<T>) {
        match &mut self.state {
            Empty => self.state = Full(ListContents {
                len: ONE,
                head: node,
                tail: node,
            }),
            Full(contents) => {
                contents.len = contents.len.checked_add(1).ok_or(CapacityOverflow).throw();
                *node.prev_mut() = Some(contents.tail);
                *contents.tail.next_mut() = Some(node);
                contents.tail = node;
            },
        }
    }

    /// Unlinks the nodes in `range` (already validated) from self and returns them as a detached
    /// chain, or [`None`] for an empty range. Remaining nodes are relinked around the gap.
    pub(crate) fn unlink_range(&mut self, range: Range<usize>) -> Option<Chain<T>> {
        let count = range.end - range.start;
        if count == 0 { return None; }

        let contents = match mem::take(&mut self.state) {
            // The caller has checked the range against len, so a non-empty range means a
            // non-empty list.
            Empty => return None,
            Full(contents) => contents,
        };

        let first = contents.seek(range.start);
        let last = contents.seek_fwd(count - 1, first);

        let before: Link<T> = *first.prev();
        let after: Link<T> = *last.next();
        *first.prev_mut() = None;
        *last.next_mut() = None;

        match (before, after) {
            (None, None) => {
                // The whole list was unlinked; state remains Empty.
            },
            (None, Some(after)) => {
                *after.prev_mut() = None;
                self.state = Full(ListContents {
                    // SAFETY: Nodes remain after the range, so the new length is non-zero.
                    len: unsafe { contents.len.checked_sub(count).unreachable() },
                    head: after,
                    tail: contents.tail,
                });
            },
            (Some(before), None) => {
                *before.next_mut() = None;
                self.state = Full(ListContents {
                    // SAFETY: Nodes remain before the range, so the new length is non-zero.
                    len: unsafe { contents.len.checked_sub(count).unreachable() },
                    head: contents.head,
                    tail: before,
                });
            },
            (Some(before), Some(after)) => {
                *before.next_mut() = Some(after);
                *after.prev_mut() = Some(before);
                self.state = Full(ListContents {
                    // SAFETY: Nodes remain on both sides of the range.
                    len: unsafe { contents.len.checked_sub(count).unreachable() },
                    head: contents.head,
                    tail: contents.tail,
                });
            },
        }

        Some(Chain {
            // SAFETY: count is non-zero, guarded at the top of the method.
            len: unsafe { Length::new(count).unreachable() },
            head: first,
            tail: last,
        })
    }

    /// Links a detached chain into self before position `index` (already validated; `index == len`
    /// appends). `O(1)` beyond the seek.
    ///
    /// # Panics
    /// Panics if the combined length overflows [`usize`].
    pub(crate) fn link_chain_at(&mut self, index: usize, chain: Chain<T>) {
        match &mut self.state {
            Empty => {
                self.state = Full(ListContents {
                    len: chain.len,
                    head: chain.head,
                    tail: chain.tail,
                });
            },
            Full(contents) => {
                // Seek before the length changes, as seek uses it to pick a direction.
                let at = if 0 < index && index < contents.len.get() {
                    Some(contents.seek(index))
                } else {
                    None
                };

                contents.len = contents.len
                    .checked_add(chain.len.get())
                    .ok_or(CapacityOverflow).throw();

                match at {
                    None if index == 0 => {
                        *chain.tail.next_mut() = Some(contents.head);
                        *contents.head.prev_mut() = Some(chain.tail);
                        contents.head = chain.head;
                    },
                    None => {
                        *contents.tail.next_mut() = Some(chain.head);
                        *chain.head.prev_mut() = Some(contents.tail);
                        contents.tail = chain.tail;
                    },
                    Some(at) => {
                        // SAFETY: 0 < index < len, so the node at index has a predecessor.
                        let before = unsafe { (*at.prev()).unreachable() };

                        *before.next_mut() = Some(chain.head);
                        *chain.head.prev_mut() = Some(before);
                        *chain.tail.next_mut() = Some(at);
                        *at.prev_mut() = Some(chain.tail);
                    },
                }
            },
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index))
    }

    pub(crate) fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    /// Checks a half-open range against the length of self.
    ///
    /// # Panics
    /// Panics if the range is decreasing or ends beyond the length.
    pub(crate) fn check_range(&self, range: &Range<usize>) {
        let len = self.len();
        if range.start > range.end || range.end > len {
            Err(InvalidRange {
                start: range.start,
                end: range.end,
                len,
            }).throw()
        }
    }

    /// Checks a splice position, which may equal the length (meaning "before the end sentinel").
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub(crate) fn check_splice_index(&self, index: usize) {
        let len = self.len();
        if index > len {
            Err(IndexOutOfBounds { index, len }).throw()
        }
    }

    #[allow(clippy::unwrap_used)]
    #[allow(unused)]
    pub(crate) fn verify_double_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, tail, .. }) => {
                let mut curr = *head;
                while let Some(next) = *curr.next() {
                    // UNWRAP: This needs to panic if prev is None.
                    assert!(next.prev().unwrap() == curr);
                    curr = next;
                }
                assert!(*tail == curr);
            },
        }
    }
}

impl<T> Chain<T> {
    /// Wraps the chain in a fresh list.
    pub(crate) fn into_list(self) -> LinkedList<T> {
        LinkedList {
            state: Full(ListContents {
                len: self.len,
                head: self.head,
                tail: self.tail,
            }),
            _phantom: PhantomData,
        }
    }

    /// Drops every node in the chain along with its element.
    pub(crate) fn drop_nodes(self) {
        let mut curr = Some(self.head);
        while let Some(ptr) = curr {
            curr = *ptr.next();
            // SAFETY: Each node in a detached chain is owned exclusively by the chain and visited
            // exactly once.
            unsafe { ptr.drop_node(); }
        }
    }
}

impl<T> ListContents<T> {
    pub fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index, self.head)
        } else {
            self.seek_bwd(self.last_index() - index, self.tail)
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_fwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // UNWRAP: The caller only seeks within the bounds of the list.
            node = node.next().unwrap();
        }
        node
    }

    #[allow(clippy::unwrap_used)]
    pub fn seek_bwd(&self, count: usize, mut node: NodePtr<T>) -> NodePtr<T> {
        for _ in 0..count {
            // UNWRAP: The caller only seeks within the bounds of the list.
            node = node.prev().unwrap();
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: Some(self.head),
        });

        *self.head.prev_mut() = Some(node);
        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::from_node(Node {
            value,
            prev: Some(self.tail),
            next: None,
        });

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodePtr::from_node(Node {
            value,
            prev: None,
            next: None,
        });

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        match &self.state {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(*head);
                while let Some(ptr) = curr {
                    curr = *ptr.next();
                    // SAFETY: Drop holds the only access to the list, and each node is visited
                    // exactly once.
                    unsafe { ptr.drop_node(); }
                }
            },
        }
    }
}

impl<T: PartialEq> PartialEq for ListContents<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len { return false; }
        let mut node_a = self.head;
        let mut node_b = other.head;

        loop {
            if node_a.value() != node_b.value() {
                break false;
            }
            match (node_a.next(), node_b.next()) {
                (Some(next_a), Some(next_b)) => {
                    node_a = *next_a;
                    node_b = *next_b;
                },
                // Both sides have the same length, so if they aren't both Some, they are both
                // None. It feels a little neater to do a catchall here than using
                // unreachable_unchecked.
                _ => break true,
            }
        }
    }
}

impl<T: Eq> Eq for ListContents<T> {}

impl<T: std::hash::Hash> std::hash::Hash for ListContents<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        let mut node = self.head;

        loop {
            node.value().hash(state);
            match node.next() {
                Some(next) => {
                    node = *next;
                },
                _ => break,
            }
        }

        // Terminate variable length hashing sequence.
        0xFF.hash(state);
    }
}

impl<T> Clone for ListContents<T> {
    fn clone(&self) -> Self {
        ListContents {
            len: self.len,
            head: self.head,
            tail: self.tail,
        }
    }
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        match self {
            Empty => Empty,
            Full(contents) => Full(contents.clone()),
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugRaw(format!("{:?}", ListEntries(self))))
            .field("len", &self.len())
            .finish()
    }
}

struct ListEntries<'a, T>(&'a LinkedList<T>);

impl<T: Debug> Debug for ListEntries<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
