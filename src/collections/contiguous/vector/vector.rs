use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::collections::contiguous::Array;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds, InvalidRange};
use crate::util::fmt::DebugRaw;
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;
const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Growth is amortized: when the capacity is exceeded it at least doubles, so the total cost of
/// moving elements across any sequence of `n` pushes is `O(n)`.
///
/// Reallocation (from [`push`](Vector::push), [`reserve`](Vector::reserve),
/// [`insert`](Vector::insert) and friends) moves every element, so any outstanding reference or
/// iterator into the Vector is invalidated by it. This is a hard contract, not advisory — which is
/// why all of these methods take `&mut self` and the borrow checker refuses to let such references
/// survive the call.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `k`: The number of items being removed.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `erase_n` | `O(k + n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `sort` | `O(n log n)` |
/// | `contains` | `O(n)` |
///
/// \* If the Vector doesn't have enough capacity for the new element, `push` will take `O(n)`.
///
/// \** If the Vector has enough capacity for the additional items already, `reserve` is `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new().forget_init(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Returns the length of the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector. The capacity is guaranteed to be exactly the
    /// value provided to any of the various capacity manipulation functions.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Constructs an element of the Vector in place from anything that converts into `T`, so that
    /// callers of a specialized Vector never build the element by hand first.
    ///
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// # use container_lib::collections::text::StrBuf;
    /// let mut names = Vector::<StrBuf>::new();
    /// names.emplace("Mary");
    /// names.emplace("Joe");
    /// assert_eq!(&*names[0], "Mary");
    /// ```
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn emplace<V: Into<T>>(&mut self, value: V) {
        self.push(value.into());
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..5);
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector, and
            // all values < len are initialized. We make a bitwise copy of the value on the heap
            // and then treat the heap copy as uninitialized, which is as close as we can get to
            // actually moving the value off of the heap.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };
            Some(value)
        }
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Inserting at `len` is equivalent to [`push`](Vector::push).
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..3);
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(3, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 300, 1, 2]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        if self.len == self.cap() {
            self.grow()
        }

        // SAFETY: index <= len < cap after the grow, so both the shift source and destination are
        // in bounds; the region [index, len) holds initialized values being moved up by one.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(index).as_ptr(),
                self.arr.ptr.add(index + 1).as_ptr(),
                self.len - index,
            );
            self.arr.ptr.add(index).write(MaybeUninit::new(value));
        }

        self.len += 1;
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.check_index(index);

        // SAFETY: index < len, so the value is initialized. After the read, the slot is treated as
        // uninitialized and immediately overwritten by the shift below.
        let value = unsafe { self.arr.ptr.add(index).read().assume_init() };

        // SAFETY: The region (index, len) holds initialized values being moved down by one, all in
        // bounds of the allocation.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(index + 1).as_ptr(),
                self.arr.ptr.add(index).as_ptr(),
                self.len - index - 1,
            );
        }

        self.len -= 1;
        value
    }

    /// Removes `count` elements starting at `index`, shifting the remainder left to fill the gap.
    /// Each removed element is dropped. References and iterators at or beyond `index` don't
    /// survive this call (the borrow checker enforces as much).
    ///
    /// # Panics
    /// Panics if `index + count` exceeds the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..8);
    /// vec.erase_n(2, 3);
    /// assert_eq!(&*vec, &[0, 1, 5, 6, 7]);
    /// ```
    pub fn erase_n(&mut self, index: usize, count: usize) {
        let end = index.checked_add(count).ok_or(CapacityOverflow).throw();
        if end > self.len {
            Err(InvalidRange {
                start: index,
                end,
                len: self.len,
            }).throw()
        }

        for i in index..end {
            // SAFETY: All values in [index, end) are < len and therefore initialized and ready to
            // drop. Each is dropped exactly once before its slot is reused by the shift below.
            unsafe {
                ptr::drop_in_place(self.arr.ptr.add(i).as_ptr().cast::<T>());
            }
        }

        // SAFETY: The region [end, len) holds initialized values being moved down by count, all in
        // bounds of the allocation. The ranges may overlap, which ptr::copy permits.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(end).as_ptr(),
                self.arr.ptr.add(index).as_ptr(),
                self.len - end,
            );
        }

        self.len -= count;
    }

    /// Replaces the element at the provided index with `new_value`, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.check_index(index);

        // SAFETY: index is < len and all values < len are initialized.
        unsafe {
            mem::replace(
                &mut self.arr[index],
                MaybeUninit::new(new_value)
            ).assume_init()
        }
    }

    /// Inserts every element of `src` at `index`, shifting following elements right by
    /// `src.len()`. Restricted to [`Copy`] elements, which keeps the bulk move a plain byte copy.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the Vector, or if the new length would
    /// overflow the maximum capacity.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized(0..4);
    /// vec.insert_from_slice(2, &[10, 11]);
    /// assert_eq!(&*vec, &[0, 1, 10, 11, 2, 3]);
    /// ```
    pub fn insert_from_slice(&mut self, index: usize, src: &[T])
    where
        T: Copy,
    {
        if index > self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len,
            }).throw()
        }

        self.reserve(src.len());

        // SAFETY: cap >= len + src.len() after the reserve. The initialized region [index, len)
        // moves up by src.len(), then the gap is filled from src, which self can't overlap.
        unsafe {
            ptr::copy(
                self.arr.ptr.add(index).as_ptr(),
                self.arr.ptr.add(index + src.len()).as_ptr(),
                self.len - index,
            );
            ptr::copy_nonoverlapping(
                src.as_ptr().cast::<MaybeUninit<T>>(),
                self.arr.ptr.add(index).as_ptr(),
                src.len(),
            );
        }

        self.len += src.len();
    }

    /// Appends every element of `src` to the back of the Vector.
    ///
    /// # Panics
    /// Panics if the new length would overflow the maximum capacity.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Copy,
    {
        self.insert_from_slice(self.len, src);
    }

    /// Sorts the Vector in place with an unstable comparison sort. Equal elements may be
    /// reordered.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::from_iter_sized([3, 1, 2].into_iter());
    /// vec.sort();
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        (**self).sort_unstable();
    }

    /// Ensures that the Vector has capacity to hold an additional `extra` elements. After invoking
    /// this method, the capacity will be >= len + extra.
    ///
    /// If the current capacity already suffices, nothing happens and no reference is invalidated;
    /// otherwise the storage is reallocated before any element is touched, so a capacity overflow
    /// panic leaves the Vector exactly as it was.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.realloc_with_cap(new_cap);
    }

    /// Shrinks the Vector so that its capacity is equal to its length.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Appends all elements from `other` to self, leaving `other` consumed and its elements owned
    /// by self.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub fn append(&mut self, mut other: Vector<T>) {
        let initial_len = self.len;
        self.reserve(other.len);

        // SAFETY: self is valid from initial_len to initial_len + other.len and other is valid
        // from 0 to other.len. Both are properly aligned and don't overlap.
        unsafe {
            ptr::copy_nonoverlapping(
                other.arr.ptr.as_ptr().cast_const(),
                self.arr.ptr.add(initial_len).as_ptr(),
                other.len,
            );
        }

        self.len += other.len;

        // The elements now live in self; only other's allocation should be released.
        other.len = 0;
    }

    /// Creates a Vector from an iterator which reports its exact length, with capacity equal to
    /// that length.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn from_iter_sized<I>(value: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        Vector::from(Array::from_iter_sized(value))
    }

    /// Reallocates the internal Array with the provided capacity.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    /// Grows the internal Array to allow for the insertion of additional elements. After calling
    /// this, the Vector can take at least one more element.
    ///
    /// # Panics
    /// Panics if the memory layout of the Vector would have a size that exceeds [`isize::MAX`].
    pub(crate) fn grow(&mut self) {
        // old_cap <= isize::MAX, so old_cap * 2 can't overflow usize. It can still exceed
        // isize::MAX, which realloc checks.
        let mut new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);

        // If we would grow past maximum capacity, instead use the maximum if it represents growth.
        if (new_cap * size_of::<T>() > MAX_CAP) && (MAX_CAP > self.cap() * size_of::<T>()) {
            new_cap = MAX_CAP;
        }

        self.realloc_with_cap(new_cap);
    }

    /// Checks that the provided index is within the bounds of self.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub(crate) fn check_index(&self, index: usize) {
        if index >= self.len {
            Err(IndexOutOfBounds {
                index,
                len: self.len
            }).throw()
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values less than len are initialized and safe to drop.
            unsafe { self.arr.ptr.add(i).as_mut().assume_init_drop(); }
        }

        // Implicitly drop self.arr, containing only MaybeUninit values with a no-op drop.
        // Doing so also deallocates the owned memory.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within this
        // Vector. The borrow checker enforces that self isn't mutated while the slice lives.
        unsafe {
            slice::from_raw_parts(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: Vector is valid as a slice for len values, which are all initialized. The
        // pointer is nonnull, properly aligned and the range entirely contained within this
        // Vector. The borrow checker enforces that self isn't otherwise accessed while the slice
        // lives.
        unsafe {
            slice::from_raw_parts_mut(
                // Reinterpret *mut MaybeUninit<T> as *mut T for all values < len.
                self.arr.ptr.as_ptr().cast(),
                self.len,
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely, rely on unique pointers and are therefore safe for Send when
// T: Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.len());

        for value in self.iter() {
            // SAFETY: vec has been created with capacity for every element of self.
            unsafe { vec.push_unchecked(value.clone()); }
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        // After shrinking, the Vector contains exactly len initialized values with the same
        // layout as an Array. The Vector is forgotten so the allocation has one owner.
        let arr = Array {
            ptr: value.arr.ptr.cast(),
            size: value.len,
            _phantom: PhantomData,
        };
        mem::forget(value);
        arr
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugRaw(format!("{:?}", &**self)))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
