use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::Iter;
use crate::collections::contiguous::Vector;
use crate::collections::hash::HashMap;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// A collection of unique items which relies on the items implementing [`Hash`].
///
/// Built directly over [`HashMap`] with `()` values, so all probing, growth and removal behaviour
/// is shared with the map. As with map keys, it is a logic error to manipulate a contained item in
/// a way that changes its hash, and the API prevents mutable access to items for that reason.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Yay, we get to do the thing where unit type evaluates to a no-op.
    pub(crate) inner: HashMap<T, (), B>
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new HashSet with capacity 0 and the default value for `B`. Memory will be
    /// allocated when the capacity changes.
    pub fn new() -> HashSet<T, B> {
        HashSet {
            inner: HashMap::new()
        }
    }

    /// Creates a new HashSet with the provided `cap`acity, allowing insertions without
    /// reallocation. The default hasher will be used.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap(cap)
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new HashSet with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_hasher(hasher)
        }
    }

    /// Creates a new HashSet with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: HashMap::with_cap_and_hasher(cap, hasher)
        }
    }

    /// Returns the length of the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no items.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the current capacity of the HashSet.
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Inserts the provided `item` into the HashSet, increasing the capacity if required. Returns
    /// true if the item was not already present. An equal existing item is never replaced.
    pub fn insert(&mut self, item: T) -> bool {
        if self.inner.should_grow() {
            self.inner.grow()
        }

        // UNREACHABLE: We've just grown if necessary.
        let index = unsafe { self.inner.find_index_for_key(&item).unreachable() };

        // The bucket at index is either empty or contains an equal item.
        match &self.inner.arr[index] {
            Some(_) => false,
            None => {
                self.inner.arr[index] = Some((item, ()));
                self.inner.len += 1;
                true
            },
        }
    }

    /// Inserts the provided `item` without checking if the HashSet has enough capacity. Returns
    /// true if the item was not already present.
    ///
    /// # Safety
    /// It is the responsibility of the caller to ensure that the HashSet has enough capacity to
    /// add the provided item, using methods like [`reserve`](HashSet::reserve) or
    /// [`with_cap`](HashSet::with_cap).
    ///
    /// # Panics
    /// Panics if the HashSet has a capacity of 0, as it isn't possible to find a bucket associated
    /// with the item.
    pub unsafe fn insert_unchecked(&mut self, item: T) -> bool {
        // SAFETY: Forwards this method's own contract.
        unsafe { self.inner.insert_unchecked(item, ()).is_none() }
    }

    /// Returns a reference to the contained item equal to `item`, if one exists.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.inner.get_entry(item).map(|e| e.0)
    }

    /// Removes the item equal to `item`, returning it if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.inner.remove_entry(item).map(|e| e.0)
    }

    /// Returns true if the set contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized
    {
        self.inner.contains(item)
    }

    /// Increases the capacity of the HashSet to ensure that len + `extra` items will fit without
    /// exceeding the load factor.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Returns an iterator over the items of the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns true if every item of self is contained in `other`.
    pub fn is_subset(&self, other: &HashSet<T, B>) -> bool {
        for item in self {
            if !other.contains(item) {
                return false;
            }
        }
        true
    }

    /// Returns true if every item of `other` is contained in self.
    pub fn is_superset(&self, other: &HashSet<T, B>) -> bool {
        other.is_subset(self)
    }
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone()
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    /// Compares by contents, ignoring bucket positions and hasher state.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = HashSet::with_cap(iter.size_hint().0);

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugRaw(format!(
                "#{{{}}}",
                self.iter()
                    .map(|i| format!("{i:?}"))
                    .collect::<Vector<String>>()
                    .join(", ")
            )))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", &self.inner.hasher)
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "#{{{}}}",
            self.iter()
                .map(|i| format!("{i}"))
                .collect::<Vector<String>>()
                .join(", ")
        )
    }
}
