use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index-based operation was given an index outside of the container's bounds.
#[derive(Debug)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A growth operation would exceed the maximum representable capacity.
#[derive(Debug)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A keyed lookup with a presence precondition (`at`) was given an absent key.
#[derive(Debug)]
pub struct KeyNotFound;

impl Display for KeyNotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Key not found in map!")
    }
}

impl Error for KeyNotFound {}

/// A range-based operation was given a decreasing range or one that ends past the container.
#[derive(Debug)]
pub struct InvalidRange {
    pub start: usize,
    pub end: usize,
    pub len: usize,
}

impl Display for InvalidRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range {}..{} invalid for collection with {} elements!",
            self.start, self.end, self.len
        )
    }
}

impl Error for InvalidRange {}

/// A byte offset into a string buffer doesn't lie on a UTF-8 character boundary.
#[derive(Debug)]
pub struct NotCharBoundary {
    pub index: usize,
}

impl Display for NotCharBoundary {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Byte offset {} is not a UTF-8 character boundary!", self.index)
    }
}

impl Error for NotCharBoundary {}

#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum TextOffsetError {
    IndexOutOfBounds(IndexOutOfBounds),
    NotCharBoundary(NotCharBoundary),
}
