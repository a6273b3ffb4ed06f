use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Arguments, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::str::{from_utf8, from_utf8_unchecked, Utf8Error};

use crate::collections::contiguous::Vector;
use crate::util::error::{IndexOutOfBounds, NotCharBoundary, TextOffsetError};
use crate::util::result::ResultExtension;

/// A growable, owned UTF-8 string buffer with the byte-shifting edit vocabulary of
/// [`Vector`]: [`insert`](StrBuf::insert), [`erase_n`](StrBuf::erase_n) and
/// [`replace`](StrBuf::replace) all edit in place, only reallocating when capacity runs out.
///
/// The contents are valid UTF-8 at all times. All offsets are byte offsets into that encoding;
/// an offset that is out of range or splits a multi-byte character is rejected (the editing
/// methods panic, their `try_` counterparts return a [`TextOffsetError`]).
///
/// StrBuf derefs to [`str`], so the full read-only string API (`find`, `split`, `chars`, range
/// indexing and the rest) is available directly on the buffer.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of bytes in the StrBuf.
/// - `i`: The byte offset in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `append` | `O(1)`* per appended byte |
/// | `insert` | `O(n-i)`** |
/// | `erase_n` | `O(n-i)` |
/// | `replace` | `O(n-i)`** |
///
/// \* Amortized; a push which exceeds the capacity reallocates.
///
/// \** Plus a reallocation when the capacity doesn't suffice.
#[derive(Clone, Default)]
pub struct StrBuf {
    vec: Vector<u8>,
}

impl StrBuf {
    /// Creates a new StrBuf with a length and capacity of 0. Memory will be allocated as needed.
    pub fn new() -> StrBuf {
        StrBuf {
            vec: Vector::new(),
        }
    }

    /// Creates a new StrBuf with the provided `cap`acity in bytes.
    pub fn with_cap(cap: usize) -> StrBuf {
        StrBuf {
            vec: Vector::with_cap(cap),
        }
    }

    /// Creates a StrBuf from pre-rendered format arguments, as produced by
    /// [`format_args!`](std::format_args).
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::text::StrBuf;
    /// let line = StrBuf::from_fmt(format_args!("{}: {:.1}", "width", 4.25));
    /// assert_eq!(&*line, "width: 4.2");
    /// ```
    pub fn from_fmt(args: Arguments<'_>) -> StrBuf {
        let mut buf = StrBuf::new();
        buf.write_fmt(args)
            .expect("A formatting trait implementation returned an error!");
        buf
    }

    /// Creates a StrBuf over the provided bytes, checking that they are valid UTF-8.
    pub fn from_utf8(vec: Vector<u8>) -> Result<StrBuf, Utf8Error> {
        from_utf8(&vec)?;
        Ok(StrBuf { vec })
    }

    /// Returns the length of the StrBuf in bytes.
    pub const fn len(&self) -> usize {
        self.vec.len()
    }

    /// Returns true if the StrBuf contains no bytes.
    pub const fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }

    /// Returns the current capacity of the StrBuf in bytes.
    pub const fn cap(&self) -> usize {
        self.vec.cap()
    }

    /// Borrows the contents as a [`str`].
    pub fn as_str(&self) -> &str {
        // SAFETY: The buffer holds valid UTF-8 at all times; every mutation preserves this.
        unsafe { from_utf8_unchecked(&self.vec) }
    }

    /// Consumes the StrBuf, returning the underlying bytes.
    pub fn into_bytes(self) -> Vector<u8> {
        self.vec
    }

    /// Appends a single character to the end of the buffer.
    pub fn push(&mut self, ch: char) {
        let mut buf = [0; 4];
        self.vec.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
    }

    /// Removes and returns the last character, if the buffer isn't empty.
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.chars().next_back()?;
        self.vec.erase_n(self.vec.len() - ch.len_utf8(), ch.len_utf8());
        Some(ch)
    }

    /// Appends the provided text to the end of the buffer.
    pub fn append(&mut self, text: &str) {
        self.vec.extend_from_slice(text.as_bytes());
    }

    /// Replaces the entire contents of the buffer with `text`, keeping the allocation.
    pub fn assign(&mut self, text: &str) {
        self.clear();
        self.vec.extend_from_slice(text.as_bytes());
    }

    /// Removes all contents, keeping the allocation.
    pub fn clear(&mut self) {
        self.vec.erase_n(0, self.vec.len());
    }

    /// Inserts `text` at byte offset `index`, shifting the following bytes right.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the buffer or doesn't lie on a character
    /// boundary.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::text::StrBuf;
    /// let mut s = StrBuf::from("one-nine-three");
    /// s.insert(3, "-two");
    /// assert_eq!(&*s, "one-two-nine-three");
    /// ```
    pub fn insert(&mut self, index: usize, text: &str) {
        self.try_insert(index, text).throw()
    }

    /// The non-panicking version of [`insert`](StrBuf::insert).
    pub fn try_insert(&mut self, index: usize, text: &str) -> Result<(), TextOffsetError> {
        self.check_boundary(index)?;
        self.vec.insert_from_slice(index, text.as_bytes());
        Ok(())
    }

    /// Removes `count` bytes starting at byte offset `index`, shifting the remainder left.
    ///
    /// # Panics
    /// Panics if the range ends beyond the length of the buffer, or if either end of it splits a
    /// multi-byte character.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::text::StrBuf;
    /// let mut s = StrBuf::from("one-two-nine-three");
    /// s.erase_n(7, 5);
    /// assert_eq!(&*s, "one-two-three");
    /// ```
    pub fn erase_n(&mut self, index: usize, count: usize) {
        self.try_erase_n(index, count).throw()
    }

    /// The non-panicking version of [`erase_n`](StrBuf::erase_n).
    pub fn try_erase_n(&mut self, index: usize, count: usize) -> Result<(), TextOffsetError> {
        self.check_boundary(index)?;
        match index.checked_add(count) {
            Some(end) if end <= self.len() => self.check_boundary(end)?,
            _ => {
                return Err(IndexOutOfBounds {
                    index: index.saturating_add(count),
                    len: self.len(),
                }.into());
            },
        }

        self.vec.erase_n(index, count);
        Ok(())
    }

    /// Replaces the `count` bytes at byte offset `index` with `text`, which need not have the
    /// same length. Bytes outside the replaced range are shifted but otherwise untouched.
    ///
    /// This shadows [`str::replace`], which remains available through
    /// [`as_str`](StrBuf::as_str).
    ///
    /// # Panics
    /// Panics if the replaced range ends beyond the length of the buffer, or if either end of it
    /// splits a multi-byte character.
    ///
    /// # Examples
    /// ```
    /// # use container_lib::collections::text::StrBuf;
    /// let mut s = StrBuf::from("one-two-three-seven-five");
    /// let pos = s.find("seven").unwrap();
    /// s.replace(pos, 5, "four");
    /// assert_eq!(&*s, "one-two-three-four-five");
    /// ```
    pub fn replace(&mut self, index: usize, count: usize, text: &str) {
        self.try_replace(index, count, text).throw()
    }

    /// The non-panicking version of [`replace`](StrBuf::replace).
    pub fn try_replace(
        &mut self,
        index: usize,
        count: usize,
        text: &str,
    ) -> Result<(), TextOffsetError> {
        self.try_erase_n(index, count)?;
        self.vec.insert_from_slice(index, text.as_bytes());
        Ok(())
    }

    /// Ensures that the buffer has capacity for an additional `extra` bytes.
    ///
    /// # Panics
    /// Panics if the required capacity overflows the maximum.
    pub fn reserve(&mut self, extra: usize) {
        self.vec.reserve(extra);
    }

    /// Shrinks the buffer so that its capacity is equal to its length.
    pub fn shrink_to_fit(&mut self) {
        self.vec.shrink_to_fit();
    }

    /// Checks that `index` is in bounds and lies on a character boundary. `len` itself is a valid
    /// boundary.
    fn check_boundary(&self, index: usize) -> Result<(), TextOffsetError> {
        if index > self.len() {
            return Err(IndexOutOfBounds {
                index,
                len: self.len(),
            }.into());
        }
        if !self.as_str().is_char_boundary(index) {
            return Err(NotCharBoundary { index }.into());
        }
        Ok(())
    }
}

impl Deref for StrBuf {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl AsRef<str> for StrBuf {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for StrBuf {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl From<&str> for StrBuf {
    fn from(value: &str) -> Self {
        let mut buf = StrBuf::with_cap(value.len());
        buf.append(value);
        buf
    }
}

impl From<char> for StrBuf {
    fn from(value: char) -> Self {
        let mut buf = StrBuf::new();
        buf.push(value);
        buf
    }
}

impl FromIterator<char> for StrBuf {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut buf = StrBuf::new();
        buf.extend(iter);
        buf
    }
}

impl Extend<char> for StrBuf {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for ch in iter {
            self.push(ch);
        }
    }
}

impl<'a> Extend<&'a str> for StrBuf {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for text in iter {
            self.append(text);
        }
    }
}

impl Write for StrBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        self.push(c);
        Ok(())
    }
}

// Comparison, ordering and hashing all delegate to str, which keeps StrBuf keys in a hash map
// interchangeable with &str lookups through Borrow.

impl PartialEq for StrBuf {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StrBuf {}

impl PartialEq<str> for StrBuf {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for StrBuf {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialOrd for StrBuf {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrBuf {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl Hash for StrBuf {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Debug for StrBuf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl Display for StrBuf {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(self.as_str(), f)
    }
}
