#![cfg(test)]

use std::hash::{BuildHasher, RandomState};

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::panic::assert_panics;

#[test]
fn test_edit_sequence() {
    let mut s = StrBuf::from("one-nine-three-seven-five");

    s.insert(3, "-two");
    assert_eq!(s, "one-two-nine-three-seven-five");

    s.erase_n(7, 5);
    assert_eq!(s, "one-two-three-seven-five");

    let pos = s.find("seven").unwrap();
    s.replace(pos, 5, "four");
    assert_eq!(s, "one-two-three-four-five");
}

#[test]
fn test_push_pop() {
    let mut s = StrBuf::new();
    assert_eq!(s.pop(), None, "Popping an empty buffer should return None.");

    s.push('a');
    s.push('é');
    s.push('日');
    assert_eq!(s.len(), 6, "Length should count bytes, not characters.");
    assert_eq!(s, "aé日");

    assert_eq!(s.pop(), Some('日'));
    assert_eq!(s.pop(), Some('é'));
    assert_eq!(s.pop(), Some('a'));
    assert_eq!(s.pop(), None);
    assert!(s.is_empty());
}

#[test]
fn test_append_assign_clear() {
    let mut s = StrBuf::from("Hello");
    s.append(" world");
    assert_eq!(s, "Hello world");

    s.assign("replaced");
    assert_eq!(s, "replaced");

    let cap = s.cap();
    s.clear();
    assert!(s.is_empty());
    assert_eq!(s.cap(), cap, "Clearing should keep the allocation.");
}

#[test]
fn test_from_fmt() {
    let s = StrBuf::from_fmt(format_args!("{}-{:03}", "item", 7));
    assert_eq!(s, "item-007");

    use std::fmt::Write;
    let mut s = StrBuf::new();
    write!(s, "{} + {} = {}", 1, 2, 1 + 2).unwrap();
    assert_eq!(s, "1 + 2 = 3");
}

#[test]
fn test_find_sentinel() {
    let s = StrBuf::from("haystack");
    assert_eq!(s.find("stack"), Some(3));
    assert_eq!(
        s.find("needle"),
        None,
        "An absent pattern should be None, distinct from every position."
    );
    assert_eq!(s.find(""), Some(0));
}

#[test]
fn test_boundary_errors() {
    let mut s = StrBuf::from("aé日");

    // 'é' occupies bytes 1..3, so 2 splits it.
    let err = s.try_insert(2, "x").unwrap_err();
    assert!(
        err.is_not_char_boundary(),
        "Splitting a multi-byte character should be its own error."
    );

    let err = s.try_insert(7, "x").unwrap_err();
    assert!(err.is_index_out_of_bounds());

    assert!(s.try_erase_n(1, 1).is_err(), "The erased range's end must also be a boundary.");
    assert!(s.try_erase_n(3, 9).is_err());
    assert!(s.try_replace(2, 1, "x").is_err());
    assert_eq!(s, "aé日", "Failed edits shouldn't change the contents.");

    assert_panics!(
        {
            let mut s = StrBuf::from("aé");
            s.insert(2, "x");
        },
        "The panicking variants should enforce the same contract."
    );
}

#[test]
fn test_edge_offsets() {
    let mut s = StrBuf::from("ab");
    s.insert(0, ">>");
    s.insert(4, "<<");
    assert_eq!(s, ">>ab<<");

    s.erase_n(0, 0);
    s.erase_n(6, 0);
    assert_eq!(s, ">>ab<<", "Zero-length edits at the ends should be valid no-ops.");

    s.replace(0, 6, "");
    assert!(s.is_empty());
}

#[test]
fn test_reserve_and_growth() {
    let mut s = StrBuf::with_cap(16);
    assert_eq!(s.cap(), 16);

    s.append("0123456789");
    assert_eq!(s.cap(), 16, "Appending within capacity shouldn't grow.");

    s.reserve(32);
    assert!(s.cap() >= 42);

    s.shrink_to_fit();
    assert_eq!(s.cap(), s.len());
}

#[test]
fn test_deref_str_api() {
    let s = StrBuf::from("one-two-three");

    assert!(s.starts_with("one"));
    assert!(s.ends_with("three"));
    assert_eq!(&s[4..7], "two");
    assert_eq!(s.split('-').count(), 3);
}

#[test]
fn test_ordering() {
    let mut names: Vector<StrBuf> = ["Mary", "Erik", "Joe"]
        .into_iter()
        .map(StrBuf::from)
        .collect();
    names.sort();

    assert_eq!(names[0], "Erik");
    assert_eq!(names[1], "Joe");
    assert_eq!(names[2], "Mary");

    assert!(StrBuf::from("abc") < StrBuf::from("abd"));
}

#[test]
fn test_hash_consistency() {
    let s = StrBuf::from("key");
    let state = RandomState::new();
    assert_eq!(
        state.hash_one(&s),
        state.hash_one("key"),
        "StrBuf should hash exactly like the str it borrows as."
    );
}

#[cfg(feature = "hash")]
#[test]
fn test_borrowed_map_lookup() {
    use crate::collections::hash::HashMap;

    let mut map: HashMap<StrBuf, u32> = HashMap::new();
    map.insert(StrBuf::from("Groovy"), 121);

    assert_eq!(
        map.get("Groovy"),
        Some(&121),
        "A str borrow should find entries with owned keys."
    );
    map.insert(StrBuf::from("Groovy"), 200);
    assert_eq!(map.get("Groovy"), Some(&200));
}

#[test]
fn test_clone_and_from_utf8() {
    let s = StrBuf::from("text");
    let cloned = s.clone();
    assert_eq!(s, cloned);

    let bytes = s.into_bytes();
    assert_eq!(&*bytes, b"text");

    let rebuilt = StrBuf::from_utf8(bytes).unwrap();
    assert_eq!(rebuilt, "text");

    let mut invalid = Vector::new();
    invalid.extend_from_slice(&[0xFF, 0xFE]);
    assert!(
        StrBuf::from_utf8(invalid).is_err(),
        "Invalid UTF-8 should be rejected."
    );
}

#[test]
fn test_format() {
    let s = StrBuf::from("plain");
    assert_eq!(format!("{s}"), "plain");
    assert_eq!(format!("{s:?}"), "\"plain\"");
}
