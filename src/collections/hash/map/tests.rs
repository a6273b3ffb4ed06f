#![cfg(test)]

use std::hash::RandomState;

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, ManualHash};
use crate::util::panic::assert_panics;

#[test]
fn test_insert_and_get() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    assert_eq!(map.len(), 0);
    assert_eq!(map.get("Groovy"), None);

    assert_eq!(map.insert("Groovy", 121), None);
    assert_eq!(map.insert("Mango", 57), None);
    assert_eq!(map.len(), 2);

    assert_eq!(
        map.insert("Groovy", 200),
        Some(121),
        "Reinserting a key should return the replaced value."
    );
    assert_eq!(map.len(), 2, "Reinserting a key shouldn't change the length.");
    assert_eq!(map.get("Groovy"), Some(&200));

    assert_eq!(map.get_entry("Mango"), Some((&"Mango", &57)));
    assert!(map.contains("Mango"));
    assert!(!map.contains("Missing"));

    *map.get_mut("Mango").unwrap() += 1;
    assert_eq!(map.get("Mango"), Some(&58));
}

#[test]
fn test_get_or_insert() {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for word in ["apple", "pear", "apple", "plum", "apple", "pear"] {
        *counts.get_or_insert(word, 0) += 1;
    }

    assert_eq!(counts.len(), 3);
    assert_eq!(counts.at("apple"), &3);
    assert_eq!(counts.at("pear"), &2);
    assert_eq!(counts.at("plum"), &1);

    assert_eq!(
        counts.get_or_insert("apple", 100),
        &3,
        "An existing value should never be overwritten."
    );
}

#[test]
fn test_at_and_index() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    map.insert("one", 1);

    assert_eq!(map.at("one"), &1);
    assert_eq!(map["one"], 1);

    *map.at_mut("one") = 10;
    assert_eq!(map["one"], 10);

    assert_panics!(
        {
            let map: HashMap<&str, u32> = HashMap::new();
            let _ = map.at("missing");
        },
        "An absent key should be a contract violation for at."
    );
    assert_panics!({
        let mut map: HashMap<&str, u32> = HashMap::new();
        let _ = map.at_mut("missing");
    });
}

#[test]
fn test_remove() {
    let mut map: HashMap<&str, u32> = HashMap::new();
    map.insert("a", 1);
    map.insert("b", 2);

    assert_eq!(map.remove("a"), Some(1));
    assert_eq!(map.remove("a"), None, "A key can only be removed once.");
    assert_eq!(map.len(), 1);
    assert_eq!(map.remove_entry("b"), Some(("b", 2)));
    assert!(map.is_empty());

    let counter = CountedDrop::new(0);
    let mut map: HashMap<u32, CountedDrop> = HashMap::new();
    for i in 0..4 {
        map.insert(i, counter.clone());
    }
    map.remove(&2);
    assert_eq!(counter.take(), 1, "Removal should drop the stored value.");
    drop(map);
    assert_eq!(counter.take(), 3);
}

#[test]
fn test_collision_probing() {
    // Every key hashes to the same bucket, forcing a full probe chain.
    let mut map: HashMap<ManualHash<&str>, u32, BadHasherBuilder> =
        HashMap::with_cap_and_hasher(8, BadHasherBuilder);

    map.insert(ManualHash::new(3, "a"), 1);
    map.insert(ManualHash::new(3, "b"), 2);
    map.insert(ManualHash::new(3, "c"), 3);

    assert_eq!(map.get(&ManualHash::new(3, "a")), Some(&1));
    assert_eq!(map.get(&ManualHash::new(3, "b")), Some(&2));
    assert_eq!(map.get(&ManualHash::new(3, "c")), Some(&3));

    // Backward shifting on removal must keep the probe chain unbroken.
    map.remove(&ManualHash::new(3, "b"));
    assert_eq!(map.get(&ManualHash::new(3, "b")), None);
    assert_eq!(
        map.get(&ManualHash::new(3, "c")),
        Some(&3),
        "Keys past the removed bucket should remain reachable."
    );
    assert_eq!(map.len(), 2);
}

#[test]
fn test_removal_scans_past_at_home_entries() {
    // Homes 4, 5, 4: the third entry is displaced to bucket 6, past the at-home entry in 5.
    let mut map: HashMap<ManualHash<&str>, u32, BadHasherBuilder> =
        HashMap::with_cap_and_hasher(8, BadHasherBuilder);

    map.insert(ManualHash::new(4, "a"), 1);
    map.insert(ManualHash::new(5, "b"), 2);
    map.insert(ManualHash::new(4, "c"), 3);

    assert_eq!(map.remove(&ManualHash::new(4, "a")), Some(1));
    assert_eq!(map.len(), 2);
    assert_eq!(
        map.get(&ManualHash::new(4, "c")),
        Some(&3),
        "An entry displaced past an at-home bucket should remain reachable after removal."
    );
    assert_eq!(
        map.get(&ManualHash::new(5, "b")),
        Some(&2),
        "The at-home entry itself shouldn't be moved off its home bucket."
    );
    assert_eq!(
        map.insert(ManualHash::new(4, "c"), 30),
        Some(3),
        "Reinserting the key should replace the entry, not duplicate it."
    );
    assert_eq!(map.len(), 2);
}

#[test]
fn test_collision_wraparound() {
    // A chain anchored at the last bucket must wrap to the front.
    let mut map: HashMap<ManualHash<u8>, u8, BadHasherBuilder> =
        HashMap::with_cap_and_hasher(4, BadHasherBuilder);

    map.insert(ManualHash::new(3, 1), 1);
    map.insert(ManualHash::new(3, 2), 2);

    assert_eq!(map.get(&ManualHash::new(3, 2)), Some(&2));
    map.remove(&ManualHash::new(3, 1));
    assert_eq!(map.get(&ManualHash::new(3, 2)), Some(&2));
}

#[test]
fn test_growth() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    assert_eq!(map.cap(), 0, "An empty map shouldn't allocate.");

    for i in 0..100 {
        map.insert(i, i * 2);
    }

    assert_eq!(map.len(), 100);
    assert!(
        map.cap() > 100,
        "The load factor should keep the capacity ahead of the length."
    );
    for i in 0..100 {
        assert_eq!(map.get(&i), Some(&(i * 2)), "Rehashing should preserve every entry.");
    }
}

#[test]
fn test_reserve() {
    let mut map: HashMap<u32, u32> = HashMap::new();
    map.reserve(16);
    let cap = map.cap();
    assert!(cap >= 16, "Reserved capacity should cover the requested entries.");

    for i in 0..16 {
        map.insert(i, i);
    }
    assert_eq!(map.cap(), cap, "Inserting within a reservation shouldn't grow.");
}

#[test]
fn test_iterators() {
    let mut map: HashMap<u32, u32> = (0..5).map(|i| (i, i * 10)).collect();

    assert_eq!(map.iter().count(), 5);
    assert_eq!(map.keys().count(), 5);
    assert_eq!(
        map.values().map(|v| *v).sum::<u32>(),
        100,
        "Value iteration should visit each value once."
    );

    for value in map.values_mut() {
        *value += 1;
    }
    assert_eq!(map.values().map(|v| *v).sum::<u32>(), 105);

    let mut keys: Vector<u32> = map.clone().into_keys().collect();
    keys.sort();
    assert_eq!(&*keys, &[0, 1, 2, 3, 4]);

    let mut values: Vector<u32> = map.into_values().collect();
    values.sort();
    assert_eq!(&*values, &[1, 11, 21, 31, 41]);
}

#[test]
fn test_equality_and_clone() {
    let map_a: HashMap<u32, u32> = (0..5).map(|i| (i, i)).collect();
    let map_b: HashMap<u32, u32> = (0..5).rev().map(|i| (i, i)).collect();
    assert_eq!(
        map_a, map_b,
        "Equality should ignore insertion order and bucket positions."
    );

    // Different hashers produce different bucket layouts but equal contents.
    let mut map_c: HashMap<u32, u32, BadHasherBuilder> = HashMap::with_hasher(BadHasherBuilder);
    let mut map_d: HashMap<u32, u32> = HashMap::with_hasher(RandomState::new());
    for i in 0..5 {
        map_c.insert(i, i);
        map_d.insert(i, i);
    }
    assert_eq!(map_c.len(), map_d.len());
    assert!(map_c.iter().all(|entry| map_d.get(&entry.0) == Some(&entry.1)));

    let cloned = map_a.clone();
    assert_eq!(map_a, cloned, "A clone should be equal to its source.");

    let counter = CountedDrop::new(0);
    let map: HashMap<u32, CountedDrop> = (0..4).map(|i| (i, counter.clone())).collect();
    let cloned = map.clone();
    drop(map);
    drop(cloned);
    assert_eq!(
        counter.take(),
        8,
        "Each copy should own and drop its own values."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let map: HashMap<u32, CountedDrop> = (0..10).map(|i| (i, counter.clone())).collect();

    drop(map);
    assert_eq!(counter.take(), 10, "10 values should have been dropped.");

    let map: HashMap<u32, CountedDrop> = (0..10).map(|i| (i, counter.clone())).collect();
    let mut iter = map.into_iter();
    let _ = iter.next();
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Consumed and remaining values should all be dropped exactly once."
    );
}
