//! Type-specialized, value-semantic containers: [`Vector`], [`LinkedList`], [`HashSet`],
//! [`HashMap`], [`StrBuf`] and the fixed-size [`Grid2`]/[`Grid3`] arrays.
//!
//! # Specialization
//! Every container here is generic over exactly one element type (plus a key type and a
//! [`BuildHasher`](std::hash::BuildHasher) for the hash containers) and is monomorphized by the
//! compiler: a `Vector<StrBuf>` and a `Vector<i64>` share no code paths at runtime and there is no
//! dynamic dispatch at the element level. Hash and equality customization is expressed through the
//! [`Hash`](std::hash::Hash) and [`Eq`] bounds rather than function-pointer fields.
//!
//! # Ownership
//! Containers exclusively own their elements. Dropping a container drops each element in turn,
//! recursively for containers of containers: a `Vector<StrBuf>` frees every string buffer it
//! holds, a `HashMap<StrBuf, V>` frees its owned keys when entries are erased or the map is
//! dropped. The only ownership transfer that isn't tree-shaped is
//! [`LinkedList::splice`](collections::linked::LinkedList::splice), which moves nodes between two
//! lists without copying their elements.
//!
//! # Iterators and invalidation
//! Lookup misses are signalled with [`None`] rather than an error, and iteration terminates with
//! [`None`] in the usual way. The invalidation rules that each container documents (reallocation
//! invalidates everything into a [`Vector`], rehashing invalidates everything into a hash table,
//! erasing one list node leaves the rest alone) are enforced at compile time: structural mutation
//! takes `&mut self`, which the borrow checker refuses while any iterator or element reference is
//! live.
//!
//! # Error Handling
//! Operations with preconditions (indexing, `at` on a hash map, range-based erasure) panic on
//! violation with a strongly typed error message rather than corrupting memory; `try_` variants
//! returning [`Result`] exist where handling the failure is reasonable. The error types are enums
//! and small structs implementing [`Error`](std::error::Error), dispatched statically. Allocation
//! failure is fatal and reported through [`handle_alloc_error`](std::alloc::handle_alloc_error) —
//! a failed growth operation never leaves a container partially mutated.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`], [`String`](std::string::String) or the `std` collections to
//! back any container; storage is managed directly through [`alloc`](std::alloc) and
//! [`NonNull`](std::ptr::NonNull). It does depend on some derive macros because they're helpful
//! and remove the need for some very repetitive programming.
//!
//! [`Vector`]: collections::contiguous::Vector
//! [`LinkedList`]: collections::linked::LinkedList
//! [`HashSet`]: collections::hash::HashSet
//! [`HashMap`]: collections::hash::HashMap
//! [`StrBuf`]: collections::text::StrBuf
//! [`Grid2`]: collections::contiguous::Grid2
//! [`Grid3`]: collections::contiguous::Grid3

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
