//! The container types themselves, grouped by storage discipline.
//!
//! Each submodule corresponds to a cargo feature of the same name so that unused container
//! families can be compiled out: [`contiguous`] for the flat owning storage types, [`linked`] for
//! the node-owning list, [`hash`] for the hash table pair and [`text`] for the string buffer.
//!
//! Applicable types here implement [`Deref`](std::ops::Deref) (and DerefMut) to a slice or
//! [`str`], which keeps the borrowed-iteration and read-only surface in one place instead of
//! repeating it per container.

#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "text")]
pub mod text;
