//! Contiguous collection types. [`Array`] is the shared runtime-sized backing allocation,
//! [`Vector`] the growable sequence built on it, and [`Grid2`]/[`Grid3`] the fixed
//! multi-dimensional arrays that present one flat allocation through row-major indexing.

pub mod array;
#[cfg(feature = "grid")]
pub mod grid;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[cfg(feature = "grid")]
#[doc(inline)]
pub use grid::{Grid2, Grid3};
#[doc(inline)]
pub use vector::Vector;
