//! A module containing the fixed multi-dimensional arrays [`Grid2`] and [`Grid3`]. Both are
//! re-exported under the parent module.

mod grid;
mod tests;

pub use grid::*;
