//! A module containing [`Array`] and its by-value iterator. [`Array`] is also re-exported under
//! the parent module.

mod array;
mod iter;
mod tests;

pub use array::*;
pub use iter::*;
