//! A module containing [`HashMap`] and its iterators. [`HashMap`] is also re-exported under the
//! parent module.

mod hash_map;
mod iter;
mod tests;

pub use hash_map::*;
pub use iter::*;
