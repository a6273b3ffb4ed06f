//! A module containing [`Vector`], the growable contiguous sequence. [`Vector`] is also
//! re-exported under the parent module.

mod iter;
mod vector;

pub use iter::*;
pub use vector::*;
