//! A module containing [`LinkedList`] and its iterators. [`LinkedList`] is also re-exported under
//! the parent module.

mod iter;
mod length;
mod linked_list;
mod node;
mod tests;

pub use iter::*;
pub(crate) use length::*;
pub use linked_list::*;
pub(crate) use node::*;
