//! Node-owning linked collection types. Currently just [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
