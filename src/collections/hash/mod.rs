//! Hash-addressed collections: [`HashMap`] and [`HashSet`], both built on open addressing with
//! linear probing.

pub mod map;
pub mod set;

#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
