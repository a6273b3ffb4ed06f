//! A module containing [`StrBuf`], a growable UTF-8 string buffer built over
//! [`Vector<u8>`](crate::collections::contiguous::Vector).

mod str_buf;
mod tests;

pub use str_buf::*;
