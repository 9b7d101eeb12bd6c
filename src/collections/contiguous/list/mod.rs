//! A module containing [`ArrayList`] and its iterator support.
//!
//! Owned iteration reuses [`array::IntoIter`](super::array::IntoIter) after shrinking the buffer
//! to its length; borrowed iteration comes from [`std::slice`] through `Deref`.

mod array_list;
mod iter;

pub use array_list::*;
pub use iter::*;
