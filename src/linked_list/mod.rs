//! Doubly-linked lists with indexed access.
//!
//! ## Core Components
//!
//! - [`LinkedList`]: the unsynchronized list. It owns its nodes, mutates through
//!   `&mut self`, and carries no locking.
//! - [`locked::LockedList`]: the same operations behind a reader-writer lock,
//!   usable through `&self` and shareable between threads.
//! - [`IndexOutOfRangeError`]: the error produced by indexed writes
//!   ([`LinkedList::set`], [`LinkedList::remove`]) when the index is past the end.
//! - [`Iter`], [`IterMut`], [`IntoIter`]: forward iterators; the borrowing ones
//!   are double-ended and walk the `prev` chain when reversed.
//!
//! ## Indexed access
//!
//! Reads and writes at an arbitrary index resolve the node by walking from
//! whichever end of the list is closer: indices in the first half are reached
//! from the head along `next`, indices in the second half from the tail along
//! `prev`. Out-of-range reads return `None`; out-of-range writes return an
//! [`IndexOutOfRangeError`] and leave the list untouched.
//!
//! # Examples
//!
//! ```
//! use indexed_list::LinkedList;
//!
//! let mut list: LinkedList<i32> = (1..=5).collect();
//! assert_eq!(list.get(3), Some(&4));
//!
//! let removed = list.remove(1).unwrap();
//! assert_eq!(removed, 2);
//!
//! let doubled = list.map(|value, _index| value * 2);
//! assert_eq!(doubled, LinkedList::from_iter([2, 6, 8, 10]));
//! assert_eq!(list.len(), 4);
//! ```

mod error;
mod iter;
mod list;
mod locked_impl;
mod node;

#[cfg(test)]
mod tests;

pub mod locked {
    pub use super::locked_impl::*;
}

pub mod prelude {
    pub use super::error::IndexOutOfRangeError;
    pub use super::iter::{IntoIter, Iter, IterMut};
    pub use super::list::LinkedList;
    pub use super::locked::LockedList;
}

pub use error::IndexOutOfRangeError;
pub use iter::{IntoIter, Iter, IterMut};
pub use list::LinkedList;
