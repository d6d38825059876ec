//! Doubly-linked list containers with indexed access.
//!
//! The crate provides one list engine and two ways to hold it:
//!
//! - [`LinkedList`]: an owned doubly-linked list with O(1) operations at both
//!   ends, indexed reads and writes resolved by walking from whichever end is
//!   closer, and `map`/`filter` passes that build new lists.
//! - [`LockedList`]: the same operations behind a reader-writer lock, callable
//!   through a shared reference and safe to use from several threads.
//!
//! The crate is `no_std` and only requires `alloc`.
//!
//! # Examples
//!
//! ```
//! use indexed_list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.push_back(1);
//! list.push_back(2);
//! list.push_front(0);
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.get(1), Some(&1));
//! assert_eq!(list.pop_back(), Some(2));
//! ```
#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::locked::LockedList;
pub use linked_list::{IndexOutOfRangeError, LinkedList};
