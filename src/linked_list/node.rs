use alloc::boxed::Box;
use core::ptr::NonNull;

/// A node in an owned doubly-linked list.
///
/// The list manages every node through raw pointers: nodes are boxed on
/// insertion, leaked into the chain, and reclaimed with `Box::from_raw` on
/// removal. `next` walks toward the tail and `prev` toward the head; neither
/// link frees anything on its own.
pub(super) struct Node<T> {
    pub(super) next: Option<NonNull<Node<T>>>,
    pub(super) prev: Option<NonNull<Node<T>>>,
    pub(super) element: T,
}

impl<T> Node<T> {
    /// Creates an unlinked node holding `element`.
    pub(super) fn new(element: T) -> Self {
        Node {
            next: None,
            prev: None,
            element,
        }
    }

    /// Consumes a boxed node and returns the element it held.
    pub(super) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}
