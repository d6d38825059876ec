use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::LinkedList;
use super::node::Node;

/// A double-ended iterator over borrowed elements of a [`LinkedList`].
///
/// The forward direction follows the `next` chain from the head; reversing it
/// follows the `prev` chain from the tail. The two ends converge and the
/// iterator fuses when they meet.
pub struct Iter<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(list: &'a LinkedList<T>) -> Self {
        Iter {
            head: list.head,
            tail: list.tail,
            len: list.len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|node| {
            // SAFETY: `len > 0`, so the node is live for as long as the
            // borrowed list.
            let node = unsafe { node.as_ref() };
            self.head = node.next;
            self.len -= 1;
            &node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|node| {
            // SAFETY: as in `next`.
            let node = unsafe { node.as_ref() };
            self.tail = node.prev;
            self.len -= 1;
            &node.element
        })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// A double-ended iterator over mutably borrowed elements of a
/// [`LinkedList`].
///
/// Elements can be mutated, the linked structure cannot.
pub struct IterMut<'a, T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    marker: PhantomData<&'a mut Node<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(super) fn new(list: &'a mut LinkedList<T>) -> Self {
        IterMut {
            head: list.head,
            tail: list.tail,
            len: list.len,
            marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.head.map(|mut node| {
            // SAFETY: `len > 0`, and the exclusive borrow of the list keeps
            // every yielded reference disjoint.
            let node = unsafe { node.as_mut() };
            self.head = node.next;
            self.len -= 1;
            &mut node.element
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        if self.len == 0 {
            return None;
        }
        self.tail.map(|mut node| {
            // SAFETY: as in `next`.
            let node = unsafe { node.as_mut() };
            self.tail = node.prev;
            self.len -= 1;
            &mut node.element
        })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of a [`LinkedList`].
///
/// Drains the list front to back; reversing drains back to front.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(super) fn new(list: LinkedList<T>) -> Self {
        IntoIter { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}

unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
