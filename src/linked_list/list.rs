use alloc::boxed::Box;
use core::fmt;
use core::marker::PhantomData;
use core::mem;
use core::ptr::NonNull;

use super::error::IndexOutOfRangeError;
use super::iter::{IntoIter, Iter, IterMut};
use super::node::Node;

/// An owned doubly-linked list with indexed access.
///
/// Elements can be pushed and popped at both ends in O(1). Reads and writes at
/// an arbitrary index resolve the node by walking from whichever end is
/// closer, so no lookup traverses more than half the list. Out-of-range reads
/// return `None`; out-of-range writes ([`set`], [`remove`]) return an
/// [`IndexOutOfRangeError`] and leave the list untouched.
///
/// The list owns its nodes: dropping it (or calling [`clear`]) releases the
/// whole chain, and `map`/`filter` build entirely new lists rather than
/// sharing nodes with the source.
///
/// [`set`]: LinkedList::set
/// [`remove`]: LinkedList::remove
/// [`clear`]: LinkedList::clear
///
/// # Examples
///
/// ```
/// use indexed_list::LinkedList;
///
/// let mut list = LinkedList::new();
/// list.push_front(2);
/// list.push_front(1);
/// list.push_back(3);
///
/// assert_eq!(list.front(), Some(&1));
/// assert_eq!(list.back(), Some(&3));
/// assert_eq!(list.get(1), Some(&2));
/// ```
pub struct LinkedList<T> {
    pub(super) head: Option<NonNull<Node<T>>>,
    pub(super) tail: Option<NonNull<Node<T>>>,
    pub(super) len: usize,
    marker: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the first element, or `None` if the list is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` points at a live node owned by this list, and the
        // borrow is tied to `&self`.
        self.head.map(|node| unsafe { &node.as_ref().element })
    }

    /// Returns a mutable reference to the first element, or `None` if the
    /// list is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `front`, with exclusive access through `&mut self`.
        self.head.map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Returns a reference to the last element, or `None` if the list is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` points at a live node owned by this list.
        self.tail.map(|node| unsafe { &node.as_ref().element })
    }

    /// Returns a mutable reference to the last element, or `None` if the list
    /// is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: as in `back`, with exclusive access through `&mut self`.
        self.tail.map(|mut node| unsafe { &mut node.as_mut().element })
    }

    /// Returns a reference to the element at `index`, or `None` if `index`
    /// is past the end.
    ///
    /// The ends are reached in O(1); any other position costs at most half a
    /// traversal (see [`LinkedList`]).
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        let node = self.seek_node(index);
        // SAFETY: `seek_node` only returns nodes linked into this list.
        Some(unsafe { &node.as_ref().element })
    }

    /// Returns a mutable reference to the element at `index`, or `None` if
    /// `index` is past the end.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let mut node = self.seek_node(index);
        // SAFETY: as in `get`, with exclusive access through `&mut self`.
        Some(unsafe { &mut node.as_mut().element })
    }

    /// Adds an element at the front of the list in O(1).
    pub fn push_front(&mut self, element: T) {
        let mut node = Box::new(Node::new(element));
        node.next = self.head;
        let node = NonNull::from(Box::leak(node));

        match self.head {
            // SAFETY: the old head is a live node owned by this list.
            Some(mut head) => unsafe { head.as_mut().prev = Some(node) },
            None => self.tail = Some(node),
        }
        self.head = Some(node);
        self.len += 1;
    }

    /// Adds an element at the back of the list in O(1).
    pub fn push_back(&mut self, element: T) {
        let mut node = Box::new(Node::new(element));
        node.prev = self.tail;
        let node = NonNull::from(Box::leak(node));

        match self.tail {
            // SAFETY: the old tail is a live node owned by this list.
            Some(mut tail) => unsafe { tail.as_mut().next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.len += 1;
    }

    /// Replaces the element at `index` and returns the displaced one.
    ///
    /// Replacement is strict: every `index >= len` fails, including
    /// `index == len` (use [`push_back`] to append). On success only the
    /// stored value changes; no link is touched. On failure the list is left
    /// exactly as it was.
    ///
    /// [`push_back`]: LinkedList::push_back
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexOutOfRangeError> {
        if index >= self.len {
            return Err(IndexOutOfRangeError {
                index,
                len: self.len,
            });
        }
        let mut node = self.seek_node(index);
        // SAFETY: the node belongs to this list and `&mut self` rules out
        // aliasing.
        Ok(mem::replace(unsafe { &mut node.as_mut().element }, element))
    }

    /// Removes and returns the first element, or `None` if the list is empty.
    ///
    /// Runs in O(1).
    pub fn pop_front(&mut self) -> Option<T> {
        // SAFETY: the head, when present, is linked into this list.
        self.head
            .map(|node| unsafe { self.unlink_node(node) }.into_element())
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    ///
    /// Runs in O(1).
    pub fn pop_back(&mut self) -> Option<T> {
        // SAFETY: the tail, when present, is linked into this list.
        self.tail
            .map(|node| unsafe { self.unlink_node(node) }.into_element())
    }

    /// Removes and returns the element at `index`.
    ///
    /// Fails with [`IndexOutOfRangeError`] when `index >= len`, leaving the
    /// list untouched. Otherwise the node is found from whichever end is
    /// closer, its neighbours are relinked around it, and its element is
    /// returned.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfRangeError> {
        if index >= self.len {
            return Err(IndexOutOfRangeError {
                index,
                len: self.len,
            });
        }
        let node = self.seek_node(index);
        // SAFETY: `seek_node` only returns nodes linked into this list.
        Ok(unsafe { self.unlink_node(node) }.into_element())
    }

    /// Removes every element, releasing all nodes.
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Returns a double-ended iterator over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Returns a double-ended iterator yielding mutable references, front to
    /// back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Builds a new list by applying `transform` to every element in forward
    /// order.
    ///
    /// The closure receives each element together with its 0-based position
    /// counted from the head. The source list is not modified, and the
    /// closure is never invoked for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::LinkedList;
    ///
    /// let list = LinkedList::from_iter([1, 2, 3]);
    /// let doubled = list.map(|value, _index| value * 2);
    /// assert_eq!(doubled, LinkedList::from_iter([2, 4, 6]));
    /// ```
    pub fn map<U, F>(&self, mut transform: F) -> LinkedList<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let mut mapped = LinkedList::new();
        for (index, element) in self.iter().enumerate() {
            mapped.push_back(transform(element, index));
        }
        mapped
    }

    /// Builds a new list holding clones of the elements that satisfy
    /// `predicate`, in their original order.
    ///
    /// The index handed to the closure is the element's position in the
    /// *source* list. The source is not modified, no node is shared with the
    /// result, and the closure is never invoked for an empty list.
    ///
    /// # Examples
    ///
    /// ```
    /// use indexed_list::LinkedList;
    ///
    /// let list = LinkedList::from_iter([1, 2, 3, 4, 5]);
    /// let small = list.filter(|value, _index| *value <= 3);
    /// assert_eq!(small, LinkedList::from_iter([1, 2, 3]));
    /// ```
    pub fn filter<F>(&self, mut predicate: F) -> LinkedList<T>
    where
        T: Clone,
        F: FnMut(&T, usize) -> bool,
    {
        let mut kept = LinkedList::new();
        for (index, element) in self.iter().enumerate() {
            if predicate(element, index) {
                kept.push_back(element.clone());
            }
        }
        kept
    }

    /// Walks to the node at `index`, starting from whichever end is closer.
    ///
    /// Positions past the midpoint are reached from the tail along `prev`
    /// with a decrementing cursor, the rest from the head along `next`, so
    /// the walk never exceeds half the length. Callers must have checked
    /// `index < self.len`.
    fn seek_node(&self, index: usize) -> NonNull<Node<T>> {
        debug_assert!(index < self.len, "seek past the end of the list");

        if index > (self.len - 1) / 2 {
            let mut cursor = self.len - 1;
            let mut node = self.tail.expect("a non-empty list has a tail");
            while cursor > index {
                // SAFETY: every node reached here is linked into this list.
                node = unsafe { node.as_ref().prev }.expect("non-head nodes have a prev link");
                cursor -= 1;
            }
            node
        } else {
            let mut cursor = 0;
            let mut node = self.head.expect("a non-empty list has a head");
            while cursor < index {
                // SAFETY: every node reached here is linked into this list.
                node = unsafe { node.as_ref().next }.expect("non-tail nodes have a next link");
                cursor += 1;
            }
            node
        }
    }

    /// Detaches `node` from the chain, reclaiming its box.
    ///
    /// The neighbours' links are patched around the node, or the list's
    /// head/tail when the node is terminal, and the length is decremented.
    ///
    /// # Safety
    ///
    /// `node` must be linked into this list.
    unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        // SAFETY: the caller guarantees the node belongs to this list, so
        // this is the allocation made when it was inserted.
        let node = unsafe { Box::from_raw(node.as_ptr()) };

        match node.prev {
            // SAFETY: neighbours of a linked node are live nodes of this list.
            Some(mut prev) => unsafe { prev.as_mut().next = node.next },
            None => self.head = node.next,
        }
        match node.next {
            // SAFETY: as above.
            Some(mut next) => unsafe { next.as_mut().prev = node.prev },
            None => self.tail = node.prev,
        }

        self.len -= 1;
        node
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

unsafe impl<T: Send> Send for LinkedList<T> {}
unsafe impl<T: Sync> Sync for LinkedList<T> {}
