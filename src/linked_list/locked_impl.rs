use core::fmt;

use crossbeam_utils::CachePadded;
use spin::RwLock;

use super::error::IndexOutOfRangeError;
use super::list::LinkedList;

/// A doubly-linked list guarded by a spin-based reader-writer lock.
///
/// Every operation goes through `&self` and holds the lock for its full
/// duration: read-only operations share the read lock and may run
/// concurrently, mutating operations take the write lock and exclude
/// everything else. The list can therefore be shared between threads, e.g.
/// behind an `Arc`.
///
/// Element snapshots returned by [`front`], [`back`] and [`get`] are clones,
/// since a borrow cannot outlive the lock guard. [`view`] and [`alter`] run a
/// caller closure against the element while the guard is held instead.
///
/// [`front`]: LockedList::front
/// [`back`]: LockedList::back
/// [`get`]: LockedList::get
/// [`view`]: LockedList::view
/// [`alter`]: LockedList::alter
///
/// # Examples
///
/// ```
/// use indexed_list::LockedList;
///
/// let list = LockedList::new();
/// list.push_back(1);
/// list.push_back(2);
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(1), Some(2));
///
/// list.alter(0, |value| *value += 10);
/// assert_eq!(list.front(), Some(11));
/// ```
pub struct LockedList<T> {
    inner: CachePadded<RwLock<LinkedList<T>>>,
}

impl<T> LockedList<T> {
    /// Creates a new, empty guarded list.
    pub const fn new() -> Self {
        LockedList {
            inner: CachePadded::new(RwLock::new(LinkedList::new())),
        }
    }

    /// Returns the number of elements in the list.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns `true` if the list holds no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Runs a closure against the element at `index` under the read lock.
    ///
    /// Returns `None` without invoking the closure when `index` is past the
    /// end. The closure runs while the read lock is held and should finish
    /// quickly without blocking.
    pub fn view<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&T) -> R,
    {
        let list = self.inner.read();
        list.get(index).map(f)
    }

    /// Updates the element at `index` in place under the write lock.
    ///
    /// Returns `None` without invoking the closure when `index` is past the
    /// end, otherwise the closure's result. The closure runs while the write
    /// lock is held and should finish quickly without blocking.
    pub fn alter<F, R>(&self, index: usize, f: F) -> Option<R>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut list = self.inner.write();
        list.get_mut(index).map(f)
    }

    /// Adds an element at the front of the list.
    pub fn push_front(&self, element: T) {
        self.inner.write().push_front(element);
    }

    /// Adds an element at the back of the list.
    pub fn push_back(&self, element: T) {
        self.inner.write().push_back(element);
    }

    /// Replaces the element at `index` and returns the displaced one.
    ///
    /// Same strict bounds policy as [`LinkedList::set`]: every `index >= len`
    /// fails, and a failed call leaves the list untouched.
    pub fn set(&self, index: usize, element: T) -> Result<T, IndexOutOfRangeError> {
        self.inner.write().set(index, element)
    }

    /// Removes and returns the first element, or `None` if the list is
    /// empty.
    pub fn pop_front(&self) -> Option<T> {
        self.inner.write().pop_front()
    }

    /// Removes and returns the last element, or `None` if the list is empty.
    pub fn pop_back(&self) -> Option<T> {
        self.inner.write().pop_back()
    }

    /// Removes and returns the element at `index`, failing with
    /// [`IndexOutOfRangeError`] when `index >= len`.
    pub fn remove(&self, index: usize) -> Result<T, IndexOutOfRangeError> {
        self.inner.write().remove(index)
    }

    /// Removes every element from the list.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Builds a new guarded list by applying `transform` to every element in
    /// forward order.
    ///
    /// The read lock on the source is held for the whole pass, so the result
    /// reflects one consistent snapshot; concurrent readers may proceed
    /// while it runs, writers wait. The closure must not call back into this
    /// list.
    pub fn map<U, F>(&self, transform: F) -> LockedList<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        let list = self.inner.read();
        LockedList::from(list.map(transform))
    }

    /// Unwraps the guard, returning the plain [`LinkedList`].
    pub fn into_inner(self) -> LinkedList<T> {
        self.inner.into_inner().into_inner()
    }
}

impl<T: Clone> LockedList<T> {
    /// Returns a clone of the first element, or `None` if the list is empty.
    pub fn front(&self) -> Option<T> {
        self.inner.read().front().cloned()
    }

    /// Returns a clone of the last element, or `None` if the list is empty.
    pub fn back(&self) -> Option<T> {
        self.inner.read().back().cloned()
    }

    /// Returns a clone of the element at `index`, or `None` if `index` is
    /// past the end.
    pub fn get(&self, index: usize) -> Option<T> {
        self.view(index, |element| element.clone())
    }

    /// Builds a new guarded list holding clones of the elements that satisfy
    /// `predicate`, in their original order.
    ///
    /// The index handed to the closure is the element's position in the
    /// source list. The read lock on the source is held for the whole pass,
    /// and the closure must not call back into this list.
    pub fn filter<F>(&self, predicate: F) -> LockedList<T>
    where
        F: FnMut(&T, usize) -> bool,
    {
        let list = self.inner.read();
        LockedList::from(list.filter(predicate))
    }
}

impl<T> Default for LockedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<LinkedList<T>> for LockedList<T> {
    fn from(list: LinkedList<T>) -> Self {
        LockedList {
            inner: CachePadded::new(RwLock::new(list)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LockedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self.inner.read();
        fmt::Debug::fmt(&*list, f)
    }
}
