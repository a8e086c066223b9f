use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::{LinkError, ListError};
use crate::list::cursor::{Cursor, CursorMut};
use crate::{IntoIter, Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod impls;

/// The `List` is a doubly-linked list with owned nodes.
///
/// It keeps references to both of its ends and its length, so pushing and
/// popping at the back, or inserting and removing at the front, take *O*(1)
/// time. Every other position is reached by walking from whichever end is
/// nearer, which takes *O*(min(*i*, *n* - *i*)) time.
///
/// The `List` contains:
/// - `head`, a link to the first node, absent when the list is empty;
/// - `tail`, a link to the last node, absent when the list is empty;
/// - `len`, the number of elements.
///
/// # Naming Conventions
///
/// - `front`/`back`: the first and the last element;
/// - `prev`/`next`: the neighbours of a node, absent at the list boundary.
pub struct List<T> {
    head: Link<T>,
    tail: Link<T>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

pub(crate) struct Node<T> {
    pub(crate) next: Link<T>,
    pub(crate) prev: Link<T>,
    pub(crate) element: T,
}

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

// private methods
impl<T> List<T> {
    /// Find the node at `index`, walking from the nearer end of the list.
    ///
    /// Returns `None` if `index >= len`.
    pub(crate) fn node_at(&self, index: usize) -> Link<T> {
        if index >= self.len {
            return None;
        }
        if index > self.len - index {
            // [ ...    i<---back]
            let steps = self.len - index - 1;
            // SAFETY: `index < len`, so every step lands on a node of the list.
            (0..steps).try_fold(self.tail?, |node, _| unsafe { node.as_ref().prev })
        } else {
            // [front--->i    ... ]
            // SAFETY: `index < len`, so every step lands on a node of the list.
            (0..index).try_fold(self.head?, |node, _| unsafe { node.as_ref().next })
        }
    }

    /// Attach a detached `node` to the list, between `prev` and `next`, where
    /// `None` stands for the boundary of the list.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belong
    /// to the list, or whether they are adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    ///
    /// If `prev` and `next` do not belong to the list, or they are not
    /// adjacent, this function call will make the list ill-formed.
    pub(crate) unsafe fn attach_node(&mut self, prev: Link<T>, next: Link<T>, mut node: NonNull<Node<T>>) {
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, next);
        node.as_mut().prev = prev;
        node.as_mut().next = next;
        match prev {
            Some(mut prev) => prev.as_mut().next = Some(node),
            None => self.head = Some(node),
        }
        match next {
            Some(mut next) => next.as_mut().prev = Some(node),
            None => self.tail = Some(node),
        }
        self.len += 1;
    }

    /// Unlink `node` from its neighbours, leaving the allocation alive.
    ///
    /// Only the links that exist are touched, so removing either end of a
    /// two-element list never reads through an absent link. The links stored
    /// in `node` itself are stale afterwards.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    pub(crate) unsafe fn unlink_node(&mut self, node: NonNull<Node<T>>) {
        let (prev, next) = (node.as_ref().prev, node.as_ref().next);
        match prev {
            Some(mut prev) => prev.as_mut().next = next,
            None => self.head = next,
        }
        match next {
            Some(mut next) => next.as_mut().prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        self.unlink_node(node);
        Box::from_raw(node.as_ptr())
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: Link<T>, next: Link<T>) {
        unsafe {
            match prev {
                Some(prev) => assert_eq!(prev.as_ref().next, next),
                None => assert_eq!(self.head, next),
            }
            match next {
                Some(next) => assert_eq!(next.as_ref().prev, prev),
                None => assert_eq!(self.tail, prev),
            }
        }
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use dlist::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the length of the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Removes all elements from the `List`, dropping them front to back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is a node owned by the list.
        self.head.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the front element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `head` is a node owned by the list, and the list is borrowed mutably.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        // SAFETY: `tail` is a node owned by the list.
        self.tail.map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the back element, or `None` if the list
    /// is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `tail` is a node owned by the list, and the list is borrowed mutably.
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Provides a reference to the element at `index`, or `None` if
    /// `index >= len`.
    ///
    /// The walk starts from the front when `index <= len - index`, and from
    /// the back otherwise.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.get(0), Some(&1));
    /// assert_eq!(list.get(2), Some(&3));
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> {
        // SAFETY: `node_at` only returns nodes owned by the list.
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at `index`, or `None` if
    /// `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// if let Some(x) = list.get_mut(1) {
    ///     *x *= 10;
    /// }
    /// assert_eq!(list, List::from([1, 20, 3]));
    /// ```
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        // SAFETY: `node_at` only returns nodes owned by the list, and the list
        // is borrowed mutably.
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Replaces the element at `index` and returns the old one.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::from(['a', 'b']);
    /// assert_eq!(list.set(1, 'c'), Ok('b'));
    /// assert_eq!(
    ///     list.set(2, 'd'),
    ///     Err(ListError::IndexOutOfRange { index: 2, len: 2 })
    /// );
    /// assert_eq!(list, List::from(['a', 'c']));
    /// ```
    pub fn set(&mut self, index: usize, elt: T) -> Result<T, ListError> {
        let len = self.len;
        let slot = self
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;
        Ok(mem::replace(slot, elt))
    }

    /// Inserts an element so that it ends up at position `index`, shifting
    /// the element previously there (if any) one position back.
    ///
    /// - On an empty list the element becomes the only one, whatever `index` is;
    /// - `index == len` appends, like [`List::push`];
    /// - `index == 0` prepends, like [`List::push_front`];
    /// - otherwise the node at `index` is found by walking from the nearer end
    ///   and the new node is spliced in before it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInsertionIndex`] if `index > len` on a
    /// non-empty list. The list is left untouched.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::{List, ListError};
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// list.add(1, 9).unwrap();
    /// list.add(4, 5).unwrap();
    /// assert_eq!(list, List::from([1, 9, 2, 3, 5]));
    ///
    /// assert_eq!(
    ///     list.add(7, 0),
    ///     Err(ListError::InvalidInsertionIndex { index: 7, len: 5 })
    /// );
    /// ```
    pub fn add(&mut self, index: usize, elt: T) -> Result<(), ListError> {
        let len = self.len;
        if len == 0 || index == len {
            self.push(elt);
        } else if index == 0 {
            self.push_front(elt);
        } else {
            let next = self
                .node_at(index)
                .ok_or(ListError::InvalidInsertionIndex { index, len })?;
            // SAFETY: `next` belongs to the list and `next.prev` is its neighbour.
            unsafe {
                let prev = next.as_ref().prev;
                self.attach_node(prev, Some(next), Node::new_detached(elt));
            }
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it, or returns `None` if
    /// `index >= len` (which includes every index of an empty list).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    ///
    /// assert_eq!(list.remove(1), Some(2));
    /// assert_eq!(list.remove(5), None);
    /// assert_eq!(list.remove(0), Some(1));
    /// assert_eq!(list.remove(0), Some(3));
    /// assert_eq!(list.remove(0), None);
    /// ```
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        if index == self.len - 1 {
            return self.pop();
        }
        if index == 0 {
            return self.pop_front();
        }
        let node = self.node_at(index)?;
        // SAFETY: `node` belongs to the list.
        Some(unsafe { self.detach_node(node) }.into_element())
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        // SAFETY: the boundary and `head` are adjacent.
        unsafe { self.attach_node(None, self.head, Node::new_detached(elt)) }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.head?;
        // SAFETY: `head` belongs to the list.
        Some(unsafe { self.detach_node(front) }.into_element())
    }

    /// Appends an element to the back of the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// list.push(1);
    /// list.push(3);
    /// assert_eq!(list.back(), Some(&3));
    /// assert_eq!(list.get(0), Some(&1));
    /// ```
    pub fn push(&mut self, elt: T) {
        // SAFETY: `tail` and the boundary are adjacent.
        unsafe { self.attach_node(self.tail, None, Node::new_detached(elt)) }
    }

    /// Removes the last element and returns it, or `None` if the list is
    /// empty.
    ///
    /// Popping the only element clears both ends of the list; otherwise the
    /// previous node becomes the back.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop(), None);
    /// list.push(1);
    /// list.push(3);
    /// assert_eq!(list.pop(), Some(3));
    /// assert_eq!(list.pop(), Some(1));
    /// assert!(list.is_empty());
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        let back = self.tail?;
        // SAFETY: `tail` belongs to the list.
        Some(unsafe { self.detach_node(back) }.into_element())
    }

    /// Moves the back element to the front. Does nothing if the list has
    /// fewer than two elements.
    ///
    /// This is the same as `list.add(0, list.remove(list.len() - 1))`, but
    /// the node is relinked instead of being reallocated.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.rotate();
    /// assert_eq!(list, List::from([3, 1, 2]));
    /// ```
    pub fn rotate(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(back) = self.tail {
            // SAFETY: `back` belongs to the list; once unlinked, the boundary and
            // `head` are adjacent.
            unsafe {
                self.unlink_node(back);
                self.attach_node(None, self.head, back);
            }
        }
    }

    /// Moves the front element to the back, undoing [`List::rotate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.rotate_back();
    /// assert_eq!(list, List::from([2, 3, 1]));
    /// ```
    pub fn rotate_back(&mut self) {
        if self.len < 2 {
            return;
        }
        if let Some(front) = self.head {
            // SAFETY: `front` belongs to the list; once unlinked, `tail` and the
            // boundary are adjacent.
            unsafe {
                self.unlink_node(front);
                self.attach_node(self.tail, None, front);
            }
        }
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1, List::from(['a', 'b', 'c']));
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        match (self.tail, other.head) {
            (_, None) => {}
            (None, Some(_)) => mem::swap(self, other),
            (Some(mut back), Some(mut front)) => {
                // SAFETY: `back` is the last node of `self` and `front` the first
                // node of `other`; both lists give up the boundary between them.
                unsafe {
                    back.as_mut().next = Some(front);
                    front.as_mut().prev = Some(back);
                }
                self.tail = other.tail.take();
                other.head = None;
                self.len += mem::replace(&mut other.len, 0);
            }
        }
    }

    /// Provides a cursor at the given position.
    ///
    /// By convention, the cursor is at the end position (with no current
    /// element) if `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>, ListError> {
        let mut cursor = self.cursor_start();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor at the first element, or at the end position if the
    /// list is empty.
    pub fn cursor_start(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head, 0)
    }

    /// Provides a cursor at the end position.
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self, None, self.len)
    }

    /// Provides a cursor with editing operations at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfRange`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>, ListError> {
        let mut cursor = self.cursor_start_mut();
        cursor.seek_to(at)?;
        Ok(cursor)
    }

    /// Provides a cursor with editing operations at the first element, or at
    /// the end position if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let head = self.head;
        CursorMut::new(self, head, 0)
    }

    /// Provides a cursor with editing operations at the end position.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let len = self.len;
        CursorMut::new(self, None, len)
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([0, 1, 2]);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides a forward iterator with mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([0, 1, 2]);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, List::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// Walks the whole chain and checks the link invariants: the ends have no
    /// outer links, every `next` link is mirrored by a `prev` link, the last
    /// reachable node is `tail`, and exactly `len` nodes are reachable.
    ///
    /// # Errors
    ///
    /// Returns the first broken invariant as a [`LinkError`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2]);
    /// list.remove(0);
    /// assert_eq!(list.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), LinkError> {
        let (front, back) = match (self.head, self.tail) {
            (None, None) if self.len == 0 => return Ok(()),
            (None, None) => {
                return Err(LinkError::LengthMismatch {
                    expected: self.len,
                    actual: 0,
                })
            }
            (Some(front), Some(back)) => (front, back),
            _ => return Err(LinkError::BackMismatch),
        };
        // SAFETY: every node reachable from `head` is owned by the list, and the
        // walk stops as soon as more than `len` nodes were seen.
        unsafe {
            if front.as_ref().prev.is_some() {
                return Err(LinkError::FrontHasPrev);
            }
            if back.as_ref().next.is_some() {
                return Err(LinkError::BackHasNext);
            }
            let mut count = 1;
            let mut node = front;
            while let Some(next) = node.as_ref().next {
                if next.as_ref().prev != Some(node) {
                    return Err(LinkError::BrokenBackLink { index: count - 1 });
                }
                count += 1;
                if count > self.len {
                    return Err(LinkError::LengthMismatch {
                        expected: self.len,
                        actual: count,
                    });
                }
                node = next;
            }
            if node != back {
                return Err(LinkError::BackMismatch);
            }
            if count != self.len {
                return Err(LinkError::LengthMismatch {
                    expected: self.len,
                    actual: count,
                });
            }
        }
        Ok(())
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are absent until
    /// it is attached to a list.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        NonNull::from(Box::leak(Box::new(Node {
            next: None,
            prev: None,
            element,
        })))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
    fn c<'a>(x: IntoIter<&'static str>) -> IntoIter<&'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use crate::list::List;
    use std::cell::RefCell;

    fn assert_list<T: std::fmt::Debug + Clone + PartialEq>(list: &List<T>, expected: &[T]) {
        assert_eq!(list.validate(), Ok(()));
        assert_eq!(list.len(), expected.len());
        assert_eq!(list.iter().cloned().collect::<Vec<_>>(), expected);
        assert_eq!(list.iter().rev().count(), expected.len());
    }

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert_eq!(list.validate(), Ok(()));
        list.push(1);
        assert!(!list.is_empty());
        assert_eq!(list.pop(), Some(1));
        assert!(list.is_empty());
        assert_eq!(list.validate(), Ok(()));
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push(DropChecker::new(1, &dropped));
        list.push(DropChecker::new(2, &dropped));
        list.push(DropChecker::new(3, &dropped));
        list.push(DropChecker::new(4, &dropped));
        let removed = list.remove(1);
        assert_eq!(dropped.borrow().as_slice(), &[] as &[i32]);
        drop(removed);
        assert_eq!(dropped.borrow().as_slice(), &[2]);
        list.rotate();
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[2, 4, 1, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop(), None);

        list.push(1);
        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.back(), Some(&1));
        assert_list(&list, &[1]);
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop(), None);
        assert_list(&list, &[]);

        list.push_front(1);
        list.push_front(2);
        list.push(3);
        assert_list(&list, &[2, 1, 3]);
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop(), Some(3));
        assert_list(&list, &[1]);

        *list.front_mut().unwrap() = 7;
        assert_eq!(list.back_mut(), Some(&mut 7));
        assert_eq!(list.pop(), Some(7));
        assert_list(&list, &[]);
    }

    #[test]
    fn list_get_from_both_ends() {
        let list: List<_> = (0..9).collect();
        for i in 0..9 {
            assert_eq!(list.get(i), Some(&i));
        }
        assert_eq!(list.get(9), None);
        assert_eq!(list.get(usize::MAX), None);

        let list: List<_> = (0..8).collect();
        for i in 0..8 {
            assert_eq!(list.get(i), Some(&i));
        }

        let empty = List::<i32>::new();
        assert_eq!(empty.get(0), None);
    }

    #[test]
    fn list_add() {
        let mut list = List::new();
        // any index goes on an empty list
        list.add(42, 'b').unwrap();
        assert_list(&list, &['b']);
        list.add(0, 'a').unwrap();
        list.add(2, 'd').unwrap();
        list.add(2, 'c').unwrap();
        assert_list(&list, &['a', 'b', 'c', 'd']);
        list.add(3, 'x').unwrap();
        list.add(1, 'y').unwrap();
        assert_list(&list, &['a', 'y', 'b', 'c', 'x', 'd']);

        assert_eq!(
            list.add(7, 'z'),
            Err(ListError::InvalidInsertionIndex { index: 7, len: 6 })
        );
        assert_eq!(
            list.add(usize::MAX, 'z'),
            Err(ListError::InvalidInsertionIndex {
                index: usize::MAX,
                len: 6
            })
        );
        assert_list(&list, &['a', 'y', 'b', 'c', 'x', 'd']);
    }

    #[test]
    fn list_remove() {
        let mut list: List<_> = (0..10).collect();
        assert_eq!(list.remove(10), None);
        assert_eq!(list.remove(9), Some(9));
        assert_eq!(list.remove(0), Some(0));
        assert_eq!(list.remove(2), Some(3));
        assert_eq!(list.remove(5), Some(7));
        assert_list(&list, &[1, 2, 4, 5, 6, 8]);

        let mut empty = List::<i32>::new();
        assert_eq!(empty.remove(0), None);
        assert_list(&empty, &[]);
    }

    #[test]
    fn list_remove_front_of_two() {
        let mut list = List::from([1, 2]);
        assert_eq!(list.remove(0), Some(1));
        assert_list(&list, &[2]);
        assert_eq!(list.front(), list.back());
        list.push(3);
        assert_list(&list, &[2, 3]);
        assert_eq!(list.remove(0), Some(2));
        assert_eq!(list.remove(0), Some(3));
        assert_list(&list, &[]);
    }

    #[test]
    fn list_set() {
        let mut list = List::from([1, 2, 3]);
        assert_eq!(list.set(2, 30), Ok(3));
        assert_eq!(
            list.set(3, 40),
            Err(ListError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_list(&list, &[1, 2, 30]);
    }

    #[test]
    fn list_rotate() {
        let mut list = List::<i32>::new();
        list.rotate();
        list.rotate_back();
        assert_list(&list, &[]);

        list.push(1);
        list.rotate();
        list.rotate_back();
        assert_list(&list, &[1]);

        list.push(2);
        list.rotate();
        assert_list(&list, &[2, 1]);

        let mut list: List<_> = (0..5).collect();
        list.rotate();
        assert_list(&list, &[4, 0, 1, 2, 3]);
        list.rotate_back();
        list.rotate_back();
        assert_list(&list, &[1, 2, 3, 4, 0]);
        for _ in 0..4 {
            list.rotate();
        }
        assert_list(&list, &[2, 3, 4, 0, 1]);
    }

    #[test]
    fn list_scenario() {
        let mut list = List::new();
        list.push(1);
        list.push(2);
        list.push(3);
        assert_list(&list, &[1, 2, 3]);
        list.add(1, 9).unwrap();
        assert_list(&list, &[1, 9, 2, 3]);
        assert_eq!(list.remove(0), Some(1));
        assert_list(&list, &[9, 2, 3]);
        list.rotate();
        assert_list(&list, &[3, 9, 2]);
        assert_eq!(list.pop(), Some(2));
        assert_list(&list, &[3, 9]);
    }

    #[test]
    fn list_append() {
        let mut list: List<_> = (0..3).collect();
        let mut other: List<_> = (3..6).collect();
        list.append(&mut other);
        assert_list(&list, &[0, 1, 2, 3, 4, 5]);
        assert_list(&other, &[]);

        let mut empty = List::new();
        empty.append(&mut list);
        assert_list(&empty, &[0, 1, 2, 3, 4, 5]);
        assert_list(&list, &[]);

        empty.append(&mut list);
        assert_list(&empty, &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn list_clear() {
        let mut list: List<_> = (0..5).collect();
        list.clear();
        assert_list(&list, &[]);
        list.push(1);
        assert_list(&list, &[1]);
    }
}
