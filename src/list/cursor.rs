use crate::error::ListError;
use crate::list::{Link, List, Node};
use std::fmt;
use std::fmt::Formatter;

/// A cursor over a `List`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid positions for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is the end position that holds no
/// element.
///
/// # Examples
///
/// Here is a simple example showing how the cursors work. (The end position
/// of the list is denoted by `#`).
/// ```
/// use dlist::List;
///
/// // Create a list: [ A B C D #]
/// let list = List::from(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #] (index = 0)
/// let mut cursor = list.cursor_start();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // Move cursor forward: [ A|B C D #] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Create a cursor in the end: [ A B C D|#] (index = 4)
/// let mut cursor = list.cursor_end();
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // Move cursor backward: [ A B C|D #] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: Link<T>,
    list: &'a List<T>,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

/// A cursor over a `List` with editing operations.
///
/// A `CursorMut` is like an iterator, except that it can freely seek back-and-forth,
/// and can safely mutate the list during iteration. This is because the lifetime of
/// its yielded references is tied to its own lifetime, instead of just the underlying
/// list. This means cursors cannot yield multiple elements at once.
///
/// # Examples
///
/// ```compile_fail
/// use dlist::List;
///
/// let mut list = List::from([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// println!("{:?}", list.back());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: Link<T>,
    list: &'a mut List<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        // Private methods
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn prev_node(&self) -> Link<T> {
                match self.current {
                    // SAFETY: `current` is a node of the list.
                    Some(node) => unsafe { node.as_ref().prev },
                    None => self.list.tail,
                }
            }
        }

        impl<'a, T: 'a> $CURSOR<'a, T> {
            /// Return the index of the cursor
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns the length of the `List`. See [`List::len`].
            pub fn len(&self) -> usize {
                self.list.len()
            }

            /// Returns `true` if the `List` is empty. See [`List::is_empty`].
            pub fn is_empty(&self) -> bool {
                self.list.is_empty()
            }

            /// Returns `true` if the cursor is at the end position.
            pub fn is_end(&self) -> bool {
                self.current.is_none()
            }

            /// Move the cursor to the next position, or return an error
            /// if it is already at the end position.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_next(&mut self) -> Result<(), ListError> {
                let current = self.current.ok_or(ListError::IndexOutOfRange {
                    index: self.index + 1,
                    len: self.list.len(),
                })?;
                // SAFETY: `current` is a node of the list.
                self.current = unsafe { current.as_ref().next };
                self.index += 1;
                Ok(())
            }

            /// Move the cursor to the previous position, or return an error
            /// if it is already at the first position.
            ///
            /// This operation should compute in *O*(*1*) time.
            pub fn move_prev(&mut self) -> Result<(), ListError> {
                if self.index == 0 {
                    return Err(ListError::IndexOutOfRange {
                        index: self.index.wrapping_sub(1),
                        len: self.list.len(),
                    });
                }
                self.current = self.prev_node();
                self.index -= 1;
                Ok(())
            }

            /// Move the cursor to the given position `target`, or return an error
            /// when `target > len`, leaving the cursor where it was.
            ///
            /// The walk starts from whichever of the current position, the
            /// first element and the end position is nearest to `target`.
            ///
            /// This operation should compute in *O*(min(*d*, *t*, *n* - *t*)) time,
            /// where *d* is the distance between the cursor and `target`.
            ///
            /// # Examples
            ///
            /// ```
            /// use dlist::List;
            ///
            /// let list = List::from([1, 2, 3, 4, 5]);
            /// let mut cursor = list.cursor_start();
            ///
            /// assert!(cursor.seek_to(3).is_ok());
            /// assert_eq!(cursor.current(), Some(&4));
            ///
            /// assert!(cursor.seek_to(6).is_err());
            /// assert_eq!(cursor.index(), 3);
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<(), ListError> {
                let len = self.list.len();
                if target > len {
                    return Err(ListError::IndexOutOfRange { index: target, len });
                }
                let from_here = self.index.abs_diff(target);
                let from_end = len - target;
                // current=c, target=t, end=#
                if from_here > target || from_here > from_end {
                    if target <= from_end {
                        // [-->t      c #]
                        self.move_to_start();
                    } else {
                        // [ c      t<--#]
                        self.move_to_end();
                    }
                }
                while self.index < target {
                    self.move_next()?;
                }
                while self.index > target {
                    self.move_prev()?;
                }
                Ok(())
            }

            #[inline]
            pub fn move_to_start(&mut self) {
                self.index = 0;
                self.current = self.list.head;
            }

            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = None;
            }

            /// Provides a reference to the element just before the cursor, or
            /// `None` if the cursor is at the first position.
            pub fn previous(&self) -> Option<&T> {
                // SAFETY: `prev_node` is either absent or a node of the list.
                self.prev_node()
                    .map(|node| unsafe { &(*node.as_ptr()).element })
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("current", &self.current())
                    .field("index", &self.index)
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(list: &'a List<T>, current: Link<T>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Provides a reference to the element at the cursor, or `None` at the end
    /// position.
    ///
    /// The reference lives as long as the list borrow, not the cursor.
    pub fn current(&self) -> Option<&'a T> {
        // SAFETY: `current` is either absent or a node of the list.
        self.current
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: Link<T>, index: usize) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Provides a reference to the element at the cursor, or `None` at the end
    /// position.
    pub fn current(&self) -> Option<&T> {
        // SAFETY: `current` is either absent or a node of the list.
        self.current
            .map(|node| unsafe { &(*node.as_ptr()).element })
    }

    /// Provides a mutable reference to the element at the cursor, or `None` at
    /// the end position.
    pub fn current_mut(&mut self) -> Option<&mut T> {
        // SAFETY: `current` is either absent or a node of the list, and the
        // list is borrowed mutably through `self`.
        self.current
            .map(|node| unsafe { &mut (*node.as_ptr()).element })
    }

    /// Temporarily views the list being edited.
    pub fn view(&self) -> &List<T> {
        self.list
    }

    /// Inserts an element before the cursor. The cursor keeps pointing at the
    /// same element (or the end position), whose index grows by one.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(9);
    /// assert_eq!(cursor.current(), Some(&2));
    /// assert_eq!(cursor.index(), 2);
    ///
    /// cursor.move_to_end();
    /// cursor.insert(4);
    /// assert_eq!(cursor.view(), &List::from([1, 9, 2, 3, 4]));
    /// ```
    pub fn insert(&mut self, elt: T) {
        let prev = self.prev_node();
        // SAFETY: `prev` and `current` are adjacent positions of the list.
        unsafe {
            self.list
                .attach_node(prev, self.current, Node::new_detached(elt))
        };
        self.index += 1;
    }

    /// Removes the element at the cursor and returns it, or returns `None`
    /// at the end position. The cursor moves to the following element.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(2));
    /// assert_eq!(cursor.current(), Some(&3));
    /// assert_eq!(cursor.remove(), Some(3));
    /// assert_eq!(cursor.remove(), None);
    /// assert_eq!(cursor.view(), &List::from([1]));
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let node = self.current?;
        // SAFETY: `node` is a node of the list, and its successor is read before
        // it is released.
        unsafe {
            self.current = node.as_ref().next;
            Some(self.list.detach_node(node).into_element())
        }
    }
}

unsafe impl<T: Sync> Send for Cursor<'_, T> {}

unsafe impl<T: Sync> Sync for Cursor<'_, T> {}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}
