//! This crate provides a doubly-linked list with owned nodes, indexed access
//! and nearest-end traversal.
//!
//! The [`List`] keeps a link to each of its ends and its length, so it works
//! as a stack ([`push`]/[`pop`]) and as a deque in *O*(1) time. Any other
//! position is reached by walking from whichever end is nearer, which takes
//! *O*(min(*i*, *n* - *i*)) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use dlist::List;
//!
//! let mut list = List::new();
//! list.push(1);
//! list.push(2);
//! list.push(3);
//! assert_eq!(list.braced().to_string(), "{1, 2, 3}");
//!
//! list.add(1, 9).unwrap(); // insert 9 at position 1
//! assert_eq!(list.braced().to_string(), "{1, 9, 2, 3}");
//!
//! assert_eq!(list.remove(0), Some(1));
//! assert_eq!(list.braced().to_string(), "{9, 2, 3}");
//!
//! list.rotate(); // the back element moves to the front
//! assert_eq!(list.braced().to_string(), "{3, 9, 2}");
//!
//! assert_eq!(list.pop(), Some(2));
//! assert_eq!(list.braced().to_string(), "{3, 9}");
//! ```
//!
//! # Memory Layout
//!
//! The memory layout of the list is like the following graph:
//! ```text
//!      ╔═══════════╗           ╔═══════════╗                      ╔═══════════╗
//!      ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ──────→ ║   next    ║ ─→ ∅
//!      ╟───────────╢           ╟───────────╢   Node 2, 3, ...     ╟───────────╢
//! ∅ ←─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←────── ║   prev    ║
//!      ╟───────────╢           ╟───────────╢                      ╟───────────╢
//!      ║ payload T ║           ║ payload T ║                      ║ payload T ║
//!      ╚═══════════╝           ╚═══════════╝                      ╚═══════════╝
//!          Node 0                  Node 1                           Node n - 1
//!            ↑                                                          ↑
//!      ╔═══════════╗                                                    │
//!      ║   head    ║                                                    │
//!      ╟───────────╢                                                    │
//!      ║   tail    ║ ───────────────────────────────────────────────────┘
//!      ╟───────────╢
//!      ║    len    ║
//!      ╚═══════════╝
//!          List
//! ```
//!
//! Each node of the list `List<T>` is allocated on heap, and the list owns all
//! of them. A node is released exactly once: when it is removed, or when the
//! list is dropped.
//!
//! In an empty list both `head` and `tail` are absent; in a list of one
//! element they point to the same node. [`List::validate`] checks these link
//! invariants.
//!
//! # Errors
//!
//! Reading or removing a missing position returns `None`. Inserting past the
//! end of a non-empty list is rejected with
//! [`ListError::InvalidInsertionIndex`] and leaves the list unchanged.
//!
//! ```
//! use dlist::{List, ListError};
//!
//! let mut list = List::from([1, 2]);
//! assert_eq!(list.get(2), None);
//! assert_eq!(list.remove(2), None);
//! assert_eq!(
//!     list.add(3, 0),
//!     Err(ListError::InvalidInsertionIndex { index: 3, len: 2 })
//! );
//! ```
//!
//! # Cursors
//!
//! [`Cursor`] and [`CursorMut`] are positional views of a list. In a list
//! with length *n*, there are *n* + 1 valid positions for a cursor, where *n*
//! is the end position. [`CursorMut`] inserts and removes at its position in
//! *O*(1) time.
//!
//! ```
//! use dlist::List;
//!
//! let mut list = List::from([1, 2, 3, 4]);
//! let mut cursor = list.cursor_mut(2).unwrap();
//!
//! assert_eq!(cursor.remove(), Some(3)); // becomes [1, 2, 4], points to 4
//! cursor.insert(5); // becomes [1, 2, 5, 4], still points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(Vec::from_iter(list), vec![1, 2, 5, 4]);
//! ```
//!
//! [`push`]: crate::List::push
//! [`pop`]: crate::List::pop
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut

#[doc(inline)]
pub use display::Braced;
#[doc(inline)]
pub use error::{LinkError, ListError};
#[doc(inline)]
pub use list::cursor::{Cursor, CursorMut};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::List;

pub mod display;
pub mod error;
pub mod list;
