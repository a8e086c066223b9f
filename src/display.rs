//! Brace-delimited formatting of a list, `{e0, e1, ..., en}`.
//!
//! Numbers and characters are written as they are, text is quoted:
//!
//! ```
//! use dlist::List;
//!
//! assert_eq!(List::from([1, 2, 3]).braced().to_string(), "{1, 2, 3}");
//! assert_eq!(List::from(['x', 'y']).braced().to_string(), "{x, y}");
//! assert_eq!(List::from(["a", "b"]).braced_quoted().to_string(), r#"{"a", "b"}"#);
//! assert_eq!(List::<u8>::new().braced().to_string(), "{}");
//! ```

use crate::List;
use std::fmt;

/// Displays the elements of a [`List`] between braces, separated by `, `.
///
/// This `struct` is created by [`List::braced`] and [`List::braced_quoted`].
#[derive(Debug)]
pub struct Braced<'a, T> {
    list: &'a List<T>,
    quoted: bool,
}

impl<T> Clone for Braced<'_, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T> List<T> {
    /// Formats the list as `{e0, e1, ..., en}`.
    pub fn braced(&self) -> Braced<'_, T> {
        Braced {
            list: self,
            quoted: false,
        }
    }

    /// Formats the list as `{"e0", "e1", ..., "en"}`.
    ///
    /// Elements are wrapped in double quotes as they are, without escaping.
    pub fn braced_quoted(&self) -> Braced<'_, T> {
        Braced {
            list: self,
            quoted: true,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Braced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, elt) in self.list.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if self.quoted {
                write!(f, "\"{}\"", elt)?;
            } else {
                write!(f, "{}", elt)?;
            }
        }
        f.write_str("}")
    }
}
