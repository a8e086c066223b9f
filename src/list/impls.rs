use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Reuses the nodes already in `self`, cloning into them in place, and
    /// only allocates for the elements `self` is short of.
    fn clone_from(&mut self, other: &Self) {
        while self.len() > other.len() {
            self.pop();
        }
        let mut source = other.iter();
        for (elem, elem_other) in self.iter_mut().zip(&mut source) {
            elem.clone_from(elem_other);
        }
        self.extend(source.cloned());
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    /// Converts a `[T; N]` into a `List<T>`, keeping the array order.
    ///
    /// ```
    /// use dlist::List;
    ///
    /// let list = List::from([1, 2, 3]);
    /// assert_eq!(list.front(), Some(&1));
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}
