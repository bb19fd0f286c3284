use core::ops::{Index, IndexMut, Range};

use crate::error::{ListError, Result};

use super::{
    cursor::{Cursor, CursorMut},
    iter::{IntoIter, Iter, IterMut},
    node::{Chain, Node, drop_chain},
    traits::{Link, Slot},
};

/// An owned, singly linked list.
///
/// The list owns its chain of nodes from the head slot and caches the
/// number of nodes, so [`List::len`] is O(1) while positional access is O(n).
pub struct List<T> {
    pub(crate) head: Chain<T>,
    pub(crate) len: usize,
}

/// Builds a [`List`] from its elements, in the order given.
///
/// ```
/// let list = lst::list![5, 6, 7];
/// assert_eq!(list.front(), Ok(&5));
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from([$($value),+])
    };
}

impl<T> List<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        List { head: None, len: 0 }
    }

    /// Get the number of elements in the list
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Alias of [`List::len`]
    #[inline]
    pub fn size(&self) -> usize {
        self.len
    }

    /// Check if the list is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves the whole chain out, leaving `self` a valid empty list.
    pub fn take(&mut self) -> Self {
        core::mem::take(self)
    }

    /// Exchanges the chains of two lists without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        log::trace!("clearing list of {} elements", self.len);
        drop_chain(self.head.take());
        self.len = 0;
    }

    /// Inserts `value` so that it ends up at position `index`.
    ///
    /// `index == len` appends. Fails without touching the list when `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        self.link_at(index)
            .expect("chain is shorter than the recorded length")
            .push_link(value);
        self.len += 1;
        Ok(())
    }

    /// Appends `value` after the last element.
    pub fn push_back(&mut self, value: T) {
        let len = self.len;
        self.link_at(len)
            .expect("chain is shorter than the recorded length")
            .push_link(value);
        self.len += 1;
    }

    /// Prepends `value` in front of the first element.
    pub fn push_front(&mut self, value: T) {
        self.head.push_link(value);
        self.len += 1;
    }

    /// Removes the last element and returns it, or `None` if the list is empty.
    pub fn pop(&mut self) -> Option<T> {
        let last = self.len.checked_sub(1)?;
        self.pop_at(last).ok()
    }

    /// Removes the first element and returns it, or `None` if the list is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.head.pop_link()?;
        self.len -= 1;
        Some(value)
    }

    /// Removes and returns the element at `index`.
    pub fn pop_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        let value = self
            .link_at(index)
            .and_then(|link| link.pop_link())
            .expect("chain is shorter than the recorded length");
        self.len -= 1;
        Ok(value)
    }

    /// Removes every element equal to `value`, returning how many were removed.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.retain(|current| current != value)
    }

    /// Keeps only the elements for which `keep` returns `true`, preserving their order.
    ///
    /// Returns the number of removed elements.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        // Nodes are unlinked one at a time after `keep` returns, so a panicking
        // predicate leaves the chain and its length in step.
        let mut cursor = self.cursor_mut();
        let mut removed = 0;
        while let Some(value) = cursor.get() {
            if keep(value) {
                cursor.move_next();
            } else {
                cursor.remove_current();
                removed += 1;
            }
        }
        removed
    }

    /// Get a reference to the element at `index`
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        Ok(self
            .node_at(index)
            .map(Node::value)
            .expect("chain is shorter than the recorded length"))
    }

    /// Get a mutable reference to the element at `index`
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(ListError::out_of_bounds(index, self.len));
        }
        Ok(self
            .link_at(index)
            .and_then(|link| link.as_deref_mut())
            .map(Node::value_mut)
            .expect("chain is shorter than the recorded length"))
    }

    /// Get the element at `index`, or `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<&T> {
        self.at(index).ok()
    }

    /// Get the first element
    pub fn front(&self) -> Result<&T> {
        self.at(0)
    }

    /// Get the first element mutably
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.at_mut(0)
    }

    /// Get the last element
    pub fn back(&self) -> Result<&T> {
        match self.len.checked_sub(1) {
            Some(last) => self.at(last),
            None => Err(ListError::out_of_bounds(0, 0)),
        }
    }

    /// Get the last element mutably
    pub fn back_mut(&mut self) -> Result<&mut T> {
        match self.len.checked_sub(1) {
            Some(last) => self.at_mut(last),
            None => Err(ListError::out_of_bounds(0, 0)),
        }
    }

    /// The valid positions of the list, `0..len`.
    pub fn indices(&self) -> Range<usize> {
        0..self.len
    }

    /// Detaches the elements from `at` onwards into a new list.
    ///
    /// `at == len` returns an empty list. Fails without touching the list when `at > len`.
    pub fn split_off(&mut self, at: usize) -> Result<Self> {
        if at > self.len {
            return Err(ListError::out_of_bounds(at, self.len));
        }
        let tail = self
            .link_at(at)
            .expect("chain is shorter than the recorded length")
            .take();
        let split = List {
            head: tail,
            len: self.len - at,
        };
        self.len = at;
        log::trace!("split list at {}, detached {} elements", at, split.len);
        Ok(split)
    }

    /// Get an iterator over the elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Get an iterator over mutable references to the elements
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }

    /// A cursor at the first element, or the end cursor if the list is empty.
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.head.as_deref())
    }

    /// The end cursor, one past the last element.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(None)
    }

    /// A mutable cursor at the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self)
    }

    /// Appends the given chain of `len` nodes after the last element.
    pub(crate) fn append_chain(&mut self, chain: Chain<T>, len: usize) {
        let own = self.len;
        *self
            .link_at(own)
            .expect("chain is shorter than the recorded length") = chain;
        self.len += len;
    }
}

impl<T> Link<T> for List<T> {
    #[inline]
    fn next_link(&self) -> &Chain<T> {
        &self.head
    }

    #[inline]
    fn next_link_mut(&mut self) -> &mut Chain<T> {
        &mut self.head
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        drop_chain(self.head.take());
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let mut values = source.iter();
        let mut kept = 0;
        for (dst, src) in self.iter_mut().zip(values.by_ref()) {
            dst.clone_from(src);
            kept += 1;
        }
        if kept < self.len {
            drop(self.split_off(kept));
        }
        self.extend(values.cloned());
    }
}

impl<T> Index<usize> for List<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for List<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut cursor = self.cursor_mut();
        while !cursor.is_end() {
            cursor.move_next();
        }
        // Counted per element, so a panicking iterator leaves a consistent list.
        for value in iter {
            cursor.insert_before(value);
            cursor.move_next();
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for List<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut List<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
