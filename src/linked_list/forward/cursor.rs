use core::fmt;

use crate::error::{ListError, Result};

use super::{
    list::List,
    node::{Chain, Node},
    traits::Slot,
};

/// A read-only position over a [`List`].
///
/// A cursor either denotes a node or is the end cursor, one past the last
/// element. Two cursors are equal when they denote the same node, or are
/// both at the end. Because a cursor borrows its list, the list cannot be
/// structurally modified while the cursor is alive.
pub struct Cursor<'a, T> {
    node: Option<&'a Node<T>>,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(node: Option<&'a Node<T>>) -> Self {
        Self { node }
    }

    /// Get the element the cursor denotes, or `None` at the end
    pub fn get(&self) -> Option<&'a T> {
        self.node.map(Node::value)
    }

    /// Peek at the element after the current one
    pub fn peek_next(&self) -> Option<&'a T> {
        self.node?.next().map(Node::value)
    }

    /// Check if this is the end cursor
    pub fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Advances to the next position and returns the advanced cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) -> &mut Self {
        let node = self.node.expect("cursor advanced past the end of the list");
        self.node = node.next();
        self
    }

    /// Advances to the next position and returns the position held before advancing.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn post_move_next(&mut self) -> Self {
        let before = *self;
        self.move_next();
        before
    }
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (Some(a), Some(b)) => core::ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Cursor").field(value).finish(),
            None => f.write_str("Cursor(end)"),
        }
    }
}

/// A position over a [`List`] that can modify the list's structure.
///
/// The cursor holds the slot that owns the current node, so removing or
/// inserting at the cursor relinks a single slot and leaves the cursor on a
/// well-defined element.
pub struct CursorMut<'a, T> {
    link: Option<&'a mut Chain<T>>,
    len: &'a mut usize,
    index: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>) -> Self {
        let List { head, len } = list;
        Self {
            link: Some(head),
            len,
            index: 0,
        }
    }

    fn current(&self) -> Option<&Node<T>> {
        self.link.as_deref()?.as_deref()
    }

    fn current_mut(&mut self) -> Option<&mut Node<T>> {
        self.link.as_deref_mut()?.as_deref_mut()
    }

    /// Get the position of the cursor, `len` at the end
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if the cursor is past the last element
    pub fn is_end(&self) -> bool {
        self.current().is_none()
    }

    /// Get the current element
    pub fn get(&self) -> Option<&T> {
        self.current().map(Node::value)
    }

    /// Get the current element mutably
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.current_mut().map(Node::value_mut)
    }

    /// Peek at the element after the current one
    pub fn peek_next(&self) -> Option<&T> {
        self.current()?.next().map(Node::value)
    }

    /// Advances to the next position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is already at the end.
    pub fn move_next(&mut self) -> &mut Self {
        let node = self
            .link
            .take()
            .and_then(|link| link.as_mut())
            .expect("cursor advanced past the end of the list");
        self.link = Some(&mut node.next);
        self.index += 1;
        self
    }

    /// Removes the current element and returns it.
    ///
    /// The cursor then denotes the element that followed the removed one, or the end.
    pub fn remove_current(&mut self) -> Option<T> {
        let value = self.link.as_deref_mut()?.pop_link()?;
        *self.len -= 1;
        Some(value)
    }

    /// Removes the element after the current one and returns it. The cursor does not move.
    pub fn remove_next(&mut self) -> Option<T> {
        let value = self.current_mut()?.next.pop_link()?;
        *self.len -= 1;
        Some(value)
    }

    /// Inserts `value` at the cursor's position; the cursor then denotes the new element.
    ///
    /// At the end cursor this appends.
    pub fn insert_before(&mut self, value: T) {
        if let Some(link) = self.link.as_deref_mut() {
            link.push_link(value);
            *self.len += 1;
        }
    }

    /// Inserts `value` right after the current element without moving the cursor.
    ///
    /// Fails at the end cursor, which has no element to insert after.
    pub fn insert_after(&mut self, value: T) -> Result<()> {
        match self.link.as_deref_mut().and_then(|link| link.as_deref_mut()) {
            Some(node) => {
                node.next.push_link(value);
                *self.len += 1;
                Ok(())
            }
            None => Err(ListError::out_of_bounds(self.index, *self.len)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("current", &self.get())
            .finish()
    }
}
