use alloc::boxed::Box;

use super::traits::Link;

/// An owning slot in the chain: the next node, or `None` past the tail.
pub type Chain<T> = Option<Box<Node<T>>>;

/// A single storage cell of a forward list.
///
/// A node is owned by exactly one slot, either the list head or the `next`
/// field of its predecessor.
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Chain<T>,
}

impl<T> Node<T> {
    /// Creates a node holding `value` and owning `next`.
    pub(crate) const fn new(value: T, next: Chain<T>) -> Self {
        Self { value, next }
    }

    /// Get the value stored in the node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Get a mutable reference to the value stored in the node
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Get the successor node, if any
    pub fn next(&self) -> Option<&Node<T>> {
        self.next.as_deref()
    }
}

impl<T> Link<T> for Node<T> {
    #[inline]
    fn next_link(&self) -> &Chain<T> {
        &self.next
    }

    #[inline]
    fn next_link_mut(&mut self) -> &mut Chain<T> {
        &mut self.next
    }
}

/// Drops a chain one node at a time instead of recursing through `Box` drops.
pub(crate) fn drop_chain<T>(mut chain: Chain<T>) {
    while let Some(mut node) = chain {
        chain = node.next.take();
    }
}

/// Splits `chain` after `len` nodes and returns the detached remainder.
pub(crate) fn split_chain<T>(chain: &mut Chain<T>, len: usize) -> Chain<T> {
    let mut link = chain;
    for _ in 0..len {
        match link.as_mut() {
            Some(node) => link = &mut node.next,
            None => return None,
        }
    }
    link.take()
}

/// Relinks two chains into one, taking from `right` only when it orders strictly before
/// `left`, which keeps equal elements in their original order.
pub(crate) fn merge_chains<T, F>(mut left: Chain<T>, mut right: Chain<T>, compare: &mut F) -> Chain<T>
where
    F: FnMut(&T, &T) -> core::cmp::Ordering,
{
    let mut head: Chain<T> = None;
    let mut tail = &mut head;
    loop {
        let from_left = match (&left, &right) {
            (Some(l), Some(r)) => compare(&r.value, &l.value).is_ge(),
            _ => break,
        };
        let source = if from_left { &mut left } else { &mut right };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }
    *tail = if left.is_some() { left } else { right };
    head
}

/// Sorts a chain of exactly `len` nodes with a top-down merge sort.
pub(crate) fn sort_chain<T, F>(mut chain: Chain<T>, len: usize, compare: &mut F) -> Chain<T>
where
    F: FnMut(&T, &T) -> core::cmp::Ordering,
{
    if len < 2 {
        return chain;
    }
    let mid = len / 2;
    let right = split_chain(&mut chain, mid);
    let left = sort_chain(chain, mid, compare);
    let right = sort_chain(right, len - mid, compare);
    merge_chains(left, right, compare)
}

/// Reverses a chain by relinking every node in front of the previous one.
pub(crate) fn reverse_chain<T>(mut chain: Chain<T>) -> Chain<T> {
    let mut reversed: Chain<T> = None;
    while let Some(mut node) = chain {
        chain = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}
