use alloc::boxed::Box;

use super::node::{Chain, Node};

/// A trait for anything that owns the slot of the next node in a chain.
///
/// Both the list itself (through its head) and every node implement it, so
/// walking and relinking code does not need to special-case the head.
pub trait Link<T> {
    /// Get the slot holding the next node
    fn next_link(&self) -> &Chain<T>;

    /// Get the slot holding the next node, mutably
    fn next_link_mut(&mut self) -> &mut Chain<T>;

    /// Get the slot `steps` hops further down the chain.
    ///
    /// `link_at(0)` is this link's own slot. Returns `None` when the chain ends
    /// before `steps` hops were taken.
    fn link_at(&mut self, steps: usize) -> Option<&mut Chain<T>> {
        let mut link = self.next_link_mut();
        for _ in 0..steps {
            link = &mut link.as_mut()?.next;
        }
        Some(link)
    }

    /// Get the node `steps` hops down the chain
    fn node_at(&self, steps: usize) -> Option<&Node<T>> {
        let mut node = self.next_link().as_deref()?;
        for _ in 0..steps {
            node = node.next.as_deref()?;
        }
        Some(node)
    }
}

/// Edits applied directly to an owning slot of the chain.
pub trait Slot<T> {
    /// Links `value` into the slot, pushing the previous occupant one position down
    fn push_link(self, value: T);

    /// Unlinks the occupant of the slot, pulling its successor up
    fn pop_link(self) -> Option<T>;
}

impl<T> Slot<T> for &mut Chain<T> {
    fn push_link(self, value: T) {
        let next = self.take();
        *self = Some(Box::new(Node::new(value, next)));
    }

    fn pop_link(self) -> Option<T> {
        let node = self.take()?;
        let Node { value, next } = *node;
        *self = next;
        Some(value)
    }
}
