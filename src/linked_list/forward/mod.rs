//! # Forward List
//!
//! This module provides an owned, singly linked list.
//!
//! ## Core Components
//!
//! - [`list::List`]: The container. Owns every node from its head slot and caches the element count.
//! - `node` and `traits`: The storage cell and the `Link` plumbing shared by the list head and nodes.
//!   Kept private so only the list can relink its chain.
//! - [`cursor::Cursor`] and [`cursor::CursorMut`]: Position markers over the chain.
//! - [`iter`]: Borrowing and consuming iterators.
//! - [`algorithms`]: Sort, reverse, unique, merge and search over the chain.
//!
//! ## Ownership
//!
//! Each node is owned by exactly one slot: the list's head or the `next` field of its
//! predecessor. Cursors and iterators borrow the list, so the borrow checker rejects any
//! structural mutation while they are alive. The only way to mutate the chain through a
//! position is [`cursor::CursorMut`], which defines where it points after each edit.
//!
//! ## Ordering of `unique`
//!
//! [`List::unique`] collapses runs of *adjacent* equal elements only. Sort first, or call
//! [`List::remove_duplicates`], to remove every duplicate.

pub mod algorithms;
pub mod compare;
pub mod cursor;
pub mod iter;
pub mod list;
mod node;
mod traits;

pub use algorithms::SortOrder;
pub use compare::same_contents;
pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::List;

#[cfg(test)]
mod tests;
