#![no_std]

//! Owned, singly linked collections.
//!
//! The main type is [`List`], a forward list that owns its nodes, keeps a
//! cached element count and exposes positional mutation, checked access,
//! cursors and in-place algorithms (sort, reverse, unique, merge).

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{ListError, Result};
pub use linked_list::forward::{
    Cursor, CursorMut, IntoIter, Iter, IterMut, List, SortOrder, same_contents,
};
