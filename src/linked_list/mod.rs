//! Linked list implementations.
//!
//! # Examples
//!
//! ```
//! use lst::List;
//!
//! let mut list = List::from([5, 6, 7]);
//! list.push_back(8);
//! list.insert(0, 4).unwrap();
//!
//! assert_eq!(list.len(), 5);
//! assert_eq!(list.index(&6), Some(2));
//! assert_eq!(list.at(4), Ok(&8));
//! assert!(list.at(5).is_err());
//!
//! list.reverse();
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![8, 7, 6, 5, 4]);
//! ```
pub mod forward;
