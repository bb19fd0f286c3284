use alloc::vec::Vec;
use core::any::type_name;
use core::cmp::Ordering;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::error::{ListError, Result};

use super::{
    cursor::{Cursor, CursorMut},
    list::List,
    node::{merge_chains, reverse_chain, sort_chain},
};

/// The direction of [`List::sort_by_order`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Applies the direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl<T> List<T> {
    /// Sorts the list in ascending order.
    ///
    /// This is a merge sort over the chain: O(n log n), stable, and it relinks
    /// nodes instead of moving values.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(T::cmp);
    }

    /// Sorts the list in the given direction. Equal elements keep their relative order
    /// in both directions.
    pub fn sort_by_order(&mut self, order: SortOrder)
    where
        T: Ord,
    {
        self.sort_by(|a, b| order.apply(a.cmp(b)));
    }

    /// Sorts the list with a comparator.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        log::trace!("sorting list of {} elements", self.len);
        // While detached the list reads as empty. A panicking `compare` drops the
        // detached nodes and leaves it that way.
        let len = core::mem::take(&mut self.len);
        let chain = self.head.take();
        self.head = sort_chain(chain, len, &mut compare);
        self.len = len;
    }

    /// Sorts the list by a key extracted from every element.
    pub fn sort_by_key<K, F>(&mut self, mut key: F)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|a, b| key(a).cmp(&key(b)));
    }

    /// Check if the list is sorted in ascending order
    pub fn is_sorted(&self) -> bool
    where
        T: PartialOrd,
    {
        let mut values = self.iter();
        let Some(mut prev) = values.next() else {
            return true;
        };
        for value in values {
            if prev > value {
                return false;
            }
            prev = value;
        }
        true
    }

    /// Reverses the order of the elements by relinking the chain in place.
    pub fn reverse(&mut self) {
        log::trace!("reversing list of {} elements", self.len);
        self.head = reverse_chain(self.head.take());
    }

    /// Removes consecutive repeated elements, keeping the first of every run.
    ///
    /// Only *adjacent* duplicates are collapsed: `[1, 1, 2, 1]` becomes `[1, 2, 1]`.
    /// Sort first, or use [`List::remove_duplicates`], to drop every duplicate.
    /// Returns the number of removed elements.
    pub fn unique(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.unique_by(|a, b| a == b)
    }

    /// Removes consecutive elements that `same` reports as equal to the first
    /// element of their run.
    pub fn unique_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut cursor = self.cursor_mut();
        let mut removed = 0;
        while let Some(value) = cursor.get() {
            if cursor.peek_next().is_some_and(|next| same(value, next)) {
                cursor.remove_next();
                removed += 1;
            } else {
                cursor.move_next();
            }
        }
        log::trace!("unique removed {} elements, {} left", removed, self.len);
        removed
    }

    /// Removes every element equal to an earlier one, keeping first occurrences in order.
    ///
    /// Unlike [`List::unique`] the duplicates do not need to be adjacent.
    /// Returns the number of removed elements.
    pub fn remove_duplicates(&mut self) -> usize
    where
        T: Hash + Eq,
    {
        let mut seen = HashSet::with_capacity(self.len);
        let keep: Vec<bool> = self.iter().map(|value| seen.insert(value)).collect();
        drop(seen);

        let mut keep = keep.into_iter();
        let removed = self.retain(|_| keep.next().unwrap_or(true));
        log::trace!("removed {} duplicates, {} left", removed, self.len);
        removed
    }

    /// Moves every element of `other` to the end of this list, leaving `other` empty.
    ///
    /// The other chain is relinked as a whole; no element is cloned or converted.
    pub fn append(&mut self, other: &mut List<T>) {
        log::trace!("appending {} elements to list of {}", other.len, self.len);
        let len = other.len;
        let chain = other.head.take();
        other.len = 0;
        self.append_chain(chain, len);
    }

    /// Appends every element of `other`, converted into `T`, and empties `other`.
    ///
    /// Every element is converted before anything is linked, so when one of them
    /// refuses conversion the merge fails with [`ListError::IncompatibleMerge`] and
    /// both lists are left exactly as they were.
    pub fn merge<U>(&mut self, other: &mut List<U>) -> Result<()>
    where
        U: Clone + TryInto<T>,
    {
        log::trace!(
            "merging {} `{}` elements into list of {} `{}`",
            other.len,
            type_name::<U>(),
            self.len,
            type_name::<T>()
        );
        let mut converted = other
            .iter()
            .enumerate()
            .map(|(position, value)| {
                TryInto::<T>::try_into(value.clone())
                    .map_err(|_| ListError::IncompatibleMerge {
                        from: type_name::<U>(),
                        into: type_name::<T>(),
                        position,
                    })
            })
            .collect::<Result<List<T>>>()?;
        other.clear();
        self.append(&mut converted);
        Ok(())
    }

    /// Merges two ascending lists into one ascending list, emptying `other`.
    ///
    /// On ties, elements of `self` come first.
    pub fn merge_sorted(&mut self, other: &mut List<T>)
    where
        T: Ord,
    {
        self.merge_sorted_by(other, T::cmp);
    }

    /// Merges two lists sorted by `compare`, emptying `other`.
    pub fn merge_sorted_by<F>(&mut self, other: &mut List<T>, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        log::trace!("merging sorted lists of {} and {} elements", self.len, other.len);
        let len = self.len + other.len;
        let left = self.head.take();
        let right = other.head.take();
        self.len = 0;
        other.len = 0;
        self.head = merge_chains(left, right, &mut compare);
        self.len = len;
    }

    /// Get the position of the first element equal to `value`
    pub fn index(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|current| current == value)
    }

    /// Count the elements equal to `value`
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&current| current == value).count()
    }

    /// Check if any element equals `value`
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|current| current == value)
    }

    /// A cursor at the first element equal to `value`, or the end cursor.
    pub fn find(&self, value: &T) -> Cursor<'_, T>
    where
        T: PartialEq,
    {
        let mut cursor = self.begin();
        while let Some(current) = cursor.get() {
            if current == value {
                break;
            }
            cursor.move_next();
        }
        cursor
    }

    /// A mutable cursor at the first element equal to `value`, or at the end.
    pub fn find_mut(&mut self, value: &T) -> CursorMut<'_, T>
    where
        T: PartialEq,
    {
        let mut cursor = self.cursor_mut();
        while cursor.get().is_some_and(|current| current != value) {
            cursor.move_next();
        }
        cursor
    }
}
