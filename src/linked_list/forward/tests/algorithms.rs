extern crate std;

use std::vec;
use std::vec::Vec;

use crate::error::ListError;
use crate::linked_list::forward::{List, SortOrder};

fn values<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

#[test]
fn test_sort_ascending_and_descending() {
    let mut list = List::from([5, 3, 9, 1, 3, 7]);
    list.sort();
    assert_eq!(values(&list), vec![1, 3, 3, 5, 7, 9]);
    assert!(list.is_sorted());

    list.sort_by_order(SortOrder::Descending);
    assert_eq!(values(&list), vec![9, 7, 5, 3, 3, 1]);
    assert!(!list.is_sorted());
}

#[test]
fn test_sort_is_idempotent() {
    let mut list = List::from([4, 2, 8, 6]);
    list.sort();
    let once = list.clone();
    list.sort();
    assert_eq!(list, once);
}

#[test]
fn test_sort_is_stable() {
    let mut list = List::from([(2, 'a'), (1, 'a'), (2, 'b'), (1, 'b'), (0, 'a')]);
    list.sort_by_key(|pair| pair.0);
    assert_eq!(
        values(&list),
        vec![(0, 'a'), (1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]
    );

    list.sort_by(|a, b| SortOrder::Descending.apply(a.0.cmp(&b.0)));
    assert_eq!(
        values(&list),
        vec![(2, 'a'), (2, 'b'), (1, 'a'), (1, 'b'), (0, 'a')]
    );
}

#[test]
fn test_sort_trivial_lists() {
    let mut empty = List::<i32>::new();
    empty.sort();
    assert!(empty.is_empty());

    let mut single = List::from([1]);
    single.sort();
    assert_eq!(values(&single), vec![1]);
    single.push_back(0);
    assert_eq!(single.back(), Ok(&0));
}

#[test]
fn test_sort_keeps_tail_usable() {
    let mut list = List::from([3, 1, 2]);
    list.sort();
    list.push_back(4);
    assert_eq!(values(&list), vec![1, 2, 3, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_reverse_twice_is_identity() {
    let mut list = List::from([1, 2, 3, 4]);
    list.reverse();
    assert_eq!(values(&list), vec![4, 3, 2, 1]);
    list.reverse();
    assert_eq!(values(&list), vec![1, 2, 3, 4]);

    let mut empty = List::<i32>::new();
    empty.reverse();
    assert!(empty.is_empty());
}

#[test]
fn test_unique_collapses_adjacent_runs_only() {
    let mut list = List::from([1, 1, 2, 1, 3, 3, 3]);
    assert_eq!(list.unique(), 3);
    assert_eq!(values(&list), vec![1, 2, 1, 3]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_unique_on_unique_list_is_noop() {
    let mut list = List::from([1, 2, 1, 2]);
    assert_eq!(list.unique(), 0);
    assert_eq!(values(&list), vec![1, 2, 1, 2]);
}

#[test]
fn test_unique_by_compares_with_run_head() {
    let mut list = List::from([10, 11, 12, 20, 25, 31]);
    assert_eq!(list.unique_by(|first, next| next / 10 == first / 10), 3);
    assert_eq!(values(&list), vec![10, 20, 31]);
}

#[test]
fn test_sort_then_unique_removes_all_duplicates() {
    let mut list = List::from([3, 1, 3, 2, 1]);
    list.sort();
    list.unique();
    assert_eq!(values(&list), vec![1, 2, 3]);
}

#[test]
fn test_remove_duplicates_keeps_first_occurrence() {
    let mut list = List::from([3, 1, 3, 2, 1, 4]);
    assert_eq!(list.remove_duplicates(), 2);
    assert_eq!(values(&list), vec![3, 1, 2, 4]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_append() {
    let mut a = List::from([1, 2]);
    let mut b = List::from([3, 4, 5]);
    a.append(&mut b);
    assert_eq!(values(&a), vec![1, 2, 3, 4, 5]);
    assert!(b.is_empty());

    let mut empty = List::new();
    empty.append(&mut a);
    assert_eq!(empty.len(), 5);
    assert!(a.is_empty());
}

#[test]
fn test_merge_appends_and_empties_other() {
    let mut a = List::from([1u32, 2]);
    let mut b = List::from([3u8, 4, 5]);
    a.merge(&mut b).unwrap();

    assert_eq!(a.len(), 5);
    assert_eq!(b.len(), 0);
    assert_eq!(values(&a), vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_merge_same_type() {
    let mut a = List::from([1, 2]);
    let mut b = List::from([3]);
    a.merge(&mut b).unwrap();
    assert_eq!(values(&a), vec![1, 2, 3]);
    assert!(b.is_empty());
}

#[test]
fn test_rejected_merge_leaves_both_lists_unchanged() {
    let mut a = List::from([1i8, 2]);
    let mut b = List::from([3i64, 300, 4]);

    let err = a.merge(&mut b).unwrap_err();
    assert_eq!(
        err,
        ListError::IncompatibleMerge {
            from: "i64",
            into: "i8",
            position: 1
        }
    );
    assert_eq!(values(&a), vec![1, 2]);
    assert_eq!(values(&b), vec![3, 300, 4]);
}

#[test]
fn test_merge_sorted() {
    let mut a = List::from([(1, 'a'), (3, 'a'), (5, 'a')]);
    let mut b = List::from([(1, 'b'), (2, 'b'), (6, 'b')]);
    a.merge_sorted_by(&mut b, |x, y| x.0.cmp(&y.0));
    assert_eq!(
        values(&a),
        vec![(1, 'a'), (1, 'b'), (2, 'b'), (3, 'a'), (5, 'a'), (6, 'b')]
    );
    assert!(b.is_empty());
    assert_eq!(a.len(), 6);

    let mut c = List::from([0, 4]);
    let mut d = List::from([2]);
    c.merge_sorted(&mut d);
    assert_eq!(values(&c), vec![0, 2, 4]);
}

#[test]
fn test_find() {
    let list = List::from([5, 6, 7]);
    let found = list.find(&6);
    assert_eq!(found.get(), Some(&6));
    assert_ne!(found, list.begin());
    assert_eq!(list.find(&5), list.begin());
    assert_eq!(list.find(&8), list.end());
}

#[test]
fn test_find_mut_edits_in_place() {
    let mut list = List::from([5, 6, 7]);
    let mut cursor = list.find_mut(&6);
    assert_eq!(cursor.index(), 1);
    if let Some(value) = cursor.get_mut() {
        *value = 60;
    }
    assert_eq!(values(&list), vec![5, 60, 7]);

    let cursor = list.find_mut(&8);
    assert!(cursor.is_end());
    assert_eq!(cursor.index(), 3);
}
