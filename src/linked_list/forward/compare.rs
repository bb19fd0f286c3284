use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};

use super::list::List;

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for value in self {
            value.hash(state);
        }
    }
}

/// Compares two lists that may hold different element types.
///
/// Lists of different element types are never equal, even when their values
/// would compare equal after a conversion. Lists of the same type compare
/// element by element like `==`.
pub fn same_contents<T, U>(list: &List<T>, other: &List<U>) -> bool
where
    T: PartialEq + 'static,
    U: 'static,
{
    match (other as &dyn Any).downcast_ref::<List<T>>() {
        Some(other) => list == other,
        None => false,
    }
}

/// Renders one element per line followed by a `size: <N>` line.
impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "list empty")?;
        }
        for value in self {
            writeln!(f, "{value}")?;
        }
        writeln!(f, "size: {}", self.len)
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::format;

    use super::*;

    #[test]
    fn test_display_lists_elements_then_size() {
        let list = List::from([5, 6, 7]);
        assert_eq!(format!("{list}"), "5\n6\n7\nsize: 3\n");
    }

    #[test]
    fn test_display_empty_list() {
        let list = List::<i32>::new();
        assert_eq!(format!("{list}"), "list empty\nsize: 0\n");
    }

    #[test]
    fn test_debug_renders_like_a_slice() {
        let list = List::from(["a", "b"]);
        assert_eq!(format!("{list:?}"), r#"["a", "b"]"#);
    }

    #[test]
    fn test_same_contents_across_types() {
        let ints = List::from([5, 6, 7]);
        assert!(same_contents(&ints, &List::from([5, 6, 7])));
        assert!(!same_contents(&ints, &List::from([5, 6])));
        assert!(!same_contents(&ints, &List::from([5.0, 6.0, 7.0])));
        assert!(!same_contents(&ints, &List::from([5i64, 6, 7])));
    }

    #[test]
    fn test_equal_lists_hash_equal() {
        use core::hash::BuildHasher;
        use hashbrown::{DefaultHashBuilder, HashSet};

        let hasher = DefaultHashBuilder::default();
        let list = List::from([5, 6, 7]);
        let mut copy = List::from([7, 6, 5]);
        copy.reverse();
        assert_eq!(hasher.hash_one(&list), hasher.hash_one(&copy));

        let mut lists = HashSet::new();
        assert!(lists.insert(list));
        assert!(!lists.insert(copy));
        assert!(lists.contains(&List::from([5, 6, 7])));
        assert!(!lists.contains(&List::from([5, 6])));
    }
}
