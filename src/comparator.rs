use core::cmp::Ordering;

/// Three-way key comparison used by [`BucketMap`](crate::BucketMap) to decide
/// key equality.
///
/// The map never sorts; only the distinction between [`Ordering::Equal`] and
/// any other result matters. An implementation must still behave like an
/// equivalence on `Equal`: two keys comparing equal to the same live key must
/// compare equal to each other.
///
/// Any `Fn(&K, &K) -> Ordering` closure or function is a comparator:
///
/// ```rust
/// # use bucket_map::BucketMap;
/// #
/// let names = ["alpha", "beta"];
/// let mut map = BucketMap::with_capacity(4, |a: &&str, b: &&str| {
///     a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
/// });
/// map.insert(&names[0], &1).unwrap();
///
/// assert_eq!(map.get(&"ALPHA"), Some(&1));
/// ```
pub trait KeyComparator<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns `true` if the keys compare equal.
    #[inline(always)]
    fn equivalent(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<K, F> KeyComparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Comparator delegating to the key's [`Ord`] implementation.
///
/// # Examples
///
/// ```rust
/// # use bucket_map::BucketMap;
/// # use bucket_map::OrdComparator;
/// #
/// let key = 7u32;
/// let value = "seven";
/// let mut map: BucketMap<u32, &str, OrdComparator> = BucketMap::default();
/// map.reserve_space(1).unwrap();
/// map.insert(&key, &value).unwrap();
/// assert!(map.contains_key(&7));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrdComparator;

impl<K: Ord + ?Sized> KeyComparator<K> for OrdComparator {
    #[inline(always)]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}
