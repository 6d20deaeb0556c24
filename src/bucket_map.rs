use alloc::collections::TryReserveError;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::bitset::BitSet;
use crate::comparator::KeyComparator;
use crate::error::Error;
use crate::error::Result;

/// Slot occupancy and fragmentation statistics.
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct SlotStats {
    /// Number of live entries
    pub len: usize,
    /// Total number of slots
    pub capacity: usize,
    /// Index of the highest occupied slot, if any
    pub highest_occupied: Option<usize>,
    /// Free slots below the highest occupied slot. These are reclaimed by
    /// [`BucketMap::shrink_to_fit`].
    pub fragmented_slots: usize,
    /// Load factor (len / capacity)
    pub load_factor: f64,
    /// Total bytes allocated for slots and the occupancy bitset
    pub total_bytes: usize,
}

#[cfg(feature = "stats")]
impl SlotStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Bucket Map Slot Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.len,
            self.capacity,
            self.load_factor * 100.0
        );
        match self.highest_occupied {
            Some(highest) => println!("Highest occupied slot: {}", highest),
            None => println!("Highest occupied slot: none"),
        }
        println!(
            "Fragmentation: {} free slots below the highest occupied slot",
            self.fragmented_slots
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

/// A fixed-capacity map of borrowed keys and values.
///
/// `BucketMap<'a, K, V, C>` stores `&'a K` / `&'a V` pairs in a pre-allocated
/// slot array. It never owns, copies, or drops the referenced keys and values;
/// the borrow checker guarantees they outlive the map. Slot occupancy is
/// tracked by a [`BitSet`], which is the only source of truth for whether a
/// slot holds a live entry.
///
/// Keys are compared with the comparator `C` (see [`KeyComparator`]); the map
/// does not hash, so lookups scan the occupied slots in index order. Insertion
/// always takes the lowest free slot, which keeps live entries packed towards
/// the front of the array.
///
/// The map never grows on its own. When every slot is taken, insertion fails
/// with [`Error::NoSpaceLeft`] until space is reserved with
/// [`reserve_space`](BucketMap::reserve_space) or entries are removed.
///
/// ## Example
///
/// ```rust
/// # use bucket_map::BucketMap;
/// # use bucket_map::Error;
/// # use bucket_map::OrdComparator;
/// #
/// let keys = [23u32, 7];
/// let values = [42u32, 43, 99];
///
/// let mut map = BucketMap::with_capacity(16, OrdComparator);
/// map.insert(&keys[0], &values[0]).unwrap();
/// assert_eq!(map.insert(&keys[0], &values[2]), Err(Error::DuplicateKey));
/// assert_eq!(map.get(&23), Some(&42));
///
/// map.update(&23, &values[1]).unwrap();
/// assert_eq!(map.get(&23), Some(&43));
///
/// map.remove(&23).unwrap();
/// assert!(!map.contains_key(&23));
/// assert!(map.is_empty());
/// ```
pub struct BucketMap<'a, K: ?Sized, V: ?Sized, C> {
    slots: Vec<Option<(&'a K, &'a V)>>,
    occupied: BitSet,
    comparator: C,
}

impl<K, V, C> Debug for BucketMap<'_, K, V, C>
where
    K: Debug + ?Sized,
    V: Debug + ?Sized,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut map = f.debug_map();
        for (k, v) in self.iter() {
            map.entry(&k, &v);
        }
        map.finish()
    }
}

impl<K: ?Sized, V: ?Sized, C: Clone> Clone for BucketMap<'_, K, V, C> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
            occupied: self.occupied.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<K: ?Sized, V: ?Sized, C: Default> Default for BucketMap<'_, K, V, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<'a, K: ?Sized, V: ?Sized, C> BucketMap<'a, K, V, C> {
    /// Creates an empty map with zero capacity. Does not allocate.
    ///
    /// Every insertion fails with [`Error::NoSpaceLeft`] until space is
    /// reserved.
    pub const fn new(comparator: C) -> Self {
        Self {
            slots: Vec::new(),
            occupied: BitSet::new(),
            comparator,
        }
    }

    /// Creates an empty map with exactly `capacity` free slots.
    ///
    /// Aborts through the global allocation error handler if the slots cannot
    /// be allocated, like the standard collections do. Use
    /// [`try_with_capacity`](BucketMap::try_with_capacity) to handle the
    /// failure instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let map: BucketMap<u32, u32, _> = BucketMap::with_capacity(16, OrdComparator);
    /// assert_eq!(map.capacity(), 16);
    /// assert!(map.is_empty());
    /// ```
    pub fn with_capacity(capacity: usize, comparator: C) -> Self {
        Self {
            slots: vec![None; capacity],
            occupied: BitSet::with_len(capacity),
            comparator,
        }
    }

    /// Creates an empty map with exactly `capacity` free slots, reporting
    /// [`Error::AllocationFailure`] if the storage cannot be allocated.
    ///
    /// No storage is left allocated when this fails.
    pub fn try_with_capacity(capacity: usize, comparator: C) -> Result<Self> {
        let alloc_failure = |_: TryReserveError| Error::AllocationFailure { slots: capacity };

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(alloc_failure)?;
        slots.resize(capacity, None);
        let occupied = BitSet::try_with_len(capacity).map_err(alloc_failure)?;

        Ok(Self {
            slots,
            occupied,
            comparator,
        })
    }

    /// Returns the total number of slots, free and occupied.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of live entries.
    ///
    /// This counts the set bits of the occupancy bitset, so it is linear in
    /// the capacity divided by the word size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map = BucketMap::with_capacity(4, OrdComparator);
    /// assert_eq!(map.len(), 0);
    /// map.insert(&1, &"a").unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.occupied.count_ones()
    }

    /// Returns `true` if the map holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.occupied.first_set().is_none()
    }

    /// Returns the number of free slots.
    pub fn free_slots(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Returns the comparator used to match keys.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every entry while keeping the capacity.
    ///
    /// The referenced keys and values are not touched.
    pub fn clear(&mut self) {
        self.occupied.clear_all();
        self.slots.fill(None);
    }

    /// Returns a cursor positioned at the lowest occupied slot.
    ///
    /// Together with [`advance`](BucketMap::advance) this walks the live
    /// entries in ascending slot order without holding a borrow of the map
    /// between steps. It is restartable: request a new cursor to start over.
    ///
    /// A cursor is invalidated by any mutation of the map (insert, upsert,
    /// remove, clear, resize). Advancing a stale cursor is memory safe and
    /// only ever yields live entries, but which entries it yields, and
    /// whether it skips or repeats any, is unspecified. Keeping cursors fresh
    /// is the caller's obligation. Use [`iter`](BucketMap::iter) when the
    /// borrow checker should enforce this instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let keys = [1, 2, 3];
    /// let mut map = BucketMap::with_capacity(4, OrdComparator);
    /// for key in &keys {
    ///     map.insert(key, key).unwrap();
    /// }
    ///
    /// let mut cursor = map.cursor();
    /// let mut sum = 0;
    /// while let Some((_, value)) = map.advance(&mut cursor) {
    ///     sum += value;
    /// }
    /// assert_eq!(sum, 6);
    /// assert!(cursor.is_exhausted());
    /// ```
    pub fn cursor(&self) -> Cursor {
        Cursor {
            next: self.occupied.first_set(),
        }
    }

    /// Returns the entry the cursor designates and moves the cursor to the
    /// next occupied slot, or returns `None` once the cursor is exhausted.
    ///
    /// See [`cursor`](BucketMap::cursor) for the invalidation rules.
    pub fn advance(&self, cursor: &mut Cursor) -> Option<(&'a K, &'a V)> {
        // Revalidated against the current occupancy so a stale cursor can
        // never read a free slot.
        let Some(index) = cursor.next.and_then(|from| self.occupied.next_set(from)) else {
            cursor.next = None;
            return None;
        };

        cursor.next = self.occupied.next_set(index + 1);
        self.slots.get(index).copied().flatten()
    }

    /// Returns an iterator over the live entries in ascending slot order.
    ///
    /// The order is neither insertion order nor key order: removals free
    /// slots that later insertions reuse, and
    /// [`shrink_to_fit`](BucketMap::shrink_to_fit) moves entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let keys = [10, 20, 30];
    /// let mut map = BucketMap::with_capacity(3, OrdComparator);
    /// for key in &keys {
    ///     map.insert(key, key).unwrap();
    /// }
    /// map.remove(&10).unwrap();
    /// map.insert(&keys[0], &keys[0]).unwrap();
    ///
    /// let order: Vec<_> = map.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(order, [10, 20, 30]);
    /// ```
    pub fn iter(&self) -> Iter<'_, 'a, K, V, C> {
        Iter {
            map: self,
            cursor: self.cursor(),
        }
    }

    /// Returns an iterator over the keys in ascending slot order.
    pub fn keys(&self) -> Keys<'_, 'a, K, V, C> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values in ascending slot order.
    pub fn values(&self) -> Values<'_, 'a, K, V, C> {
        Values { inner: self.iter() }
    }

    /// Compacts the live entries into the lowest slots and shrinks the
    /// capacity to the number of live entries.
    ///
    /// Entries keep their relative slot order. An empty map shrinks to zero
    /// capacity and a full map is left untouched.
    ///
    /// If the smaller storage cannot be allocated this returns
    /// [`Error::AllocationFailure`]. The map then keeps its previous capacity,
    /// but the entries have already been compacted: every entry is still
    /// present and the free slots all sit above the live ones.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let keys: Vec<u32> = (0..16).collect();
    /// let mut map = BucketMap::with_capacity(16, OrdComparator);
    /// for key in &keys {
    ///     map.insert(key, key).unwrap();
    /// }
    /// for key in keys.iter().filter(|k| *k % 2 == 0) {
    ///     map.remove(key).unwrap();
    /// }
    ///
    /// map.shrink_to_fit().unwrap();
    /// assert_eq!(map.capacity(), 8);
    /// assert!(map.keys().copied().eq([1, 3, 5, 7, 9, 11, 13, 15]));
    /// ```
    pub fn shrink_to_fit(&mut self) -> Result<()> {
        let capacity = self.capacity();
        let len = self.len();
        if len == capacity {
            return Ok(());
        }

        let moved = self.defragment();
        log::debug!("compacted {moved} entries, shrinking from {capacity} to {len} slots");
        self.resize_storage(len)
    }

    /// Resizes the map to exactly `capacity` slots.
    ///
    /// Growing adds free slots above the existing ones. Shrinking truncates
    /// the slot array without compacting it first: live entries in slots at
    /// or above `capacity` are dropped from the map (the referenced keys and
    /// values are untouched). Call [`shrink_to_fit`](BucketMap::shrink_to_fit)
    /// first to pack the entries if that is not intended.
    ///
    /// On [`Error::AllocationFailure`] the map is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map: BucketMap<u32, u32, _> = BucketMap::with_capacity(16, OrdComparator);
    /// map.reserve_space(64).unwrap();
    /// assert_eq!(map.capacity(), 64);
    /// assert_eq!(map.free_slots(), 64);
    /// ```
    pub fn reserve_space(&mut self, capacity: usize) -> Result<()> {
        let current = self.capacity();
        if capacity == current {
            return Ok(());
        }

        let dropped = if capacity < current {
            (capacity..current)
                .filter(|&index| self.occupied.get(index))
                .count()
        } else {
            0
        };

        self.resize_storage(capacity)?;

        if dropped > 0 {
            log::warn!("shrinking to {capacity} slots dropped {dropped} live entries");
        }
        log::debug!("resized from {current} to {capacity} slots");
        Ok(())
    }

    /// Returns slot occupancy and fragmentation statistics.
    ///
    /// Requires the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn slot_stats(&self) -> SlotStats {
        let len = self.len();
        let capacity = self.capacity();
        let highest_occupied = self.occupied.last_set();

        SlotStats {
            len,
            capacity,
            highest_occupied,
            fragmented_slots: highest_occupied.map_or(0, |highest| highest + 1 - len),
            load_factor: if capacity == 0 {
                0.0
            } else {
                len as f64 / capacity as f64
            },
            total_bytes: self.slots.capacity() * core::mem::size_of::<Option<(&K, &V)>>()
                + self.occupied.allocated_bytes(),
        }
    }

    /// Moves the lowest occupied slot above the lowest free slot into it until
    /// the live entries occupy `[0, len)`. Returns the number of moves.
    fn defragment(&mut self) -> usize {
        let mut moved = 0;
        while let Some(free) = self.occupied.first_unset() {
            let Some(used) = self.occupied.next_set(free) else {
                break;
            };

            self.slots[free] = self.slots[used].take();
            self.occupied.set(free);
            self.occupied.clear(used);
            log::trace!("moved slot {used} to {free}");
            moved += 1;
        }
        moved
    }

    /// Replaces the slot array and the bitset with copies sized to `capacity`.
    ///
    /// Both are allocated before either is committed, so a failure leaves the
    /// two in agreement and the map unchanged.
    fn resize_storage(&mut self, capacity: usize) -> Result<()> {
        let alloc_failure = |_: TryReserveError| Error::AllocationFailure { slots: capacity };

        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity).map_err(alloc_failure)?;
        let keep = capacity.min(self.slots.len());
        slots.extend_from_slice(&self.slots[..keep]);
        slots.resize(capacity, None);

        let occupied = self.occupied.try_resized(capacity).map_err(alloc_failure)?;

        self.slots = slots;
        self.occupied = occupied;
        debug_assert_eq!(self.slots.len(), self.occupied.len());
        Ok(())
    }
}

impl<'a, K, V, C> BucketMap<'a, K, V, C>
where
    K: ?Sized,
    V: ?Sized,
    C: KeyComparator<K>,
{
    /// Inserts a new entry into the lowest free slot.
    ///
    /// Fails with [`Error::DuplicateKey`] if a live key compares equal to
    /// `key`, or with [`Error::NoSpaceLeft`] if every slot is occupied. The map
    /// is unchanged on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::Error;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map = BucketMap::with_capacity(1, OrdComparator);
    /// assert_eq!(map.insert(&1, &"one"), Ok(()));
    /// assert_eq!(map.insert(&1, &"uno"), Err(Error::DuplicateKey));
    /// assert_eq!(
    ///     map.insert(&2, &"two"),
    ///     Err(Error::NoSpaceLeft { capacity: 1 })
    /// );
    /// ```
    pub fn insert(&mut self, key: &'a K, value: &'a V) -> Result<()> {
        if self.contains_key(key) {
            return Err(Error::DuplicateKey);
        }
        self.occupy_free_slot(key, value)
    }

    /// Replaces the value of an existing entry, or inserts a new entry if no
    /// live key compares equal to `key`.
    ///
    /// When the entry exists only the value reference is replaced; the stored
    /// key reference is kept. Returns the previous value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map = BucketMap::with_capacity(2, OrdComparator);
    /// assert_eq!(map.upsert(&5, &"five"), Ok(None));
    /// assert_eq!(map.upsert(&5, &"FIVE"), Ok(Some(&"five")));
    /// assert_eq!(map.get(&5), Some(&"FIVE"));
    /// ```
    pub fn upsert(&mut self, key: &'a K, value: &'a V) -> Result<Option<&'a V>> {
        match self.find(key) {
            Some((index, _, _)) => Ok(self.replace_value(index, value)),
            None => self.occupy_free_slot(key, value).map(|()| None),
        }
    }

    /// Replaces the value of an existing entry and returns the previous value.
    ///
    /// The stored key reference is kept. Fails with [`Error::KeyNotFound`] if
    /// no live key compares equal to `key`.
    pub fn update(&mut self, key: &K, value: &'a V) -> Result<&'a V> {
        let (index, _, _) = self.find(key).ok_or(Error::KeyNotFound)?;
        self.replace_value(index, value).ok_or(Error::KeyNotFound)
    }

    /// Removes an entry and returns the stored key and value references.
    ///
    /// Fails with [`Error::KeyNotFound`] if no live key compares equal to
    /// `key`. The freed slot is the first candidate for the next insertion
    /// if it is now the lowest free slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::Error;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map = BucketMap::with_capacity(2, OrdComparator);
    /// map.insert(&1, &"one").unwrap();
    ///
    /// assert_eq!(map.remove(&1), Ok((&1, &"one")));
    /// assert_eq!(map.remove(&1), Err(Error::KeyNotFound));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<(&'a K, &'a V)> {
        let (index, _, _) = self.find(key).ok_or(Error::KeyNotFound)?;
        let entry = self.slots[index].take().ok_or(Error::KeyNotFound)?;
        self.occupied.clear(index);
        Ok(entry)
    }

    /// Returns `true` if a live key compares equal to `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns the value stored for `key`.
    ///
    /// Scans the occupied slots in ascending order and returns the value of
    /// the first key comparing equal, which is the only one since keys are
    /// unique.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bucket_map::BucketMap;
    /// # use bucket_map::OrdComparator;
    /// #
    /// let mut map = BucketMap::with_capacity(4, OrdComparator);
    /// map.insert(&23, &42).unwrap();
    /// assert_eq!(map.get(&23), Some(&42));
    /// assert_eq!(map.get(&24), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&'a V> {
        self.get_key_value(key).map(|(_, v)| v)
    }

    /// Returns the stored key and value references for `key`.
    pub fn get_key_value(&self, key: &K) -> Option<(&'a K, &'a V)> {
        self.find(key).map(|(_, k, v)| (k, v))
    }

    fn find(&self, key: &K) -> Option<(usize, &'a K, &'a V)> {
        let mut next = self.occupied.first_set();
        while let Some(index) = next {
            if let Some((candidate, value)) = self.slots.get(index).copied().flatten() {
                if self.comparator.equivalent(key, candidate) {
                    return Some((index, candidate, value));
                }
            }
            next = self.occupied.next_set(index + 1);
        }
        None
    }

    fn occupy_free_slot(&mut self, key: &'a K, value: &'a V) -> Result<()> {
        let index = self.occupied.first_unset().ok_or(Error::NoSpaceLeft {
            capacity: self.capacity(),
        })?;

        self.slots[index] = Some((key, value));
        self.occupied.set(index);
        log::trace!("occupied slot {index}");
        Ok(())
    }

    fn replace_value(&mut self, index: usize, value: &'a V) -> Option<&'a V> {
        self.slots[index]
            .as_mut()
            .map(|(_, stored)| core::mem::replace(stored, value))
    }
}

/// A detached iteration position over a [`BucketMap`].
///
/// Created by [`BucketMap::cursor`] and moved by [`BucketMap::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    next: Option<usize>,
}

impl Cursor {
    /// Returns the slot index the cursor designates, or `None` once it is
    /// exhausted.
    pub fn index(&self) -> Option<usize> {
        self.next
    }

    /// Returns `true` once the cursor has passed the last occupied slot.
    pub fn is_exhausted(&self) -> bool {
        self.next.is_none()
    }
}

/// An iterator over the entries of a [`BucketMap`] in ascending slot order.
///
/// This struct is created by the [`iter`](BucketMap::iter) method.
pub struct Iter<'m, 'a, K: ?Sized, V: ?Sized, C> {
    map: &'m BucketMap<'a, K, V, C>,
    cursor: Cursor,
}

impl<'a, K: ?Sized, V: ?Sized, C> Iterator for Iter<'_, 'a, K, V, C> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.map.advance(&mut self.cursor)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every remaining entry sits at or above the cursor's slot.
        let remaining = self
            .cursor
            .index()
            .map_or(0, |index| self.map.capacity().saturating_sub(index));
        (0, Some(remaining))
    }
}

impl<K: ?Sized, V: ?Sized, C> FusedIterator for Iter<'_, '_, K, V, C> {}

impl<'m, 'a, K: ?Sized, V: ?Sized, C> IntoIterator for &'m BucketMap<'a, K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'m, 'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the keys of a [`BucketMap`].
pub struct Keys<'m, 'a, K: ?Sized, V: ?Sized, C> {
    inner: Iter<'m, 'a, K, V, C>,
}

impl<'a, K: ?Sized, V: ?Sized, C> Iterator for Keys<'_, 'a, K, V, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: ?Sized, V: ?Sized, C> FusedIterator for Keys<'_, '_, K, V, C> {}

/// An iterator over the values of a [`BucketMap`].
pub struct Values<'m, 'a, K: ?Sized, V: ?Sized, C> {
    inner: Iter<'m, 'a, K, V, C>,
}

impl<'a, K: ?Sized, V: ?Sized, C> Iterator for Values<'_, 'a, K, V, C> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: ?Sized, V: ?Sized, C> FusedIterator for Values<'_, '_, K, V, C> {}
