use alloc::collections::TryReserveError;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        type Word = u64;
    } else {
        type Word = u32;
    }
}

const WORD_BITS: usize = Word::BITS as usize;

#[inline(always)]
fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

#[inline(always)]
fn locate(index: usize) -> (usize, Word) {
    (index / WORD_BITS, 1 << (index % WORD_BITS))
}

/// A growable bit vector with a fixed logical length.
///
/// Bits at or beyond [`len`](BitSet::len) are never reported by any scan, and
/// the unused high bits of the last storage word are kept clear so that
/// scanning a whole word never needs a length check on the hot path.
///
/// # Examples
///
/// ```rust
/// # use bucket_map::bitset::BitSet;
/// #
/// let mut bits = BitSet::with_len(10);
/// bits.set(3);
/// bits.set(7);
///
/// assert_eq!(bits.count_ones(), 2);
/// assert_eq!(bits.first_set(), Some(3));
/// assert_eq!(bits.next_set(4), Some(7));
/// assert_eq!(bits.first_unset(), Some(0));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<Word>,
    len: usize,
}

impl Debug for BitSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        use alloc::string::String;

        let bits = (0..self.len)
            .map(|index| if self.get(index) { '1' } else { '.' })
            .collect::<String>();

        f.debug_struct("BitSet")
            .field("len", &self.len)
            .field("bits", &bits)
            .finish()
    }
}

impl BitSet {
    /// Creates an empty bitset of length zero. Does not allocate.
    pub const fn new() -> Self {
        Self {
            words: Vec::new(),
            len: 0,
        }
    }

    /// Creates a bitset holding `len` clear bits.
    ///
    /// Aborts through the global allocation error handler if the storage
    /// cannot be allocated; see [`try_with_len`](BitSet::try_with_len) for the
    /// fallible version.
    pub fn with_len(len: usize) -> Self {
        Self {
            words: vec![0; words_for(len)],
            len,
        }
    }

    /// Creates a bitset holding `len` clear bits, reporting allocation failure
    /// instead of aborting.
    pub fn try_with_len(len: usize) -> Result<Self, TryReserveError> {
        let mut words = Vec::new();
        words.try_reserve_exact(words_for(len))?;
        words.resize(words_for(len), 0);
        Ok(Self { words, len })
    }

    /// Returns the number of bits in the set, both set and clear.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bitset has length zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the value of the bit at `index`. Out-of-range bits read as
    /// clear.
    #[inline(always)]
    pub fn get(&self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        let (word, mask) = locate(index);
        self.words[word] & mask != 0
    }

    /// Sets the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline(always)]
    pub fn set(&mut self, index: usize) {
        assert!(
            index < self.len,
            "bit index {index} out of range for BitSet of length {}",
            self.len
        );
        let (word, mask) = locate(index);
        self.words[word] |= mask;
    }

    /// Clears the bit at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline(always)]
    pub fn clear(&mut self, index: usize) {
        assert!(
            index < self.len,
            "bit index {index} out of range for BitSet of length {}",
            self.len
        );
        let (word, mask) = locate(index);
        self.words[word] &= !mask;
    }

    /// Clears every bit without changing the length.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Returns the number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns the index of the lowest set bit.
    pub fn first_set(&self) -> Option<usize> {
        self.next_set(0)
    }

    /// Returns the index of the highest set bit.
    pub fn last_set(&self) -> Option<usize> {
        self.words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)
            .map(|(i, word)| i * WORD_BITS + (WORD_BITS - 1 - word.leading_zeros() as usize))
    }

    /// Returns the index of the lowest clear bit, or `None` if every bit below
    /// `len` is set.
    pub fn first_unset(&self) -> Option<usize> {
        for (i, word) in self.words.iter().enumerate() {
            if *word != Word::MAX {
                let index = i * WORD_BITS + (!word).trailing_zeros() as usize;
                // The tail bits of the last word are always clear, so a full
                // set reports the first tail bit here.
                return (index < self.len).then_some(index);
            }
        }
        None
    }

    /// Returns the index of the lowest set bit at or after `from`.
    pub fn next_set(&self, from: usize) -> Option<usize> {
        if from >= self.len {
            return None;
        }

        let mut word_index = from / WORD_BITS;
        let mut word = self.words[word_index] & (Word::MAX << (from % WORD_BITS));
        loop {
            if word != 0 {
                return Some(word_index * WORD_BITS + word.trailing_zeros() as usize);
            }
            word_index += 1;
            word = *self.words.get(word_index)?;
        }
    }

    /// Changes the length to `len`. New bits are clear, bits at or beyond the
    /// new length are discarded.
    pub fn resize(&mut self, len: usize) {
        self.words.resize(words_for(len), 0);
        self.len = len;
        self.clear_tail();
    }

    /// Returns a copy of this bitset resized to `len`, leaving `self`
    /// untouched. Reports allocation failure instead of aborting.
    ///
    /// This lets callers stage a resize next to another allocation and commit
    /// both only once both have succeeded.
    pub fn try_resized(&self, len: usize) -> Result<Self, TryReserveError> {
        let mut words = Vec::new();
        words.try_reserve_exact(words_for(len))?;

        let keep = words_for(len).min(self.words.len());
        words.extend_from_slice(&self.words[..keep]);
        words.resize(words_for(len), 0);

        let mut resized = Self { words, len };
        resized.clear_tail();
        Ok(resized)
    }

    /// Returns the number of bytes of storage owned by the bitset.
    pub fn allocated_bytes(&self) -> usize {
        self.words.capacity() * core::mem::size_of::<Word>()
    }

    #[inline(always)]
    fn clear_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bits = BitSet::with_len(130);
        assert_eq!(bits.len(), 130);
        assert_eq!(bits.count_ones(), 0);

        for index in [0, 1, 63, 64, 65, 127, 129] {
            bits.set(index);
            assert!(bits.get(index));
        }
        assert_eq!(bits.count_ones(), 7);
        assert!(!bits.get(2));
        assert!(!bits.get(1000));

        bits.clear(64);
        assert!(!bits.get(64));
        assert_eq!(bits.count_ones(), 6);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        let mut bits = BitSet::with_len(8);
        bits.set(8);
    }

    #[test]
    fn test_first_unset_respects_len() {
        let mut bits = BitSet::with_len(5);
        for index in 0..5 {
            assert_eq!(bits.first_unset(), Some(index));
            bits.set(index);
        }
        assert_eq!(bits.first_unset(), None);

        let mut exact = BitSet::with_len(WORD_BITS);
        for index in 0..WORD_BITS {
            exact.set(index);
        }
        assert_eq!(exact.first_unset(), None);

        assert_eq!(BitSet::new().first_unset(), None);
    }

    #[test]
    fn test_scans_across_words() {
        let mut bits = BitSet::with_len(200);
        assert_eq!(bits.first_set(), None);
        assert_eq!(bits.last_set(), None);

        bits.set(5);
        bits.set(70);
        bits.set(199);

        assert_eq!(bits.first_set(), Some(5));
        assert_eq!(bits.next_set(5), Some(5));
        assert_eq!(bits.next_set(6), Some(70));
        assert_eq!(bits.next_set(71), Some(199));
        assert_eq!(bits.next_set(200), None);
        assert_eq!(bits.last_set(), Some(199));
    }

    #[test]
    fn test_resize_truncates_and_zero_fills() {
        let mut bits = BitSet::with_len(100);
        bits.set(3);
        bits.set(40);
        bits.set(99);

        bits.resize(41);
        assert_eq!(bits.len(), 41);
        assert_eq!(bits.count_ones(), 2);
        assert_eq!(bits.next_set(4), Some(40));

        bits.resize(40);
        assert_eq!(bits.count_ones(), 1);

        // Growing back must not resurrect bits cleared by the shrink.
        bits.resize(100);
        assert_eq!(bits.count_ones(), 1);
        assert!(!bits.get(40));
        assert!(!bits.get(99));
        assert_eq!(bits.first_unset(), Some(0));
    }

    #[test]
    fn test_try_resized_leaves_original_untouched() {
        let mut bits = BitSet::with_len(16);
        bits.set(2);
        bits.set(12);

        let smaller = bits.try_resized(4).unwrap();
        assert_eq!(smaller.len(), 4);
        assert_eq!(smaller.count_ones(), 1);

        let larger = bits.try_resized(300).unwrap();
        assert_eq!(larger.len(), 300);
        assert_eq!(larger.count_ones(), 2);
        assert_eq!(larger.first_unset(), Some(0));

        assert_eq!(bits.len(), 16);
        assert_eq!(bits.count_ones(), 2);
    }

    #[test]
    fn test_clear_all_keeps_len() {
        let mut bits = BitSet::try_with_len(70).unwrap();
        bits.set(1);
        bits.set(69);
        bits.clear_all();
        assert_eq!(bits.len(), 70);
        assert_eq!(bits.count_ones(), 0);
        assert!(bits.allocated_bytes() >= 70 / 8);
    }
}
