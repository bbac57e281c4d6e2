//! Single-word bit mask for the dense fast path.
//!
//! A [`BitMask`] holds a subset of a small universe `{0, .., n-1}` in one `u64`.
//! The universe size is capped at [`BitMask::CAPACITY`] so that the number of
//! subsets, `2^n`, still fits the word as well.

use std::fmt;

/// A subset of a small universe packed into a single machine word.
///
/// Bit `i` corresponds to the `i`-th element of the universe (0-indexed).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct BitMask(u64);

impl BitMask {
    /// Number of bits per word.
    const BITS_PER_WORD: usize = 64;

    /// Maximal universe size: one bit is kept free so `1 << n` never overflows.
    pub const CAPACITY: usize = Self::BITS_PER_WORD - 1;

    /// Creates a mask from raw bits.
    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The empty subset.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// The full universe of `n` elements.
    ///
    /// # Panics
    ///
    /// Panics if `n > CAPACITY`.
    #[inline]
    pub fn full(n: usize) -> Self {
        assert!(n <= Self::CAPACITY, "Universe size should be in the range 0..={}", Self::CAPACITY);
        Self((1u64 << n) - 1)
    }

    /// Returns the number of set bits.
    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no bits are set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if the bit at the given index is set.
    #[inline]
    pub const fn contains(self, index: usize) -> bool {
        index < Self::BITS_PER_WORD && (self.0 >> index) & 1 == 1
    }

    /// Sets the bit at the given index. Returns true if the bit was not previously set.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < Self::CAPACITY);
        let mask = 1u64 << index;
        let was_clear = (self.0 & mask) == 0;
        self.0 |= mask;
        was_clear
    }

    #[inline]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Returns an iterator over all set bit indices, lowest first.
    #[inline]
    pub fn iter(self) -> BitMaskIter {
        BitMaskIter { word: self.0 }
    }
}

impl FromIterator<usize> for BitMask {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut mask = BitMask::empty();
        for index in iter {
            mask.insert(index);
        }
        mask
    }
}

impl fmt::Display for BitMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#b}", self.0)
    }
}

/// Iterator over set bits in a [`BitMask`].
pub struct BitMaskIter {
    word: u64,
}

impl Iterator for BitMaskIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.word == 0 {
            return None;
        }
        let index = self.word.trailing_zeros() as usize;
        self.word &= self.word - 1; // Clear lowest set bit
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.word.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitMaskIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let m = BitMask::empty();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert!(!m.contains(0));
        assert!(!m.contains(100));
    }

    #[test]
    fn test_insert_contains() {
        let mut m = BitMask::empty();
        assert!(!m.contains(42));
        assert!(m.insert(42));
        assert!(m.contains(42));
        assert!(!m.insert(42)); // Already set
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn test_full() {
        assert_eq!(BitMask::full(0), BitMask::empty());
        assert_eq!(BitMask::full(3).bits(), 0b111);
        assert_eq!(BitMask::full(BitMask::CAPACITY).len(), 63);
    }

    #[test]
    #[should_panic(expected = "Universe size should be in the range")]
    fn test_full_over_capacity() {
        BitMask::full(64);
    }

    #[test]
    fn test_iter() {
        let m: BitMask = [5, 10, 3, 62].into_iter().collect();
        let indices: Vec<_> = m.iter().collect();
        assert_eq!(indices, vec![3, 5, 10, 62]);
        assert_eq!(m.iter().len(), 4);
    }

    #[test]
    fn test_set_ops() {
        let a = BitMask::from_bits(0b1101);
        let b = BitMask::from_bits(0b0111);
        assert_eq!(a.intersection(b).bits(), 0b0101);
        assert_eq!(a.union(b).bits(), 0b1111);
        assert!(a.intersection(b).is_subset(a));
        assert!(!a.is_subset(b));
        assert!(BitMask::empty().is_subset(b));
    }
}
