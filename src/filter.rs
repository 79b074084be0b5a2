use crate::config::{BloomParams, FilterConfig};
use crate::error::{BloomError, Result};
use crate::hash::{HashFunction, default_hash_function};
use crate::params::{MAX_HASH_COUNT, MIN_HASH_COUNT};
use crate::traits::{BloomFilterOps, BloomFilterStats};
use bitvec::{bitvec, order::Lsb0, slice::BitSlice, vec::BitVec};
use tracing::{debug, trace};

pub(crate) fn validate_dimensions(size: usize, hash_count: usize) -> Result<()> {
    if size == 0 {
        return Err(BloomError::ZeroSize);
    }
    if !(MIN_HASH_COUNT..=MAX_HASH_COUNT).contains(&hash_count) {
        return Err(BloomError::InvalidHashCount {
            hash_count,
            min: MIN_HASH_COUNT,
            max: MAX_HASH_COUNT,
        });
    }
    Ok(())
}

/// Standard Bloom filter over a single bit array.
///
/// A filter only exists once its dimensions have been validated, so inserts
/// and queries never operate on a zero-sized array.
pub struct BloomFilter {
    bits: BitVec<usize, Lsb0>,
    size: usize,
    hash_count: usize,
    hash_function: HashFunction,
    insert_count: usize,
}

impl BloomFilter {
    pub fn new(size: usize, hash_count: usize) -> Result<Self> {
        Self::with_hash_function(size, hash_count, default_hash_function)
    }

    pub fn with_hash_function(
        size: usize,
        hash_count: usize,
        hash_function: HashFunction,
    ) -> Result<Self> {
        validate_dimensions(size, hash_count)?;
        debug!(size, hash_count, "initialized bloom filter");

        Ok(Self {
            bits: bitvec![0; size],
            size,
            hash_count,
            hash_function,
            insert_count: 0,
        })
    }

    /// Sizes the filter from the configured load and false positive rate.
    pub fn from_config(config: FilterConfig) -> Result<Self> {
        config.validate()?;
        let params = BloomParams::from(&config);
        debug!(
            expected_items = config.expected_items,
            false_positive_rate = config.false_positive_rate,
            "derived filter parameters"
        );
        Self::with_hash_function(
            params.size,
            params.hash_count,
            config.hash_function,
        )
    }

    /// Resets the filter to an all-clear array of the given dimensions.
    ///
    /// On error the filter is left untouched.
    pub fn initialize(&mut self, size: usize, hash_count: usize) -> Result<()> {
        validate_dimensions(size, hash_count)?;

        if size == self.size {
            self.bits.fill(false);
        } else {
            self.bits = bitvec![0; size];
        }
        self.size = size;
        self.hash_count = hash_count;
        self.insert_count = 0;
        debug!(size, hash_count, "re-initialized bloom filter");
        Ok(())
    }

    /// Bit positions probed for `item`.
    pub fn indices(&self, item: &[u8]) -> Vec<usize> {
        (self.hash_function)(item, self.hash_count, self.size)
    }

    pub fn bits(&self) -> &BitSlice<usize, Lsb0> {
        &self.bits
    }

    /// Number of bits currently set.
    pub fn set_bits(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn fill_ratio(&self) -> f64 {
        self.set_bits() as f64 / self.size as f64
    }
}

impl BloomFilterOps for BloomFilter {
    fn insert(&mut self, item: &[u8]) -> bool {
        for idx in self.indices(item) {
            debug_assert!(idx < self.size, "probe {idx} outside {}", self.size);
            self.bits.set(idx, true);
        }
        self.insert_count += 1;
        trace!(len = item.len(), "inserted item");
        true
    }

    fn contains(&self, item: &[u8]) -> bool {
        self.indices(item).into_iter().all(|idx| self.bits[idx])
    }
}

impl BloomFilterStats for BloomFilter {
    fn size(&self) -> usize {
        self.size
    }

    fn hash_count(&self) -> usize {
        self.hash_count
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ size: {}, hash_count: {}, insert_count: {}, set_bits: {} }}",
            self.size,
            self.hash_count,
            self.insert_count,
            self.set_bits()
        )
    }
}
