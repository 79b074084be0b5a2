//! Partitioned Bloom filter.
//!
//! The bit array is split into `k` contiguous slices and probe `j` only ever
//! lands in slice `j`, so no two probes of one item can collide. The first
//! `size % k` slices hold one extra bit.

use crate::error::{BloomError, Result};
use crate::filter::validate_dimensions;
use crate::hash::{fnv_hash, murmur_hash};
use crate::traits::{BloomFilterOps, BloomFilterStats};
use bitvec::{bitvec, order::Lsb0, vec::BitVec};
use std::ops::Range;
use tracing::debug;

pub struct PartitionedBloomFilter {
    bits: BitVec<usize, Lsb0>,
    /// Exclusive end offset of each slice
    slice_ends: Vec<usize>,
    insert_count: usize,
}

impl PartitionedBloomFilter {
    pub fn new(size: usize, hash_count: usize) -> Result<Self> {
        validate_dimensions(size, hash_count)?;
        if size < hash_count {
            return Err(BloomError::InvalidConfig(format!(
                "Partitioned filter needs at least one bit per slice: {size} bits for {hash_count} slices"
            )));
        }

        let slice_ends = slice_ends(size, hash_count);
        debug!(size, hash_count, "initialized partitioned bloom filter");

        Ok(Self {
            bits: bitvec![0; size],
            slice_ends,
            insert_count: 0,
        })
    }

    fn slice(&self, j: usize) -> Range<usize> {
        let start = if j == 0 { 0 } else { self.slice_ends[j - 1] };
        start..self.slice_ends[j]
    }

    /// Bit positions probed for `item`, one per slice.
    pub fn indices(&self, item: &[u8]) -> Vec<usize> {
        let a = u64::from(fnv_hash(item));
        let b = u64::from(murmur_hash(item));

        (0..self.slice_ends.len())
            .map(|j| {
                let slice = self.slice(j);
                let len = slice.len() as u64;
                let offset = match j {
                    0 => a % len,
                    1 => b % len,
                    _ => a.wrapping_add((j as u64 + 1).wrapping_mul(b)) % len,
                };
                slice.start + offset as usize
            })
            .collect()
    }

    pub fn slice_len(&self, j: usize) -> usize {
        self.slice(j).len()
    }

    pub fn set_bits(&self) -> usize {
        self.bits.count_ones()
    }
}

fn slice_ends(size: usize, hash_count: usize) -> Vec<usize> {
    let per_slice = size / hash_count;
    let remainder = size % hash_count;
    let mut end = 0;
    (0..hash_count)
        .map(|j| {
            end += per_slice + usize::from(j < remainder);
            end
        })
        .collect()
}

impl BloomFilterOps for PartitionedBloomFilter {
    fn insert(&mut self, item: &[u8]) -> bool {
        for idx in self.indices(item) {
            self.bits.set(idx, true);
        }
        self.insert_count += 1;
        true
    }

    fn contains(&self, item: &[u8]) -> bool {
        self.indices(item).into_iter().all(|idx| self.bits[idx])
    }
}

impl BloomFilterStats for PartitionedBloomFilter {
    fn size(&self) -> usize {
        self.bits.len()
    }

    fn hash_count(&self) -> usize {
        self.slice_ends.len()
    }

    fn insert_count(&self) -> usize {
        self.insert_count
    }
}

impl std::fmt::Debug for PartitionedBloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PartitionedBloomFilter {{ size: {}, slices: {}, insert_count: {} }}",
            self.bits.len(),
            self.slice_ends.len(),
            self.insert_count
        )
    }
}
