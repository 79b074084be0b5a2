use crate::params::{MAX_HASH_COUNT, MIN_HASH_COUNT};
use fnv::FnvHasher;
use murmur3::murmur3_32;
use std::hash::Hasher;
use std::io::Cursor;

/// A type alias for the probe strategy used by the Bloom filter.
///
/// **Parameters:**
///
/// - `item: &[u8]`
///   - A byte slice representing the item to be hashed.
/// - `num_hashes: usize`
///   - The number of bit positions to compute for the item.
/// - `size: usize`
///   - The size of the filter's bit array. Every returned index must be
///     in `[0, size)`.
///
/// **Returns:**
///
/// - `Vec<usize>`
///   - `num_hashes` bit positions. The same item must always map to the
///     same positions.
pub type HashFunction = fn(&[u8], usize, usize) -> Vec<usize>;

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

const MURMUR_SEED: u32 = 0;
const MURMUR_C1: u32 = 0xcc9e_2d51;
const MURMUR_C2: u32 = 0x1b87_3593;
const MURMUR_R1: u32 = 15;
const MURMUR_R2: u32 = 13;
const MURMUR_M: u32 = 5;
const MURMUR_N: u32 = 0xe654_6b64;

/// 32-bit FNV hash, xor-then-multiply per byte (the FNV-1a ordering).
pub fn fnv_hash(key: &[u8]) -> u32 {
    key.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Murmur-style 32-bit hash that mixes one byte at a time.
///
/// This is not canonical MurmurHash3: there is no 4-byte block loop, no tail
/// handling and no length mixing. Each byte goes through the Murmur3 block
/// mix on its own, followed by a shortened finalizer.
pub fn murmur_hash(key: &[u8]) -> u32 {
    let mut hash = MURMUR_SEED;
    for &byte in key {
        let k = u32::from(byte)
            .wrapping_mul(MURMUR_C1)
            .rotate_left(MURMUR_R1)
            .wrapping_mul(MURMUR_C2);

        hash ^= k;
        hash = hash.rotate_left(MURMUR_R2);
        hash = hash.wrapping_mul(MURMUR_M).wrapping_add(MURMUR_N);
    }

    hash = hash.wrapping_mul(0x85eb_ca6b);
    hash ^= hash >> 13;
    hash = hash.wrapping_mul(0xc2b2_ae35);
    hash ^= hash >> 16;
    hash
}

/// First probe position: [`fnv_hash`] reduced to `[0, size)`.
pub fn fnv_index(key: &[u8], size: usize) -> usize {
    fnv_hash(key) as usize % size
}

/// Second probe position: [`murmur_hash`] reduced to `[0, size)`.
pub fn murmur_index(key: &[u8], size: usize) -> usize {
    murmur_hash(key) as usize % size
}

/// Extends two base positions to `num_hashes` positions.
///
/// Probes 1 and 2 are `a` and `b`; probe `i` for `i` in `3..=num_hashes` is
/// `(a + i * b) mod size`.
fn double_hash(a: usize, b: usize, num_hashes: usize, size: usize) -> Vec<usize> {
    let mut indices =
        Vec::with_capacity(num_hashes.clamp(MIN_HASH_COUNT, MAX_HASH_COUNT));
    indices.push(a);
    indices.push(b);
    let size = size as u64;
    for i in 3..=num_hashes as u64 {
        let index = (a as u64).wrapping_add(i.wrapping_mul(b as u64)) % size;
        indices.push(index as usize);
    }
    indices
}

/// Byte-wise FNV and Murmur positions extended by double hashing.
pub fn default_hash_function(
    item: &[u8],
    num_hashes: usize,
    size: usize,
) -> Vec<usize> {
    double_hash(
        fnv_index(item, size),
        murmur_index(item, size),
        num_hashes,
        size,
    )
}

pub(crate) fn hash_murmur3_32(key: &[u8]) -> u32 {
    let mut cursor = Cursor::new(key);
    // reading from an in-memory cursor cannot fail
    murmur3_32(&mut cursor, MURMUR_SEED).unwrap_or_default()
}

pub(crate) fn hash_fnv1a_64_folded(key: &[u8]) -> u32 {
    let mut hasher = FnvHasher::default();
    hasher.write(key);
    let hash = hasher.finish();
    (hash ^ (hash >> 32)) as u32
}

/// Alternative strategy built on the `fnv` crate's 64-bit FNV-1a and the
/// canonical block-based MurmurHash3, with the same double hashing scheme.
///
/// Filters built with this strategy do not share bit layouts with filters
/// built with [`default_hash_function`].
pub fn fnv1a_murmur3_hash_function(
    item: &[u8],
    num_hashes: usize,
    size: usize,
) -> Vec<usize> {
    double_hash(
        hash_fnv1a_64_folded(item) as usize % size,
        hash_murmur3_32(item) as usize % size,
        num_hashes,
        size,
    )
}
