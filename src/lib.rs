//! Bloom filter for sequence membership queries.
//!
//! A filter is a fixed array of `m` bits probed at `k` positions per element.
//! Both are derived from a target false positive rate `p` and an expected
//! element count `n`:
//!
//!    * Size: `m = ceil(n * |ln p| / (ln 2)^2)`, at least 1.
//!    * Probes: `k = floor(log2(1 / p))`, at least 2.
//!
//! Insertion:
//!     * Hash the element with a byte-wise FNV hash and a byte-wise Murmur-style
//!       hash, each reduced modulo `m`, and set both bits.
//!     * For `k > 2`, probe `i` (for `i = 3..=k`) sets bit `(a + i * b) mod m`.
//! Query:
//!     * The element is reported present only if every probed bit is set.
//!     * Bits are never cleared, so an inserted element is always found.
//!
//! Example:
//!
//! ```
//! use biobloom::{BloomFilter, BloomFilterOps, BloomParams};
//!
//! let params = BloomParams::new(0.2, 1000).unwrap();
//! let mut filter = BloomFilter::new(params.size, params.hash_count).unwrap();
//!
//! filter.insert(b"ACGT");
//! assert!(filter.contains(b"ACGT"));
//! ```

pub mod common;
mod config;
mod error;
mod filter;
mod hash;
pub mod input;
mod params;
mod partitioned;
mod traits;

pub use config::{
    BloomParams, FilterConfig, FilterConfigBuilder, FilterConfigBuilderError,
};
pub use error::{BloomError, Result};
pub use filter::BloomFilter;
pub use hash::{
    HashFunction, default_hash_function, fnv_hash, fnv_index,
    fnv1a_murmur3_hash_function, murmur_hash, murmur_index,
};
pub use input::{DEFAULT_FALSE_POSITIVE_RATE, InputFormat};
pub use params::{
    MAX_HASH_COUNT, MIN_HASH_COUNT, compute_hash_count, compute_size,
    estimate_false_positive_rate,
};
pub use partitioned::PartitionedBloomFilter;
pub use traits::{BloomFilterOps, BloomFilterStats, BulkBloomFilterOps};
