use crate::error::{BloomError, Result};
use crate::hash::{HashFunction, default_hash_function};
use crate::input::DEFAULT_FALSE_POSITIVE_RATE;
use crate::params::{compute_hash_count, compute_size};
use derive_builder::Builder;

/// Configuration for a filter sized from its expected load.
#[derive(Clone, Debug, Builder)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Number of elements the filter is expected to hold
    #[builder(default = "1_000")]
    pub expected_items: usize,

    /// Target false positive rate, in (0, 1]
    #[builder(default = "DEFAULT_FALSE_POSITIVE_RATE")]
    pub false_positive_rate: f64,

    /// Probe strategy used for inserts and queries
    #[builder(default = "default_hash_function")]
    pub hash_function: HashFunction,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        validate_false_positive_rate(self.false_positive_rate)
    }
}

pub(crate) fn validate_false_positive_rate(rate: f64) -> Result<()> {
    // also rejects NaN
    if !(rate > 0.0 && rate <= 1.0) {
        return Err(BloomError::InvalidFalsePositiveRate { rate });
    }
    Ok(())
}

/// Derived parameters calculated from a false positive rate and a load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BloomParams {
    pub size: usize,
    pub hash_count: usize,
}

impl BloomParams {
    pub fn new(false_positive_rate: f64, expected_items: usize) -> Result<Self> {
        validate_false_positive_rate(false_positive_rate)?;
        Ok(Self {
            size: compute_size(false_positive_rate, expected_items),
            hash_count: compute_hash_count(false_positive_rate),
        })
    }
}

impl From<&FilterConfig> for BloomParams {
    fn from(config: &FilterConfig) -> Self {
        Self {
            size: compute_size(config.false_positive_rate, config.expected_items),
            hash_count: compute_hash_count(config.false_positive_rate),
        }
    }
}
