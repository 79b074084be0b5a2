use crate::config::FilterConfigBuilderError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BloomError>;

#[derive(Error, Debug)]
pub enum BloomError {
    #[error("Filter size must be greater than 0")]
    ZeroSize,

    #[error("Hash count must be between {min} and {max}, got {hash_count}")]
    InvalidHashCount {
        hash_count: usize,
        min: usize,
        max: usize,
    },

    #[error("False positive rate must be in (0, 1], got {rate}")]
    InvalidFalsePositiveRate { rate: f64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to build configuration: {0}")]
    ConfigBuilder(#[from] FilterConfigBuilderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
