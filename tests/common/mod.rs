use rand::{Rng, distr::Alphanumeric};

const NUCLEOTIDES: &[u8] = b"ACGT";

// Helper function to generate consistent test data
#[allow(dead_code)]
pub fn generate_test_items(count: usize) -> Vec<Vec<u8>> {
    (0..count)
        .map(|i| format!("test_item_{:06}", i).into_bytes())
        .collect()
}

#[allow(dead_code)]
pub fn generate_random_string(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Random nucleotide sequence of `len` bases.
#[allow(dead_code)]
pub fn generate_sequence(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| NUCLEOTIDES[rng.random_range(0..NUCLEOTIDES.len())] as char)
        .collect()
}
