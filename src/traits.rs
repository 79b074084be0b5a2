use crate::params::estimate_false_positive_rate;

pub trait BloomFilterOps {
    /// Sets every probe bit of `item`. Always returns `true`.
    fn insert(&mut self, item: &[u8]) -> bool;
    /// `false` means `item` was never inserted; `true` means it probably was.
    fn contains(&self, item: &[u8]) -> bool;
}

pub trait BloomFilterStats {
    fn size(&self) -> usize;
    fn hash_count(&self) -> usize;
    fn insert_count(&self) -> usize;

    fn estimated_false_positive_rate(&self) -> f64 {
        estimate_false_positive_rate(
            self.size(),
            self.hash_count(),
            self.insert_count(),
        )
    }
}

pub trait BulkBloomFilterOps: BloomFilterOps {
    fn insert_bulk<I, T>(&mut self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|item| self.insert(item.as_ref()))
            .filter(|&inserted| inserted)
            .count()
    }

    fn contains_bulk<I, T>(&self, items: I) -> Vec<bool>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        items
            .into_iter()
            .map(|item| self.contains(item.as_ref()))
            .collect()
    }
}

impl<F: BloomFilterOps> BulkBloomFilterOps for F {}
