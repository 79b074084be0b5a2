use biobloom::{
    BloomError, BloomFilter, BloomParams, DEFAULT_FALSE_POSITIVE_RATE,
    FilterConfigBuilder, InputFormat, MIN_HASH_COUNT, compute_hash_count,
    compute_size,
    input::{load_elements, load_queries},
};
use std::{fs, path::PathBuf};

/// Temporary input file removed when dropped
struct TestFile {
    path: PathBuf,
}

impl TestFile {
    fn new(test_name: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = std::env::temp_dir()
            .join(format!("biobloom_{}_{}.txt", test_name, std::process::id()));
        fs::write(&path, contents).expect("Failed to write test input");
        Self { path }
    }

    fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Drop for TestFile {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod calculator_tests {
    use super::*;

    #[test]
    fn test_default_rate_parameters() {
        let ln2 = std::f64::consts::LN_2;
        let expected = (1000.0 * 0.2f64.ln().abs() / (ln2 * ln2)).ceil() as usize;
        assert_eq!(compute_size(0.2, 1000), expected);
        assert_eq!(compute_hash_count(0.2), 2);
    }

    #[test]
    fn test_params_never_degenerate() {
        for rate in [1.0, 0.9, 0.5, 0.2, 0.01, 1e-9] {
            for n in [0, 1, 10, 100_000] {
                let params = BloomParams::new(rate, n).unwrap();
                assert!(params.size >= 1);
                assert!(params.hash_count >= MIN_HASH_COUNT);
            }
        }
    }

    #[test]
    fn test_params_reject_invalid_rate() {
        for rate in [0.0, -1.0, 1.0001, f64::NAN, f64::INFINITY] {
            match BloomParams::new(rate, 100) {
                Err(BloomError::InvalidFalsePositiveRate { .. }) => {}
                other => panic!("Expected InvalidFalsePositiveRate, got {other:?}"),
            }
        }
    }
}

#[cfg(test)]
mod config_builder_tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = FilterConfigBuilder::default().build().unwrap();
        assert_eq!(config.expected_items, 1000);
        assert_eq!(config.false_positive_rate, DEFAULT_FALSE_POSITIVE_RATE);
        assert!(config.validate().is_ok());

        let params = BloomParams::from(&config);
        assert_eq!(params, BloomParams::new(0.2, 1000).unwrap());
    }

    #[test]
    fn test_invalid_rate_fails_validation() {
        let config = FilterConfigBuilder::default()
            .false_positive_rate(2.0)
            .build()
            .unwrap();

        let result = config.validate();
        assert!(result.is_err());
        match result.unwrap_err() {
            BloomError::InvalidFalsePositiveRate { rate } => assert_eq!(rate, 2.0),
            _ => panic!("Expected InvalidFalsePositiveRate error"),
        }
    }

    #[test]
    fn test_zero_expected_items_builds_minimal_filter() {
        let config = FilterConfigBuilder::default()
            .expected_items(0)
            .build()
            .unwrap();
        let filter = BloomFilter::from_config(config).unwrap();
        assert_eq!(biobloom::BloomFilterStats::size(&filter), 1);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BloomError::ZeroSize.to_string(),
            "Filter size must be greater than 0"
        );
        assert_eq!(
            BloomError::InvalidHashCount {
                hash_count: 1,
                min: 2,
                max: 32767
            }
            .to_string(),
            "Hash count must be between 2 and 32767, got 1"
        );
    }
}

#[cfg(test)]
mod input_file_tests {
    use super::*;
    use biobloom::{BloomFilterOps, BloomFilterStats, BulkBloomFilterOps};

    #[test]
    fn test_plain_file_queries() {
        let elements = TestFile::new("plain", "?5\nACGT\nCCGG\nTTAA\n");
        let queries = TestFile::new("plain_queries", "ACGT\nTTAA\n");

        let set = load_elements(elements.path(), InputFormat::Plain).unwrap();
        assert_eq!(set.false_positive_rate, Some(0.05));
        let filter = set.build_filter(None).unwrap();
        assert_eq!(filter.hash_count(), compute_hash_count(0.05));
        assert_eq!(filter.size(), compute_size(0.05, 3));

        for query in load_queries(queries.path(), InputFormat::Plain).unwrap() {
            assert!(filter.contains(&query));
        }
    }

    #[test]
    fn test_fasta_file() {
        let elements = TestFile::new(
            "fasta",
            ">chr1 sample\nACGTACGTAC\nGGTTAACC\n>chr2\nTTTTGGGG\n",
        );
        let set = load_elements(elements.path(), InputFormat::Fasta).unwrap();
        assert_eq!(set.false_positive_rate, None);
        assert_eq!(set.expected_items(), 3);

        let filter = set.build_filter(None).unwrap();
        assert!(filter.contains(b"ACGTACGTAC"));
        assert!(filter.contains(b"GGTTAACC"));
        assert!(filter.contains(b"TTTTGGGG"));
        assert_eq!(filter.hash_count(), compute_hash_count(0.2));
    }

    #[test]
    fn test_fasta_records_file() {
        let contents = ">chr1 sample\nACGTACGTAC\nGGTTAACC\n>chr2\nTTTTGGGG\n";
        let elements = TestFile::new("fasta_records", contents);
        let queries = TestFile::new("fasta_records_queries", contents);

        let set = load_elements(elements.path(), InputFormat::FastaRecords).unwrap();
        assert_eq!(set.expected_items(), 2);

        let filter = set.build_filter(None).unwrap();
        assert!(filter.contains(b"ACGTACGTACGGTTAACC"));
        assert!(filter.contains(b"TTTTGGGG"));

        let queries =
            load_queries(queries.path(), InputFormat::FastaRecords).unwrap();
        assert_eq!(queries.len(), 2);
        assert_eq!(filter.contains_bulk(&queries), vec![true, true]);
    }

    #[test]
    fn test_non_utf8_file() {
        let elements = TestFile::new("non_utf8", b"?1\nACGT\nAC\xffGT\r\n\xfe\n");
        let queries = TestFile::new("non_utf8_queries", b"AC\xffGT\n\xfe \n");

        let set = load_elements(elements.path(), InputFormat::Plain).unwrap();
        assert_eq!(set.false_positive_rate, Some(0.01));
        assert_eq!(set.expected_items(), 3);

        let filter = set.build_filter(None).unwrap();
        for query in load_queries(queries.path(), InputFormat::Plain).unwrap() {
            assert!(filter.contains(&query));
        }
    }

    #[test]
    fn test_padded_elements_match_plain_queries() {
        let elements = TestFile::new("padded", "ACGT \n\tGGCC\r\n");
        let queries = TestFile::new("padded_queries", "ACGT\n  GGCC\n");

        let filter = load_elements(elements.path(), InputFormat::Plain)
            .unwrap()
            .build_filter(None)
            .unwrap();
        assert!(filter.contains(b"ACGT"));
        assert!(filter.contains(b"GGCC"));
        for query in load_queries(queries.path(), InputFormat::Plain).unwrap() {
            assert!(filter.contains(&query));
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_queries(
            &PathBuf::from("no_such_biobloom_queries.txt"),
            InputFormat::Plain,
        );
        assert!(matches!(result, Err(BloomError::Io(_))));
    }
}
