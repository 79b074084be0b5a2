//! Element sources: reads the elements to load and the queries to run from
//! line-oriented text or FASTA input.
//!
//! Lines are handled as raw bytes, so input does not have to be UTF-8.

use crate::config::FilterConfigBuilder;
use crate::error::Result;
use crate::filter::BloomFilter;
use crate::traits::BulkBloomFilterOps;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, warn};

/// False positive rate used when none, or an unusable one, is supplied.
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 0.2;

const OVERRIDE_PREFIX: u8 = b'?';
const FASTA_HEADER_PREFIX: u8 = b'>';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputFormat {
    #[default]
    Plain,
    /// Lines starting with `>` are headers and are skipped; every other
    /// line is its own element
    Fasta,
    /// Each `>` header starts a record whose sequence lines are joined into
    /// one element
    FastaRecords,
}

impl InputFormat {
    fn is_header(&self, line: &[u8]) -> bool {
        *self != InputFormat::Plain && line.first() == Some(&FASTA_HEADER_PREFIX)
    }
}

/// Falls back to [`DEFAULT_FALSE_POSITIVE_RATE`] unless `rate` is in (0, 1].
pub fn resolve_false_positive_rate(rate: Option<f64>) -> f64 {
    match rate {
        Some(rate) if rate > 0.0 && rate <= 1.0 => rate,
        Some(rate) => {
            warn!(
                rate,
                default = DEFAULT_FALSE_POSITIVE_RATE,
                "false positive rate out of range, using default"
            );
            DEFAULT_FALSE_POSITIVE_RATE
        }
        None => DEFAULT_FALSE_POSITIVE_RATE,
    }
}

/// Parses a `?` header line carrying a false positive rate.
///
/// `?20` is a percentage (0.20); `?0.15` is taken as is. Anything else
/// yields `None`. The value is not range checked here.
pub fn parse_probability_override(line: &str) -> Option<f64> {
    let value = line.trim().strip_prefix(char::from(OVERRIDE_PREFIX))?.trim();
    if value.contains('.') {
        value.parse::<f64>().ok()
    } else {
        value.parse::<u32>().ok().map(|percent| f64::from(percent) / 100.0)
    }
}

/// Strips surrounding ASCII whitespace, line endings included.
///
/// Elements, query files and interactive queries all go through this, so a
/// stored element and its query compare equal.
pub fn normalize_line(line: &[u8]) -> &[u8] {
    line.trim_ascii()
}

/// Calls `f` with every normalized line of `reader`, including empty ones.
fn for_each_line<R, F>(reader: R, mut f: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &[u8]),
{
    for (line_no, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        f(line_no, normalize_line(&line));
    }
    Ok(())
}

/// Collects elements according to `format`.
fn collect_sequences<R: BufRead>(
    reader: R,
    format: InputFormat,
    mut on_first_line: impl FnMut(&[u8]) -> bool,
) -> Result<Vec<Vec<u8>>> {
    let mut sequences = Vec::new();
    let mut record: Option<Vec<u8>> = None;

    for_each_line(reader, |line_no, line| {
        if line_no == 0 && on_first_line(line) {
            return;
        }
        if format.is_header(line) {
            sequences.extend(record.take().filter(|seq| !seq.is_empty()));
            if format == InputFormat::FastaRecords {
                record = Some(Vec::new());
            }
        } else if !line.is_empty() {
            match format {
                // sequence lines before the first header form their own record
                InputFormat::FastaRecords => record
                    .get_or_insert_with(Vec::new)
                    .extend_from_slice(line),
                _ => sequences.push(line.to_vec()),
            }
        }
    })?;

    sequences.extend(record.filter(|seq| !seq.is_empty()));
    Ok(sequences)
}

/// Elements read from an input source, plus the rate its header asked for.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementSet {
    pub false_positive_rate: Option<f64>,
    pub elements: Vec<Vec<u8>>,
}

impl ElementSet {
    /// Expected element count used to size the filter.
    pub fn expected_items(&self) -> usize {
        self.elements.len()
    }

    /// Builds a filter sized for this set and inserts every element.
    ///
    /// `rate_override` takes precedence over the rate from the input header.
    pub fn build_filter(
        &self,
        rate_override: Option<f64>,
    ) -> Result<BloomFilter> {
        let rate = resolve_false_positive_rate(
            rate_override.or(self.false_positive_rate),
        );
        let config = FilterConfigBuilder::default()
            .expected_items(self.expected_items())
            .false_positive_rate(rate)
            .build()?;

        let mut filter = BloomFilter::from_config(config)?;
        let inserted = filter.insert_bulk(&self.elements);
        debug!(inserted, rate, "loaded elements into filter");
        Ok(filter)
    }
}

/// Reads the elements of `reader`.
///
/// Only the first line may be a `?` rate header; it is never inserted.
pub fn read_elements<R: BufRead>(
    reader: R,
    format: InputFormat,
) -> Result<ElementSet> {
    let mut false_positive_rate = None;
    let elements = collect_sequences(reader, format, |line| {
        if line.first() != Some(&OVERRIDE_PREFIX) {
            return false;
        }
        false_positive_rate = std::str::from_utf8(line)
            .ok()
            .and_then(parse_probability_override);
        if false_positive_rate.is_none() {
            warn!(
                header = %String::from_utf8_lossy(line),
                "ignoring unparseable rate header"
            );
        }
        true
    })?;

    Ok(ElementSet {
        false_positive_rate,
        elements,
    })
}

pub fn load_elements(path: &Path, format: InputFormat) -> Result<ElementSet> {
    let file = File::open(path)?;
    let set = read_elements(BufReader::new(file), format)?;
    debug!(
        path = %path.display(),
        elements = set.elements.len(),
        "read element file"
    );
    Ok(set)
}

/// Reads queries with the same rules as elements, minus the rate header.
pub fn read_queries<R: BufRead>(
    reader: R,
    format: InputFormat,
) -> Result<Vec<Vec<u8>>> {
    collect_sequences(reader, format, |_| false)
}

pub fn load_queries(path: &Path, format: InputFormat) -> Result<Vec<Vec<u8>>> {
    let file = File::open(path)?;
    read_queries(BufReader::new(file), format)
}
