//! Compares the observed false positive rate against the target for a grid of
//! filter sizes.
//!
//! Run with `cargo run --example fpr`.

use biobloom::{
    BloomFilter, BloomFilterOps, BloomFilterStats, FilterConfigBuilder,
    PartitionedBloomFilter,
};
use comfy_table::{
    Cell, CellAlignment, ContentArrangement, Table,
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL,
};
use rand::Rng;
use std::collections::HashSet;

const TEST_SAMPLES: usize = 10_000;
const SEQUENCE_LEN: usize = 24;

fn random_sequence(rng: &mut impl Rng) -> String {
    (0..SEQUENCE_LEN)
        .map(|_| b"ACGT"[rng.random_range(0..4)] as char)
        .collect()
}

fn observed_rate<F: BloomFilterOps>(
    filter: &F,
    known: &HashSet<String>,
    rng: &mut impl Rng,
) -> f64 {
    let mut false_positives = 0;
    let mut tested = 0;
    while tested < TEST_SAMPLES {
        let candidate = random_sequence(rng);
        if known.contains(&candidate) {
            continue;
        }
        tested += 1;
        if filter.contains(candidate.as_bytes()) {
            false_positives += 1;
        }
    }
    false_positives as f64 / TEST_SAMPLES as f64
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = rand::rng();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Elements").set_alignment(CellAlignment::Center),
            Cell::new("Target FPR").set_alignment(CellAlignment::Center),
            Cell::new("Bits (m)").set_alignment(CellAlignment::Center),
            Cell::new("Hashes (k)").set_alignment(CellAlignment::Center),
            Cell::new("Estimated FPR").set_alignment(CellAlignment::Center),
            Cell::new("Observed FPR").set_alignment(CellAlignment::Center),
            Cell::new("Partitioned FPR").set_alignment(CellAlignment::Center),
        ]);

    for &elements in &[1_000, 10_000, 100_000] {
        for &target in &[0.2, 0.05, 0.01] {
            let config = FilterConfigBuilder::default()
                .expected_items(elements)
                .false_positive_rate(target)
                .build()?;
            let mut filter = BloomFilter::from_config(config)?;
            let mut partitioned =
                PartitionedBloomFilter::new(filter.size(), filter.hash_count())?;

            let known: HashSet<String> =
                (0..elements).map(|_| random_sequence(&mut rng)).collect();
            for sequence in &known {
                filter.insert(sequence.as_bytes());
                partitioned.insert(sequence.as_bytes());
            }

            let observed = observed_rate(&filter, &known, &mut rng);
            let observed_partitioned = observed_rate(&partitioned, &known, &mut rng);

            table.add_row(vec![
                Cell::new(known.len()).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.2}%", target * 100.0)),
                Cell::new(filter.size()).set_alignment(CellAlignment::Right),
                Cell::new(filter.hash_count()).set_alignment(CellAlignment::Right),
                Cell::new(format!(
                    "{:.2}%",
                    filter.estimated_false_positive_rate() * 100.0
                )),
                Cell::new(format!("{:.2}%", observed * 100.0)),
                Cell::new(format!("{:.2}%", observed_partitioned * 100.0)),
            ]);
        }
    }

    println!("{table}");
    Ok(())
}
