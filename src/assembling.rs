//! Record collection, shuffling and train/validation partitioning.
//!
//! Records from every document and category are pooled into one sequence,
//! shuffled once (full-sequence, not per-category, so categories mix) and
//! cut into validation/train. The shuffle draws from the caller's seeded
//! rng, after every capping draw, so a fixed seed gives byte-identical
//! datasets across reruns.
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The externally emitted unit: one chunk, header included, serialized as
/// a single-field JSON object per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    text: String,
}

impl Record {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Disjoint train/validation sequences in post-shuffle order.
#[derive(Debug, Default)]
pub struct Dataset {
    train: Vec<Record>,
    validation: Vec<Record>,
}

impl Dataset {
    pub fn train(&self) -> &[Record] {
        &self.train
    }

    pub fn validation(&self) -> &[Record] {
        &self.validation
    }

    pub fn len(&self) -> usize {
        self.train.len() + self.validation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.train.is_empty() && self.validation.is_empty()
    }
}

/// Shuffle all records and split off the validation set.
///
/// Validation size is `max(1, floor(total * val_ratio))` for a non-empty
/// pool, 0 otherwise; the first shuffled records become validation, the
/// rest train, both kept in post-shuffle order.
pub fn shuffle_split<R: Rng>(mut records: Vec<Record>, val_ratio: f64, rng: &mut R) -> Dataset {
    records.shuffle(rng);

    let val_size = if records.is_empty() {
        0
    } else {
        usize::max(1, (records.len() as f64 * val_ratio).floor() as usize).min(records.len())
    };

    let train = records.split_off(val_size);
    Dataset {
        train,
        validation: records,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{shuffle_split, Record};

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| Record::new(format!("record {}", i))).collect()
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = shuffle_split(records(100), 0.1, &mut rng);

        assert_eq!(dataset.train().len() + dataset.validation().len(), 100);

        let mut all: Vec<&str> = dataset
            .train()
            .iter()
            .chain(dataset.validation())
            .map(|r| r.text())
            .collect();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), 100);
    }

    #[test]
    fn validation_is_at_least_one() {
        let mut rng = StdRng::seed_from_u64(42);
        // 0.01 of 10 floors to 0, but a non-empty pool keeps one record
        let dataset = shuffle_split(records(10), 0.01, &mut rng);
        assert_eq!(dataset.validation().len(), 1);
        assert_eq!(dataset.train().len(), 9);
    }

    #[test]
    fn empty_pool_empty_sets() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = shuffle_split(Vec::new(), 0.5, &mut rng);
        assert!(dataset.is_empty());
        assert_eq!(dataset.validation().len(), 0);
    }

    #[test]
    fn fixed_seed_reproduces_order() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let a = shuffle_split(records(50), 0.1, &mut rng_a);
        let b = shuffle_split(records(50), 0.1, &mut rng_b);
        assert_eq!(a.train(), b.train());
        assert_eq!(a.validation(), b.validation());
    }

    #[test]
    fn ratio_floor() {
        let mut rng = StdRng::seed_from_u64(42);
        let dataset = shuffle_split(records(250), 0.01, &mut rng);
        assert_eq!(dataset.validation().len(), 2);
    }
}
