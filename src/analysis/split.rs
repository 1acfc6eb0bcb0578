//! Dataset sampling and splitting.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Fraction of the sample held out for testing.
const TEST_FRACTION: f64 = 0.3;

/// Reproducibly sample `n` records and split them into train and test sets.
///
/// `n` is capped at the number of available records. The same seed always
/// produces the same sample and the same split.
pub fn sample_and_split<R: Clone>(records: &[R], n: usize, seed: u64) -> (Vec<R>, Vec<R>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut sampled: Vec<R> = records
        .choose_multiple(&mut rng, n.min(records.len()))
        .cloned()
        .collect();
    sampled.shuffle(&mut rng);

    let test_len = (sampled.len() as f64 * TEST_FRACTION).round() as usize;
    let train_len = sampled.len() - test_len;
    let test = sampled.split_off(train_len);

    (sampled, test)
}
