use rand::Rng;
use rand::seq::index;

use caipiao_core::models::NumberRange;
use caipiao_core::{LotteryError, Result};

/// `count` distinct numbers drawn uniformly from `range`, sorted ascending.
pub fn sample<R: Rng + ?Sized>(range: NumberRange, count: usize, rng: &mut R) -> Result<Vec<u8>> {
    let size = range.size();
    if count > size {
        return Err(LotteryError::InvalidRange { count, size });
    }

    let mut picked: Vec<u8> = index::sample(rng, size, count)
        .into_iter()
        .map(|i| range.lo + i as u8)
        .collect();
    picked.sort_unstable();
    Ok(picked)
}

/// Same as [`sample`] but over an explicit pool of distinct numbers.
pub fn sample_from<R: Rng + ?Sized>(pool: &[u8], count: usize, rng: &mut R) -> Result<Vec<u8>> {
    if count > pool.len() {
        return Err(LotteryError::InvalidRange {
            count,
            size: pool.len(),
        });
    }

    let mut picked: Vec<u8> = index::sample(rng, pool.len(), count)
        .into_iter()
        .map(|i| pool[i])
        .collect();
    picked.sort_unstable();
    Ok(picked)
}
