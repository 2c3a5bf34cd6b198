pub mod sampler;

use std::collections::BTreeMap;

use rand::Rng;

use caipiao_core::Result;
use caipiao_core::catalog::LotteryConfig;
use caipiao_core::models::{FrequencyAnalysis, Pool};

use crate::analysis::sampler::sample;

/// Number of synthetic past draws the analysis is built from.
pub const HISTORY_DRAWS: usize = 30;
pub const HOT_RED_COUNT: usize = 10;
pub const HOT_BLUE_COUNT: usize = 5;

/// One synthetic draw: (reds, blues), both sorted.
pub type DrawNumbers = (Vec<u8>, Vec<u8>);

pub fn generate_history<R: Rng + ?Sized>(
    config: &LotteryConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<DrawNumbers>> {
    (0..count)
        .map(|_| -> Result<DrawNumbers> {
            let reds = sample(config.red_range, config.red_count, rng)?;
            let blues = sample(config.blue_range, config.blue_count, rng)?;
            Ok((reds, blues))
        })
        .collect()
}

/// Hot/cold analysis over freshly generated synthetic history.
pub fn analyze<R: Rng + ?Sized>(config: &LotteryConfig, rng: &mut R) -> Result<FrequencyAnalysis> {
    let draws = generate_history(config, HISTORY_DRAWS, rng)?;
    Ok(analyze_draws(&draws))
}

pub fn analyze_draws(draws: &[DrawNumbers]) -> FrequencyAnalysis {
    let red_ranking = rank(draws, Pool::Red);
    let blue_ranking = rank(draws, Pool::Blue);

    FrequencyAnalysis {
        hot_reds: head(&red_ranking, HOT_RED_COUNT),
        hot_blues: head(&blue_ranking, HOT_BLUE_COUNT),
        cold_reds: tail(&red_ranking, HOT_RED_COUNT),
        cold_blues: tail(&blue_ranking, HOT_BLUE_COUNT),
        red_distribution: distribution(&red_ranking),
        blue_distribution: distribution(&blue_ranking),
    }
}

/// Numbers by count, most frequent first. Equal counts keep the order in
/// which the numbers first appeared in `draws`.
pub fn rank(draws: &[DrawNumbers], pool: Pool) -> Vec<(u8, u32)> {
    let mut ranking: Vec<(u8, u32)> = Vec::new();

    for (reds, blues) in draws {
        let numbers = match pool {
            Pool::Red => reds.as_slice(),
            Pool::Blue => blues.as_slice(),
        };
        for &n in numbers {
            match ranking.iter_mut().find(|(number, _)| *number == n) {
                Some((_, count)) => *count += 1,
                None => ranking.push((n, 1)),
            }
        }
    }

    // stable: ties stay in first-occurrence order
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking
}

fn head(ranking: &[(u8, u32)], n: usize) -> Vec<u8> {
    ranking.iter().take(n).map(|&(number, _)| number).collect()
}

fn tail(ranking: &[(u8, u32)], n: usize) -> Vec<u8> {
    ranking[ranking.len().saturating_sub(n)..]
        .iter()
        .map(|&(number, _)| number)
        .collect()
}

fn distribution(ranking: &[(u8, u32)]) -> BTreeMap<u8, u32> {
    ranking.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use caipiao_core::catalog::LotteryType;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rank_orders_by_frequency() {
        let draws = vec![
            (vec![1, 2, 3], vec![1]),
            (vec![2, 3, 4], vec![1]),
            (vec![3, 4, 5], vec![2]),
        ];
        let ranking = rank(&draws, Pool::Red);
        assert_eq!(ranking, vec![(3, 3), (2, 2), (4, 2), (1, 1), (5, 1)]);
        let ranking = rank(&draws, Pool::Blue);
        assert_eq!(ranking, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_rank_ties_keep_first_occurrence_order() {
        let draws = vec![(vec![9, 4], vec![]), (vec![7, 1], vec![])];
        let ranking = rank(&draws, Pool::Red);
        assert_eq!(ranking, vec![(9, 1), (4, 1), (7, 1), (1, 1)]);
    }

    #[test]
    fn test_hot_and_cold_overlap_on_small_pool() {
        let draws = vec![
            (vec![1, 2, 3], vec![1, 2]),
            (vec![1, 2, 4], vec![1, 3]),
            (vec![1, 5, 6], vec![1, 2]),
        ];
        let analysis = analyze_draws(&draws);
        // 6 distinct reds, fewer than 10: hot and cold are the same list
        assert_eq!(analysis.hot_reds, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(analysis.cold_reds, analysis.hot_reds);
        assert_eq!(analysis.hot_blues, vec![1, 2, 3]);
        assert_eq!(analysis.cold_blues, vec![1, 2, 3]);
    }

    #[test]
    fn test_cold_is_tail_of_ranking() {
        let mut draws = Vec::new();
        for n in 1..=12u8 {
            // number n appears n times
            for _ in 0..n {
                draws.push((vec![n], vec![]));
            }
        }
        let analysis = analyze_draws(&draws);
        assert_eq!(analysis.hot_reds, vec![12, 11, 10, 9, 8, 7, 6, 5, 4, 3]);
        assert_eq!(analysis.cold_reds, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(analysis.red_distribution[&12], 12);
        assert_eq!(analysis.red_distribution[&1], 1);
        assert!(analysis.hot_blues.is_empty());
    }

    #[test]
    fn test_distribution_totals_match_history() {
        let config = LotteryType::Dlt.config();
        let mut rng = StdRng::seed_from_u64(2026);
        let draws = generate_history(config, HISTORY_DRAWS, &mut rng).unwrap();
        assert_eq!(draws.len(), HISTORY_DRAWS);
        let analysis = analyze_draws(&draws);

        let red_total: u32 = analysis.red_distribution.values().sum();
        let blue_total: u32 = analysis.blue_distribution.values().sum();
        assert_eq!(red_total as usize, HISTORY_DRAWS * config.red_count);
        assert_eq!(blue_total as usize, HISTORY_DRAWS * config.blue_count);
        assert!(analysis.red_distribution.keys().all(|&n| config.red_range.contains(n)));
        assert!(analysis.blue_distribution.keys().all(|&n| config.blue_range.contains(n)));
    }

    #[test]
    fn test_analyze_list_sizes() {
        for lottery in LotteryType::ALL {
            let mut rng = StdRng::seed_from_u64(11);
            let analysis = analyze(lottery.config(), &mut rng).unwrap();
            assert_eq!(analysis.hot_reds.len(), HOT_RED_COUNT);
            assert_eq!(analysis.cold_reds.len(), HOT_RED_COUNT);
            assert_eq!(analysis.hot_blues.len(), HOT_BLUE_COUNT);
            assert_eq!(analysis.cold_blues.len(), HOT_BLUE_COUNT);
        }
    }

    #[test]
    fn test_analyze_is_reproducible_with_seed() {
        let config = LotteryType::Ssq.config();
        let a = analyze(config, &mut StdRng::seed_from_u64(8)).unwrap();
        let b = analyze(config, &mut StdRng::seed_from_u64(8)).unwrap();
        assert_eq!(a, b);
    }
}
