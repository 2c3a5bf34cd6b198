use chrono::NaiveDateTime;
use log::debug;
use rand::Rng;

use caipiao_core::Result;
use caipiao_core::catalog::{LotteryConfig, LotteryType};
use caipiao_core::clock::Clock;
use caipiao_core::holidays::HolidayRegistry;
use caipiao_core::models::{FrequencyAnalysis, Pool, Prediction, Strategy, TicketScheme, validate_scheme};
use caipiao_core::schedule::next_draw;

use crate::analysis::analyze;
use crate::analysis::sampler::sample_from;

pub const MAX_SCHEMES: i64 = 5;

/// Builds a full prediction for `lottery`.
///
/// `from` overrides the instant the next draw is searched from; the clock is
/// used otherwise, and always for `generated_at`.
pub fn compose<R: Rng + ?Sized>(
    lottery: LotteryType,
    budget: i64,
    from: Option<NaiveDateTime>,
    clock: &dyn Clock,
    registry: &HolidayRegistry,
    rng: &mut R,
) -> Result<Prediction> {
    let config = lottery.config();
    let analysis = analyze(config, rng)?;
    let now = clock.now();
    let next = next_draw(config, from.unwrap_or(now), registry)?;

    let price_per_ticket = config.price_per_ticket;
    let max_tickets = budget.div_euclid(price_per_ticket);
    let scheme_count = max_tickets.clamp(0, MAX_SCHEMES) as usize;
    debug!("budget {budget} -> {max_tickets} tickets, {scheme_count} schemes");

    let schemes = build_schemes(config, &analysis, scheme_count, rng)?;

    Ok(Prediction {
        lottery_type: lottery,
        lottery_name: config.name.to_string(),
        next_draw: next,
        analysis,
        schemes,
        budget,
        max_tickets,
        price_per_ticket,
        generated_at: now,
    })
}

pub fn build_schemes<R: Rng + ?Sized>(
    config: &LotteryConfig,
    analysis: &FrequencyAnalysis,
    count: usize,
    rng: &mut R,
) -> Result<Vec<TicketScheme>> {
    let mut schemes = Vec::with_capacity(count);
    for i in 0..count {
        let strategy = Strategy::for_index(i);
        let scheme = TicketScheme {
            scheme: i + 1,
            reds: pick_numbers(Pool::Red, strategy, config, analysis, rng)?,
            blues: pick_numbers(Pool::Blue, strategy, config, analysis, rng)?,
            strategy,
        };
        validate_scheme(config, &scheme)?;
        schemes.push(scheme);
    }
    Ok(schemes)
}

fn pick_numbers<R: Rng + ?Sized>(
    pool: Pool,
    strategy: Strategy,
    config: &LotteryConfig,
    analysis: &FrequencyAnalysis,
    rng: &mut R,
) -> Result<Vec<u8>> {
    let (hot, cold) = match pool {
        Pool::Red => (&analysis.hot_reds, &analysis.cold_reds),
        Pool::Blue => (&analysis.hot_blues, &analysis.cold_blues),
    };
    let count = pool.pick_count(config);

    let mut numbers = match strategy {
        Strategy::Hot => sample_from(hot, count, rng)?,
        Strategy::Cold => sample_from(cold, count, rng)?,
        Strategy::Mixed => {
            // 70% hot (rounded down), rest cold
            let hot_count = count * 7 / 10;
            let mut picked = sample_from(hot, hot_count, rng)?;
            let remaining: Vec<u8> = cold
                .iter()
                .copied()
                .filter(|n| !picked.contains(n))
                .collect();
            picked.extend(sample_from(&remaining, count - hot_count, rng)?);
            picked
        }
    };
    numbers.sort_unstable();
    Ok(numbers)
}
