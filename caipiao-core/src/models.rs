use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::catalog::{LotteryConfig, LotteryType};
use crate::error::{LotteryError, Result};

/// Inclusive number range `[lo, hi]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberRange {
    pub lo: u8,
    pub hi: u8,
}

impl NumberRange {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub fn size(&self) -> usize {
        if self.hi < self.lo {
            0
        } else {
            (self.hi - self.lo) as usize + 1
        }
    }

    pub fn contains(&self, n: u8) -> bool {
        n >= self.lo && n <= self.hi
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pool {
    Red,
    Blue,
}

impl Pool {
    pub fn range(&self, config: &LotteryConfig) -> NumberRange {
        match self {
            Pool::Red => config.red_range,
            Pool::Blue => config.blue_range,
        }
    }

    pub fn pick_count(&self, config: &LotteryConfig) -> usize {
        match self {
            Pool::Red => config.red_count,
            Pool::Blue => config.blue_count,
        }
    }

    pub fn numbers_from<'a>(&self, scheme: &'a TicketScheme) -> &'a [u8] {
        match self {
            Pool::Red => &scheme.reds,
            Pool::Blue => &scheme.blues,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Hot,
    Cold,
    Mixed,
}

impl Strategy {
    /// Scheme 0 is hot, scheme 1 is cold, everything after is mixed.
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => Strategy::Hot,
            1 => Strategy::Cold,
            _ => Strategy::Mixed,
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Hot => write!(f, "热号策略"),
            Strategy::Cold => write!(f, "冷号策略"),
            Strategy::Mixed => write!(f, "混合策略"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketScheme {
    /// 1-based position in the report.
    pub scheme: usize,
    pub reds: Vec<u8>,
    pub blues: Vec<u8>,
    pub strategy: Strategy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    pub date: NaiveDate,
    pub date_str: String,
    pub weekday: String,
    pub time: String,
    pub lottery_name: String,
    pub is_holiday: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyAnalysis {
    pub hot_reds: Vec<u8>,
    pub hot_blues: Vec<u8>,
    pub cold_reds: Vec<u8>,
    pub cold_blues: Vec<u8>,
    pub red_distribution: BTreeMap<u8, u32>,
    pub blue_distribution: BTreeMap<u8, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prediction {
    pub lottery_type: LotteryType,
    pub lottery_name: String,
    pub next_draw: DrawResult,
    pub analysis: FrequencyAnalysis,
    pub schemes: Vec<TicketScheme>,
    pub budget: i64,
    pub max_tickets: i64,
    pub price_per_ticket: i64,
    pub generated_at: NaiveDateTime,
}

/// Checks that a scheme has the right count of sorted, unique, in-range numbers.
pub fn validate_scheme(config: &LotteryConfig, scheme: &TicketScheme) -> Result<()> {
    for pool in [Pool::Red, Pool::Blue] {
        let numbers = pool.numbers_from(scheme);
        let range = pool.range(config);
        let expected = pool.pick_count(config);
        if numbers.len() != expected {
            return Err(invalid_scheme(
                config,
                format!("方案 {} 需要 {} 个号码, 实际 {}", scheme.scheme, expected, numbers.len()),
            ));
        }
        if let Some(&n) = numbers.iter().find(|&&n| !range.contains(n)) {
            return Err(invalid_scheme(
                config,
                format!("号码 {} 超出范围 ({}-{})", n, range.lo, range.hi),
            ));
        }
        if numbers.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid_scheme(
                config,
                format!("方案 {} 的号码未升序或存在重复: {:?}", scheme.scheme, numbers),
            ));
        }
    }
    Ok(())
}

/// Parses a budget in whole yuan. Negative values are accepted; they simply
/// afford no tickets.
pub fn parse_budget(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| LotteryError::InvalidBudget(raw.to_string()))
}

fn invalid_scheme(config: &LotteryConfig, reason: String) -> LotteryError {
    LotteryError::InvalidConfig {
        name: config.name.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme(reds: Vec<u8>, blues: Vec<u8>) -> TicketScheme {
        TicketScheme {
            scheme: 1,
            reds,
            blues,
            strategy: Strategy::Hot,
        }
    }

    #[test]
    fn test_range_size() {
        assert_eq!(NumberRange::new(1, 35).size(), 35);
        assert_eq!(NumberRange::new(7, 7).size(), 1);
        assert_eq!(NumberRange::new(5, 4).size(), 0);
    }

    #[test]
    fn test_range_contains() {
        let r = NumberRange::new(1, 16);
        assert!(r.contains(1));
        assert!(r.contains(16));
        assert!(!r.contains(0));
        assert!(!r.contains(17));
    }

    #[test]
    fn test_strategy_cycle() {
        assert_eq!(Strategy::for_index(0), Strategy::Hot);
        assert_eq!(Strategy::for_index(1), Strategy::Cold);
        assert_eq!(Strategy::for_index(2), Strategy::Mixed);
        assert_eq!(Strategy::for_index(4), Strategy::Mixed);
    }

    #[test]
    fn test_strategy_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Strategy::Mixed).unwrap(), "\"mixed\"");
        assert_eq!(Strategy::Cold.to_string(), "冷号策略");
    }

    #[test]
    fn test_validate_scheme_ok() {
        let config = LotteryType::Ssq.config();
        assert!(validate_scheme(config, &scheme(vec![1, 5, 9, 20, 28, 33], vec![16])).is_ok());
    }

    #[test]
    fn test_validate_scheme_wrong_count() {
        let config = LotteryType::Dlt.config();
        assert!(validate_scheme(config, &scheme(vec![1, 2, 3, 4], vec![1, 2])).is_err());
        assert!(validate_scheme(config, &scheme(vec![1, 2, 3, 4, 5], vec![1])).is_err());
    }

    #[test]
    fn test_validate_scheme_out_of_range() {
        let config = LotteryType::Ssq.config();
        assert!(validate_scheme(config, &scheme(vec![1, 2, 3, 4, 5, 34], vec![1])).is_err());
        assert!(validate_scheme(config, &scheme(vec![1, 2, 3, 4, 5, 6], vec![17])).is_err());
    }

    #[test]
    fn test_validate_scheme_duplicate_or_unsorted() {
        let config = LotteryType::Dlt.config();
        assert!(validate_scheme(config, &scheme(vec![1, 1, 3, 4, 5], vec![1, 2])).is_err());
        assert!(validate_scheme(config, &scheme(vec![5, 4, 3, 2, 1], vec![1, 2])).is_err());
    }

    #[test]
    fn test_parse_budget() {
        assert_eq!(parse_budget("10").unwrap(), 10);
        assert_eq!(parse_budget(" 25 ").unwrap(), 25);
        assert_eq!(parse_budget("-4").unwrap(), -4);
        assert_eq!(
            parse_budget("10.5").unwrap_err(),
            LotteryError::InvalidBudget("10.5".to_string())
        );
        assert!(parse_budget("abc").is_err());
        assert!(parse_budget("").is_err());
    }

    #[test]
    fn test_pool_numbers_from() {
        let s = scheme(vec![1, 2, 3, 4, 5], vec![6, 7]);
        assert_eq!(Pool::Red.numbers_from(&s), &[1, 2, 3, 4, 5]);
        assert_eq!(Pool::Blue.numbers_from(&s), &[6, 7]);
    }
}
