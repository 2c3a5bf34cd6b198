use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};
use crate::models::NumberRange;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LotteryConfig {
    pub name: &'static str,
    pub red_range: NumberRange,
    pub blue_range: NumberRange,
    pub red_count: usize,
    pub blue_count: usize,
    /// ISO weekdays, Monday = 1 .. Sunday = 7.
    pub draw_days: &'static [u32],
    pub draw_time: &'static str,
    pub price_per_ticket: i64,
}

const DLT: LotteryConfig = LotteryConfig {
    name: "大乐透",
    red_range: NumberRange::new(1, 35),
    blue_range: NumberRange::new(1, 12),
    red_count: 5,
    blue_count: 2,
    draw_days: &[1, 3, 6], // 周一、三、六
    draw_time: "21:30",
    price_per_ticket: 2,
};

const SSQ: LotteryConfig = LotteryConfig {
    name: "双色球",
    red_range: NumberRange::new(1, 33),
    blue_range: NumberRange::new(1, 16),
    red_count: 6,
    blue_count: 1,
    draw_days: &[2, 4, 7], // 周二、四、日
    draw_time: "21:15",
    price_per_ticket: 2,
};

impl LotteryConfig {
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: String| LotteryError::InvalidConfig {
            name: self.name.to_string(),
            reason,
        };

        for (label, range, count) in [
            ("红球", self.red_range, self.red_count),
            ("蓝球", self.blue_range, self.blue_count),
        ] {
            if range.lo > range.hi {
                return Err(fail(format!("{label}范围 {}-{} 无效", range.lo, range.hi)));
            }
            if count > range.size() {
                return Err(fail(format!(
                    "{label}数量 {count} 超过范围大小 {}",
                    range.size()
                )));
            }
        }
        if self.draw_days.is_empty() {
            return Err(fail("开奖日不能为空".to_string()));
        }
        if let Some(day) = self.draw_days.iter().find(|d| !(1..=7).contains(*d)) {
            return Err(fail(format!("开奖日 {day} 不是 1-7 之间的星期")));
        }
        if self.price_per_ticket <= 0 {
            return Err(fail(format!("每注价格 {} 必须为正数", self.price_per_ticket)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotteryType {
    Dlt,
    Ssq,
}

impl LotteryType {
    pub const ALL: [LotteryType; 2] = [LotteryType::Dlt, LotteryType::Ssq];

    pub fn key(&self) -> &'static str {
        match self {
            LotteryType::Dlt => "dlt",
            LotteryType::Ssq => "ssq",
        }
    }

    pub fn config(&self) -> &'static LotteryConfig {
        match self {
            LotteryType::Dlt => &DLT,
            LotteryType::Ssq => &SSQ,
        }
    }

    /// Comma separated list of valid keys, for error messages.
    pub fn valid_keys() -> String {
        Self::ALL
            .iter()
            .map(|t| t.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for LotteryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for LotteryType {
    type Err = LotteryError;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.key() == key)
            .ok_or(LotteryError::UnknownLotteryType { key })
    }
}

/// Validates every built-in config. Called once at startup so an empty
/// draw-day set can never reach the resolver.
pub fn validate_catalog() -> Result<()> {
    LotteryType::ALL.iter().try_for_each(|t| t.config().validate())
}
