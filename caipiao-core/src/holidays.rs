use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LotteryError, Result};

const SPRING_FESTIVAL_2026: (NaiveDate, NaiveDate) = (ymd(2026, 2, 14), ymd(2026, 2, 23));

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid holiday date"),
    }
}

/// A closed day and the last day of the closure it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayClosure {
    pub label: String,
    pub end_date: NaiveDate,
}

/// Per-day closure table. Ranges are expanded into one entry per calendar day.
#[derive(Debug, Clone, Default)]
pub struct HolidayRegistry {
    entries: BTreeMap<NaiveDate, HolidayClosure>,
}

impl HolidayRegistry {
    pub fn from_entries(
        entries: impl IntoIterator<Item = (NaiveDate, HolidayClosure)>,
    ) -> Result<Self> {
        let mut map = BTreeMap::new();
        for (date, closure) in entries {
            if closure.end_date < date {
                return Err(LotteryError::InvalidHoliday {
                    date,
                    end_date: closure.end_date,
                });
            }
            map.insert(date, closure);
        }
        Ok(Self { entries: map })
    }

    /// Expands `start..=end` into per-day entries. The first and last day get
    /// their own labels when given.
    pub fn closure_days(
        start: NaiveDate,
        end: NaiveDate,
        label: &str,
        first_label: Option<&str>,
        last_label: Option<&str>,
    ) -> Vec<(NaiveDate, HolidayClosure)> {
        let mut days = Vec::new();
        let mut day = start;
        while day <= end {
            let label = if day == start {
                first_label.unwrap_or(label)
            } else if day == end {
                last_label.unwrap_or(label)
            } else {
                label
            };
            days.push((
                day,
                HolidayClosure {
                    label: label.to_string(),
                    end_date: end,
                },
            ));
            match day.checked_add_days(Days::new(1)) {
                Some(next) => day = next,
                None => break,
            }
        }
        days
    }

    /// 2026 Spring Festival closure, 02-14 through 02-23.
    pub fn builtin() -> Result<Self> {
        Self::from_entries(Self::closure_days(
            SPRING_FESTIVAL_2026.0,
            SPRING_FESTIVAL_2026.1,
            "春节休市",
            Some("春节休市开始"),
            Some("春节休市结束"),
        ))
    }

    pub fn lookup(&self, date: NaiveDate) -> Option<&HolidayClosure> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
