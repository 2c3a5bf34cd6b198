use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, SubsecRound};
use log::debug;

use crate::catalog::LotteryConfig;
use crate::error::{LotteryError, Result};
use crate::holidays::HolidayRegistry;
use crate::models::DrawResult;

const WEEKDAYS: [&str; 7] = ["周一", "周二", "周三", "周四", "周五", "周六", "周日"];

pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAYS[date.weekday().num_days_from_monday() as usize]
}

/// Last representable instant of `date` at microsecond resolution.
fn end_of_day(date: NaiveDate) -> Option<NaiveDateTime> {
    date.and_hms_micro_opt(23, 59, 59, 999_999)
}

/// Finds the next draw at or after `from`, skipping closed days.
///
/// Candidates keep the time-of-day of `from`, truncated to microseconds so the
/// comparison with the closure end is exact. A day found in the registry is
/// closed while the candidate is not later than the end of its closure's last
/// day; closed days are skipped without looking at the weekday.
pub fn next_draw(
    config: &LotteryConfig,
    from: NaiveDateTime,
    registry: &HolidayRegistry,
) -> Result<DrawResult> {
    config.validate()?;

    let mut candidate = from.trunc_subsecs(6);
    loop {
        let date = candidate.date();
        let holiday = registry.lookup(date);

        if let Some(closure) = holiday {
            let closure_end = end_of_day(closure.end_date).ok_or_else(|| overflow(config))?;
            if candidate <= closure_end {
                debug!("{} {}: {}, skipped", config.name, date, closure.label);
                candidate = advance(candidate, config)?;
                continue;
            }
        }

        let iso_weekday = date.weekday().number_from_monday();
        if config.draw_days.contains(&iso_weekday) {
            debug!("{} next draw resolved to {}", config.name, date);
            return Ok(DrawResult {
                date,
                date_str: date.format("%Y年%m月%d日").to_string(),
                weekday: weekday_name(date).to_string(),
                time: config.draw_time.to_string(),
                lottery_name: config.name.to_string(),
                is_holiday: holiday.is_some(),
            });
        }

        candidate = advance(candidate, config)?;
    }
}

fn advance(candidate: NaiveDateTime, config: &LotteryConfig) -> Result<NaiveDateTime> {
    candidate
        .checked_add_days(Days::new(1))
        .ok_or_else(|| overflow(config))
}

fn overflow(config: &LotteryConfig) -> LotteryError {
    LotteryError::InvalidConfig {
        name: config.name.to_string(),
        reason: "日期超出可表示范围".to_string(),
    }
}
