use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LotteryError {
    #[error("未知的彩票类型: {key}")]
    UnknownLotteryType { key: String },

    #[error("预算必须是整数: '{0}'")]
    InvalidBudget(String),

    #[error("无法从 {size} 个号码中抽取 {count} 个不重复号码")]
    InvalidRange { count: usize, size: usize },

    #[error("彩票配置无效 ({name}): {reason}")]
    InvalidConfig { name: String, reason: String },

    #[error("休市记录无效: {date} 的结束日期 {end_date} 早于开始日期")]
    InvalidHoliday { date: NaiveDate, end_date: NaiveDate },
}

pub type Result<T> = std::result::Result<T, LotteryError>;
