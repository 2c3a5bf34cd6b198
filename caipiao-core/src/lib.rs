pub mod catalog;
pub mod clock;
pub mod error;
pub mod holidays;
pub mod models;
pub mod schedule;

pub use error::{LotteryError, Result};
