mod analysis;
mod display;
mod error;
mod export;
mod predict;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use clap::error::ErrorKind;
use rand::SeedableRng;
use rand::rngs::StdRng;

use caipiao_core::catalog::{LotteryType, validate_catalog};
use caipiao_core::clock::SystemClock;
use caipiao_core::holidays::HolidayRegistry;
use caipiao_core::models::parse_budget;

use crate::display::render;
use crate::error::CliError;
use crate::export::write_snapshot;
use crate::predict::compose;

const DEFAULT_BUDGET: i64 = 10;

#[derive(Parser, Debug)]
#[command(name = "caipiao", about = "彩票预测系统：大乐透 / 双色球下期开奖与号码推荐")]
struct Cli {
    /// 彩票类型: dlt (大乐透) 或 ssq (双色球)
    lottery_type: Option<String>,

    /// 预算，整数，单位元 (默认: 10)
    #[arg(allow_hyphen_values = true)]
    budget: Option<String>,

    /// 随机种子，用于复现结果
    #[arg(long)]
    seed: Option<u64>,

    /// 从指定日期 (YYYY-MM-DD) 推算下期开奖，默认当前时间
    #[arg(long)]
    from: Option<NaiveDate>,

    /// JSON 快照输出目录
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(1);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    validate_catalog().context("内置彩票配置无效")?;

    let Some(raw_type) = cli.lottery_type else {
        return Err(CliError::Usage);
    };
    let lottery: LotteryType = raw_type.parse().map_err(|_| CliError::UnknownLotteryType {
        key: raw_type.to_lowercase(),
        valid: LotteryType::valid_keys(),
    })?;

    let budget = match cli.budget.as_deref() {
        Some(raw) => parse_budget(raw).map_err(|_| CliError::InvalidBudget)?,
        None => DEFAULT_BUDGET,
    };

    let mut rng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let from = cli.from.map(|d| d.and_time(NaiveTime::MIN));
    let registry = HolidayRegistry::builtin().context("内置节假日表无效")?;

    let prediction = compose(lottery, budget, from, &SystemClock, &registry, &mut rng)
        .context("生成预测失败")?;
    println!("{}", render(&prediction));

    let path = write_snapshot(&prediction, &cli.output_dir)?;
    println!("\n📁 详细数据已保存到: {}", path.display());

    Ok(())
}
