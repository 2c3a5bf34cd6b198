use thiserror::Error;

/// Every failure the command line can report. All of them exit with code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("用法: caipiao <彩票类型> [预算]\n彩票类型: dlt (大乐透) 或 ssq (双色球)\n预算: 整数，单位元 (默认: 10)")]
    Usage,

    #[error("错误: 未知的彩票类型 '{key}'\n可用类型: {valid}")]
    UnknownLotteryType { key: String, valid: String },

    #[error("错误: 预算必须是整数")]
    InvalidBudget,

    #[error("错误: {0:#}")]
    Runtime(#[from] anyhow::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage | Self::UnknownLotteryType { .. } | Self::InvalidBudget | Self::Runtime(_) => 1,
        }
    }
}
