use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use caipiao_core::models::Prediction;

pub fn snapshot_file_name(prediction: &Prediction) -> String {
    format!(
        "lottery_prediction_{}_{}.json",
        prediction.lottery_type,
        prediction.generated_at.format("%Y%m%d_%H%M%S")
    )
}

/// Writes the prediction as pretty JSON into `dir` and returns the file path.
pub fn write_snapshot(prediction: &Prediction, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(snapshot_file_name(prediction));
    let json = serde_json::to_string_pretty(prediction).context("无法序列化预测结果")?;
    std::fs::write(&path, json).with_context(|| format!("无法写入 {}", path.display()))?;
    info!("snapshot written to {}", path.display());
    Ok(path)
}
