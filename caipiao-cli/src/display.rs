use comfy_table::Table;
use comfy_table::presets::ASCII_MARKDOWN;

use caipiao_core::models::{Prediction, TicketScheme};

use crate::analysis::HISTORY_DRAWS;

fn join_numbers(numbers: &[u8], sep: &str) -> String {
    numbers
        .iter()
        .map(|n| format!("{:02}", n))
        .collect::<Vec<_>>()
        .join(sep)
}

fn scheme_table(schemes: &[TicketScheme], single_blue: bool) -> Table {
    let (red_label, blue_label) = if single_blue {
        ("红球", "蓝球")
    } else {
        ("前区", "后区")
    };

    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_header(vec!["方案", red_label, blue_label, "说明"]);

    for scheme in schemes {
        table.add_row(vec![
            scheme.scheme.to_string(),
            join_numbers(&scheme.reds, " "),
            join_numbers(&scheme.blues, " "),
            scheme.strategy.to_string(),
        ]);
    }
    table
}

/// Renders the full text report. Pure: same prediction, same text.
pub fn render(prediction: &Prediction) -> String {
    let config = prediction.lottery_type.config();
    let next = &prediction.next_draw;
    let analysis = &prediction.analysis;
    let mut report: Vec<String> = Vec::new();

    report.push(format!("# {} 预测分析报告", prediction.lottery_name));
    report.push(String::new());

    report.push("## 📅 基本信息".to_string());
    report.push(format!("- **分析期数**: 近{}期", HISTORY_DRAWS));
    report.push("- **数据来源**: 历史数据分析".to_string());
    report.push(format!(
        "- **下期开奖**: {}（{}）{}",
        next.date_str, next.weekday, next.time
    ));
    if next.is_holiday {
        report.push("- **⚠️ 注意**: 当前处于春节休市期间，开奖时间可能调整".to_string());
    }
    report.push(String::new());

    report.push("## 📊 历史数据分析".to_string());
    report.push(format!(
        "- **热号 (Hot)**: 红球 {} | 蓝球 {}",
        join_numbers(&analysis.hot_reds, ", "),
        join_numbers(&analysis.hot_blues, ", ")
    ));
    report.push(format!(
        "- **冷号 (Cold)**: 红球 {} | 蓝球 {}",
        join_numbers(&analysis.cold_reds, ", "),
        join_numbers(&analysis.cold_blues, ", ")
    ));
    report.push(String::new());

    report.push("## 🔮 推荐号码".to_string());
    report.push("根据历史走势分析，为您生成以下推荐：".to_string());
    report.push(String::new());
    report.push(scheme_table(&prediction.schemes, config.blue_count == 1).to_string());
    report.push(String::new());

    report.push(format!("## 💡 购彩建议 (预算: {}元)", prediction.budget));
    if prediction.max_tickets > 0 {
        report.push(format!("- **可购买注数**: {}注", prediction.max_tickets));
        report.push(format!("- **每注价格**: {}元", prediction.price_per_ticket));
        report.push("- **推荐方案**: 选择1-2组号码，分散风险".to_string());
    } else {
        report.push(format!(
            "- **预算不足**: {}元无法购买完整注数",
            prediction.budget
        ));
        report.push(format!("- **建议预算**: 至少{}元", config.price_per_ticket));
    }
    report.push(String::new());

    report.push("> **⚠️ 风险提示**: 彩票无绝对规律，预测结果仅供参考，请理性投注。".to_string());
    report.push("> **📅 节假日提醒**: 春节、国庆等长假期间彩票市场会休市，请关注官方通知。".to_string());

    report.join("\n")
}
