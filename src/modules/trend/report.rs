use crate::modules::trend::calculator::{DailyStep, StepChange, TrendResult};
use std::fmt::Write;

const SEPARATOR: &str = "----------------------";
const LEVEL_UP_NOTICE: &str = "(如若升级则不计算日均增长,可能出现预计数据报错)";
const LATENCY_NOTICE: &str = "(当日数据可能不准确,下午6点完成更新)";

/// Signed, three decimals: `+3.100`, `-2.345`.
pub fn format_signed(value: f64) -> String {
    format!("{:+.3}", value)
}

fn day_label(days_ago: usize) -> String {
    if days_ago == 0 {
        "目  前".to_string()
    } else {
        format!("{}天前", days_ago)
    }
}

pub fn render_step(step: &DailyStep) -> String {
    let head = format!(
        "{}: Lv.{} ({:.3}%)",
        day_label(step.days_ago),
        step.level,
        step.exp_rate
    );

    match step.change {
        StepChange::Delta(delta) => format!("{}[{}%]", head, format_signed(delta)),
        StepChange::LevelUp | StepChange::LevelRegression => head,
    }
}

pub fn render_trend(trend: &TrendResult) -> String {
    let latest = &trend.latest;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}·{} ({}@{})",
        latest.character_name,
        latest.character_class,
        latest.world_name,
        latest.guild_or_default()
    );
    out.push_str("经验变化:\n");

    for step in &trend.steps {
        out.push_str(&render_step(step));
        out.push('\n');
    }

    out.push_str(SEPARATOR);
    out.push('\n');
    let _ = writeln!(out, "日均{}%/天", format_signed(trend.average));

    match trend.projection.days() {
        Some(days) => {
            let _ = writeln!(out, "预计升级还需: {} 天", days);
        }
        None => out.push_str("预计升级还需: ∞ 天\n"),
    }
    if let Some(date) = trend.projection.date() {
        let _ = writeln!(out, "预计升级日期: {}", date.format("%Y-%m-%d"));
    }

    out.push('\n');
    out.push_str(LEVEL_UP_NOTICE);
    out.push('\n');
    out.push_str(LATENCY_NOTICE);
    out
}

#[cfg(test)]
mod tests {
    use super::{format_signed, render_step};
    use crate::modules::trend::calculator::{DailyStep, StepChange};

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(-2.345), "-2.345");
        assert_eq!(format_signed(3.1), "+3.100");
        assert_eq!(format_signed(0.0), "+0.000");
    }

    #[test]
    fn test_render_step_labels() {
        let today = DailyStep {
            days_ago: 0,
            level: 250,
            exp_rate: 12.5,
            change: StepChange::Delta(1.25),
        };
        assert_eq!(render_step(&today), "目  前: Lv.250 (12.500%)[+1.250%]");

        let level_up = DailyStep {
            days_ago: 3,
            level: 251,
            exp_rate: 0.5,
            change: StepChange::LevelUp,
        };
        assert_eq!(render_step(&level_up), "3天前: Lv.251 (0.500%)");
    }

    #[test]
    fn test_render_step_level_regression_has_no_delta() {
        let regression = DailyStep {
            days_ago: 2,
            level: 9,
            exp_rate: 80.0,
            change: StepChange::LevelRegression,
        };
        let line = render_step(&regression);

        assert_eq!(line, "2天前: Lv.9 (80.000%)");
        assert!(!line.contains('['));
    }
}
