pub mod mock;

use chrono::{NaiveDate, TimeZone, Utc};
use msbao::modules::trend::{
    average_gain, compute_trend, format_signed, project, render_trend, InsufficientDataError,
    Projection, StepChange,
};
use msbao::Snapshot;

use mock::TestSnapshotData;

fn snap(level: u32, exp_rate: f64) -> Option<Snapshot> {
    Some(TestSnapshotData::snapshot("Pudding", level, exp_rate))
}

#[test]
fn test_fewer_than_two_snapshots_fail() {
    let now = Utc::now();
    let snapshots = vec![None, None, snap(10, 50.0), None, None, None, None, None];
    assert_eq!(
        compute_trend(&snapshots, now),
        Err(InsufficientDataError { valid: 1 })
    );

    let empty: Vec<Option<Snapshot>> = vec![None; 8];
    assert!(compute_trend(&empty, now).is_err());
}

#[test]
fn test_cross_level_pair_is_excluded() {
    let now = Utc::now();
    let trend = compute_trend(&[snap(11, 2.0), snap(10, 99.5)], now).unwrap();

    assert_eq!(trend.steps[0].change, StepChange::LevelUp);
    assert_eq!(trend.average, 0.0);
    assert_eq!(trend.projection, Projection::Never);
}

#[test]
fn test_level_regression_is_excluded() {
    let now = Utc::now();
    let trend = compute_trend(&[snap(9, 80.0), snap(10, 5.0), snap(10, 1.0)], now).unwrap();

    assert_eq!(trend.steps[0].change, StepChange::LevelRegression);
    assert_eq!(trend.steps[1].change, StepChange::Delta(4.0));
    assert_eq!(trend.average, 4.0);

    let report = render_trend(&trend);
    assert!(report.contains("目  前: Lv.9 (80.000%)\n"));
    assert!(report.contains("1天前: Lv.10 (5.000%)[+4.000%]\n"));
}

#[test]
fn test_average_of_same_level_deltas() {
    let now = Utc::now();
    let trend = compute_trend(&[snap(200, 40.0), snap(200, 35.0), snap(200, 25.0)], now).unwrap();

    assert_eq!(trend.average, 7.5);
    assert_eq!(average_gain(&trend.steps), 7.5);
    assert_eq!(trend.gap, 60.0);
}

#[test]
fn test_projection_example() {
    let now = Utc.with_ymd_and_hms(2024, 1, 30, 12, 0, 0).unwrap();
    let projection = project(10.0, 5.0, now);

    assert_eq!(projection.days(), Some(2));
    assert_eq!(projection.date(), NaiveDate::from_ymd_opt(2024, 2, 1));
}

#[test]
fn test_projection_rounds_up() {
    let now = Utc::now();
    assert_eq!(project(10.0, 3.0, now).days(), Some(4));
}

#[test]
fn test_non_positive_average_has_no_date() {
    let now = Utc::now();
    let trend = compute_trend(&[snap(200, 40.0), snap(200, 45.0)], now).unwrap();
    assert_eq!(trend.average, -5.0);
    assert_eq!(trend.projection, Projection::Never);

    let text = render_trend(&trend);
    assert!(text.contains("预计升级还需: ∞ 天"));
    assert!(!text.contains("预计升级日期"));
    assert!(text.contains("日均-5.000%/天"));
}

#[test]
fn test_sign_convention() {
    assert_eq!(format_signed(-2.345), "-2.345");
    assert_eq!(format_signed(3.1), "+3.100");
}

#[test]
fn test_full_report() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 4, 0, 0).unwrap();
    let snapshots = TestSnapshotData::level_up_week("Pudding");
    let trend = compute_trend(&snapshots, now).unwrap();

    let expected = "Pudding·Bishop (Elysium@Lumiere)\n\
经验变化:\n\
目  前: Lv.261 (3.000%)[+2.000%]\n\
1天前: Lv.261 (1.000%)\n\
2天前: Lv.260 (98.500%)[+2.000%]\n\
----------------------\n\
日均+2.000%/天\n\
预计升级还需: 49 天\n\
预计升级日期: 2024-07-20\n\
\n\
(如若升级则不计算日均增长,可能出现预计数据报错)\n\
(当日数据可能不准确,下午6点完成更新)";

    assert_eq!(render_trend(&trend), expected);
}

#[test]
fn test_steady_week_has_seven_lines() {
    let now = Utc::now();
    let trend = compute_trend(&TestSnapshotData::steady_week("Pudding"), now).unwrap();

    assert_eq!(trend.steps.len(), 7);
    assert!(trend
        .steps
        .iter()
        .all(|step| step.change == StepChange::Delta(2.0)));
    assert_eq!(trend.projection.days(), Some(20));
}
