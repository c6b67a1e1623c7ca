use crate::modules::trend::snapshot::Snapshot;
use crate::utils::dates;
use chrono::{DateTime, NaiveDate, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("insufficient data: {valid} valid snapshot(s), at least 2 required")]
pub struct InsufficientDataError {
    pub valid: usize,
}

/// How one snapshot relates to the snapshot before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepChange {
    Delta(f64),
    LevelUp,
    LevelRegression,
}

impl StepChange {
    pub fn classify(current: &Snapshot, previous: &Snapshot) -> Self {
        if current.level > previous.level {
            StepChange::LevelUp
        } else if current.level < previous.level {
            StepChange::LevelRegression
        } else {
            StepChange::Delta(current.exp_rate - previous.exp_rate)
        }
    }

    pub fn delta(&self) -> Option<f64> {
        match self {
            StepChange::Delta(value) => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyStep {
    /// Slot index of the newer snapshot of the pair (0 = today).
    pub days_ago: usize,
    pub level: u32,
    pub exp_rate: f64,
    pub change: StepChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    Never,
    Days { days: u64, date: Option<NaiveDate> },
}

impl Projection {
    pub fn days(&self) -> Option<u64> {
        match self {
            Projection::Never => None,
            Projection::Days { days, .. } => Some(*days),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Projection::Never => None,
            Projection::Days { date, .. } => *date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendResult {
    pub latest: Snapshot,
    pub steps: Vec<DailyStep>,
    pub average: f64,
    pub gap: f64,
    pub projection: Projection,
}

pub fn compute_trend(
    snapshots: &[Option<Snapshot>],
    now: DateTime<Utc>,
) -> Result<TrendResult, InsufficientDataError> {
    let valid: Vec<(usize, &Snapshot)> = snapshots
        .iter()
        .enumerate()
        .filter_map(|(slot, snapshot)| snapshot.as_ref().map(|s| (slot, s)))
        .collect();

    if valid.len() < 2 {
        return Err(InsufficientDataError { valid: valid.len() });
    }

    let steps: Vec<DailyStep> = valid
        .windows(2)
        .map(|pair| {
            let (slot, current) = pair[0];
            let (_, previous) = pair[1];
            DailyStep {
                days_ago: slot,
                level: current.level,
                exp_rate: current.exp_rate,
                change: StepChange::classify(current, previous),
            }
        })
        .collect();

    let average = average_gain(&steps);
    let latest = valid[0].1.clone();
    let gap = 100.0 - latest.exp_rate;
    let projection = project(gap, average, now);

    Ok(TrendResult {
        latest,
        steps,
        average,
        gap,
        projection,
    })
}

pub fn average_gain(steps: &[DailyStep]) -> f64 {
    let deltas: Vec<f64> = steps.iter().filter_map(|step| step.change.delta()).collect();
    if deltas.is_empty() {
        return 0.0;
    }
    deltas.iter().sum::<f64>() / deltas.len() as f64
}

pub fn project(gap: f64, average: f64, now: DateTime<Utc>) -> Projection {
    if average.is_nan() || average <= 0.0 {
        return Projection::Never;
    }

    let raw = (gap / average).ceil();
    let days = if raw.is_finite() && raw >= 1.0 {
        raw.min(u64::MAX as f64) as u64
    } else {
        1
    };

    Projection::Days {
        days,
        date: dates::days_after(now, days),
    }
}
