pub mod calculator;
pub mod report;
pub mod snapshot;

pub use calculator::{
    average_gain, compute_trend, project, DailyStep, InsufficientDataError, Projection, StepChange,
    TrendResult,
};
pub use report::{format_signed, render_step, render_trend};
pub use snapshot::Snapshot;
