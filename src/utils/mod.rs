pub mod client;
pub mod dates;

pub use client::{ApiError, ApiResult, GameApi, NexonClient, API_KEY_HEADER};
pub use dates::{days_after, reference_date, snapshot_dates, SNAPSHOT_SLOTS};
