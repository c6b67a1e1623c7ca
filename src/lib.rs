pub mod api;
pub mod config;
pub mod modules;
pub mod utils;

#[cfg(test)]
mod _test_mock;

pub use api::{Bot, ChannelContext, Reply};
pub use config::{BotConfig, KeywordRule, LinkList, MapleConfig};
pub use modules::access::{can_use, AccessItem, AccessPolicy};
pub use modules::binding::{BindingStore, InMemoryBindingStore, JsonFileBindingStore};
pub use modules::trend::{compute_trend, render_trend, InsufficientDataError, Snapshot, TrendResult};
pub use utils::client::{ApiError, GameApi, NexonClient};
