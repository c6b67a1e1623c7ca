pub mod bot;
pub mod messages;
pub mod services;
pub mod types;

pub use bot::{Bot, Clock};
pub use types::{ChannelContext, ChannelId, Reply, UserId};
