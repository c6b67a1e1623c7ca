pub mod bot_config;

pub use bot_config::{
    BotConfig, ConfigError, ConfigResult, KeywordConfig, KeywordRule, LinkConfig, LinkList,
    MapleConfig, API_KEY_ENV, DEFAULT_API_BASE_URL,
};
