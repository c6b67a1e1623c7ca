use crate::api::messages;
use crate::api::services::{
    bind, bound_character, compile_keywords, experience_report, find_list, link_reply, list_all,
    list_web, match_keyword, parse_message, pick_image, query_profile, unbind, Command,
    CompiledKeyword,
};
use crate::api::types::{ChannelContext, Reply};
use crate::config::BotConfig;
use crate::modules::access::AccessPolicy;
use crate::modules::binding::{BindingResult, BindingStore, JsonFileBindingStore};
use crate::utils::client::{GameApi, NexonClient};
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub type Clock = fn() -> DateTime<Utc>;

/// Handles chat messages handed over by the messaging host.
pub struct Bot {
    config: Arc<BotConfig>,
    policy: AccessPolicy,
    api: Arc<dyn GameApi>,
    bindings: Arc<dyn BindingStore>,
    keywords: Vec<CompiledKeyword>,
    asset_dir: PathBuf,
    clock: Clock,
}

impl Bot {
    pub fn new(config: BotConfig, api: Arc<dyn GameApi>, bindings: Arc<dyn BindingStore>) -> Self {
        let policy = AccessPolicy::from_config(&config);
        let keywords = if config.keyword.enabled {
            compile_keywords(&config.keyword.keywords)
        } else {
            Vec::new()
        };

        Self {
            config: Arc::new(config),
            policy,
            api,
            bindings,
            keywords,
            asset_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            clock: Utc::now,
        }
    }

    /// Production wiring: Nexon client plus `bindings.json` under the configured data dir.
    pub fn from_config(config: BotConfig) -> BindingResult<Self> {
        let data_dir = config.ms.data_dir();
        let bindings = JsonFileBindingStore::open(&data_dir)?;
        let api = NexonClient::new(config.api_base_url.clone(), config.api_key.clone());
        info!(data_dir = %data_dir.display(), "Bot initialized");

        Ok(Self::new(config, Arc::new(api), Arc::new(bindings)))
    }

    /// Directory that configured image names are resolved against.
    pub fn with_asset_dir(mut self, asset_dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = asset_dir.into();
        self
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    pub fn policy(&self) -> &AccessPolicy {
        &self.policy
    }

    /// `None` means the message gets no reply at all.
    pub async fn handle_message(&self, ctx: &ChannelContext, text: &str) -> Option<Reply> {
        if !self.config.enabled {
            return None;
        }

        let parsed = parse_message(text)?;
        if let Some(command) = Command::from_name(parsed.name) {
            debug!(user = %ctx.user_id, ?command, "Dispatching command");
            return self.run(command, ctx, parsed.argument).await;
        }

        if self.config.url.enabled {
            if let Some(list) = find_list(&self.config.url.lists, parsed.name) {
                if !self.policy.can_use(ctx, list) {
                    return None;
                }
                return Some(Reply::text(link_reply(list)));
            }
        }

        match_keyword(&self.keywords, ctx, &self.policy, text).map(Reply::from)
    }

    async fn run(&self, command: Command, ctx: &ChannelContext, argument: Option<&str>) -> Option<Reply> {
        let user_id = ctx.user_id.as_str();
        let ms = &self.config.ms;

        let reply = match command {
            Command::Query => {
                if !self.policy.can_use(ctx, ms) {
                    return None;
                }
                let name = match argument {
                    Some(name) => name,
                    None => return Some(messages::QUERY_USAGE.into()),
                };
                if !self.config.has_api_key() {
                    return Some(messages::API_KEY_MISSING.into());
                }
                Reply::text(query_profile(self.api.as_ref(), name).await)
            }
            Command::Bind => match argument {
                Some(name) => Reply::text(bind(self.bindings.as_ref(), user_id, name)),
                None => messages::BIND_USAGE.into(),
            },
            Command::MyInfo => {
                let name = match self.require_binding(ctx, messages::NOT_BOUND_INFO) {
                    Ok(name) => name,
                    Err(reply) => return reply,
                };
                Reply::text(query_profile(self.api.as_ref(), &name).await)
            }
            Command::MyExp => {
                let name = match self.require_binding(ctx, messages::NOT_BOUND_EXP) {
                    Ok(name) => name,
                    Err(reply) => return reply,
                };
                self.experience(&name).await
            }
            Command::Inspect => {
                if !self.policy.can_use(ctx, ms) {
                    return None;
                }
                let name = match argument {
                    Some(name) => name,
                    None => return Some(messages::NAME_REQUIRED.into()),
                };
                if !self.config.has_api_key() {
                    return Some(messages::API_KEY_MISSING.into());
                }
                self.experience(name).await
            }
            Command::Unbind => Reply::text(unbind(self.bindings.as_ref(), user_id)),
            Command::ListWeb => {
                if !self.policy.is_admin(user_id) {
                    return None;
                }
                Reply::text(list_web(&self.config.url.lists))
            }
            Command::ListAll => {
                if !self.policy.is_admin(user_id) {
                    return None;
                }
                Reply::text(list_all(&self.config.url.lists, &self.config.keyword.keywords))
            }
        };

        Some(reply)
    }

    /// Bound character for the caller, checked in the order: binding, access, api key.
    fn require_binding(&self, ctx: &ChannelContext, not_bound: &str) -> Result<String, Option<Reply>> {
        let bound = bound_character(self.bindings.as_ref(), &ctx.user_id)
            .map_err(|reply| Some(Reply::text(reply)))?;
        let name = bound.ok_or_else(|| Some(Reply::text(not_bound)))?;

        if !self.policy.can_use(ctx, &self.config.ms) {
            return Err(None);
        }
        if !self.config.has_api_key() {
            return Err(Some(messages::API_KEY_MISSING.into()));
        }
        Ok(name)
    }

    async fn experience(&self, name: &str) -> Reply {
        let interval = Duration::from_millis(self.config.ms.query_interval_ms);
        match experience_report(self.api.as_ref(), name, (self.clock)(), interval).await {
            Ok(report) => {
                Reply::text(report).with_image(pick_image(&self.asset_dir, &self.config.ms.images))
            }
            Err(message) => Reply::text(message),
        }
    }
}
